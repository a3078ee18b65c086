//! Arena-owned exploration graph for one agent.
//!
//! A [`Graph`] owns every cell its agent has discovered, keyed by
//! position in the agent's local frame. Neighbour links are plain
//! [`NodeId`](wander_core::NodeId) indices into the same arena —
//! non-owning, symmetric, and used only for traversal, so the cyclic
//! cross-references of a grid carry no lifetime hazards. Nodes are only
//! ever added, never removed; a node lives exactly as long as its graph.
//!
//! On top of the arena sit the two algorithms the advice engine needs:
//! fixed-point dead-end classification
//! ([`refresh_dead_ends`](Graph::refresh_dead_ends)) and the tadpole
//! frontier search ([`route_to_unvisited`](Graph::route_to_unvisited)).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod frontier;
mod graph;
mod node;

pub use graph::Graph;
pub use node::Node;
