//! Wander: two agents, two half-known labyrinths, one map.
//!
//! Each agent perceives only its own corner of an unknown grid maze.
//! Turn by turn it grows a graph of what it has seen, decides whether
//! to keep exploring or to seek its partner, and the driver works out
//! whether the two explored regions are one maze (a meeting is
//! possible) or two disjoint ones (it never was). After a meeting the
//! two independently-framed graphs are aligned and rendered as a
//! single map.
//!
//! This is the top-level facade crate that re-exports the public API
//! from all Wander sub-crates. For most users, adding `wander` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use wander::prelude::*;
//!
//! // A three-cell corridor with the agents at opposite ends. Any
//! // `World` implementation works; this one is scripted ASCII art.
//! # use wander_test_utils::GridWorld;
//! let world = GridWorld::shared("A.B");
//!
//! let report = RendezvousDriver::new(world).run().unwrap();
//! assert_eq!(report.outcome, Outcome::Met);
//!
//! // Overlay both agents' graphs into one rendered map.
//! let mut report = report;
//! let map = restore_map(&mut report.graph_a, &mut report.graph_b, '@', '&').unwrap();
//! assert!(map.contains('@'));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `wander-core` | Directions, positions, ids, errors, the `World` trait |
//! | [`graph`] | `wander-graph` | The exploration graph, dead-end logic, frontier search |
//! | [`pathfinder`] | `wander-pathfinder` | Per-agent advice engine |
//! | [`engine`] | `wander-engine` | The two-agent rendezvous driver |
//! | [`map`] | `wander-map` | Graph alignment and canvas rendering |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, ids, errors, and the `World` trait (`wander-core`).
pub use wander_core as types;

/// The per-agent exploration graph (`wander-graph`).
///
/// [`graph::Graph`] owns every discovered cell and exposes the
/// dead-end and frontier machinery the advice engine runs on.
pub use wander_graph as graph;

/// The per-agent advice engine (`wander-pathfinder`).
///
/// [`pathfinder::Pathfinder`] turns graph state into one
/// [`pathfinder::Advice`] per turn.
pub use wander_pathfinder as pathfinder;

/// The two-agent rendezvous driver (`wander-engine`).
///
/// [`engine::RendezvousDriver`] runs the whole turn loop and reports
/// a meeting, a proven impossibility, or a fatal invariant violation.
pub use wander_engine as engine;

/// Map alignment and rendering (`wander-map`).
///
/// [`map::restore_map`] overlays two met graphs; [`map::render_single`]
/// draws one graph alone.
pub use wander_map as map;

/// Common imports for typical Wander usage.
///
/// ```rust
/// use wander::prelude::*;
/// ```
pub mod prelude {
    // Core types and errors
    pub use wander_core::{
        AgentId, Direction, DriverError, GraphError, MapError, NodeId, Position, Rect, Route,
        World,
    };

    // Graph
    pub use wander_graph::{Graph, Node};

    // Advice
    pub use wander_pathfinder::{connection, Advice, Connection, Pathfinder};

    // Driver
    pub use wander_engine::{DriverConfig, Outcome, RendezvousDriver, RunReport};

    // Map
    pub use wander_map::{render_single, restore_map, CANVAS_SIDE};
}
