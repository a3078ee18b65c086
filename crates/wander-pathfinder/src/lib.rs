//! Per-agent exploration policy.
//!
//! A [`Pathfinder`] wires one agent's graph to the shared world: it
//! runs the node-update pass after every committed move
//! ([`observe`](Pathfinder::observe)) and produces one [`Advice`] per
//! turn ([`advise`](Pathfinder::advise)). The decision is stateless —
//! evaluated fresh from the graph each time — so the driver can cache
//! and re-ask freely.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod advice;
mod pathfinder;

pub use advice::{connection, Advice, Connection};
pub use pathfinder::Pathfinder;
