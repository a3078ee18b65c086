//! Core types and traits for the Wander labyrinth rendezvous engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Wander workspace:
//! grid directions and positions, agent and node identifiers, the
//! per-subsystem error types, and the [`World`] collaborator trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod direction;
mod error;
mod id;
mod position;
mod world;

pub use direction::{Direction, Route};
pub use error::{DriverError, GraphError, MapError};
pub use id::{AgentId, NodeId};
pub use position::{Position, Rect};
pub use world::World;
