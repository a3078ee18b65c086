//! Scripted [`World`](wander_core::World) implementations for Wander
//! development: ASCII-defined grid mazes (shared or disjoint) and a
//! seeded random maze generator for property tests and benches.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod grid;
mod random;

pub use grid::GridWorld;
pub use random::random_maze;
