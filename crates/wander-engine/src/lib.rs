//! The two-agent rendezvous driver.
//!
//! [`RendezvousDriver`] owns the shared [`World`](wander_core::World)
//! and both agents' state, and serializes every turn: it interprets
//! each agent's latest [`Advice`](wander_pathfinder::Advice), steps the
//! world, keeps the graphs synchronized with the committed moves, and
//! classifies the run as a meeting, a proven impossibility, or a fatal
//! invariant violation.
//!
//! The loop is fully synchronous. An agent "waits" by not being
//! stepped on a turn — there is no blocking anywhere.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod driver;

pub use config::DriverConfig;
pub use driver::{Outcome, RendezvousDriver, RunReport};
