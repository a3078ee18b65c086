//! Error types for the Wander workspace, organized by subsystem:
//! graph mutation, the rendezvous driver, and map reconciliation.
//!
//! Programming/invariant violations ([`GraphError`],
//! [`DriverError::AdviceContradiction`]) are fatal and never silently
//! recovered; [`MapError`] is a soft failure — the run is still a
//! success minus the rendering step.

use crate::direction::Direction;
use crate::id::AgentId;
use crate::position::Position;
use std::error::Error;
use std::fmt;

/// Errors from exploration-graph mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// `advance` was asked to step through a slot that was never linked.
    ///
    /// Signals that the mandatory post-move node-update step was skipped:
    /// every committed move must be followed by an observation pass
    /// before the next step.
    MissingLink {
        /// Position of the node the step started from.
        at: Position,
        /// The unlinked direction.
        direction: Direction,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLink { at, direction } => write!(
                f,
                "no link {direction} from node at {at}; the node-update step after the last move was skipped"
            ),
        }
    }
}

impl Error for GraphError {}

/// Fatal errors from the two-agent rendezvous driver.
///
/// A [`DriverError`] aborts the run; provable impossibility is *not* an
/// error — it is reported as a normal outcome by the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverError {
    /// An agent advised `Rendezvous` in a state where its graph's
    /// explored flag contradicts that advice.
    AdviceContradiction {
        /// The agent whose advice contradicted its graph state.
        agent: AgentId,
    },
    /// The symmetric-maze fallback sweep exceeded its step budget
    /// without resolving the run.
    SweepExhausted {
        /// Steps taken before giving up.
        steps: u32,
    },
    /// A graph invariant violation surfaced while stepping.
    Graph(GraphError),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AdviceContradiction { agent } => write!(
                f,
                "agent {agent} advised rendezvous against its graph's explored state"
            ),
            Self::SweepExhausted { steps } => write!(
                f,
                "could not resolve symmetric maze within {steps} sweep steps"
            ),
            Self::Graph(e) => write!(f, "graph fault: {e}"),
        }
    }
}

impl Error for DriverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Graph(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GraphError> for DriverError {
    fn from(e: GraphError) -> Self {
        Self::Graph(e)
    }
}

/// Errors from map reconciliation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapError {
    /// No alignment candidate passed the canvas and intersection checks
    /// from either graph's frame of reference.
    NoAlignment,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAlignment => write!(f, "no alignment candidate produced a consistent map"),
        }
    }
}

impl Error for MapError {}
