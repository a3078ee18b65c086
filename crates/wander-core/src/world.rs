//! The ground-truth world collaborator.

use crate::direction::Direction;
use crate::id::AgentId;

/// The maze simulator that owns ground truth.
///
/// The core never sees the real labyrinth; it only asks capability
/// questions and commits moves through this trait. Implementations are
/// expected to be deterministic within one run.
///
/// # Call ordering contract
///
/// Move calls are ordered and side-effecting: a [`step`](World::step)
/// call changes world state even if it reports a meeting. Callers must
/// query [`can_go`](World::can_go) exactly once per direction during a
/// node-update pass, and call `step` exactly once per committed move,
/// in the order prescribed by the driver.
pub trait World {
    /// Whether `agent` can currently move one cell in `direction`.
    fn can_go(&self, agent: AgentId, direction: Direction) -> bool;

    /// Move one or both agents one cell and report whether they now
    /// occupy the same cell.
    ///
    /// `None` leaves that agent in place for this turn; "waiting" is
    /// modeled by not stepping, never by blocking. Advances the turn
    /// counter.
    fn step(&mut self, a: Option<Direction>, b: Option<Direction>) -> bool;

    /// Elapsed turns, for diagnostics and status reporting.
    fn turn_count(&self) -> u32;
}
