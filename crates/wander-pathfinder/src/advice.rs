//! Per-turn recommendations and cross-agent classification.

use wander_core::Route;
use wander_graph::Graph;

/// The advice engine's output for one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advice {
    /// Walk this route. The route is never empty.
    Move(Route),
    /// Exploration is complete; ready to converge on the partner.
    Rendezvous,
}

/// What two agents' graphs say about sharing a maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Connection {
    /// At least one side is still exploring; no verdict yet.
    Unknown,
    /// Both explored with matching cell counts — a meeting is possible.
    Linked,
    /// Both explored with different cell counts — provably disjoint.
    Divided,
}

/// Classify whether two fully-built graphs can belong to the same maze.
///
/// Conclusive only once both sides are explored; equal node counts are
/// necessary for equality but not sufficient (symmetric disjoint mazes
/// exist), which is why the driver still hunts for a literal encounter.
pub fn connection(a: &Graph, b: &Graph) -> Connection {
    if !a.is_explored() || !b.is_explored() {
        return Connection::Unknown;
    }
    if a.node_count() == b.node_count() {
        Connection::Linked
    } else {
        Connection::Divided
    }
}
