//! One discovered maze cell.

use smallvec::SmallVec;
use wander_core::{Direction, NodeId, Position};

/// One discovered cell in an agent's exploration graph.
///
/// The four direction slots are either empty (wall or not yet
/// discovered) or hold the [`NodeId`] of the neighbouring cell in the
/// owning graph. Links are symmetric: if this node's left slot holds
/// `B`, then `B`'s right slot holds this node.
///
/// `dead_end` is cached derived state, not ground truth — it is
/// recomputed by [`Graph::refresh_dead_ends`](crate::Graph::refresh_dead_ends)
/// and cleared by the reset operations.
#[derive(Clone, Debug)]
pub struct Node {
    position: Position,
    visited: bool,
    dead_end: bool,
    links: [Option<NodeId>; 4],
}

impl Node {
    pub(crate) fn new(position: Position, visited: bool) -> Self {
        Self {
            position,
            visited,
            dead_end: false,
            links: [None; 4],
        }
    }

    /// Coordinate in the owning graph's local frame.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Whether the agent has physically stood on this cell.
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    /// Cached dead-end classification.
    pub fn is_dead_end(&self) -> bool {
        self.dead_end
    }

    /// The neighbour in `direction`, if one has been linked.
    pub fn link(&self, direction: Direction) -> Option<NodeId> {
        self.links[direction.slot()]
    }

    /// Existing neighbours in scan order.
    pub fn neighbours(&self) -> SmallVec<[(Direction, NodeId); 4]> {
        Direction::SCAN_ORDER
            .iter()
            .filter_map(|&d| self.link(d).map(|id| (d, id)))
            .collect()
    }

    pub(crate) fn set_link(&mut self, direction: Direction, target: NodeId) {
        self.links[direction.slot()] = Some(target);
    }

    pub(crate) fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    pub(crate) fn set_dead_end(&mut self, dead_end: bool) {
        self.dead_end = dead_end;
    }

    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}
