//! Grid directions and routes.

use smallvec::SmallVec;
use std::fmt;

/// Cardinal direction on the labyrinth grid.
///
/// `Up` increases `y`, `Down` decreases it; `Right` increases `x`,
/// `Left` decreases it. Every ordered traversal in the workspace
/// (neighbour scans, frontier expansion, advice selection) walks
/// directions in [`Direction::SCAN_ORDER`], which is what makes the
/// whole system deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward negative `x`.
    Left,
    /// Toward positive `x`.
    Right,
    /// Toward positive `y`.
    Up,
    /// Toward negative `y`.
    Down,
}

impl Direction {
    /// The fixed priority order used by every ordered scan.
    pub const SCAN_ORDER: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// The direction that undoes this one.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// The `(dx, dy)` offset of one step in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
        }
    }

    /// Stable slot index (0..4), matching [`SCAN_ORDER`](Self::SCAN_ORDER).
    pub fn slot(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        write!(f, "{name}")
    }
}

/// An ordered sequence of steps through the labyrinth.
///
/// Inline capacity covers the short routes the advice engine usually
/// produces; longer routes spill to the heap transparently.
pub type Route = SmallVec<[Direction; 16]>;
