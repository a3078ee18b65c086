//! Grid positions and axis-aligned bounding rectangles.

use crate::direction::Direction;
use std::fmt;

/// A node position relative to its graph's start node.
///
/// Positions live on an unbounded integer grid; equality is exact.
/// Each agent's graph has its own frame — positions from different
/// graphs are only comparable after map alignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

impl Position {
    /// The start-node position of every fresh graph.
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    /// Create a position.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent position one step in `direction`.
    pub fn at(self, direction: Direction) -> Position {
        let (dx, dy) = direction.offset();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// This position translated by `(dx, dy)`.
    pub fn shifted(self, dx: i32, dy: i32) -> Position {
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned bounding rectangle of all known positions in one graph.
///
/// Grows monotonically via [`expand`](Rect::expand) as cells are
/// discovered, and can be translated wholesale via [`shift`](Rect::shift)
/// without changing relative structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    /// Smallest covered `x`.
    pub min_x: i32,
    /// Smallest covered `y`.
    pub min_y: i32,
    /// Largest covered `x`.
    pub max_x: i32,
    /// Largest covered `y`.
    pub max_y: i32,
}

impl Rect {
    /// A one-cell rectangle around `pos`.
    pub fn around(pos: Position) -> Self {
        Self {
            min_x: pos.x,
            min_y: pos.y,
            max_x: pos.x,
            max_y: pos.y,
        }
    }

    /// Grow the rectangle so it covers `pos`.
    pub fn expand(&mut self, pos: Position) {
        self.min_x = self.min_x.min(pos.x);
        self.min_y = self.min_y.min(pos.y);
        self.max_x = self.max_x.max(pos.x);
        self.max_y = self.max_y.max(pos.y);
    }

    /// Translate the rectangle by `(dx, dy)`.
    pub fn shift(&mut self, dx: i32, dy: i32) {
        self.min_x += dx;
        self.max_x += dx;
        self.min_y += dy;
        self.max_y += dy;
    }

    /// Covered width in cells.
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x + 1
    }

    /// Covered height in cells.
    pub fn height(&self) -> i32 {
        self.max_y - self.min_y + 1
    }

    /// Whether the rectangle lies entirely within the square
    /// `[0, side) × [0, side)`.
    pub fn fits_within(&self, side: i32) -> bool {
        self.min_x >= 0 && self.min_y >= 0 && self.max_x < side && self.max_y < side
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn at_follows_direction_offsets() {
        let p = Position::new(3, -2);
        assert_eq!(p.at(Direction::Left), Position::new(2, -2));
        assert_eq!(p.at(Direction::Right), Position::new(4, -2));
        assert_eq!(p.at(Direction::Up), Position::new(3, -1));
        assert_eq!(p.at(Direction::Down), Position::new(3, -3));
    }

    #[test]
    fn expand_grows_monotonically() {
        let mut rect = Rect::around(Position::ORIGIN);
        rect.expand(Position::new(3, -1));
        rect.expand(Position::new(-2, 4));
        assert_eq!(
            rect,
            Rect {
                min_x: -2,
                min_y: -1,
                max_x: 3,
                max_y: 4,
            }
        );
        assert_eq!(rect.width(), 6);
        assert_eq!(rect.height(), 6);
    }

    #[test]
    fn fits_within_is_inclusive_of_zero_exclusive_of_side() {
        let rect = Rect {
            min_x: 0,
            min_y: 0,
            max_x: 9,
            max_y: 9,
        };
        assert!(rect.fits_within(10));
        let mut shifted = rect;
        shifted.shift(1, 0);
        assert!(!shifted.fits_within(10));
        let mut negative = rect;
        negative.shift(-1, 0);
        assert!(!negative.fits_within(10));
    }

    proptest! {
        #[test]
        fn expand_always_covers(
            xs in proptest::collection::vec(-50i32..50, 1..20),
            ys in proptest::collection::vec(-50i32..50, 1..20),
        ) {
            let mut rect = Rect::around(Position::ORIGIN);
            let points: Vec<Position> = xs
                .iter()
                .zip(ys.iter())
                .map(|(&x, &y)| Position::new(x, y))
                .collect();
            for &p in &points {
                rect.expand(p);
            }
            for &p in &points {
                prop_assert!(rect.min_x <= p.x && p.x <= rect.max_x);
                prop_assert!(rect.min_y <= p.y && p.y <= rect.max_y);
            }
        }

        #[test]
        fn shift_preserves_extent(dx in -100i32..100, dy in -100i32..100) {
            let mut rect = Rect {
                min_x: -3,
                min_y: 2,
                max_x: 5,
                max_y: 7,
            };
            let (w, h) = (rect.width(), rect.height());
            rect.shift(dx, dy);
            prop_assert_eq!(rect.width(), w);
            prop_assert_eq!(rect.height(), h);
        }
    }
}
