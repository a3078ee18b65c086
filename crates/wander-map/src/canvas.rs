//! The fixed square display canvas.

use wander_core::Position;
use wander_graph::Graph;

/// Side length of the display canvas, in cells.
///
/// The design targets mazes that fit this square; anything plotted
/// outside is silently clipped.
pub const CANVAS_SIDE: i32 = 10;

/// Glyph for a cell nobody knows anything about.
pub const UNKNOWN_GLYPH: char = '?';
/// Glyph for a discovered open cell.
pub const PASSAGE_GLYPH: char = '.';
/// Glyph for a probed wall.
pub const WALL_GLYPH: char = '#';

/// A `CANVAS_SIDE`-square character grid.
pub(crate) struct Canvas {
    cells: [[char; CANVAS_SIDE as usize]; CANVAS_SIDE as usize],
}

impl Canvas {
    pub(crate) fn new() -> Self {
        Self {
            cells: [[UNKNOWN_GLYPH; CANVAS_SIDE as usize]; CANVAS_SIDE as usize],
        }
    }

    /// Set the glyph at `pos`; positions off the canvas are dropped.
    pub(crate) fn plot(&mut self, pos: Position, glyph: char) {
        if (0..CANVAS_SIDE).contains(&pos.x) && (0..CANVAS_SIDE).contains(&pos.y) {
            self.cells[pos.y as usize][pos.x as usize] = glyph;
        }
    }

    /// Plot a graph's passages, then the walls its visited cells have
    /// probed.
    pub(crate) fn paint_passages(&mut self, graph: &Graph) {
        for pos in graph.passage_positions() {
            self.plot(pos, PASSAGE_GLYPH);
        }
    }

    pub(crate) fn paint_walls(&mut self, graph: &Graph) {
        for pos in graph.wall_positions() {
            self.plot(pos, WALL_GLYPH);
        }
    }

    /// Render with `y` descending, so `Up` points up on screen.
    pub(crate) fn render(&self) -> String {
        let mut out = String::with_capacity((CANVAS_SIDE * (CANVAS_SIDE + 1)) as usize);
        for row in self.cells.iter().rev() {
            out.extend(row.iter());
            out.push('\n');
        }
        out
    }
}

/// Render one graph's knowledge on its own canvas.
///
/// Expects the graph to be normalized (all positions non-negative, as
/// [`Graph::normalize`] leaves them); anything outside the canvas is
/// clipped. `marker` is drawn over the start cell.
pub fn render_single(graph: &Graph, marker: char) -> String {
    let mut canvas = Canvas::new();
    canvas.paint_passages(graph);
    canvas.paint_walls(graph);
    canvas.plot(graph.node(graph.start()).position(), marker);
    canvas.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use wander_core::Direction;

    fn line_of(map: &str, y: i32) -> String {
        map.lines()
            .nth((CANVAS_SIDE - 1 - y) as usize)
            .expect("canvas has CANVAS_SIDE rows")
            .to_string()
    }

    #[test]
    fn empty_canvas_is_all_unknown() {
        let map = Canvas::new().render();
        assert_eq!(map.lines().count(), CANVAS_SIDE as usize);
        assert!(map.lines().all(|line| line.chars().all(|c| c == '?')));
    }

    #[test]
    fn corridor_renders_passages_walls_and_marker() {
        let mut graph = Graph::new();
        graph.link_or_create(Direction::Right);
        graph.advance(Direction::Right).unwrap();
        graph.normalize();
        let map = render_single(&graph, '@');
        // Bottom row: marker, passage, then the probed wall at (2, 0).
        assert_eq!(line_of(&map, 0), "@.#???????");
        // Both cells are visited, so their upward probes are walls.
        assert_eq!(line_of(&map, 1), "##????????");
    }

    #[test]
    fn off_canvas_probes_are_clipped() {
        // The start cell's left and down walls sit at -1 after
        // normalization keeps the single passage at the origin.
        let mut graph = Graph::new();
        graph.normalize();
        let map = render_single(&graph, '@');
        assert_eq!(line_of(&map, 0), "@#????????");
        assert_eq!(line_of(&map, 1), "#?????????");
    }

    #[test]
    fn unvisited_cells_contribute_no_walls() {
        let mut graph = Graph::new();
        graph.link_or_create(Direction::Up);
        graph.normalize();
        let map = render_single(&graph, '@');
        // The unvisited probe at (0, 1) renders as a passage with no
        // walls of its own.
        assert_eq!(line_of(&map, 1), ".?????????");
        assert_eq!(line_of(&map, 2), "??????????");
    }

    proptest! {
        // Off-canvas plots are dropped; the rendered shape is always
        // the same fixed square.
        #[test]
        fn plot_anywhere_keeps_the_canvas_shape(
            x in -50i32..50,
            y in -50i32..50,
        ) {
            let mut canvas = Canvas::new();
            canvas.plot(Position::new(x, y), WALL_GLYPH);
            let map = canvas.render();
            prop_assert_eq!(map.lines().count(), CANVAS_SIDE as usize);
            prop_assert!(map
                .lines()
                .all(|line| line.chars().count() == CANVAS_SIDE as usize));
        }
    }
}
