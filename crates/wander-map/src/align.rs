//! Aligning two independently-framed graphs.

use crate::canvas::{Canvas, CANVAS_SIDE};
use wander_core::{Direction, MapError, Position};
use wander_graph::Graph;

/// Overlay two graphs into one rendered map.
///
/// Tries `a` as the frame of reference first, then retries with the
/// roles swapped. Both graphs are normalized, and the one that gets
/// aligned is left in its aligned frame on success.
///
/// `marker_a` and `marker_b` are drawn over the graphs' start cells.
///
/// # Errors
///
/// [`MapError::NoAlignment`] when no candidate passes the canvas and
/// intersection checks from either frame of reference. This is a soft
/// failure: the run itself still stands, only the rendering does not.
pub fn restore_map(
    a: &mut Graph,
    b: &mut Graph,
    marker_a: char,
    marker_b: char,
) -> Result<String, MapError> {
    if let Some(map) = reconcile(a, b, marker_a, marker_b) {
        return Ok(map);
    }
    if let Some(map) = reconcile(b, a, marker_b, marker_a) {
        return Ok(map);
    }
    Err(MapError::NoAlignment)
}

/// Try the five alignment candidates with `reference` holding still.
///
/// The candidates anchor `other`'s meeting cell on the reference's
/// meeting cell and on its four cardinal neighbours, in scan order. A
/// candidate survives only if both shifted bounding rectangles fit the
/// canvas and no passage of either graph lands on a wall of either.
fn reconcile(
    reference: &mut Graph,
    other: &mut Graph,
    reference_marker: char,
    other_marker: char,
) -> Option<String> {
    reference.normalize();
    other.normalize();
    if !reference.rect().fits_within(CANVAS_SIDE) {
        return None;
    }

    let anchor = reference.current_position();
    let mut spots = [anchor; 5];
    for (slot, direction) in Direction::SCAN_ORDER.iter().enumerate() {
        spots[slot + 1] = anchor.at(*direction);
    }

    for spot in spots {
        let here = other.current_position();
        let (dx, dy) = (spot.x - here.x, spot.y - here.y);
        other.shift(dx, dy);
        if other.rect().fits_within(CANVAS_SIDE) && !reference.intersects(other) {
            return Some(draw_pair(reference, other, reference_marker, other_marker));
        }
        other.shift(-dx, -dy);
    }
    None
}

/// Union of two aligned graphs: all passages, then all probed walls,
/// then both start markers.
fn draw_pair(reference: &Graph, other: &Graph, reference_marker: char, other_marker: char) -> String {
    let mut canvas = Canvas::new();
    canvas.paint_passages(reference);
    canvas.paint_passages(other);
    canvas.paint_walls(reference);
    canvas.paint_walls(other);
    canvas.plot(start_of(reference), reference_marker);
    canvas.plot(start_of(other), other_marker);
    canvas.render()
}

fn start_of(graph: &Graph) -> Position {
    graph.node(graph.start()).position()
}
