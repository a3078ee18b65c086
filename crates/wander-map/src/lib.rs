//! Map reconciliation and rendering.
//!
//! Two agents build their graphs in independent local frames; once a
//! meeting (or provable equivalence) is established, this crate lines
//! the frames up and renders one unified map on a fixed square
//! character canvas.
//!
//! Alignment tries five candidate offsets — "the meeting cells
//! coincide" plus the four cardinal one-step offsets — against two
//! checks: the shifted graphs must fit the canvas, and their
//! passages and walls must not contradict each other. See
//! [`restore_map`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod align;
mod canvas;

pub use align::restore_map;
pub use canvas::{render_single, CANVAS_SIDE, PASSAGE_GLYPH, UNKNOWN_GLYPH, WALL_GLYPH};
