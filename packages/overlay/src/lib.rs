//! Visual diagnostics for the hovered element: infer the rendered gaps
//! between flex/grid siblings from their geometry alone, and turn
//! padding/margin/gap boxes into positioned draw instructions.
//!
//! Gap inference is a best-effort heuristic over bounding boxes. It does
//! not consult the layout engine and makes no guarantee on wrapped or
//! non-rectangular arrangements; the fallback pass exists precisely
//! because the pairwise pass can come up empty on irregular grids that
//! still declare a gap.

mod gaps;
mod renderer;

pub use gaps::{infer_gaps, InferredGap, Orientation};
pub use renderer::{
    gap_boxes, margin_boxes, padding_boxes, render_overlay, DrawRect, LayerStyle, OverlayLayer,
    ScrollOffset,
};
