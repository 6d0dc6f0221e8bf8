//! Overlay rendering: box geometry to positioned draw instructions.
//!
//! The host draws these rectangles above the page. They are advisory only;
//! whatever surface the host uses must not intercept pointer or keyboard
//! input on the inspected page.

use crate::gaps::{infer_gaps, InferredGap};
use serde::{Deserialize, Serialize};
use speclens_style::{ChildBox, Edges, ElementStyle, Rect};

/// Which diagnostic layer a rectangle belongs to. Each layer has its own
/// fill/stroke so padding, margin and gaps are visually distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverlayLayer {
    Padding,
    Margin,
    Gap,
}

/// Fill and stroke colors of one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerStyle {
    pub fill: &'static str,
    pub stroke: &'static str,
}

impl OverlayLayer {
    pub fn style(&self) -> LayerStyle {
        match self {
            OverlayLayer::Padding => LayerStyle {
                fill: "rgba(147, 197, 253, 0.7)",
                stroke: "#3b82f6",
            },
            OverlayLayer::Margin => LayerStyle {
                fill: "rgba(251, 191, 36, 0.7)",
                stroke: "#f59e0b",
            },
            OverlayLayer::Gap => LayerStyle {
                fill: "rgba(16, 185, 129, 0.6)",
                stroke: "#10b981",
            },
        }
    }
}

/// One positioned rectangle to draw, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawRect {
    pub layer: OverlayLayer,
    pub rect: Rect,
}

/// Viewport scroll position, for translating viewport rects into document
/// coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

fn sanitize(edges: &Edges) -> Edges {
    Edges {
        top: finite_or_zero(edges.top),
        right: finite_or_zero(edges.right),
        bottom: finite_or_zero(edges.bottom),
        left: finite_or_zero(edges.left),
    }
}

/// Padding strips drawn inside the element box: full-width bands along the
/// top and bottom, with the left/right bands filling the remaining height
/// between them.
pub fn padding_boxes(rect: Rect, padding: &Edges, scroll: ScrollOffset) -> Vec<DrawRect> {
    let padding = sanitize(padding);
    let mut boxes = Vec::new();

    let left = rect.left + scroll.x;
    let top = rect.top + scroll.y;

    if padding.top > 0.0 {
        boxes.push(DrawRect {
            layer: OverlayLayer::Padding,
            rect: Rect::new(left, top, rect.width, padding.top),
        });
    }

    if padding.bottom > 0.0 {
        boxes.push(DrawRect {
            layer: OverlayLayer::Padding,
            rect: Rect::new(
                left,
                rect.bottom() + scroll.y - padding.bottom,
                rect.width,
                padding.bottom,
            ),
        });
    }

    let inner_height = rect.height - padding.top - padding.bottom;

    if padding.left > 0.0 {
        boxes.push(DrawRect {
            layer: OverlayLayer::Padding,
            rect: Rect::new(left, top + padding.top, padding.left, inner_height),
        });
    }

    if padding.right > 0.0 {
        boxes.push(DrawRect {
            layer: OverlayLayer::Padding,
            rect: Rect::new(
                rect.right() + scroll.x - padding.right,
                top + padding.top,
                padding.right,
                inner_height,
            ),
        });
    }

    boxes
}

/// Margin strips drawn outside the element box: full-width bands above and
/// below, with the left/right bands spanning the margin-extended height.
pub fn margin_boxes(rect: Rect, margin: &Edges, scroll: ScrollOffset) -> Vec<DrawRect> {
    let margin = sanitize(margin);
    let mut boxes = Vec::new();

    let left = rect.left + scroll.x;
    let top = rect.top + scroll.y;
    let outer_height = rect.height + margin.top + margin.bottom;

    if margin.top > 0.0 {
        boxes.push(DrawRect {
            layer: OverlayLayer::Margin,
            rect: Rect::new(left, top - margin.top, rect.width, margin.top),
        });
    }

    if margin.bottom > 0.0 {
        boxes.push(DrawRect {
            layer: OverlayLayer::Margin,
            rect: Rect::new(left, rect.bottom() + scroll.y, rect.width, margin.bottom),
        });
    }

    if margin.left > 0.0 {
        boxes.push(DrawRect {
            layer: OverlayLayer::Margin,
            rect: Rect::new(
                left - margin.left,
                top - margin.top,
                margin.left,
                outer_height,
            ),
        });
    }

    if margin.right > 0.0 {
        boxes.push(DrawRect {
            layer: OverlayLayer::Margin,
            rect: Rect::new(
                rect.right() + scroll.x,
                top - margin.top,
                margin.right,
                outer_height,
            ),
        });
    }

    boxes
}

/// Inferred gaps as drawable boxes.
pub fn gap_boxes(gaps: &[InferredGap], scroll: ScrollOffset) -> Vec<DrawRect> {
    gaps.iter()
        .filter(|gap| gap.rect.width > 0.0 && gap.rect.height > 0.0)
        .map(|gap| DrawRect {
            layer: OverlayLayer::Gap,
            rect: Rect::new(
                gap.rect.left + scroll.x,
                gap.rect.top + scroll.y,
                gap.rect.width,
                gap.rect.height,
            ),
        })
        .collect()
}

/// The full diagnostic overlay of one hovered element: its padding and
/// margin strips plus the inferred gaps between its children.
pub fn render_overlay(
    rect: Rect,
    style: &ElementStyle,
    children: &[ChildBox],
    scroll: ScrollOffset,
) -> Vec<DrawRect> {
    let mut boxes = padding_boxes(rect, &style.padding, scroll);
    boxes.extend(margin_boxes(rect, &style.margin, scroll));

    let gaps = infer_gaps(style.display, children, style.gap);
    boxes.extend(gap_boxes(&gaps, scroll));

    boxes
}
