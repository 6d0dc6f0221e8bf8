//! Inter-sibling gap inference from rendered geometry.

use serde::{Deserialize, Serialize};
use speclens_style::{ChildBox, Display, GapValues, Rect};

/// Row height used to quantize `top` for the sibling sort order.
const SORT_ROW_TOLERANCE: f64 = 5.0;

/// Pairwise same-row / same-column tolerance.
const PAIR_TOLERANCE: f64 = 10.0;

/// Inferred gaps this close together (both origins) are duplicates.
const DEDUP_TOLERANCE: f64 = 2.0;

/// The adjacency fallback is more forgiving about row/column alignment.
const FALLBACK_TOLERANCE: f64 = 15.0;

/// Minimum separation worth drawing, pairwise and fallback.
const MIN_GAP: f64 = 1.0;
const FALLBACK_MIN_GAP: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// One inferred visual gap between two siblings. Ephemeral: recomputed on
/// every hover, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InferredGap {
    pub orientation: Orientation,
    pub rect: Rect,

    /// The separation itself, px (the rect's width or height depending on
    /// orientation)
    pub magnitude: f64,
}

/// Infer the rendered gaps of a flex/grid container from its children's
/// bounding boxes.
///
/// Only applies when the display renders declared gaps, the container
/// declares a non-zero gap, and at least two rendered children exist;
/// everything else yields no gaps.
pub fn infer_gaps(display: Display, children: &[ChildBox], gaps: GapValues) -> Vec<InferredGap> {
    if !display.is_gap_container() || !gaps.any_positive() {
        return Vec::new();
    }

    let mut rects: Vec<Rect> = children
        .iter()
        .filter(|c| c.rendered)
        .map(|c| c.rect)
        .collect();

    if rects.len() < 2 {
        return Vec::new();
    }

    // sort by row then left. The row is quantized to the tolerance so the
    // comparator stays a total order; comparing raw tops with a "close
    // enough" branch is intransitive and the sort rejects it at runtime
    // on irregular inputs.
    rects.sort_by(|a, b| {
        let row_a = (a.top / SORT_ROW_TOLERANCE).floor();
        let row_b = (b.top / SORT_ROW_TOLERANCE).floor();
        row_a.total_cmp(&row_b).then(a.left.total_cmp(&b.left))
    });

    let detected = detect_pairwise(&rects);
    let unique = dedup(detected);

    if unique.is_empty() && (gaps.effective_row() > 0.0 || gaps.effective_column() > 0.0) {
        return detect_adjacent(&rects);
    }

    unique
}

/// Every unordered pair of siblings can contribute one gap.
fn detect_pairwise(rects: &[Rect]) -> Vec<InferredGap> {
    let mut detected = Vec::new();

    for i in 0..rects.len() {
        for j in (i + 1)..rects.len() {
            let a = rects[i];
            let b = rects[j];

            let same_row = (a.top - b.top).abs() < PAIR_TOLERANCE;
            if same_row && b.left > a.right() {
                let width = b.left - a.right();
                if width > MIN_GAP {
                    detected.push(InferredGap {
                        orientation: Orientation::Horizontal,
                        rect: Rect::new(
                            a.right(),
                            a.top.min(b.top),
                            width,
                            a.height.max(b.height),
                        ),
                        magnitude: width,
                    });
                }
            }

            // same column, or horizontally overlapping (grid cells that
            // share a column span)
            let same_column = (a.left - b.left).abs() < PAIR_TOLERANCE
                || (a.left < b.right() && b.left < a.right());
            if same_column && b.top > a.bottom() {
                let height = b.top - a.bottom();
                if height > MIN_GAP {
                    detected.push(InferredGap {
                        orientation: Orientation::Vertical,
                        rect: Rect::new(
                            a.left.min(b.left),
                            a.bottom(),
                            a.width.max(b.width),
                            height,
                        ),
                        magnitude: height,
                    });
                }
            }
        }
    }

    detected
}

/// Two gaps of the same orientation whose origins are both within 2px are
/// the same rendered gap; the first one wins.
fn dedup(detected: Vec<InferredGap>) -> Vec<InferredGap> {
    let mut unique: Vec<InferredGap> = Vec::new();

    for gap in detected {
        let exists = unique.iter().any(|existing| {
            existing.orientation == gap.orientation
                && (existing.rect.left - gap.rect.left).abs() < DEDUP_TOLERANCE
                && (existing.rect.top - gap.rect.top).abs() < DEDUP_TOLERANCE
        });
        if !exists {
            unique.push(gap);
        }
    }

    unique
}

/// Adjacency-only fallback over the sorted list, for irregular layouts
/// where the pairwise pass found nothing despite a declared gap. Strips
/// are sized by the current child's box.
fn detect_adjacent(rects: &[Rect]) -> Vec<InferredGap> {
    let mut gaps = Vec::new();

    for pair in rects.windows(2) {
        let (current, next) = (pair[0], pair[1]);

        if (current.top - next.top).abs() < FALLBACK_TOLERANCE && next.left > current.right() {
            let width = next.left - current.right();
            if width > FALLBACK_MIN_GAP {
                gaps.push(InferredGap {
                    orientation: Orientation::Horizontal,
                    rect: Rect::new(current.right(), current.top, width, current.height),
                    magnitude: width,
                });
            }
        }

        if (current.left - next.left).abs() < FALLBACK_TOLERANCE && next.top > current.bottom() {
            let height = next.top - current.bottom();
            if height > FALLBACK_MIN_GAP {
                gaps.push(InferredGap {
                    orientation: Orientation::Vertical,
                    rect: Rect::new(current.left, current.bottom(), current.width, height),
                    magnitude: height,
                });
            }
        }
    }

    gaps
}
