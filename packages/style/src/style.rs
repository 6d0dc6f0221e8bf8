//! The normalized per-element style record.

use serde::{Deserialize, Serialize};

/// Resolved `display` value, reduced to the cases the checker cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Display {
    Block,
    Inline,
    InlineBlock,
    Flex,
    InlineFlex,
    Grid,
    InlineGrid,
    None,
    #[serde(other)]
    Other,
}

impl Display {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "block" => Display::Block,
            "inline" => Display::Inline,
            "inline-block" => Display::InlineBlock,
            "flex" => Display::Flex,
            "inline-flex" => Display::InlineFlex,
            "grid" => Display::Grid,
            "inline-grid" => Display::InlineGrid,
            "none" => Display::None,
            _ => Display::Other,
        }
    }

    /// True for the container kinds whose declared gap is rendered
    /// (flex/inline-flex/grid/inline-grid).
    pub fn is_gap_container(&self) -> bool {
        matches!(
            self,
            Display::Flex | Display::InlineFlex | Display::Grid | Display::InlineGrid
        )
    }
}

impl Default for Display {
    fn default() -> Self {
        Display::Block
    }
}

/// Four box edges in px. NaN marks a value the host reported in a form we
/// could not parse; checks skip those.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edges {
    #[serde(with = "crate::px_field")]
    pub top: f64,
    #[serde(with = "crate::px_field")]
    pub right: f64,
    #[serde(with = "crate::px_field")]
    pub bottom: f64,
    #[serde(with = "crate::px_field")]
    pub left: f64,
}

impl Edges {
    pub fn zero() -> Self {
        Self {
            top: 0.0,
            right: 0.0,
            bottom: 0.0,
            left: 0.0,
        }
    }

    pub fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Edge values in the fixed check order: top, right, bottom, left.
    pub fn sides(&self) -> [(Side, f64); 4] {
        [
            (Side::Top, self.top),
            (Side::Right, self.right),
            (Side::Bottom, self.bottom),
            (Side::Left, self.left),
        ]
    }

}

impl Default for Edges {
    fn default() -> Self {
        Self::zero()
    }
}

/// One edge of a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    pub fn name(&self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Right => "right",
            Side::Bottom => "bottom",
            Side::Left => "left",
        }
    }
}

/// One gap channel of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GapChannel {
    Shorthand,
    Row,
    Column,
}

impl GapChannel {
    pub fn name(&self) -> &'static str {
        match self {
            GapChannel::Shorthand => "gap",
            GapChannel::Row => "row gap",
            GapChannel::Column => "column gap",
        }
    }
}

/// Resolved gap values of a container. Missing or unparsable channels
/// resolve to 0 (no gap declared).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GapValues {
    pub row: f64,
    pub column: f64,
    pub shorthand: f64,
}

impl GapValues {
    /// Channel values in the fixed check order: shorthand, row, column.
    pub fn channels(&self) -> [(GapChannel, f64); 3] {
        [
            (GapChannel::Shorthand, self.shorthand),
            (GapChannel::Row, self.row),
            (GapChannel::Column, self.column),
        ]
    }

    /// Effective row gap: the explicit channel, else the shorthand.
    pub fn effective_row(&self) -> f64 {
        if self.row > 0.0 {
            self.row
        } else {
            self.shorthand
        }
    }

    /// Effective column gap: the explicit channel, else the shorthand.
    pub fn effective_column(&self) -> f64 {
        if self.column > 0.0 {
            self.column
        } else {
            self.shorthand
        }
    }

    pub fn any_positive(&self) -> bool {
        self.row > 0.0 || self.column > 0.0 || self.shorthand > 0.0
    }
}

/// Normalized resolved style of one element. Immutable snapshot, created
/// fresh per inspection; px fields carry NaN when the host value was
/// unparsable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementStyle {
    #[serde(with = "crate::px_field")]
    pub font_size: f64,

    pub font_weight: String,

    /// Line height resolved to px (see `parse_line_height`)
    #[serde(with = "crate::px_field")]
    pub line_height: f64,

    /// Canonical lowercase hex, or `"transparent"`
    pub color: String,
    pub background_color: String,
    pub border_color: String,

    pub padding: Edges,
    pub margin: Edges,
    pub gap: GapValues,

    pub display: Display,

    /// Maximum of all corner radii, px
    pub border_radius: f64,

    #[serde(with = "crate::px_field")]
    pub width: f64,
    #[serde(with = "crate::px_field")]
    pub height: f64,
}

impl ElementStyle {
    /// Plain-text summary block of the extracted style, one property per
    /// line. This is the hover-tooltip body.
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!(
                "font: {}px / {} / {}px",
                self.font_size, self.font_weight, self.line_height
            ),
            format!("color: {}", self.color),
            format!("background: {}", self.background_color),
            format!("border: {}", self.border_color),
            format!(
                "padding: {}px {}px {}px {}px",
                self.padding.top, self.padding.right, self.padding.bottom, self.padding.left
            ),
            format!(
                "margin: {}px {}px {}px {}px",
                self.margin.top, self.margin.right, self.margin.bottom, self.margin.left
            ),
        ];

        if self.gap.any_positive() {
            if self.gap.shorthand > 0.0 {
                lines.push(format!("gap: {}px", self.gap.shorthand));
            } else {
                lines.push(format!("gap: {}px / {}px", self.gap.row, self.gap.column));
            }
        }

        lines.push(format!("size: {}px x {}px", self.width, self.height));

        if self.border_radius > 0.0 {
            lines.push(format!("radius: {}px", self.border_radius));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_parse() {
        assert_eq!(Display::parse("flex"), Display::Flex);
        assert_eq!(Display::parse("inline-grid"), Display::InlineGrid);
        assert_eq!(Display::parse("table-cell"), Display::Other);
        assert!(Display::InlineFlex.is_gap_container());
        assert!(!Display::Block.is_gap_container());
    }

    #[test]
    fn test_gap_effective_values() {
        let gap = GapValues {
            row: 0.0,
            column: 12.0,
            shorthand: 8.0,
        };
        assert_eq!(gap.effective_row(), 8.0);
        assert_eq!(gap.effective_column(), 12.0);
    }

    #[test]
    fn test_edges_side_order_is_fixed() {
        let edges = Edges {
            top: 1.0,
            right: 2.0,
            bottom: 3.0,
            left: 4.0,
        };
        let values: Vec<f64> = edges.sides().iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]);
    }
}
