//! Computed-style snapshot model and style extraction.
//!
//! The host environment (a real browser, a test fixture, anything that can
//! resolve CSS) hands us a [`DocumentSnapshot`]: per element, the resolved
//! property map and the bounding rectangle. This crate turns one element's
//! property map into a normalized [`ElementStyle`] record that the checker
//! and the overlay renderer consume. No cascade and no layout engine,
//! values arrive already resolved.

mod color;
mod extract;
mod snapshot;
mod style;

pub use color::normalize_color;
pub use extract::{extract, parse_border_radius, parse_line_height, parse_px};
pub use snapshot::{ChildBox, ComputedStyle, DocumentSnapshot, ElementSnapshot, Rect};
pub use style::{Display, Edges, ElementStyle, GapChannel, GapValues, Side};

/// Serialize helpers for px fields that may carry NaN (soft extraction
/// failures). JSON has no NaN; these round-trip it as `null`.
pub mod px_field {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_some(value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        let value: Option<f64> = Option::deserialize(deserializer)?;
        Ok(value.unwrap_or(f64::NAN))
    }
}
