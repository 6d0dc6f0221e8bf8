//! Style extraction: one resolved property map -> one `ElementStyle`.

use crate::color::{normalize_color, TRANSPARENT};
use crate::snapshot::ComputedStyle;
use crate::style::{Display, Edges, ElementStyle, GapValues};

/// Parse a numeric pixel value by stripping the `px` suffix. Returns NaN
/// when the value is absent or unparsable; downstream checks treat NaN as
/// "no rule applies" rather than aborting the scan.
pub fn parse_px(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return f64::NAN;
    };

    let trimmed = raw.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed);
    number.trim().parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_px_or_zero(raw: Option<&str>) -> f64 {
    let value = parse_px(raw);
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Resolve a computed `line-height` to px.
///
/// `"normal"` (or a missing value) resolves to `round(font_size * 1.2)`,
/// a px value to its number, a bare number to `round(font_size * n)`, and
/// anything else falls back to the font size itself.
pub fn parse_line_height(raw: Option<&str>, font_size: f64) -> f64 {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return (font_size * 1.2).round();
    };

    if raw == "normal" {
        return (font_size * 1.2).round();
    }

    if let Some(px) = raw.strip_suffix("px") {
        if let Ok(value) = px.trim().parse::<f64>() {
            return value;
        }
    } else if let Ok(multiplier) = raw.parse::<f64>() {
        return (font_size * multiplier).round();
    }

    font_size
}

/// Parse a computed `border-radius`, which may report up to four corner
/// values. Returns the maximum corner so that any single non-conforming
/// corner gets flagged; absent or zero input returns 0.
pub fn parse_border_radius(raw: Option<&str>) -> f64 {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return 0.0;
    };

    if raw == "0px" {
        return 0.0;
    }

    raw.split_whitespace()
        .map(|corner| parse_px(Some(corner)))
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max)
}

/// Read a resolved-style snapshot into a normalized [`ElementStyle`].
pub fn extract(computed: &ComputedStyle) -> ElementStyle {
    let font_size = parse_px(computed.get("font-size"));

    ElementStyle {
        font_size,
        font_weight: computed.get("font-weight").unwrap_or("normal").to_string(),
        line_height: parse_line_height(computed.get("line-height"), font_size),
        // colors the host did not capture are treated as transparent, which
        // the palette check never flags
        color: normalize_color(computed.get("color").unwrap_or(TRANSPARENT)),
        background_color: normalize_color(computed.get("background-color").unwrap_or(TRANSPARENT)),
        border_color: normalize_color(computed.get("border-color").unwrap_or(TRANSPARENT)),
        padding: Edges {
            top: parse_px(computed.get("padding-top")),
            right: parse_px(computed.get("padding-right")),
            bottom: parse_px(computed.get("padding-bottom")),
            left: parse_px(computed.get("padding-left")),
        },
        margin: Edges {
            top: parse_px(computed.get("margin-top")),
            right: parse_px(computed.get("margin-right")),
            bottom: parse_px(computed.get("margin-bottom")),
            left: parse_px(computed.get("margin-left")),
        },
        gap: GapValues {
            row: parse_px_or_zero(computed.get("row-gap")),
            column: parse_px_or_zero(computed.get("column-gap")),
            shorthand: parse_px_or_zero(computed.get("gap")),
        },
        display: Display::parse(computed.get("display").unwrap_or("block")),
        border_radius: parse_border_radius(computed.get("border-radius")),
        width: parse_px(computed.get("width")),
        height: parse_px(computed.get("height")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_px() {
        assert_eq!(parse_px(Some("16px")), 16.0);
        assert_eq!(parse_px(Some("15.5px")), 15.5);
        assert_eq!(parse_px(Some("0px")), 0.0);
        assert!(parse_px(Some("auto")).is_nan());
        assert!(parse_px(None).is_nan());
    }

    #[test]
    fn test_line_height_normal_is_1_2x() {
        assert_eq!(parse_line_height(Some("normal"), 16.0), 19.0);
        assert_eq!(parse_line_height(None, 20.0), 24.0);
    }

    #[test]
    fn test_line_height_px_value() {
        assert_eq!(parse_line_height(Some("24px"), 16.0), 24.0);
    }

    #[test]
    fn test_line_height_bare_multiplier() {
        assert_eq!(parse_line_height(Some("1.5"), 16.0), 24.0);
    }

    #[test]
    fn test_line_height_unknown_falls_back_to_font_size() {
        assert_eq!(parse_line_height(Some("2em"), 16.0), 16.0);
    }

    #[test]
    fn test_border_radius_single_value() {
        assert_eq!(parse_border_radius(Some("8px")), 8.0);
        assert_eq!(parse_border_radius(Some("0px")), 0.0);
        assert_eq!(parse_border_radius(None), 0.0);
    }

    #[test]
    fn test_border_radius_takes_max_corner() {
        assert_eq!(parse_border_radius(Some("4px 8px 12px 8px")), 12.0);
    }

    #[test]
    fn test_extract_full_record() {
        let computed = ComputedStyle::from([
            ("font-size", "16px"),
            ("font-weight", "600"),
            ("line-height", "24px"),
            ("color", "rgb(12, 14, 31)"),
            ("background-color", "rgba(0, 0, 0, 0)"),
            ("border-color", "rgb(0, 0, 0)"),
            ("padding-top", "8px"),
            ("padding-right", "8px"),
            ("padding-bottom", "8px"),
            ("padding-left", "8px"),
            ("margin-top", "0px"),
            ("margin-right", "0px"),
            ("margin-bottom", "16px"),
            ("margin-left", "0px"),
            ("display", "flex"),
            ("gap", "8px"),
            ("border-radius", "4px"),
            ("width", "320px"),
            ("height", "48px"),
        ]);

        let style = extract(&computed);
        assert_eq!(style.font_size, 16.0);
        assert_eq!(style.font_weight, "600");
        assert_eq!(style.line_height, 24.0);
        assert_eq!(style.color, "#0c0e1f");
        assert_eq!(style.background_color, "transparent");
        assert_eq!(style.border_color, "#000000");
        assert_eq!(style.padding, Edges::uniform(8.0));
        assert_eq!(style.margin.bottom, 16.0);
        assert_eq!(style.gap.shorthand, 8.0);
        assert_eq!(style.display, Display::Flex);
        assert_eq!(style.border_radius, 4.0);
        assert_eq!(style.width, 320.0);
    }

    #[test]
    fn test_extract_tolerates_garbage() {
        let computed = ComputedStyle::from([
            ("font-size", "medium"),
            ("padding-top", "calc(1px + 2px)"),
        ]);

        let style = extract(&computed);
        assert!(style.font_size.is_nan());
        assert!(style.padding.top.is_nan());
        // missing gap channels resolve to no gap, not NaN
        assert_eq!(style.gap.shorthand, 0.0);
    }
}
