//! Color normalization: computed channel colors to canonical hex.

use regex::Regex;

/// The canonical sentinel for fully transparent values.
pub const TRANSPARENT: &str = "transparent";

/// Normalize a computed color value (`rgb(…)` / `rgba(…)` / keyword) to
/// canonical lowercase `#rrggbb`, or `"transparent"` for alpha-zero and
/// keyword-transparent input.
///
/// Channels are clamped to [0, 255] and zero-padded. There is no error
/// path: input that carries no channel values comes back unchanged.
pub fn normalize_color(raw: &str) -> String {
    let raw = raw.trim();

    if raw.eq_ignore_ascii_case(TRANSPARENT) {
        return TRANSPARENT.to_string();
    }

    let re = Regex::new(r"-?\d+(\.\d+)?").unwrap();
    let values: Vec<f64> = re
        .find_iter(raw)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect();

    // rgba() with a zero alpha channel is fully transparent
    if raw.starts_with("rgba") && values.len() >= 4 && values[3] == 0.0 {
        return TRANSPARENT.to_string();
    }

    if values.len() < 3 {
        return raw.to_string();
    }

    let channel = |v: f64| -> u8 { v.clamp(0.0, 255.0).round() as u8 };

    format!(
        "#{:02x}{:02x}{:02x}",
        channel(values[0]),
        channel(values[1]),
        channel(values[2])
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hex() {
        assert_eq!(normalize_color("rgb(12, 14, 31)"), "#0c0e1f");
        assert_eq!(normalize_color("rgb(255, 255, 255)"), "#ffffff");
        assert_eq!(normalize_color("rgb(0, 0, 0)"), "#000000");
    }

    #[test]
    fn test_alpha_zero_is_transparent() {
        assert_eq!(normalize_color("rgba(0, 0, 0, 0)"), "transparent");
        assert_eq!(normalize_color("rgba(255, 10, 10, 0)"), "transparent");
        assert_eq!(normalize_color("transparent"), "transparent");
    }

    #[test]
    fn test_opaque_rgba_keeps_channels() {
        assert_eq!(normalize_color("rgba(0, 147, 193, 1)"), "#0093c1");
    }

    #[test]
    fn test_channels_are_clamped() {
        assert_eq!(normalize_color("rgb(300, -20, 128)"), "#ff0080");
    }

    #[test]
    fn test_malformed_input_passes_through() {
        assert_eq!(normalize_color("currentcolor"), "currentcolor");
        assert_eq!(normalize_color(""), "");
    }
}
