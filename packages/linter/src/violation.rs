use serde::{Deserialize, Serialize};
use speclens_style::{GapChannel, Side};

/// Which box a spacing violation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoxKind {
    Padding,
    Margin,
}

impl BoxKind {
    pub fn name(&self) -> &'static str {
        match self {
            BoxKind::Padding => "padding",
            BoxKind::Margin => "margin",
        }
    }
}

/// The exact slot a discrete spacing check flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "box", rename_all = "lowercase")]
pub enum SpacingTarget {
    Padding { side: Side },
    Margin { side: Side },
    Gap { channel: GapChannel },
}

/// Which color property a palette check flagged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorRole {
    Text,
    Background,
    Border,
}

impl ColorRole {
    pub fn name(&self) -> &'static str {
        match self {
            ColorRole::Text => "text color",
            ColorRole::Background => "background color",
            ColorRole::Border => "border color",
        }
    }
}

/// Classified kind of a finding. `FontSizeOutOfRange` and
/// `SpacingOutOfRange` are only produced by the legacy range-shaped rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ViolationKind {
    FontSizeNotInteger,
    FontSizeNotAllowed,
    FontSizeOutOfRange,
    LineHeightMismatch { expected: f64, actual: f64 },
    SpacingNotAllowed { target: SpacingTarget },
    SpacingOutOfRange { box_kind: BoxKind },
    BorderRadiusNotAllowed,
    ColorNotAllowed { role: ColorRole },
}

/// One flagged mismatch between a resolved style value and the rule set.
/// Immutable; produced fresh per check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    #[serde(flatten)]
    pub kind: ViolationKind,

    /// Human-readable finding, carrying the observed and expected values
    pub message: String,
}

impl Violation {
    pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Render an allowed-value list the way messages quote it: `[0, 8, 16]`.
pub(crate) fn format_allowed(values: &[f64]) -> String {
    let joined = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_allowed() {
        assert_eq!(format_allowed(&[0.0, 8.0, 16.0]), "[0, 8, 16]");
        assert_eq!(format_allowed(&[]), "[]");
    }

    #[test]
    fn test_violation_serializes_flat() {
        let violation = Violation::new(
            ViolationKind::LineHeightMismatch {
                expected: 24.0,
                actual: 20.0,
            },
            "line height for 16px text should be 24px, found 20px",
        );

        let json = serde_json::to_value(&violation).unwrap();
        assert_eq!(json["kind"], "lineHeightMismatch");
        assert_eq!(json["expected"], 24.0);
        assert!(json["message"].as_str().unwrap().contains("24px"));
    }
}
