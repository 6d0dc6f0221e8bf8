use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One allowed font size with its required line height, both in px.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontPair {
    pub size: f64,
    pub line_height: f64,
}

/// An inclusive numeric range, the legacy rule shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinMax {
    pub min: f64,
    pub max: f64,
}

/// The font-size rule, one of three supported shapes. The shape is detected
/// structurally once at deserialization; checks never re-sniff it.
///
/// `Pairs` is the canonical shape and the only one the settings path ever
/// writes. `Sizes` and `Range` are read-compat for rule sets persisted by
/// older versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontSizeRule {
    Pairs(Vec<FontPair>),
    Sizes(Vec<f64>),
    Range(MinMax),
}

impl FontSizeRule {
    /// The pair matching an exact size, if this is the canonical shape.
    pub fn pair_for(&self, size: f64) -> Option<&FontPair> {
        match self {
            FontSizeRule::Pairs(pairs) => pairs.iter().find(|p| p.size == size),
            _ => None,
        }
    }

    pub fn allowed_sizes(&self) -> Vec<f64> {
        match self {
            FontSizeRule::Pairs(pairs) => pairs.iter().map(|p| p.size).collect(),
            FontSizeRule::Sizes(sizes) => sizes.clone(),
            FontSizeRule::Range(_) => Vec::new(),
        }
    }
}

/// Error raised by the settings path when a rule set cannot be normalized.
#[derive(Error, Debug, PartialEq)]
pub enum RuleError {
    #[error("at least one font size entry is required")]
    EmptyFontSizes,

    #[error("font size {0}px is listed more than once")]
    DuplicateFontSize(f64),
}

/// The full design specification.
///
/// `padding` and `margin` are legacy min/max shapes that only apply when no
/// discrete `spacing` set is present; they are read-compat only and never
/// written back by the settings path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSizeRule>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spacing: Option<Vec<f64>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<Vec<f64>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<MinMax>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<MinMax>,
}

impl RuleSet {
    /// The built-in specification seeded on first run.
    pub fn default_rules() -> Self {
        let pairs = [
            (12.0, 18.0),
            (14.0, 21.0),
            (16.0, 24.0),
            (18.0, 22.0),
            (20.0, 24.0),
            (24.0, 30.0),
            (32.0, 40.0),
        ];

        Self {
            font_size: Some(FontSizeRule::Pairs(
                pairs
                    .iter()
                    .map(|&(size, line_height)| FontPair { size, line_height })
                    .collect(),
            )),
            spacing: Some(vec![
                0.0, 2.0, 4.0, 6.0, 8.0, 12.0, 16.0, 20.0, 24.0, 32.0, 40.0, 48.0, 56.0, 64.0,
            ]),
            border_radius: Some(vec![0.0, 4.0, 8.0, 12.0, 16.0, 28.0, 36.0]),
            colors: [
                "#0c0e1f", "#494a57", "#aeafb4", "#0093c1", "#00a59b", "#f5693d", "#551e0d",
                "#fcf1ed",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
            padding: None,
            margin: None,
        }
    }

    /// Normalize for persistence by the settings path: spacing and radius
    /// sets deduplicated and ascending, font pairs sorted by size with
    /// unique sizes, colors lowercased, legacy shapes dropped.
    pub fn normalized(mut self) -> Result<RuleSet, RuleError> {
        if let Some(FontSizeRule::Pairs(pairs)) = &mut self.font_size {
            if pairs.is_empty() {
                return Err(RuleError::EmptyFontSizes);
            }

            pairs.sort_by(|a, b| a.size.total_cmp(&b.size));
            for window in pairs.windows(2) {
                if window[0].size == window[1].size {
                    return Err(RuleError::DuplicateFontSize(window[0].size));
                }
            }
        }

        if let Some(spacing) = &mut self.spacing {
            sort_dedup(spacing);
        }
        if let Some(radius) = &mut self.border_radius {
            sort_dedup(radius);
        }

        for color in &mut self.colors {
            *color = color.to_lowercase();
        }

        // legacy min/max shapes are superseded once the settings path writes
        self.padding = None;
        self.margin = None;

        Ok(self)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::default_rules()
    }
}

fn sort_dedup(values: &mut Vec<f64>) {
    values.sort_by(f64::total_cmp);
    values.dedup();
}
