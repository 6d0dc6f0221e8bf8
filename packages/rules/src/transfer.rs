//! Settings import/export: the exchange file format and its strict
//! validation. Imports are atomic: any invalid field rejects the whole file
//! and nothing is applied.

use crate::ruleset::{FontSizeRule, RuleSet};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hard cap on accepted import files.
pub const MAX_IMPORT_BYTES: usize = 1024 * 1024;

/// How much of an import file's version string is kept.
const MAX_VERSION_CHARS: usize = 20;

/// The exchange envelope written by `export` and accepted by `parse_import`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsFile {
    pub version: String,
    pub export_date: String,
    pub settings: RuleSet,
}

impl SettingsFile {
    /// Wrap a rule set for export, stamping the current time.
    pub fn export(settings: RuleSet, version: &str) -> Self {
        Self {
            version: version.to_string(),
            export_date: chrono::Utc::now().to_rfc3339(),
            settings,
        }
    }
}

/// A validated import: the settings to apply plus the (truncated) version
/// the file was exported by, for the confirmation message.
#[derive(Debug, Clone)]
pub struct ImportOutcome {
    pub settings: RuleSet,
    pub version: Option<String>,
}

/// Why an import file was rejected. Entry indexes are 1-based, matching
/// what the user sees in their file.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("file exceeds the 1MB size limit")]
    TooLarge,

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("fontSize must be a list of size/lineHeight pairs")]
    FontSizeShape,

    #[error("fontSize must have between 1 and 50 entries")]
    FontSizeCount,

    #[error("fontSize entry {index}: size must be a number between 1 and 200")]
    FontSizeValue { index: usize },

    #[error("fontSize entry {index}: lineHeight must be a number between 1 and 500")]
    LineHeightValue { index: usize },

    #[error("spacing must have between 1 and 100 entries")]
    SpacingCount,

    #[error("spacing entry {index}: {value} is not between 0 and 1000")]
    SpacingValue { index: usize, value: f64 },

    #[error("borderRadius must have between 1 and 50 entries")]
    BorderRadiusCount,

    #[error("borderRadius entry {index}: {value} is not between 0 and 200")]
    BorderRadiusValue { index: usize, value: f64 },

    #[error("colors must have between 1 and 100 entries")]
    ColorCount,

    #[error("color entry {index}: \"{value}\" is not in #RRGGBB format")]
    ColorFormat { index: usize, value: String },
}

/// Parse and validate an import file. Nothing is applied on error.
pub fn parse_import(bytes: &[u8]) -> Result<ImportOutcome, ImportError> {
    if bytes.len() > MAX_IMPORT_BYTES {
        return Err(ImportError::TooLarge);
    }

    let file: SettingsFile = serde_json::from_slice(bytes)?;
    validate_settings(&file.settings)?;

    let version = if file.version.is_empty() {
        None
    } else {
        Some(file.version.chars().take(MAX_VERSION_CHARS).collect())
    };

    Ok(ImportOutcome {
        settings: file.settings,
        version,
    })
}

/// Validate an externally supplied rule set against the import constraints.
/// Only the canonical pairs shape is accepted over the wire; the legacy
/// shapes exist for stored rule sets, not for exchange files.
pub fn validate_settings(settings: &RuleSet) -> Result<(), ImportError> {
    let pairs = match &settings.font_size {
        Some(FontSizeRule::Pairs(pairs)) => pairs,
        _ => return Err(ImportError::FontSizeShape),
    };

    if pairs.is_empty() || pairs.len() > 50 {
        return Err(ImportError::FontSizeCount);
    }

    for (i, pair) in pairs.iter().enumerate() {
        if !(1.0..=200.0).contains(&pair.size) {
            return Err(ImportError::FontSizeValue { index: i + 1 });
        }
        if !(1.0..=500.0).contains(&pair.line_height) {
            return Err(ImportError::LineHeightValue { index: i + 1 });
        }
    }

    let spacing = settings.spacing.as_deref().unwrap_or(&[]);
    if spacing.is_empty() || spacing.len() > 100 {
        return Err(ImportError::SpacingCount);
    }
    for (i, &value) in spacing.iter().enumerate() {
        if !(0.0..=1000.0).contains(&value) {
            return Err(ImportError::SpacingValue { index: i + 1, value });
        }
    }

    let radius = settings.border_radius.as_deref().unwrap_or(&[]);
    if radius.is_empty() || radius.len() > 50 {
        return Err(ImportError::BorderRadiusCount);
    }
    for (i, &value) in radius.iter().enumerate() {
        if !(0.0..=200.0).contains(&value) {
            return Err(ImportError::BorderRadiusValue { index: i + 1, value });
        }
    }

    if settings.colors.is_empty() || settings.colors.len() > 100 {
        return Err(ImportError::ColorCount);
    }

    let hex = Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap();
    for (i, color) in settings.colors.iter().enumerate() {
        if !hex.is_match(color) {
            return Err(ImportError::ColorFormat {
                index: i + 1,
                value: color.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn export_bytes(settings: RuleSet) -> Vec<u8> {
        serde_json::to_vec(&SettingsFile::export(settings, "0.1.0")).unwrap()
    }

    #[test]
    fn test_export_import_roundtrip() {
        let rules = RuleSet::default_rules();
        let outcome = parse_import(&export_bytes(rules.clone())).unwrap();

        assert_eq!(outcome.settings, rules);
        assert_eq!(outcome.version.as_deref(), Some("0.1.0"));
    }

    #[test]
    fn test_rejects_oversized_file() {
        let mut bytes = export_bytes(RuleSet::default_rules());
        bytes.resize(MAX_IMPORT_BYTES + 1, b' ');
        assert!(matches!(
            parse_import(&bytes),
            Err(ImportError::TooLarge)
        ));
    }

    #[test]
    fn test_rejects_negative_spacing_with_item_index() {
        let mut rules = RuleSet::default_rules();
        rules.spacing = Some(vec![-1.0, 2.0]);

        match parse_import(&export_bytes(rules)) {
            Err(ImportError::SpacingValue { index, value }) => {
                assert_eq!(index, 1);
                assert_eq!(value, -1.0);
            }
            other => panic!("expected per-item spacing error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_legacy_font_shape() {
        let mut rules = RuleSet::default_rules();
        rules.font_size = Some(FontSizeRule::Sizes(vec![12.0, 16.0]));
        assert!(matches!(
            parse_import(&export_bytes(rules)),
            Err(ImportError::FontSizeShape)
        ));
    }

    #[test]
    fn test_rejects_bad_color_format() {
        let mut rules = RuleSet::default_rules();
        rules.colors = vec!["#fff".to_string()];

        match parse_import(&export_bytes(rules)) {
            Err(ImportError::ColorFormat { index, value }) => {
                assert_eq!(index, 1);
                assert_eq!(value, "#fff");
            }
            other => panic!("expected color format error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_out_of_range_font_size() {
        let mut rules = RuleSet::default_rules();
        if let Some(FontSizeRule::Pairs(pairs)) = &mut rules.font_size {
            pairs[0].size = 500.0;
        }
        assert!(matches!(
            parse_import(&export_bytes(rules)),
            Err(ImportError::FontSizeValue { index: 1 })
        ));
    }

    #[test]
    fn test_version_is_truncated() {
        let file = SettingsFile {
            version: "x".repeat(64),
            export_date: "2024-01-01T00:00:00Z".to_string(),
            settings: RuleSet::default_rules(),
        };
        let outcome = parse_import(&serde_json::to_vec(&file).unwrap()).unwrap();
        assert_eq!(outcome.version.map(|v| v.len()), Some(20));
    }
}
