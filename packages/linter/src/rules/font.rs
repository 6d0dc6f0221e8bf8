use crate::rules::StyleRule;
use crate::violation::{format_allowed, Violation, ViolationKind};
use speclens_rules::{FontSizeRule, RuleSet};
use speclens_style::ElementStyle;

/// Checks font size and the line height paired with it.
///
/// Non-integer pixel sizes violate under every rule shape. The pairs shape
/// additionally requires the resolved line height to match the pair; the
/// legacy list and range shapes check the size only.
pub struct FontRule;

impl StyleRule for FontRule {
    fn name(&self) -> &'static str {
        "font-size"
    }

    fn description(&self) -> &'static str {
        "Font size must be a whole px value from the design spec, with its paired line height"
    }

    fn check(&self, style: &ElementStyle, rules: &RuleSet) -> Vec<Violation> {
        let Some(rule) = &rules.font_size else {
            return Vec::new();
        };

        let size = style.font_size;

        // unparsable size: no rule applies
        if !size.is_finite() {
            return Vec::new();
        }

        if size.fract() != 0.0 {
            return vec![Violation::new(
                ViolationKind::FontSizeNotInteger,
                format!("font size {}px is not a whole number", size),
            )];
        }

        match rule {
            FontSizeRule::Pairs(_) => {
                let Some(pair) = rule.pair_for(size) else {
                    return vec![Violation::new(
                        ViolationKind::FontSizeNotAllowed,
                        format!(
                            "font size {}px is not in the allowed list {}",
                            size,
                            format_allowed(&rule.allowed_sizes())
                        ),
                    )];
                };

                let actual = style.line_height;
                if actual.is_finite() && actual != pair.line_height {
                    return vec![Violation::new(
                        ViolationKind::LineHeightMismatch {
                            expected: pair.line_height,
                            actual,
                        },
                        format!(
                            "line height for {}px text should be {}px, found {}px",
                            size, pair.line_height, actual
                        ),
                    )];
                }

                Vec::new()
            }
            FontSizeRule::Sizes(sizes) => {
                if sizes.contains(&size) {
                    Vec::new()
                } else {
                    vec![Violation::new(
                        ViolationKind::FontSizeNotAllowed,
                        format!(
                            "font size {}px is not in the allowed list {}",
                            size,
                            format_allowed(sizes)
                        ),
                    )]
                }
            }
            FontSizeRule::Range(range) => {
                if size < range.min || size > range.max {
                    vec![Violation::new(
                        ViolationKind::FontSizeOutOfRange,
                        format!(
                            "font size {}px is outside the {}-{}px range",
                            size, range.min, range.max
                        ),
                    )]
                } else {
                    Vec::new()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use speclens_rules::{FontPair, MinMax};
    use speclens_style::{Display, Edges, GapValues};

    fn style_with_font(size: f64, line_height: f64) -> ElementStyle {
        ElementStyle {
            font_size: size,
            font_weight: "400".to_string(),
            line_height,
            color: "#000000".to_string(),
            background_color: "transparent".to_string(),
            border_color: "transparent".to_string(),
            padding: Edges::zero(),
            margin: Edges::zero(),
            gap: GapValues::default(),
            display: Display::Block,
            border_radius: 0.0,
            width: 100.0,
            height: 20.0,
        }
    }

    fn pairs_rules() -> RuleSet {
        RuleSet {
            font_size: Some(FontSizeRule::Pairs(vec![FontPair {
                size: 16.0,
                line_height: 24.0,
            }])),
            ..RuleSet::default_rules()
        }
    }

    #[test]
    fn test_conforming_pair_passes() {
        let violations = FontRule.check(&style_with_font(16.0, 24.0), &pairs_rules());
        assert!(violations.is_empty());
    }

    #[test]
    fn test_line_height_mismatch_carries_both_values() {
        let violations = FontRule.check(&style_with_font(16.0, 20.0), &pairs_rules());
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].kind,
            ViolationKind::LineHeightMismatch {
                expected: 24.0,
                actual: 20.0
            }
        );
        assert!(violations[0].message.contains("should be 24px"));
        assert!(violations[0].message.contains("found 20px"));
    }

    #[test]
    fn test_non_integer_size_stops_further_font_checks() {
        let violations = FontRule.check(&style_with_font(15.5, 20.0), &pairs_rules());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::FontSizeNotInteger);
    }

    #[test]
    fn test_non_integer_flagged_under_every_shape() {
        let style = style_with_font(15.5, 20.0);

        for font_size in [
            FontSizeRule::Pairs(vec![FontPair {
                size: 16.0,
                line_height: 24.0,
            }]),
            FontSizeRule::Sizes(vec![12.0, 16.0]),
            FontSizeRule::Range(MinMax {
                min: 12.0,
                max: 72.0,
            }),
        ] {
            let rules = RuleSet {
                font_size: Some(font_size),
                ..RuleSet::default_rules()
            };
            let violations = FontRule.check(&style, &rules);
            assert_eq!(violations.len(), 1);
            assert_eq!(violations[0].kind, ViolationKind::FontSizeNotInteger);
        }
    }

    #[test]
    fn test_size_not_listed() {
        let violations = FontRule.check(&style_with_font(15.0, 24.0), &pairs_rules());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::FontSizeNotAllowed);
        assert!(violations[0].message.contains("[16]"));
    }

    #[test]
    fn test_legacy_list_skips_line_height() {
        let rules = RuleSet {
            font_size: Some(FontSizeRule::Sizes(vec![16.0])),
            ..RuleSet::default_rules()
        };
        // line height would mismatch under the pairs shape, but the legacy
        // list does not check it
        let violations = FontRule.check(&style_with_font(16.0, 99.0), &rules);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_legacy_range_is_inclusive() {
        let rules = RuleSet {
            font_size: Some(FontSizeRule::Range(MinMax {
                min: 12.0,
                max: 72.0,
            })),
            ..RuleSet::default_rules()
        };

        assert!(FontRule.check(&style_with_font(12.0, 18.0), &rules).is_empty());
        assert!(FontRule.check(&style_with_font(72.0, 80.0), &rules).is_empty());

        let violations = FontRule.check(&style_with_font(80.0, 80.0), &rules);
        assert_eq!(violations[0].kind, ViolationKind::FontSizeOutOfRange);
    }

    #[test]
    fn test_nan_size_yields_no_violations() {
        let violations = FontRule.check(&style_with_font(f64::NAN, 24.0), &pairs_rules());
        assert!(violations.is_empty());
    }
}
