use crate::rules::StyleRule;
use crate::violation::{ColorRole, Violation, ViolationKind};
use speclens_rules::RuleSet;
use speclens_style::ElementStyle;

/// Checks text, background and border colors against the palette.
///
/// Comparison is case-insensitive against the lowercase-normalized palette;
/// the transparent sentinel is never checked. A literal `#000000` border is
/// exempt by default: hosts report an unset border as black, so flagging it
/// would drown real findings. The exemption is configurable because it also
/// hides genuinely black borders.
pub struct ColorRule {
    pub exempt_black_border: bool,
}

impl ColorRule {
    /// A palette check without the black-border exemption.
    pub fn strict() -> Self {
        Self {
            exempt_black_border: false,
        }
    }
}

impl Default for ColorRule {
    fn default() -> Self {
        Self {
            exempt_black_border: true,
        }
    }
}

const BLACK: &str = "#000000";
const TRANSPARENT: &str = "transparent";

impl StyleRule for ColorRule {
    fn name(&self) -> &'static str {
        "color-palette"
    }

    fn description(&self) -> &'static str {
        "Text, background and border colors must come from the palette"
    }

    fn check(&self, style: &ElementStyle, rules: &RuleSet) -> Vec<Violation> {
        if rules.colors.is_empty() {
            return Vec::new();
        }

        let palette: Vec<String> = rules.colors.iter().map(|c| c.to_lowercase()).collect();
        let mut violations = Vec::new();

        let roles = [
            (ColorRole::Text, style.color.as_str()),
            (ColorRole::Background, style.background_color.as_str()),
            (ColorRole::Border, style.border_color.as_str()),
        ];

        for (role, value) in roles {
            let value = value.to_lowercase();

            if value.is_empty() || value == TRANSPARENT {
                continue;
            }
            if role == ColorRole::Border && self.exempt_black_border && value == BLACK {
                continue;
            }
            if palette.iter().any(|allowed| *allowed == value) {
                continue;
            }

            violations.push(Violation::new(
                ViolationKind::ColorNotAllowed { role },
                format!("{} {} is not in the palette", role.name(), value),
            ));
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use speclens_style::{Display, Edges, GapValues};

    fn style_with_colors(color: &str, background: &str, border: &str) -> ElementStyle {
        ElementStyle {
            font_size: 16.0,
            font_weight: "400".to_string(),
            line_height: 24.0,
            color: color.to_string(),
            background_color: background.to_string(),
            border_color: border.to_string(),
            padding: Edges::zero(),
            margin: Edges::zero(),
            gap: GapValues::default(),
            display: Display::Block,
            border_radius: 0.0,
            width: 100.0,
            height: 20.0,
        }
    }

    fn palette(colors: &[&str]) -> RuleSet {
        RuleSet {
            colors: colors.iter().map(|c| c.to_string()).collect(),
            ..RuleSet::default_rules()
        }
    }

    #[test]
    fn test_palette_colors_pass() {
        let style = style_with_colors("#0c0e1f", "transparent", "transparent");
        let violations = ColorRule::default().check(&style, &palette(&["#0c0e1f"]));
        assert!(violations.is_empty());
    }

    #[test]
    fn test_off_palette_text_color_flagged() {
        let style = style_with_colors("#123456", "transparent", "transparent");
        let violations = ColorRule::default().check(&style, &palette(&["#0c0e1f"]));
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].kind,
            ViolationKind::ColorNotAllowed {
                role: ColorRole::Text
            }
        );
    }

    #[test]
    fn test_roles_reported_in_fixed_order() {
        let style = style_with_colors("#111111", "#222222", "#333333");
        let violations = ColorRule::default().check(&style, &palette(&["#0c0e1f"]));

        let roles: Vec<ColorRole> = violations
            .iter()
            .map(|v| match v.kind {
                ViolationKind::ColorNotAllowed { role } => role,
                ref other => panic!("unexpected kind {:?}", other),
            })
            .collect();
        assert_eq!(
            roles,
            vec![ColorRole::Text, ColorRole::Background, ColorRole::Border]
        );
    }

    #[test]
    fn test_comparison_is_case_insensitive() {
        let style = style_with_colors("#0C0E1F", "transparent", "transparent");
        let violations = ColorRule::default().check(&style, &palette(&["#0c0e1f"]));
        assert!(violations.is_empty());
    }

    #[test]
    fn test_black_border_exempt_even_when_off_palette() {
        let style = style_with_colors("#0c0e1f", "transparent", "#000000");
        let violations = ColorRule::default().check(&style, &palette(&["#0c0e1f"]));
        assert!(violations.is_empty());
    }

    #[test]
    fn test_strict_mode_flags_black_border() {
        let style = style_with_colors("#0c0e1f", "transparent", "#000000");
        let violations = ColorRule::strict().check(&style, &palette(&["#0c0e1f"]));
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].kind,
            ViolationKind::ColorNotAllowed {
                role: ColorRole::Border
            }
        );
    }

    #[test]
    fn test_empty_palette_checks_nothing() {
        let style = style_with_colors("#123456", "#234567", "#345678");
        let violations = ColorRule::default().check(&style, &palette(&[]));
        assert!(violations.is_empty());
    }
}
