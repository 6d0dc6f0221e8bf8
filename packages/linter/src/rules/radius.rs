use crate::rules::StyleRule;
use crate::violation::{format_allowed, Violation, ViolationKind};
use speclens_rules::RuleSet;
use speclens_style::ElementStyle;

/// Checks the corner radius against the allowed set. Extraction already
/// reduced multi-corner values to their maximum, so one non-conforming
/// corner is enough to flag the element.
pub struct RadiusRule;

impl StyleRule for RadiusRule {
    fn name(&self) -> &'static str {
        "border-radius"
    }

    fn description(&self) -> &'static str {
        "Corner radii must come from the allowed set"
    }

    fn check(&self, style: &ElementStyle, rules: &RuleSet) -> Vec<Violation> {
        let Some(allowed) = &rules.border_radius else {
            return Vec::new();
        };

        let radius = style.border_radius;
        if radius > 0.0 && !allowed.contains(&radius) {
            return vec![Violation::new(
                ViolationKind::BorderRadiusNotAllowed,
                format!(
                    "border radius {}px is not in the allowed list {}",
                    radius,
                    format_allowed(allowed)
                ),
            )];
        }

        Vec::new()
    }
}
