use crate::rules::StyleRule;
use crate::violation::{format_allowed, BoxKind, SpacingTarget, Violation, ViolationKind};
use speclens_rules::{MinMax, RuleSet};
use speclens_style::{Edges, ElementStyle};

/// Checks padding, margin and gap values against the allowed spacing set.
///
/// Sides are checked in the fixed order top/right/bottom/left, padding
/// before margin, then the gap channels. Zero values are implicitly always
/// allowed. When no discrete set is configured, the legacy per-box min/max
/// ranges apply instead; those flag at most one value per box (the worst
/// side), which preserves the coarser legacy behavior.
pub struct SpacingRule;

impl StyleRule for SpacingRule {
    fn name(&self) -> &'static str {
        "spacing"
    }

    fn description(&self) -> &'static str {
        "Padding, margin and gap values must come from the allowed spacing set"
    }

    fn check(&self, style: &ElementStyle, rules: &RuleSet) -> Vec<Violation> {
        if let Some(allowed) = &rules.spacing {
            return check_discrete(style, allowed);
        }

        let mut violations = Vec::new();
        if let Some(range) = &rules.padding {
            violations.extend(check_legacy_range(&style.padding, BoxKind::Padding, range));
        }
        if let Some(range) = &rules.margin {
            violations.extend(check_legacy_range(&style.margin, BoxKind::Margin, range));
        }
        violations
    }
}

fn check_discrete(style: &ElementStyle, allowed: &[f64]) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (side, value) in style.padding.sides() {
        if value > 0.0 && !allowed.contains(&value) {
            violations.push(Violation::new(
                ViolationKind::SpacingNotAllowed {
                    target: SpacingTarget::Padding { side },
                },
                format!(
                    "padding {} {}px is not in the allowed list {}",
                    side.name(),
                    value,
                    format_allowed(allowed)
                ),
            ));
        }
    }

    for (side, value) in style.margin.sides() {
        if value > 0.0 && !allowed.contains(&value) {
            violations.push(Violation::new(
                ViolationKind::SpacingNotAllowed {
                    target: SpacingTarget::Margin { side },
                },
                format!(
                    "margin {} {}px is not in the allowed list {}",
                    side.name(),
                    value,
                    format_allowed(allowed)
                ),
            ));
        }
    }

    for (channel, value) in style.gap.channels() {
        if value > 0.0 && !allowed.contains(&value) {
            violations.push(Violation::new(
                ViolationKind::SpacingNotAllowed {
                    target: SpacingTarget::Gap { channel },
                },
                format!(
                    "{} {}px is not in the allowed list {}",
                    channel.name(),
                    value,
                    format_allowed(allowed)
                ),
            ));
        }
    }

    violations
}

/// Legacy min/max check: one violation per box at most, for the worst-case
/// maximum above the range or the smallest non-zero value below it.
fn check_legacy_range(edges: &Edges, box_kind: BoxKind, range: &MinMax) -> Vec<Violation> {
    let values: Vec<f64> = edges
        .sides()
        .iter()
        .map(|(_, v)| *v)
        .filter(|v| v.is_finite())
        .collect();

    let Some(max) = values.iter().copied().reduce(f64::max) else {
        return Vec::new();
    };
    let min = values.iter().copied().reduce(f64::min).unwrap_or(0.0);

    let mut violations = Vec::new();

    if max > range.max {
        violations.push(Violation::new(
            ViolationKind::SpacingOutOfRange { box_kind },
            format!(
                "{} {}px exceeds the maximum {}px",
                box_kind.name(),
                max,
                range.max
            ),
        ));
    }

    if min > 0.0 && min < range.min {
        violations.push(Violation::new(
            ViolationKind::SpacingOutOfRange { box_kind },
            format!(
                "{} {}px is below the minimum {}px",
                box_kind.name(),
                min,
                range.min
            ),
        ));
    }

    violations
}
