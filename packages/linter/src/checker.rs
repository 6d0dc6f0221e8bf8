use crate::rules::{ColorRule, RuleRegistry};
use crate::violation::Violation;
use speclens_rules::RuleSet;
use speclens_style::ElementStyle;

/// Options for configuring a check
#[derive(Debug)]
pub struct CheckOptions {
    /// Custom rule registry (uses the built-in rules if None)
    pub registry: Option<RuleRegistry>,

    /// Skip literal `#000000` borders in the palette check. Hosts report an
    /// unset border as black. Ignored when a custom registry is set.
    pub exempt_black_border: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            registry: None,
            exempt_black_border: true,
        }
    }
}

/// Check one element's resolved style against a rule set.
///
/// Pure and deterministic: the same (style, rules) pair always produces the
/// same violation list, in the fixed registry order.
pub fn check_style(style: &ElementStyle, rules: &RuleSet) -> Vec<Violation> {
    check_style_with(style, rules, &CheckOptions::default())
}

/// Check with explicit options.
pub fn check_style_with(
    style: &ElementStyle,
    rules: &RuleSet,
    options: &CheckOptions,
) -> Vec<Violation> {
    let built;
    let registry = match &options.registry {
        Some(registry) => registry,
        None => {
            built = if options.exempt_black_border {
                RuleRegistry::new()
            } else {
                RuleRegistry::with_color_rule(ColorRule::strict())
            };
            &built
        }
    };

    let mut violations = Vec::new();
    for rule in registry.rules() {
        violations.extend(rule.check(style, rules));
    }

    violations
}
