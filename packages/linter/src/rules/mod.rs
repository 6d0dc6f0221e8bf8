mod color;
mod font;
mod radius;
mod spacing;

pub use color::ColorRule;
pub use font::FontRule;
pub use radius::RadiusRule;
pub use spacing::SpacingRule;

use crate::violation::Violation;
use speclens_rules::RuleSet;
use speclens_style::ElementStyle;

/// Trait for implementing style checks
pub trait StyleRule {
    /// Unique identifier for this rule
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Check one element's resolved style against the rule set
    fn check(&self, style: &ElementStyle, rules: &RuleSet) -> Vec<Violation>;
}

/// Registry of all checks, run in a fixed order: font, spacing, radius,
/// color. The order is part of the output contract.
pub struct RuleRegistry {
    rules: Vec<Box<dyn StyleRule>>,
}

impl RuleRegistry {
    /// Create a new registry with all built-in rules
    pub fn new() -> Self {
        Self::with_color_rule(ColorRule::default())
    }

    /// The built-in rules with a specific color-check configuration.
    pub fn with_color_rule(color: ColorRule) -> Self {
        Self {
            rules: vec![
                Box::new(FontRule),
                Box::new(SpacingRule),
                Box::new(RadiusRule),
                Box::new(color),
            ],
        }
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn StyleRule>] {
        &self.rules
    }

    /// Create an empty registry
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a custom rule to the registry
    pub fn add_rule(&mut self, rule: Box<dyn StyleRule>) {
        self.rules.push(rule);
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &format!("{} rules", self.rules.len()))
            .finish()
    }
}
