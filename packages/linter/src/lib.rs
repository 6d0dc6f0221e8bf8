mod checker;
mod rules;
mod violation;

pub use checker::{check_style, check_style_with, CheckOptions};
pub use rules::{ColorRule, FontRule, RadiusRule, RuleRegistry, SpacingRule, StyleRule};
pub use violation::{BoxKind, ColorRole, SpacingTarget, Violation, ViolationKind};
