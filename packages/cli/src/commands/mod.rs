pub mod report;
pub mod rules;
pub mod scan;

pub use report::{report, ReportArgs};
pub use rules::{rules, RulesArgs};
pub use scan::{scan, ScanArgs};

/// Default settings store file, created on first use.
pub const DEFAULT_STORE_FILE: &str = "speclens.json";
