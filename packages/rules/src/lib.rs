//! The versioned design specification: allowed font-size/line-height pairs,
//! spacing values, corner radii and color palette, plus the legacy shapes
//! older installs may still hold. Rule sets are immutable snapshots while a
//! scan runs; the settings surface replaces them wholesale.

mod ruleset;
mod transfer;

pub use ruleset::{FontPair, FontSizeRule, MinMax, RuleError, RuleSet};
pub use transfer::{parse_import, ImportError, ImportOutcome, SettingsFile, MAX_IMPORT_BYTES};
