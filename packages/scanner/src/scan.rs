//! Full-page scan: check every visible element and collect the issues.

use serde::{Deserialize, Serialize};
use speclens_linter::{check_style_with, CheckOptions, Violation};
use speclens_rules::RuleSet;
use speclens_style::{extract, DocumentSnapshot, ElementSnapshot, ElementStyle};

/// Elements injected by the inspection engine itself carry ids with this
/// prefix and are never scanned.
pub const OVERLAY_ID_PREFIX: &str = "speclens-";

/// Tags with no visual rendering of their own.
const EXCLUDED_TAGS: [&str; 4] = ["script", "style", "meta", "link"];

/// One element with at least one violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// Short selector of the offending element (`#id`, `tag.class`, `tag`)
    pub element: String,

    pub violations: Vec<Violation>,

    /// The extracted style the violations were raised against
    pub style: ElementStyle,
}

/// Result of one full-page scan. Each scan fully replaces the previous one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    /// Number of elements that were actually checked
    pub checked_elements: usize,

    pub issues: Vec<Issue>,
}

impl ScanReport {
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }
}

fn skip_element(element: &ElementSnapshot) -> bool {
    if EXCLUDED_TAGS.contains(&element.tag.as_str()) {
        return true;
    }
    if let Some(id) = &element.id {
        if id.starts_with(OVERLAY_ID_PREFIX) {
            return true;
        }
    }
    !element.rendered
}

/// Scan a captured document with the default check options.
pub fn scan(snapshot: &DocumentSnapshot, rules: &RuleSet) -> ScanReport {
    scan_with(snapshot, rules, &CheckOptions::default())
}

/// Scan a captured document. Elements without a visible rendering box,
/// excluded tags and the engine's own overlay elements are skipped. A
/// malformed element degrades to unparsable fields and never aborts the
/// rest of the scan.
pub fn scan_with(
    snapshot: &DocumentSnapshot,
    rules: &RuleSet,
    options: &CheckOptions,
) -> ScanReport {
    let mut report = ScanReport::default();

    for element in &snapshot.elements {
        if skip_element(element) {
            continue;
        }

        report.checked_elements += 1;

        let style = extract(&element.computed);
        let violations = check_style_with(&style, rules, options);

        if !violations.is_empty() {
            report.issues.push(Issue {
                element: element.selector(),
                violations,
                style,
            });
        }
    }

    tracing::debug!(
        checked = report.checked_elements,
        issues = report.issues.len(),
        source = snapshot.source.as_deref().unwrap_or(""),
        "scan complete"
    );

    report
}
