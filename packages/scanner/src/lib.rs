mod report;
mod scan;

pub use report::render_report_html;
pub use scan::{scan, scan_with, Issue, ScanReport, OVERLAY_ID_PREFIX};
