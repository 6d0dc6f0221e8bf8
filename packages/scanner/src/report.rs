//! Standalone HTML rendering of a scan report.

use crate::scan::ScanReport;

/// Escape text for interpolation into HTML body content.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render a scan report as a self-contained HTML document. All dynamic
/// content is escaped.
pub fn render_report_html(report: &ScanReport) -> String {
    let scanned_at = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    render_at(report, &scanned_at)
}

fn render_at(report: &ScanReport, scanned_at: &str) -> String {
    let issues_html: String = report
        .issues
        .iter()
        .map(|issue| {
            let violations_html: String = issue
                .violations
                .iter()
                .map(|v| {
                    format!(
                        "<div class=\"violation\">\u{2022} {}</div>",
                        escape_html(&v.message)
                    )
                })
                .collect();
            format!(
                "<div class=\"issue\">\n  <div class=\"issue-header\">{}</div>\n  {}\n</div>\n",
                escape_html(&issue.element),
                violations_html
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>Speclens Scan Report</title>
  <meta charset="utf-8">
  <style>
    body {{ font-family: -apple-system, BlinkMacSystemFont, sans-serif; margin: 20px; }}
    .header {{ border-bottom: 2px solid #e5e7eb; padding-bottom: 16px; margin-bottom: 24px; }}
    .summary {{ background: #f3f4f6; padding: 16px; border-radius: 8px; margin-bottom: 24px; }}
    .issue {{ border: 1px solid #d1d5db; border-radius: 8px; padding: 16px; margin-bottom: 16px; }}
    .issue-header {{ font-weight: 600; color: #dc2626; margin-bottom: 8px; }}
    .violation {{ color: #7c2d12; margin: 4px 0; }}
  </style>
</head>
<body>
  <div class="header">
    <h1>Speclens Scan Report</h1>
    <p>Scanned at: {scanned_at}</p>
  </div>

  <div class="summary">
    <h2>Summary</h2>
    <p>Elements checked: {checked}</p>
    <p>Issues found: {issues}</p>
  </div>

  <div class="issues">
    <h2>Details</h2>
    {issues_html}
  </div>
</body>
</html>
"#,
        scanned_at = escape_html(scanned_at),
        checked = report.checked_elements,
        issues = report.issue_count(),
        issues_html = issues_html,
    )
}
