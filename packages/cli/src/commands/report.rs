use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use speclens_scanner::render_report_html;
use speclens_session::SettingsStore;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Output HTML file
    #[arg(short, long, default_value = "speclens-report.html")]
    pub output: PathBuf,

    /// Settings store holding the last scan
    #[arg(long, default_value = super::DEFAULT_STORE_FILE)]
    pub store: PathBuf,
}

pub fn report(args: ReportArgs) -> Result<()> {
    let store = SettingsStore::open(&args.store)?;
    let scan = store
        .scan_results()?
        .context("no scan results stored yet, run a scan first")?;

    let html = render_report_html(&scan);
    fs::write(&args.output, html)
        .with_context(|| format!("cannot write {}", args.output.display()))?;

    println!("📄 {} Report written", "Done".green().bold());
    println!("   Output: {}", args.output.display());
    println!("   Elements checked: {}", scan.checked_elements);
    println!("   Issues: {}", scan.issue_count());

    Ok(())
}
