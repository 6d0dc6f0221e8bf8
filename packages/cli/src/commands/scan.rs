use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use speclens_scanner::ScanReport;
use speclens_session::SettingsStore;
use speclens_style::DocumentSnapshot;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Captured snapshot (.json) or a directory of snapshots
    pub input: PathBuf,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Settings store holding the rules and the last report
    #[arg(long, default_value = super::DEFAULT_STORE_FILE)]
    pub store: PathBuf,
}

pub fn scan(args: ScanArgs) -> Result<()> {
    let store = SettingsStore::open(&args.store)?;
    let rules = store.rules()?;

    let files = snapshot_files(&args.input)?;
    if files.is_empty() {
        anyhow::bail!("no snapshot files found under {}", args.input.display());
    }

    if args.format == "text" {
        println!("🔍 {} Speclens", "Scanning".green().bold());
        println!("   Input: {}", args.input.display());
        println!();
    }

    let mut combined = ScanReport::default();

    for file in &files {
        let raw = fs::read_to_string(file)
            .with_context(|| format!("cannot read {}", file.display()))?;
        let snapshot: DocumentSnapshot = serde_json::from_str(&raw)
            .with_context(|| format!("{} is not a page snapshot", file.display()))?;

        let report = speclens_scanner::scan(&snapshot, &rules);

        if args.format == "text" {
            print_report(file, &report);
        }

        combined.checked_elements += report.checked_elements;
        combined.issues.extend(report.issues);
    }

    // the last scan fully replaces the stored report
    store.set_scan_results(&combined)?;

    if args.format == "json" {
        println!("{}", serde_json::to_string_pretty(&combined)?);
    } else {
        println!();
        if combined.issues.is_empty() {
            println!("✨ {} No issues found!", "Done".green().bold());
        } else {
            println!("✨ {} Scan complete", "Done".yellow().bold());
            println!("   {} {}", "Issues:".yellow(), combined.issue_count());
        }
        println!("   Elements checked: {}", combined.checked_elements);
    }

    if !combined.issues.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}

fn print_report(file: &Path, report: &ScanReport) {
    if report.issues.is_empty() {
        println!("{} {}", "✓".green(), file.display());
        return;
    }

    println!("{}", file.display());
    for issue in &report.issues {
        println!("  {}", issue.element.red().bold());
        for violation in &issue.violations {
            println!("    {} {}", "•".dimmed(), violation.message);
        }
    }
    println!();
}

fn snapshot_files(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if !input.is_dir() {
        anyhow::bail!("input path does not exist: {}", input.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(input)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && path.extension().map(|e| e == "json").unwrap_or(false) {
            files.push(path.to_path_buf());
        }
    }
    files.sort();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_files_finds_json_recursively() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("pages")).unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        fs::write(dir.path().join("pages/b.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let files = snapshot_files(dir.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.extension().unwrap() == "json"));
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(snapshot_files(&missing).is_err());
    }
}
