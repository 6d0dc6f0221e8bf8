mod commands;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{report, rules, scan, ReportArgs, RulesArgs, ScanArgs};

/// Speclens CLI - design rule checks for captured pages
#[derive(Parser, Debug)]
#[command(name = "speclens")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan captured page snapshots against the stored rules
    Scan(ScanArgs),

    /// Render the last scan as an HTML report
    Report(ReportArgs),

    /// Show, export, import or reset the design rules
    Rules(RulesArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Scan(args) => scan(args),
        Command::Report(args) => report(args),
        Command::Rules(args) => rules(args),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
