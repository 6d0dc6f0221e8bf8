use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use speclens_rules::{parse_import, FontSizeRule, RuleSet, SettingsFile};
use speclens_session::SettingsStore;
use std::fs;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Settings store holding the rules
    #[arg(long, default_value = super::DEFAULT_STORE_FILE)]
    pub store: PathBuf,

    #[command(subcommand)]
    pub command: RulesCommand,
}

#[derive(Subcommand, Debug)]
pub enum RulesCommand {
    /// Print the active rules
    Show,

    /// Write the rules to a portable settings file
    Export {
        /// Output file
        #[arg(short, long, default_value = "speclens-settings.json")]
        output: PathBuf,
    },

    /// Replace the rules from an exported settings file
    Import {
        /// Exported settings file
        input: PathBuf,
    },

    /// Restore the built-in default rules
    Reset,
}

pub fn rules(args: RulesArgs) -> Result<()> {
    let store = SettingsStore::open(&args.store)?;

    match args.command {
        RulesCommand::Show => show(&store.rules()?),
        RulesCommand::Export { output } => {
            let file = SettingsFile::export(store.rules()?, env!("CARGO_PKG_VERSION"));
            fs::write(&output, serde_json::to_string_pretty(&file)?)
                .with_context(|| format!("cannot write {}", output.display()))?;
            println!("📦 {} Rules exported", "Done".green().bold());
            println!("   Output: {}", output.display());
        }
        RulesCommand::Import { input } => {
            let bytes = fs::read(&input)
                .with_context(|| format!("cannot read {}", input.display()))?;
            let outcome = parse_import(&bytes)?;

            let normalized = outcome.settings.normalized()?;
            store.set_rules(&normalized)?;

            println!("📦 {} Rules imported", "Done".green().bold());
            if let Some(version) = outcome.version {
                println!("   Exported by version: {}", version);
            }
            show(&normalized);
        }
        RulesCommand::Reset => {
            store.set_rules(&RuleSet::default_rules())?;
            println!("♻️  {} Default rules restored", "Done".green().bold());
        }
    }

    Ok(())
}

fn show(rules: &RuleSet) {
    println!("{}", "Font sizes".bold());
    match &rules.font_size {
        Some(FontSizeRule::Pairs(pairs)) => {
            for pair in pairs {
                println!("  {}px / line height {}px", pair.size, pair.line_height);
            }
        }
        Some(FontSizeRule::Sizes(sizes)) => println!("  {}", join(sizes)),
        Some(FontSizeRule::Range(range)) => {
            println!("  {}px to {}px", range.min, range.max)
        }
        None => println!("  {}", "(not checked)".dimmed()),
    }

    println!("{}", "Spacing".bold());
    match &rules.spacing {
        Some(values) => println!("  {}", join(values)),
        None => println!("  {}", "(not checked)".dimmed()),
    }

    println!("{}", "Border radius".bold());
    match &rules.border_radius {
        Some(values) => println!("  {}", join(values)),
        None => println!("  {}", "(not checked)".dimmed()),
    }

    println!("{}", "Colors".bold());
    if rules.colors.is_empty() {
        println!("  {}", "(not checked)".dimmed());
    } else {
        println!("  {}", rules.colors.join(" "));
    }
}

fn join(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{}px", v))
        .collect::<Vec<_>>()
        .join(", ")
}
