//! CLI definition and handler

use anyhow::{Context, Result};
use audit_report::config::{find_report_config, load_audit_results, load_report_config};
use audit_report::reporters;
use audit_report::scoring::ReportBuilder;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Score audit results into a category report
#[derive(Parser, Debug)]
#[command(name = "audit-report")]
#[command(
    version,
    about = "Score raw audit results into a weighted, per-category JSON report",
    after_help = "\
Examples:
  audit-report --results results.json                       Use ./audit-report.toml
  audit-report --config categories.json --results lhr.json  Explicit category config
  audit-report --results results.json --compact -o out.json Single-line JSON to a file"
)]
pub struct Cli {
    /// Category configuration (.toml or .json). Searched in the current
    /// directory when omitted.
    #[arg(long, short = 'c', env = "AUDIT_REPORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Audit results JSON (id -> result, optionally wrapped in "audits")
    #[arg(long, short = 'r')]
    pub results: PathBuf,

    /// Output file path (default: stdout)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

pub fn run(cli: Cli) -> Result<()> {
    let config_path = match cli.config {
        Some(path) => path,
        None => {
            let cwd = std::env::current_dir().context("Failed to read current directory")?;
            find_report_config(&cwd)?
        }
    };

    let spec = load_report_config(&config_path)
        .with_context(|| format!("Failed to load category config {}", config_path.display()))?;
    let results = load_audit_results(&cli.results)
        .with_context(|| format!("Failed to load audit results {}", cli.results.display()))?;

    let report = ReportBuilder::new(&spec).generate_report_json(&results);
    let rendered = reporters::report(&report, cli.compact)?;

    match cli.output {
        Some(path) => {
            std::fs::write(&path, format!("{rendered}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}
