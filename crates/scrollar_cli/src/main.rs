//! Scrollar CLI
//!
//! Runs headless scrollbar scenarios and normalizes option files.

mod options;

use anyhow::Result;
use clap::{Parser, Subcommand};
use scrollar_headless::{HeadlessScenario, RunConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Custom scrollbar engine tooling
#[derive(Parser, Debug)]
#[command(name = "scrollar")]
#[command(about = "Run headless scrollbar scenarios and check option files")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a JSON scenario against the in-memory host
    Run {
        /// Scenario file
        scenario: PathBuf,

        /// Write the JSON report to this relative path instead of stdout
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Logical milliseconds per scheduler tick while waiting
        #[arg(long, default_value = "16")]
        tick_ms: u64,
    },

    /// Print an options file (JSON or TOML) in normalized TOML form
    Options {
        /// Options file
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            scenario,
            report,
            tick_ms,
        } => cmd_run(scenario, report, tick_ms),
        Commands::Options { file } => cmd_options(file),
    }
}

fn cmd_run(path: PathBuf, report_path: Option<PathBuf>, tick_ms: u64) -> Result<()> {
    let scenario = HeadlessScenario::from_path(&path)?;
    let cfg = RunConfig {
        tick_ms,
        ..RunConfig::default()
    };
    let outcome = scrollar_headless::run_loaded_scenario(&scenario, cfg)?;
    let report = outcome.report();

    match report_path {
        Some(report_path) => {
            report.write_to_path(&report_path)?;
            info!("Report written to {}", report_path.display());
        }
        None => report.write_to_writer(&mut std::io::stdout())?,
    }

    if outcome.is_failed() {
        info!(
            step = ?report.failed_step_index,
            assertion = ?report.assertion,
            "Scenario {} failed",
            path.display()
        );
        std::process::exit(1);
    }

    info!("Scenario {} passed", path.display());
    Ok(())
}

fn cmd_options(path: PathBuf) -> Result<()> {
    let options = options::load_options(&path)?;
    print!("{}", options::render_options(&options)?);
    Ok(())
}
