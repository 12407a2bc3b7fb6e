use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;
use crate::commands::CommandReport;
use crate::commands::sync::SyncOptions;
use crate::config;

#[derive(Debug, Parser)]
#[command(
    name = "chatsync",
    version,
    about = "Sync Spotify links shared in an iMessage conversation into a playlist"
)]
struct Cli {
    /// Path to the config file (defaults to ~/.config/chatsync/chatsync.toml)
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run a full reconciliation: extract, normalize, resolve, diff, add
    Sync {
        /// Compute and report the delta without writing anything
        #[arg(long)]
        dry_run: bool,
    },
    /// Extract the filtered links from the chat db and show how each normalizes
    Links,
    /// Resolve a playlist name to its ID
    Resolve {
        /// Name to resolve instead of the configured playlist name
        name: Option<String>,
    },
    /// Show the effective configuration and flag anything a sync would trip over
    Status,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config(cli.config.as_deref())?;

    let report = match &cli.command {
        Command::Sync { dry_run } => {
            commands::sync::run(&cfg, &SyncOptions { dry_run: *dry_run })?
        }
        Command::Links => commands::links::run(&cfg)?,
        Command::Resolve { name } => commands::resolve::run(&cfg, name.as_deref())?,
        Command::Status => commands::status::run(&cfg)?,
    };

    print_report(&report)
}

fn print_report(report: &CommandReport) -> Result<()> {
    for detail in &report.details {
        println!("{detail}");
    }
    for issue in &report.issues {
        eprintln!("issue: {issue}");
    }
    if !report.ok {
        anyhow::bail!("{} reported issues", report.command);
    }
    Ok(())
}
