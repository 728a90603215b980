use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use exocatalog::catalog::describe_missing;
use exocatalog::config::PipelineConfig;
use exocatalog::fetch::fetch_catalog;
use exocatalog::pipeline::{inspect_raw, process_catalog};

#[derive(Parser)]
#[command(
    name = "exocatalog",
    about = "Fetch the confirmed-exoplanet catalog and derive a visualization-ready dataset"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download the raw catalog from the archive (cached unless --force)
    Fetch {
        /// Download even if a cached copy exists
        #[arg(long)]
        force: bool,
    },
    /// Enrich the cached raw catalog and write the output table
    Process,
    /// Fetch (or reuse the cache), then process
    Run {
        /// Download even if a cached copy exists
        #[arg(long)]
        force: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Run { force: false }
    }
}

pub async fn run_command(command: Commands, config: &PipelineConfig) -> Result<()> {
    match command {
        Commands::Fetch { force } => handle_fetch(config, force).await,
        Commands::Process => handle_process(config),
        Commands::Run { force } => {
            handle_fetch(config, force).await?;
            handle_process(config)
        }
    }
}

async fn handle_fetch(config: &PipelineConfig, force: bool) -> Result<()> {
    let path = fetch_catalog(config, force)
        .await
        .context("Failed to fetch catalog")?;

    let (coverage, highlights) = inspect_raw(&path)?;
    println!("{coverage}");
    println!("{highlights}");
    println!("Raw data: {}", path.display());
    Ok(())
}

fn handle_process(config: &PipelineConfig) -> Result<()> {
    let outcome = process_catalog(config)?;

    if !outcome.missing.is_empty() {
        println!(
            "Note: {} columns were not in the raw data: {}",
            outcome.missing.len(),
            describe_missing(&outcome.missing)
        );
    }
    println!("{}", outcome.summary);
    println!(
        "Wrote {} rows x {} columns to {}",
        outcome.rows,
        outcome.columns,
        outcome.output.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory as _;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_to_run() {
        let cli = Cli::parse_from(["exocatalog"]);
        assert!(cli.command.is_none());
        assert!(matches!(Commands::default(), Commands::Run { force: false }));
    }

    #[test]
    fn test_force_flag() {
        let cli = Cli::parse_from(["exocatalog", "fetch", "--force"]);
        assert!(matches!(cli.command, Some(Commands::Fetch { force: true })));

        let cli = Cli::parse_from(["exocatalog", "process"]);
        assert!(matches!(cli.command, Some(Commands::Process)));
    }
}
