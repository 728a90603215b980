//! # exocatalog command-line entry point
//!
//! ```text
//! main()
//!   │
//!   ├─> Initialize logging (console + rolling files)
//!   ├─> Parse CLI arguments (clap)
//!   ├─> Load exocatalog.json or defaults
//!   └─> Run the subcommand on a Tokio runtime (`run` when none given)
//! ```

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout)] // Reports are printed by the CLI layer

mod cli;

use clap::Parser as _;
use exocatalog::{config, logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG overrides the default info level
    logging::init()?;

    let cli = cli::Cli::parse();
    let command = cli.command.unwrap_or_default();
    let config = config::load_config();

    let result = tokio::runtime::Runtime::new()?.block_on(cli::run_command(command, &config));

    if let Err(e) = &result {
        tracing::error!("{e:#}");
        if let Ok(path) = logging::get_current_log_path() {
            println!("Details in log file: {}", path.display());
        }
    }
    Ok(result?)
}
