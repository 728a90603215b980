//! Console and file logging.
//!
//! Besides the console, every run appends to `exocatalog.<date>.log` in the
//! platform data directory. Warnings also land in `error.<date>.log`, which
//! is the quickest place to spot archive schema drift such as columns that
//! stopped being published.
//!
//! ```no_run
//! exocatalog::logging::init().expect("logging");
//! tracing::info!("Pipeline started");
//! ```

use anyhow::{Context as _, Result};
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer as _, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
};

const APP_DIR: &str = "exocatalog";
const MAIN_LOG_PREFIX: &str = "exocatalog";
const WARNING_LOG_PREFIX: &str = "error";
/// Days of history kept per log file family.
const RETAINED_FILES: usize = 10;
/// Used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "info";

/// `<data_dir>/exocatalog/logs`, created on first use.
pub fn get_log_dir() -> Result<PathBuf> {
    let log_dir = dirs::data_dir()
        .context("No platform data directory")?
        .join(APP_DIR)
        .join("logs");
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Cannot create log directory {}", log_dir.display()))?;
    Ok(log_dir)
}

fn daily_file(log_dir: &Path, prefix: &str) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .max_log_files(RETAINED_FILES)
        .filename_prefix(prefix)
        .filename_suffix("log")
        .build(log_dir)
        .with_context(|| format!("Cannot open {prefix} log in {}", log_dir.display()))
}

fn dated_file_name(prefix: &str) -> String {
    format!("{prefix}.{}.log", chrono::Local::now().format("%Y-%m-%d"))
}

/// Installs the global subscriber. Call once, before anything logs.
///
/// # Errors
///
/// Fails if the log directory or either log file cannot be opened.
pub fn init() -> Result<()> {
    let log_dir = get_log_dir()?;
    let main_file = daily_file(&log_dir, MAIN_LOG_PREFIX)?;
    let warning_file = daily_file(&log_dir, WARNING_LOG_PREFIX)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))
        .context("Invalid log filter")?;

    // Console stays terse; files carry source locations for bug reports
    let console = fmt::layer().with_target(false).compact();
    let main_log = fmt::layer()
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_writer(main_file);
    let warning_log = fmt::layer()
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_writer(warning_file)
        .with_filter(EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(main_log)
        .with(warning_log)
        .init();

    tracing::debug!("Writing logs to {}", log_dir.display());
    Ok(())
}

/// Today's main log file, for pointing users at details after a failure.
pub fn get_current_log_path() -> Result<PathBuf> {
    Ok(get_log_dir()?.join(dated_file_name(MAIN_LOG_PREFIX)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dated_file_name_matches_appender_pattern() {
        let name = dated_file_name(MAIN_LOG_PREFIX);
        let date = name
            .strip_prefix("exocatalog.")
            .and_then(|rest| rest.strip_suffix(".log"))
            .unwrap_or_default();
        assert_eq!(date.len(), "2024-01-31".len());
        assert!(chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok());
    }

    #[test]
    fn test_current_log_path_lives_in_log_dir() {
        let (Ok(dir), Ok(path)) = (get_log_dir(), get_current_log_path()) else {
            // No data directory in this environment
            return;
        };
        assert_eq!(path.parent(), Some(dir.as_path()));
        assert!(dir.ends_with("exocatalog/logs"));
    }
}
