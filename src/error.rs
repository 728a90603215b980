//! Centralized error handling for exocatalog.
//!
//! The derivation engine itself never fails: every rule is total over
//! present/absent inputs. Errors only come from the edges of a run,
//! fetching the catalog, reading and writing files, and configuration.
//!
//! ```
//! use exocatalog::error::CatalogError;
//! use std::path::PathBuf;
//!
//! fn describe(err: &CatalogError) -> &'static str {
//!     match err {
//!         CatalogError::MissingRawData(_) => "fetch first",
//!         CatalogError::Network(_) | CatalogError::MalformedSource(_) => "retry later",
//!         _ => "see log",
//!     }
//! }
//!
//! let err = CatalogError::MissingRawData(PathBuf::from("data/raw/exoplanets_raw.csv"));
//! assert_eq!(describe(&err), "fetch first");
//! ```
//!
//! The `ResultExt` trait adds `.context()` to any `Result` whose error
//! converts into [`CatalogError`].

use std::fmt;
use std::path::PathBuf;

/// Main error type for exocatalog operations.
#[derive(Debug)]
pub enum CatalogError {
    /// I/O errors (cache file, output file, directories)
    Io(std::io::Error),

    /// Polars failures while loading, reshaping, or writing tables
    DataProcessing(String),

    /// HTTP failures talking to the archive
    Network(String),

    /// Configuration errors
    Config(String),

    /// Processing was requested before the raw catalog was fetched
    MissingRawData(PathBuf),

    /// The archive answered, but not with a usable table
    MalformedSource(String),

    /// Generic error with context
    Other(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::DataProcessing(msg) => write!(f, "Data processing error: {msg}"),
            Self::Network(msg) => write!(f, "Network error: {msg}"),
            Self::Config(msg) => write!(f, "Configuration error: {msg}"),
            Self::MissingRawData(path) => write!(
                f,
                "Raw data not found at {}. Run `exocatalog fetch` first.",
                path.display()
            ),
            Self::MalformedSource(msg) => write!(f, "Malformed catalog data: {msg}"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<anyhow::Error> for CatalogError {
    fn from(err: anyhow::Error) -> Self {
        // `{:#}` keeps the whole context chain on one line
        Self::Other(format!("{err:#}"))
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(format!("JSON error: {err}"))
    }
}

impl From<polars::error::PolarsError> for CatalogError {
    fn from(err: polars::error::PolarsError) -> Self {
        Self::DataProcessing(err.to_string())
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

/// Result type alias for exocatalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Extension trait to add context to results.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, msg: impl Into<String>) -> Result<T>;

    /// Add context using a closure (lazy evaluation).
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<CatalogError>,
{
    fn context(self, msg: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err: CatalogError = e.into();
            CatalogError::Other(format!("{}: {}", msg.into(), err))
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err: CatalogError = e.into();
            CatalogError::Other(format!("{}: {}", f(), err))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_raw_data_tells_caller_to_fetch() {
        let err = CatalogError::MissingRawData(PathBuf::from("raw/exoplanets_raw.csv"));
        let msg = err.to_string();
        assert!(msg.contains("raw/exoplanets_raw.csv"));
        assert!(msg.contains("exocatalog fetch"));
    }

    #[test]
    fn test_error_display() {
        let err = CatalogError::MalformedSource("empty response".to_owned());
        assert_eq!(err.to_string(), "Malformed catalog data: empty response");
    }

    #[test]
    fn test_result_context() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "exoplanets.csv",
        ));

        let result: Result<()> = result.context("Failed to write output");
        let err = result.expect_err("context keeps the error");
        assert!(err.to_string().contains("Failed to write output"));
        assert!(err.to_string().contains("exoplanets.csv"));
    }
}
