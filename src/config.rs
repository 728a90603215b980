use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Archive endpoint for synchronous table-access queries.
pub const ARCHIVE_ENDPOINT: &str = "https://exoplanetarchive.ipac.caltech.edu/TAP/sync";

/// Planetary systems composite parameters: one row per confirmed planet.
pub const CATALOG_QUERY: &str = "select * from pscomppars";

pub const RAW_FILE_NAME: &str = "exoplanets_raw.csv";
pub const OUTPUT_FILE_NAME: &str = "exoplanets.csv";

/// Optional overrides file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "exocatalog.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct PipelineConfig {
    pub endpoint: String,
    pub query: String,
    /// Directory holding the cached raw download
    pub raw_dir: PathBuf,
    /// Directory the enriched table is written to
    pub out_dir: PathBuf,
    pub request_timeout_secs: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            endpoint: ARCHIVE_ENDPOINT.to_owned(),
            query: CATALOG_QUERY.to_owned(),
            raw_dir: PathBuf::from("data").join("raw"),
            out_dir: PathBuf::from("data").join("out"),
            request_timeout_secs: 120,
        }
    }
}

impl PipelineConfig {
    /// Builds a config rooted at `base`, keeping the default endpoint and query.
    pub fn rooted_at(base: &Path) -> Self {
        Self {
            raw_dir: base.join("raw"),
            out_dir: base.join("out"),
            ..Self::default()
        }
    }

    pub fn raw_file(&self) -> PathBuf {
        self.raw_dir.join(RAW_FILE_NAME)
    }

    pub fn output_file(&self) -> PathBuf {
        self.out_dir.join(OUTPUT_FILE_NAME)
    }
}

/// Loads `exocatalog.json` from the working directory, falling back to defaults.
///
/// A missing file is the normal case. An unreadable or malformed file is
/// logged and ignored so a stray edit never blocks a run.
pub fn load_config() -> PipelineConfig {
    let path = PathBuf::from(CONFIG_FILE_NAME);
    if !path.exists() {
        return PipelineConfig::default();
    }

    match load_config_from(&path) {
        Ok(config) => {
            tracing::debug!("Loaded configuration from {}", path.display());
            config
        }
        Err(e) => {
            tracing::warn!("Ignoring {}: {e}", path.display());
            PipelineConfig::default()
        }
    }
}

/// Strict variant of [`load_config`] for an explicit path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn load_config_from(path: &Path) -> Result<PipelineConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: PipelineConfig = serde_json::from_str(&content)?;
    if config.request_timeout_secs == 0 {
        return Err(CatalogError::Config(
            "request_timeout_secs must be greater than zero".to_owned(),
        ));
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = PipelineConfig::default();
        assert_eq!(config.raw_file(), Path::new("data/raw/exoplanets_raw.csv"));
        assert_eq!(config.output_file(), Path::new("data/out/exoplanets.csv"));
        assert_eq!(config.query, "select * from pscomppars");
    }

    #[test]
    fn test_partial_overrides_keep_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{ "out_dir": "public/data" }"#)?;

        let config = load_config_from(&path)?;
        assert_eq!(config.out_dir, PathBuf::from("public/data"));
        assert_eq!(config.endpoint, ARCHIVE_ENDPOINT);
        assert_eq!(config.request_timeout_secs, 120);
        Ok(())
    }

    #[test]
    fn test_zero_timeout_rejected() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{ "request_timeout_secs": 0 }"#)?;

        let result = load_config_from(&path);
        assert!(matches!(result, Err(CatalogError::Config(_))));
        Ok(())
    }

    #[test]
    fn test_malformed_json_is_config_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{ not json")?;

        assert!(matches!(load_config_from(&path), Err(CatalogError::Config(_))));
        Ok(())
    }
}
