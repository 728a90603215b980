//! Downloading the raw catalog from the archive, with an on-disk cache.

use crate::catalog::io::file_size_mb;
use crate::config::PipelineConfig;
use crate::error::{CatalogError, Result, ResultExt as _};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Column every archive table export starts its header with.
const REQUIRED_HEADER_COLUMN: &str = "pl_name";

/// Returns the path of the raw catalog, downloading it unless a cached copy exists.
///
/// `force` ignores the cache and always downloads.
///
/// # Errors
///
/// Returns [`CatalogError::Network`] if the request fails or the archive
/// answers with an error status, and [`CatalogError::MalformedSource`] if
/// the body is not a catalog table.
pub async fn fetch_catalog(config: &PipelineConfig, force: bool) -> Result<PathBuf> {
    let path = config.raw_file();
    if path.exists() && !force {
        tracing::info!("Using cached data from {}", path.display());
        return Ok(path);
    }

    tracing::info!("Downloading catalog from {}", config.endpoint);
    let body = download(config).await?;
    validate_payload(&body)?;

    std::fs::create_dir_all(&config.raw_dir)
        .with_context(|| format!("Failed to create {}", config.raw_dir.display()))?;
    write_cache(&path, &body)?;

    let size = file_size_mb(&path)?;
    tracing::info!("Saved {} ({size:.2} MB)", path.display());
    Ok(path)
}

async fn download(config: &PipelineConfig) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()?;

    let body = client
        .get(&config.endpoint)
        .query(&[("query", config.query.as_str()), ("format", "csv")])
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;
    Ok(body)
}

/// Writes beside the cache and renames into place, so an interrupted write
/// never leaves a truncated file that later runs would take as valid.
fn write_cache(path: &Path, body: &str) -> Result<()> {
    let partial = path.with_extension("csv.part");
    std::fs::write(&partial, body.as_bytes())
        .with_context(|| format!("Failed to write {}", partial.display()))?;

    if let Err(e) = std::fs::rename(&partial, path) {
        // Best effort; the rename error is the one worth reporting
        let _ignored: std::io::Result<()> = std::fs::remove_file(&partial);
        return Err(CatalogError::Io(e));
    }
    Ok(())
}

/// Rejects a response that is not a CSV table of planets.
///
/// The archive reports query errors with a success status and an error
/// document, so the status alone is not enough.
///
/// # Errors
///
/// Returns [`CatalogError::MalformedSource`] for an empty body or a header
/// without a `pl_name` column.
pub fn validate_payload(body: &str) -> Result<()> {
    let Some(header) = body.lines().find(|line| !line.trim().is_empty()) else {
        return Err(CatalogError::MalformedSource(
            "Archive returned an empty response".to_owned(),
        ));
    };

    let has_name = header
        .split(',')
        .any(|column| column.trim().trim_matches('"') == REQUIRED_HEADER_COLUMN);
    if !has_name {
        let preview: String = header.chars().take(80).collect();
        return Err(CatalogError::MalformedSource(format!(
            "Header has no `{REQUIRED_HEADER_COLUMN}` column: {preview}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_catalog_header() {
        assert!(validate_payload("pl_name,hostname,pl_rade\nA b,A,1.0\n").is_ok());
        assert!(validate_payload("\n\"pl_name\",\"hostname\"\n").is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_and_error_documents() {
        assert!(matches!(
            validate_payload("   \n"),
            Err(CatalogError::MalformedSource(_))
        ));
        assert!(matches!(
            validate_payload("<?xml version=\"1.0\"?><VOTABLE>ERROR</VOTABLE>"),
            Err(CatalogError::MalformedSource(_))
        ));
        assert!(matches!(
            validate_payload("pl_namex,hostname\n"),
            Err(CatalogError::MalformedSource(_))
        ));
    }

    #[test]
    fn test_write_cache_replaces_without_leftovers() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("exoplanets_raw.csv");
        std::fs::write(&path, "pl_name\nOld b\n")?;

        write_cache(&path, "pl_name\nNew b\n")?;
        assert_eq!(std::fs::read_to_string(&path)?, "pl_name\nNew b\n");
        assert!(!dir.path().join("exoplanets_raw.csv.part").exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_partial_download_is_not_a_cache_hit() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let config = PipelineConfig {
            endpoint: "http://127.0.0.1:9/TAP/sync".to_owned(),
            request_timeout_secs: 2,
            ..PipelineConfig::rooted_at(dir.path())
        };
        // Leftover from a run that died mid-write
        std::fs::create_dir_all(&config.raw_dir)?;
        std::fs::write(config.raw_dir.join("exoplanets_raw.csv.part"), "pl_na")?;

        let result = fetch_catalog(&config, false).await;
        assert!(matches!(result, Err(CatalogError::Network(_))));
        assert!(!config.raw_file().exists());
        Ok(())
    }

    #[tokio::test]
    async fn test_cached_file_skips_download() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let config = PipelineConfig {
            // Unroutable, so any network attempt would fail the test
            endpoint: "http://127.0.0.1:9/TAP/sync".to_owned(),
            ..PipelineConfig::rooted_at(dir.path())
        };
        std::fs::create_dir_all(&config.raw_dir)?;
        std::fs::write(config.raw_file(), "pl_name\nA b\n")?;

        let path = fetch_catalog(&config, false).await?;
        assert_eq!(path, config.raw_file());
        assert_eq!(std::fs::read_to_string(path)?, "pl_name\nA b\n");
        Ok(())
    }

    #[tokio::test]
    async fn test_forced_fetch_reports_network_failure() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let config = PipelineConfig {
            endpoint: "http://127.0.0.1:9/TAP/sync".to_owned(),
            request_timeout_secs: 2,
            ..PipelineConfig::rooted_at(dir.path())
        };
        std::fs::create_dir_all(&config.raw_dir)?;
        std::fs::write(config.raw_file(), "pl_name\nA b\n")?;

        let result = fetch_catalog(&config, true).await;
        assert!(matches!(result, Err(CatalogError::Network(_))));
        // A failed download leaves the cache alone
        assert_eq!(std::fs::read_to_string(config.raw_file())?, "pl_name\nA b\n");
        Ok(())
    }
}
