//! The processing run: raw catalog in, enriched catalog out.
//!
//! ```text
//! raw CSV ─> load ─> select columns ─> rows ─> enrich (rayon) ─> attach ─> output CSV
//! ```

use crate::catalog::{self, CatalogRow, ColumnCoverage};
use crate::catalog::io::file_size_mb;
use crate::config::PipelineConfig;
use crate::enrich;
use crate::error::{CatalogError, Result};
use crate::report::{CatalogHighlights, CatalogSummary};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// What a processing run produced.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessOutcome {
    pub output: PathBuf,
    pub rows: usize,
    pub columns: usize,
    /// Allow-listed columns the raw catalog lacked
    pub missing: Vec<&'static str>,
    pub summary: CatalogSummary,
}

/// Enriches the cached raw catalog and writes the result.
///
/// # Errors
///
/// Returns [`CatalogError::MissingRawData`] if nothing has been fetched yet,
/// and I/O or data errors from reading and writing the tables.
pub fn process_catalog(config: &PipelineConfig) -> Result<ProcessOutcome> {
    let raw = config.raw_file();
    if !raw.exists() {
        return Err(CatalogError::MissingRawData(raw));
    }

    let df = catalog::load_catalog(&raw)?;
    let selection = catalog::select_columns(&df)?;
    let rows = catalog::rows_from_frame(&selection.frame)?;

    tracing::info!("Enriching {} planets", rows.len());
    let enriched = enrich::enrich_rows(&rows);
    let output = enrich::attach_derived(&selection.frame, &enriched)?;

    let path = config.output_file();
    catalog::save_catalog(&output, &path)?;

    let size = file_size_mb(&path)?;
    tracing::info!(
        "Saved {} ({size:.2} MB, {} rows, {} columns)",
        path.display(),
        output.height(),
        output.width()
    );

    Ok(ProcessOutcome {
        output: path,
        rows: output.height(),
        columns: output.width(),
        missing: selection.missing,
        summary: CatalogSummary::new(&rows, &enriched, output.width()),
    })
}

/// Column coverage and highlights for a raw catalog file, as shown after a fetch.
///
/// # Errors
///
/// Returns an error if the file cannot be read as a catalog.
pub fn inspect_raw(path: &Path) -> Result<(ColumnCoverage, CatalogHighlights)> {
    let df = catalog::load_catalog(path)?;
    let coverage = catalog::column_coverage(&df);
    let rows: Vec<CatalogRow> = catalog::rows_from_frame(&df)?;
    let highlights = CatalogHighlights::new(&rows, &enrich::enrich_rows(&rows));
    Ok((coverage, highlights))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_raw_data_is_a_precondition_error() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let config = PipelineConfig::rooted_at(dir.path());

        let result = process_catalog(&config);
        assert!(matches!(result, Err(CatalogError::MissingRawData(p)) if p == config.raw_file()));
        assert!(!config.output_file().exists());
        Ok(())
    }

    #[test]
    fn test_process_small_catalog() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let config = PipelineConfig::rooted_at(dir.path());
        std::fs::create_dir_all(&config.raw_dir)?;
        std::fs::write(
            config.raw_file(),
            "pl_name,hostname,pl_rade,pl_eqt,st_spectype,extra\n\
             Twin b,Twin,1.0,255,G2V,ignored\n\
             Hot b,Hot,12.0,1500,,ignored\n",
        )?;

        let outcome = process_catalog(&config)?;
        assert_eq!(outcome.rows, 2);
        assert_eq!(outcome.output, config.output_file());
        assert!(outcome.missing.contains(&"pl_insol"));
        assert!(!outcome.missing.contains(&"pl_name"));
        // 5 kept raw columns, 12 derived values, 40 flags, 4 color factors
        assert_eq!(outcome.columns, 5 + 12 + 40 + 4);
        assert_eq!(outcome.summary.habitable_zone, 1);

        let written = std::fs::read_to_string(config.output_file())?;
        let header = written.lines().next().unwrap_or_default();
        assert!(header.starts_with("pl_name,hostname,"));
        assert!(!header.contains("extra"));
        assert!(header.ends_with("color_metallicity_factor"));
        Ok(())
    }
}
