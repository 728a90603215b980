use anyhow::{Context as _, Result};
use polars::prelude::*;
use std::path::Path;

/// Rows used for schema inference; covers the full archive table.
const INFER_SCHEMA_ROWS: usize = 10_000;

/// Loads a delimited catalog file with a header row.
///
/// # Errors
///
/// Returns an error for anything but a `.csv` path, or if the file cannot
/// be read or parsed.
pub fn load_catalog(path: &Path) -> Result<DataFrame> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase();

    if ext != "csv" {
        return Err(anyhow::anyhow!("Unsupported file extension: {ext}"));
    }

    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
        .with_has_header(true)
        .finish()
        .with_context(|| format!("Failed to scan CSV {}", path.display()))?
        .collect()
        .context("Failed to read CSV")?;

    tracing::info!("Loaded {} rows from {}", df.height(), path.display());
    Ok(df)
}

/// Writes a table as CSV with a header, creating the parent directory.
///
/// Boolean columns are written as `True`/`False`, the spelling the
/// frontend's flag filters match on.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created or written.
pub fn save_catalog(df: &DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let mut out = capitalize_booleans(df)?;
    let file = std::fs::File::create(path).context("Failed to create CSV file")?;
    CsvWriter::new(file)
        .include_header(true)
        .finish(&mut out)
        .context("Failed to write CSV file")?;

    Ok(())
}

fn capitalize_booleans(df: &DataFrame) -> Result<DataFrame> {
    let columns = df
        .get_columns()
        .iter()
        .map(|column| {
            if column.dtype() != &DataType::Boolean {
                return Ok(column.clone());
            }
            let values: Vec<Option<&str>> = column
                .as_materialized_series()
                .bool()?
                .into_iter()
                .map(|v| v.map(|b| if b { "True" } else { "False" }))
                .collect();
            Ok(Column::new(column.name().clone(), values))
        })
        .collect::<Result<Vec<Column>>>()?;
    DataFrame::new(columns).context("Failed to rebuild frame for writing")
}

/// File size in megabytes, for progress messages.
pub fn file_size_mb(path: &Path) -> Result<f64> {
    let bytes = std::fs::metadata(path)
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .len();
    Ok(bytes as f64 / (1024.0 * 1024.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load_keeps_nulls() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("nested").join("table.csv");

        let df = DataFrame::new(vec![
            Column::new("pl_name".into(), ["Kepler-22 b", "GJ 1214 b"]),
            Column::new("pl_eqt".into(), [Some(262.0), None]),
        ])?;
        save_catalog(&df, &path)?;

        let loaded = load_catalog(&path)?;
        assert_eq!(loaded.height(), 2);
        assert_eq!(loaded.column("pl_eqt")?.null_count(), 1);
        assert!(file_size_mb(&path)? > 0.0);
        Ok(())
    }

    #[test]
    fn test_booleans_written_capitalized() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("flags.csv");

        let df = DataFrame::new(vec![
            Column::new("pl_name".into(), ["a b", "c d", "e f"]),
            Column::new("is_nearby".into(), [Some(true), Some(false), None]),
        ])?;
        save_catalog(&df, &path)?;

        let text = std::fs::read_to_string(&path)?;
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, ["pl_name,is_nearby", "a b,True", "c d,False", "e f,"]);
        // The caller's frame keeps its boolean dtype
        assert_eq!(df.column("is_nearby")?.dtype(), &DataType::Boolean);
        Ok(())
    }

    #[test]
    fn test_rejects_non_csv() {
        let result = load_catalog(Path::new("catalog.parquet"));
        assert!(result.is_err());
    }
}
