//! Typed per-row view of the selected catalog.
//!
//! Only the columns the derivation rules read are lifted into [`CatalogRow`];
//! everything else stays in the frame untouched. A column the source did not
//! provide reads as absent on every row, and so does a cell that fails to
//! parse as the expected type.

use anyhow::{Context as _, Result};
use polars::prelude::*;

/// Raw measurements of one planet, as far as the derivation rules need them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogRow {
    pub pl_name: Option<String>,
    pub hostname: Option<String>,
    pub discoverymethod: Option<String>,

    /// Radius [Earth radii]
    pub pl_rade: Option<f64>,
    /// Mass [Earth masses]
    pub pl_bmasse: Option<f64>,
    /// Mass [Jupiter masses]
    pub pl_bmassj: Option<f64>,
    /// Density [g/cm³]
    pub pl_dens: Option<f64>,
    /// Equilibrium temperature [K]
    pub pl_eqt: Option<f64>,
    /// Insolation [Earth flux]
    pub pl_insol: Option<f64>,

    /// Orbital period [days]
    pub pl_orbper: Option<f64>,
    /// Semi-major axis [AU]
    pub pl_orbsmax: Option<f64>,
    pub pl_orbeccen: Option<f64>,
    pub pl_trandep: Option<f64>,
    /// RV semi-amplitude [m/s]
    pub pl_rvamp: Option<f64>,

    pub st_spectype: Option<String>,
    /// Effective temperature [K]
    pub st_teff: Option<f64>,
    /// [Solar masses]
    pub st_mass: Option<f64>,
    /// [Gyr]
    pub st_age: Option<f64>,
    /// [Fe/H] dex
    pub st_met: Option<f64>,

    pub sy_snum: Option<i64>,
    pub sy_pnum: Option<i64>,
    /// Distance [parsecs]
    pub sy_dist: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub z: Option<f64>,

    pub cb_flag: Option<i64>,
    pub pl_controv_flag: Option<i64>,
    pub tran_flag: Option<i64>,
    pub rv_flag: Option<i64>,
    pub ttv_flag: Option<i64>,
}

fn number_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let Ok(column) = df.column(name) else {
        return Ok(vec![None; df.height()]);
    };
    let series = column
        .as_materialized_series()
        .cast(&DataType::Float64)
        .with_context(|| format!("Column {name} is not numeric"))?;
    Ok(series
        .f64()?
        .into_iter()
        // NaN carries no measurement
        .map(|v| v.filter(|x| !x.is_nan()))
        .collect())
}

fn integer_values(df: &DataFrame, name: &str) -> Result<Vec<Option<i64>>> {
    let Ok(column) = df.column(name) else {
        return Ok(vec![None; df.height()]);
    };
    let series = column
        .as_materialized_series()
        .cast(&DataType::Int64)
        .with_context(|| format!("Column {name} is not an integer column"))?;
    Ok(series.i64()?.into_iter().collect())
}

fn text_values(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    let Ok(column) = df.column(name) else {
        return Ok(vec![None; df.height()]);
    };
    let series = column
        .as_materialized_series()
        .cast(&DataType::String)
        .with_context(|| format!("Column {name} cannot be read as text"))?;
    Ok(series
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_owned))
        .collect())
}

fn at<T: Clone>(values: &[Option<T>], row: usize) -> Option<T> {
    values.get(row).cloned().flatten()
}

/// Lifts every row of a selected catalog frame into a [`CatalogRow`].
///
/// # Errors
///
/// Fails if a present column cannot be cast to the type its rules expect.
pub fn rows_from_frame(df: &DataFrame) -> Result<Vec<CatalogRow>> {
    let pl_name = text_values(df, "pl_name")?;
    let hostname = text_values(df, "hostname")?;
    let discoverymethod = text_values(df, "discoverymethod")?;
    let pl_rade = number_values(df, "pl_rade")?;
    let pl_bmasse = number_values(df, "pl_bmasse")?;
    let pl_bmassj = number_values(df, "pl_bmassj")?;
    let pl_dens = number_values(df, "pl_dens")?;
    let pl_eqt = number_values(df, "pl_eqt")?;
    let pl_insol = number_values(df, "pl_insol")?;
    let pl_orbper = number_values(df, "pl_orbper")?;
    let pl_orbsmax = number_values(df, "pl_orbsmax")?;
    let pl_orbeccen = number_values(df, "pl_orbeccen")?;
    let pl_trandep = number_values(df, "pl_trandep")?;
    let pl_rvamp = number_values(df, "pl_rvamp")?;
    let st_spectype = text_values(df, "st_spectype")?;
    let st_teff = number_values(df, "st_teff")?;
    let st_mass = number_values(df, "st_mass")?;
    let st_age = number_values(df, "st_age")?;
    let st_met = number_values(df, "st_met")?;
    let sy_snum = integer_values(df, "sy_snum")?;
    let sy_pnum = integer_values(df, "sy_pnum")?;
    let sy_dist = number_values(df, "sy_dist")?;
    let x = number_values(df, "x")?;
    let y = number_values(df, "y")?;
    let z = number_values(df, "z")?;
    let cb_flag = integer_values(df, "cb_flag")?;
    let pl_controv_flag = integer_values(df, "pl_controv_flag")?;
    let tran_flag = integer_values(df, "tran_flag")?;
    let rv_flag = integer_values(df, "rv_flag")?;
    let ttv_flag = integer_values(df, "ttv_flag")?;

    let rows = (0..df.height())
        .map(|i| CatalogRow {
            pl_name: at(&pl_name, i),
            hostname: at(&hostname, i),
            discoverymethod: at(&discoverymethod, i),
            pl_rade: at(&pl_rade, i),
            pl_bmasse: at(&pl_bmasse, i),
            pl_bmassj: at(&pl_bmassj, i),
            pl_dens: at(&pl_dens, i),
            pl_eqt: at(&pl_eqt, i),
            pl_insol: at(&pl_insol, i),
            pl_orbper: at(&pl_orbper, i),
            pl_orbsmax: at(&pl_orbsmax, i),
            pl_orbeccen: at(&pl_orbeccen, i),
            pl_trandep: at(&pl_trandep, i),
            pl_rvamp: at(&pl_rvamp, i),
            st_spectype: at(&st_spectype, i),
            st_teff: at(&st_teff, i),
            st_mass: at(&st_mass, i),
            st_age: at(&st_age, i),
            st_met: at(&st_met, i),
            sy_snum: at(&sy_snum, i),
            sy_pnum: at(&sy_pnum, i),
            sy_dist: at(&sy_dist, i),
            x: at(&x, i),
            y: at(&y, i),
            z: at(&z, i),
            cb_flag: at(&cb_flag, i),
            pl_controv_flag: at(&pl_controv_flag, i),
            tran_flag: at(&tran_flag, i),
            rv_flag: at(&rv_flag, i),
            ttv_flag: at(&ttv_flag, i),
        })
        .collect();

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_column_reads_as_none() -> Result<()> {
        let df = DataFrame::new(vec![
            Column::new("pl_name".into(), ["TRAPPIST-1 e"]),
            Column::new("pl_rade".into(), [0.92]),
        ])?;
        let rows = rows_from_frame(&df)?;
        assert_eq!(rows.len(), 1);
        let row = rows.first().expect("one row");
        assert_eq!(row.pl_name.as_deref(), Some("TRAPPIST-1 e"));
        assert_eq!(row.pl_rade, Some(0.92));
        assert_eq!(row.sy_dist, None);
        assert_eq!(row.st_spectype, None);
        Ok(())
    }

    #[test]
    fn test_nulls_and_nan_are_absent() -> Result<()> {
        let df = DataFrame::new(vec![
            Column::new("pl_eqt".into(), [Some(f64::NAN), None, Some(288.0)]),
            Column::new("sy_pnum".into(), [Some(1_i64), None, Some(7)]),
        ])?;
        let rows = rows_from_frame(&df)?;
        let temps: Vec<Option<f64>> = rows.iter().map(|r| r.pl_eqt).collect();
        assert_eq!(temps, vec![None, None, Some(288.0)]);
        let counts: Vec<Option<i64>> = rows.iter().map(|r| r.sy_pnum).collect();
        assert_eq!(counts, vec![Some(1), None, Some(7)]);
        Ok(())
    }

    #[test]
    fn test_unparsable_text_in_numeric_field_is_absent() -> Result<()> {
        let df = DataFrame::new(vec![Column::new(
            "sy_dist".into(),
            ["12.5", "unknown"],
        )])?;
        let rows = rows_from_frame(&df)?;
        let dists: Vec<Option<f64>> = rows.iter().map(|r| r.sy_dist).collect();
        assert_eq!(dists, vec![Some(12.5), None]);
        Ok(())
    }

    #[test]
    fn test_float_flags_read_as_integers() -> Result<()> {
        let df = DataFrame::new(vec![Column::new("tran_flag".into(), [1.0, 0.0])])?;
        let rows = rows_from_frame(&df)?;
        let flags: Vec<Option<i64>> = rows.iter().map(|r| r.tran_flag).collect();
        assert_eq!(flags, vec![Some(1), Some(0)]);
        Ok(())
    }
}
