//! The fixed column allow-list and the selector that projects raw tables onto it.

use anyhow::{Context as _, Result};
use polars::prelude::*;
use serde::Serialize;
use std::fmt;

/// Raw archive columns kept for visualization, with a short description each.
///
/// Order here is the column order of the processed output.
pub const ESSENTIAL_COLUMNS: &[(&str, &str)] = &[
    // Planet identification
    ("pl_name", "Planet name"),
    ("pl_letter", "Planet letter (b, c, d...)"),
    ("hostname", "Host star name"),
    // Planet physical properties
    ("pl_rade", "Planet radius [Earth radii]"),
    ("pl_radj", "Planet radius [Jupiter radii]"),
    ("pl_bmasse", "Planet mass [Earth masses] - best estimate"),
    ("pl_bmassj", "Planet mass [Jupiter masses] - best estimate"),
    ("pl_bmassprov", "Mass measurement provenance"),
    ("pl_dens", "Planet density [g/cm³]"),
    ("pl_eqt", "Equilibrium temperature [K]"),
    ("pl_insol", "Insolation flux [Earth flux]"),
    // Orbital properties
    ("pl_orbper", "Orbital period [days]"),
    ("pl_orbsmax", "Orbital semi-major axis [AU]"),
    ("pl_orbeccen", "Orbital eccentricity"),
    ("pl_orbincl", "Orbital inclination [deg]"),
    // Transit properties
    ("pl_trandep", "Transit depth [%]"),
    ("pl_trandur", "Transit duration [hours]"),
    ("pl_ratror", "Planet/star radius ratio"),
    ("pl_ratdor", "Semi-major axis / stellar radius ratio"),
    ("pl_imppar", "Impact parameter"),
    // Discovery info
    ("disc_year", "Discovery year"),
    ("discoverymethod", "Discovery method"),
    ("disc_facility", "Discovery facility"),
    ("disc_telescope", "Discovery telescope"),
    // Star properties
    ("st_teff", "Stellar effective temperature [K]"),
    ("st_rad", "Stellar radius [Solar radii]"),
    ("st_mass", "Stellar mass [Solar masses]"),
    ("st_lum", "Stellar luminosity [log Solar]"),
    ("st_logg", "Stellar surface gravity [log g]"),
    ("st_age", "Stellar age [Gyr]"),
    ("st_dens", "Stellar density [g/cm³]"),
    ("st_met", "Stellar metallicity [dex]"),
    ("st_rotp", "Stellar rotation period [days]"),
    ("st_spectype", "Stellar spectral type"),
    // System properties
    ("sy_snum", "Number of stars in system"),
    ("sy_pnum", "Number of planets in system"),
    ("sy_mnum", "Number of moons in system"),
    ("sy_dist", "Distance from Earth [parsecs]"),
    // Coordinates
    ("ra", "Right ascension [deg]"),
    ("dec", "Declination [deg]"),
    ("rastr", "Right ascension [sexagesimal]"),
    ("decstr", "Declination [sexagesimal]"),
    ("glat", "Galactic latitude [deg]"),
    ("glon", "Galactic longitude [deg]"),
    ("x", "Heliocentric X direction (unit vector)"),
    ("y", "Heliocentric Y direction (unit vector)"),
    ("z", "Heliocentric Z direction (unit vector)"),
    // Flags
    ("cb_flag", "Circumbinary planet (orbits 2 stars)"),
    ("pl_controv_flag", "Controversial planet flag"),
    ("tran_flag", "Detected by transit"),
    ("rv_flag", "Detected by radial velocity"),
    ("ttv_flag", "Transit timing variations detected"),
    // Magnitudes
    ("sy_vmag", "V-band (visible) magnitude"),
    ("sy_kmag", "K-band (infrared) magnitude"),
    ("sy_gaiamag", "Gaia magnitude"),
    ("sy_tmag", "TESS magnitude"),
    // IDs
    ("tic_id", "TESS Input Catalog ID"),
    ("gaia_dr3_id", "Gaia DR3 ID"),
    // Radial velocity
    ("pl_rvamp", "Radial velocity semi-amplitude [m/s]"),
    ("st_radv", "Stellar radial velocity [km/s]"),
    ("st_vsin", "Stellar rotational velocity [km/s]"),
];

fn describe(name: &str) -> Option<&'static str> {
    ESSENTIAL_COLUMNS
        .iter()
        .find(|(column, _)| *column == name)
        .map(|(_, description)| *description)
}

/// Renders column names with their descriptions, e.g. `sy_dist (Distance from Earth [parsecs])`.
pub fn describe_missing(missing: &[&str]) -> String {
    missing
        .iter()
        .map(|name| match describe(name) {
            Some(description) => format!("{name} ({description})"),
            None => (*name).to_owned(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result of projecting a raw table onto [`ESSENTIAL_COLUMNS`].
#[derive(Debug, Clone)]
pub struct ColumnSelection {
    pub frame: DataFrame,
    /// Allow-listed columns the source did not provide
    pub missing: Vec<&'static str>,
}

/// Keeps only allow-listed columns, in allow-list order.
///
/// Missing columns are reported and logged but never abort the run; rules
/// that depend on them see every value as absent.
pub fn select_columns(df: &DataFrame) -> Result<ColumnSelection> {
    let (available, missing): (Vec<&'static str>, Vec<&'static str>) = ESSENTIAL_COLUMNS
        .iter()
        .map(|(name, _)| *name)
        .partition(|name| df.column(name).is_ok());

    if !missing.is_empty() {
        tracing::warn!("Missing columns: {}", describe_missing(&missing));
    }
    tracing::info!(
        "Extracting {} of {} essential columns",
        available.len(),
        ESSENTIAL_COLUMNS.len()
    );

    let frame = df
        .select(available.iter().copied())
        .context("Failed to select essential columns")?;

    Ok(ColumnSelection { frame, missing })
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnPresence {
    pub name: &'static str,
    pub description: &'static str,
    pub non_null: usize,
    pub percent: f64,
}

/// Which allow-listed columns a raw table carries, and how well populated they are.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnCoverage {
    pub rows: usize,
    pub available: Vec<ColumnPresence>,
    pub missing: Vec<(&'static str, &'static str)>,
}

pub fn column_coverage(df: &DataFrame) -> ColumnCoverage {
    let rows = df.height();
    let mut available = Vec::new();
    let mut missing = Vec::new();

    for &(name, description) in ESSENTIAL_COLUMNS {
        match df.column(name) {
            Ok(column) => {
                let non_null = rows - column.null_count();
                let percent = if rows > 0 {
                    (non_null as f64 / rows as f64) * 100.0
                } else {
                    0.0
                };
                available.push(ColumnPresence {
                    name,
                    description,
                    non_null,
                    percent,
                });
            }
            Err(_) => missing.push((name, description)),
        }
    }

    ColumnCoverage {
        rows,
        available,
        missing,
    }
}

impl fmt::Display for ColumnCoverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(70))?;
        writeln!(f, "ESSENTIAL COLUMNS ANALYSIS")?;
        writeln!(f, "{}", "=".repeat(70))?;
        writeln!(
            f,
            "\nAvailable columns ({}/{}):\n",
            self.available.len(),
            ESSENTIAL_COLUMNS.len()
        )?;
        writeln!(
            f,
            "{:<20} {:<35} {:>8} {:>6}",
            "Column", "Description", "Values", "%"
        )?;
        writeln!(f, "{}", "-".repeat(72))?;
        for column in &self.available {
            let description: String = column.description.chars().take(33).collect();
            writeln!(
                f,
                "{:<20} {:<35} {:>8} {:>5.1}%",
                column.name, description, column.non_null, column.percent
            )?;
        }

        if !self.missing.is_empty() {
            writeln!(f, "\nMissing columns ({}):", self.missing.len())?;
            for (name, description) in &self.missing {
                writeln!(f, "  - {name}: {description}")?;
            }
        }
        Ok(())
    }
}
