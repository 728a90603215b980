//! Derived-field engine.
//!
//! Every derived value is a pure function of one catalog row. [`enrich_row`]
//! computes them in dependency order (the stellar class and planet type
//! feed the score and the flags), so rows can be processed in any order or
//! in parallel with identical results.
//!
//! ```
//! use exocatalog::catalog::CatalogRow;
//! use exocatalog::enrich::enrich_row;
//!
//! let row = CatalogRow {
//!     pl_rade: Some(1.0),
//!     pl_eqt: Some(255.0),
//!     pl_insol: Some(1.0),
//!     st_spectype: Some("G2V".to_owned()),
//!     ..CatalogRow::default()
//! };
//! let enriched = enrich_row(&row);
//! assert_eq!(enriched.habitability_score, 100.0);
//! ```

pub mod color;
pub mod display;
pub mod flags;
pub mod geometry;
pub mod habitability;
pub mod planet;
pub mod stellar;

use crate::catalog::CatalogRow;
use anyhow::{Context as _, Result};
use polars::prelude::*;
use rayon::prelude::*;
use serde::Serialize;

pub use color::ColorFactors;
pub use flags::FeatureFlags;
pub use geometry::Position;
pub use habitability::HabitabilityInputs;
pub use planet::{PlanetSubtype, PlanetType};
pub use stellar::StarClass;

/// Every derived field of one row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Enrichment {
    pub star_class: Option<StarClass>,
    pub planet_type: Option<PlanetType>,
    pub planet_subtype: Option<PlanetSubtype>,
    pub habitability_score: f64,
    pub distance_display: Option<String>,
    pub period_display: Option<String>,
    pub mass_display: Option<String>,
    pub radius_display: Option<String>,
    pub position: Position,
    pub distance_ly: Option<f64>,
    pub flags: FeatureFlags,
    pub colors: ColorFactors,
}

pub fn enrich_row(row: &CatalogRow) -> Enrichment {
    let star_class = stellar::star_class(row.st_spectype.as_deref(), row.st_teff);
    let planet_type = planet::planet_type(row.pl_rade);
    let planet_subtype = planet::planet_subtype(row.pl_rade, row.pl_bmasse, row.pl_eqt);

    let habitability_score = habitability::habitability_score(HabitabilityInputs {
        temperature: row.pl_eqt,
        radius: row.pl_rade,
        star_class,
        insolation: row.pl_insol,
    });

    Enrichment {
        star_class,
        planet_type,
        planet_subtype,
        habitability_score,
        distance_display: display::format_distance(row.sy_dist),
        period_display: display::format_period(row.pl_orbper),
        mass_display: display::format_mass(row.pl_bmasse),
        radius_display: display::format_radius(row.pl_rade),
        position: geometry::resolve_position((row.x, row.y, row.z), row.sy_dist),
        distance_ly: display::parsecs_to_light_years(row.sy_dist),
        flags: flags::feature_flags(row, star_class, planet_type),
        colors: color::color_factors(row.pl_eqt, row.pl_dens, row.pl_insol, row.st_met),
    }
}

/// Enriches all rows on the rayon pool; output order matches input order.
pub fn enrich_rows(rows: &[CatalogRow]) -> Vec<Enrichment> {
    rows.par_iter().map(enrich_row).collect()
}

fn text_column(name: &str, values: Vec<Option<&str>>) -> Column {
    Column::new(name.into(), values)
}

fn number_column(name: &str, values: Vec<Option<f64>>) -> Column {
    Column::new(name.into(), values)
}

/// Builds the derived columns, in output order, for a batch of enrichments.
pub fn derived_columns(enriched: &[Enrichment]) -> Vec<Column> {
    let mut columns = vec![
        text_column(
            "star_class",
            enriched.iter().map(|e| e.star_class.map(|c| c.as_str())).collect(),
        ),
        text_column(
            "planet_type",
            enriched.iter().map(|e| e.planet_type.map(|t| t.as_str())).collect(),
        ),
        text_column(
            "planet_subtype",
            enriched
                .iter()
                .map(|e| e.planet_subtype.map(|t| t.as_str()))
                .collect(),
        ),
        Column::new(
            "habitability_score".into(),
            enriched.iter().map(|e| e.habitability_score).collect::<Vec<f64>>(),
        ),
        text_column(
            "distance_display",
            enriched.iter().map(|e| e.distance_display.as_deref()).collect(),
        ),
        text_column(
            "period_display",
            enriched.iter().map(|e| e.period_display.as_deref()).collect(),
        ),
        text_column(
            "mass_display",
            enriched.iter().map(|e| e.mass_display.as_deref()).collect(),
        ),
        text_column(
            "radius_display",
            enriched.iter().map(|e| e.radius_display.as_deref()).collect(),
        ),
        number_column("x_pc", enriched.iter().map(|e| e.position.x_pc).collect()),
        number_column("y_pc", enriched.iter().map(|e| e.position.y_pc).collect()),
        number_column("z_pc", enriched.iter().map(|e| e.position.z_pc).collect()),
        number_column("distance_ly", enriched.iter().map(|e| e.distance_ly).collect()),
    ];

    let mut flag_values: Vec<(&'static str, Vec<bool>)> = FeatureFlags::default()
        .named()
        .iter()
        .map(|(name, _)| (*name, Vec::with_capacity(enriched.len())))
        .collect();
    for e in enriched {
        for ((_, values), (_, flag)) in flag_values.iter_mut().zip(e.flags.named()) {
            values.push(flag);
        }
    }
    columns.extend(
        flag_values
            .into_iter()
            .map(|(name, values)| Column::new(name.into(), values)),
    );

    let factor = |name: &str, pick: fn(&ColorFactors) -> f64| {
        Column::new(
            name.into(),
            enriched.iter().map(|e| pick(&e.colors)).collect::<Vec<f64>>(),
        )
    };
    columns.push(factor("color_temp_factor", |c| c.temp));
    columns.push(factor("color_composition_factor", |c| c.composition));
    columns.push(factor("color_irradiation_factor", |c| c.irradiation));
    columns.push(factor("color_metallicity_factor", |c| c.metallicity));

    columns
}

/// Appends the derived columns to the selected frame they were computed from.
///
/// # Errors
///
/// Fails if `enriched` does not have one entry per frame row.
pub fn attach_derived(frame: &DataFrame, enriched: &[Enrichment]) -> Result<DataFrame> {
    if frame.height() != enriched.len() {
        return Err(anyhow::anyhow!(
            "Frame has {} rows but {} enrichments were computed",
            frame.height(),
            enriched.len()
        ));
    }
    frame
        .hstack(&derived_columns(enriched))
        .context("Failed to attach derived columns")
}
