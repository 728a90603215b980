//! Boolean feature flags used by the frontend for filtering and badges.
//!
//! Every flag is a threshold test on raw or already-classified fields. A
//! flag whose input is unknown is `false`; flags never carry "unknown".

use super::planet::PlanetType;
use super::stellar::StarClass;
use crate::catalog::CatalogRow;
use serde::Serialize;

pub const FLAG_COUNT: usize = 40;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeatureFlags {
    pub is_habitable_zone: bool,
    pub is_earth_like: bool,

    // Orbital characteristics
    pub is_ultra_short_period: bool,
    pub is_short_period: bool,
    pub is_long_period: bool,
    pub is_eccentric_orbit: bool,
    pub is_circular_orbit: bool,
    pub is_likely_tidally_locked: bool,

    // System architecture
    pub is_multi_planet_system: bool,
    pub is_rich_system: bool,
    pub is_only_known_planet: bool,
    pub is_circumbinary: bool,
    pub is_multi_star_system: bool,

    // Proximity and observability
    pub is_nearby: bool,
    pub is_very_nearby: bool,
    pub is_transiting: bool,
    pub has_rv_data: bool,
    pub has_ttv: bool,
    pub is_controversial: bool,

    // Stellar environment
    pub is_solar_analog: bool,
    pub is_sun_like_star: bool,
    pub is_red_dwarf_host: bool,
    pub is_young_system: bool,
    pub is_mature_system: bool,
    pub is_ancient_system: bool,
    pub is_metal_rich_star: bool,
    pub is_metal_poor_star: bool,

    // Extreme worlds
    pub is_hot_jupiter: bool,
    pub is_hot_neptune: bool,
    pub is_ultra_hot: bool,
    pub is_frozen_world: bool,
    pub is_ultra_dense: bool,
    pub is_puffy: bool,
    pub is_super_massive: bool,
    pub is_lightweight: bool,

    // Habitability variants
    pub has_earth_like_insolation: bool,
    pub is_conservative_habitable: bool,
    pub is_optimistic_habitable: bool,
    pub is_top_habitable_candidate: bool,
    pub is_potentially_rocky: bool,
}

impl FeatureFlags {
    /// `(column name, value)` pairs in output column order.
    pub fn named(&self) -> [(&'static str, bool); FLAG_COUNT] {
        [
            ("is_habitable_zone", self.is_habitable_zone),
            ("is_earth_like", self.is_earth_like),
            ("is_ultra_short_period", self.is_ultra_short_period),
            ("is_short_period", self.is_short_period),
            ("is_long_period", self.is_long_period),
            ("is_eccentric_orbit", self.is_eccentric_orbit),
            ("is_circular_orbit", self.is_circular_orbit),
            ("is_likely_tidally_locked", self.is_likely_tidally_locked),
            ("is_multi_planet_system", self.is_multi_planet_system),
            ("is_rich_system", self.is_rich_system),
            ("is_only_known_planet", self.is_only_known_planet),
            ("is_circumbinary", self.is_circumbinary),
            ("is_multi_star_system", self.is_multi_star_system),
            ("is_nearby", self.is_nearby),
            ("is_very_nearby", self.is_very_nearby),
            ("is_transiting", self.is_transiting),
            ("has_rv_data", self.has_rv_data),
            ("has_ttv", self.has_ttv),
            ("is_controversial", self.is_controversial),
            ("is_solar_analog", self.is_solar_analog),
            ("is_sun_like_star", self.is_sun_like_star),
            ("is_red_dwarf_host", self.is_red_dwarf_host),
            ("is_young_system", self.is_young_system),
            ("is_mature_system", self.is_mature_system),
            ("is_ancient_system", self.is_ancient_system),
            ("is_metal_rich_star", self.is_metal_rich_star),
            ("is_metal_poor_star", self.is_metal_poor_star),
            ("is_hot_jupiter", self.is_hot_jupiter),
            ("is_hot_neptune", self.is_hot_neptune),
            ("is_ultra_hot", self.is_ultra_hot),
            ("is_frozen_world", self.is_frozen_world),
            ("is_ultra_dense", self.is_ultra_dense),
            ("is_puffy", self.is_puffy),
            ("is_super_massive", self.is_super_massive),
            ("is_lightweight", self.is_lightweight),
            ("has_earth_like_insolation", self.has_earth_like_insolation),
            ("is_conservative_habitable", self.is_conservative_habitable),
            ("is_optimistic_habitable", self.is_optimistic_habitable),
            ("is_top_habitable_candidate", self.is_top_habitable_candidate),
            ("is_potentially_rocky", self.is_potentially_rocky),
        ]
    }
}

fn below(value: Option<f64>, limit: f64) -> bool {
    value.is_some_and(|v| v < limit)
}

fn above(value: Option<f64>, limit: f64) -> bool {
    value.is_some_and(|v| v > limit)
}

/// Inclusive on both ends.
fn within(value: Option<f64>, low: f64, high: f64) -> bool {
    value.is_some_and(|v| v >= low && v <= high)
}

fn is_set(flag: Option<i64>) -> bool {
    flag == Some(1)
}

/// Computes every flag for one row.
///
/// `star_class` and `planet_type` must already be derived for this row.
pub fn feature_flags(
    row: &CatalogRow,
    star_class: Option<StarClass>,
    planet_type: Option<PlanetType>,
) -> FeatureFlags {
    let temp = row.pl_eqt;
    let radius = row.pl_rade;
    let period = row.pl_orbper;
    let planets = row.sy_pnum;

    let is_habitable_zone = within(temp, 200.0, 320.0);
    let is_sun_like_star = star_class.is_some_and(StarClass::is_sun_like);
    let is_red_dwarf_host = star_class == Some(StarClass::M);

    FeatureFlags {
        is_habitable_zone,
        is_earth_like: within(radius, 0.8, 1.25),

        is_ultra_short_period: below(period, 1.0),
        is_short_period: below(period, 10.0),
        is_long_period: above(period, 1_000.0),
        is_eccentric_orbit: above(row.pl_orbeccen, 0.3),
        is_circular_orbit: below(row.pl_orbeccen, 0.05),
        is_likely_tidally_locked: below(period, 10.0) && below(row.pl_orbsmax, 0.1),

        is_multi_planet_system: planets.is_some_and(|n| n > 1),
        is_rich_system: planets.is_some_and(|n| n >= 4),
        is_only_known_planet: planets == Some(1),
        is_circumbinary: is_set(row.cb_flag),
        is_multi_star_system: row.sy_snum.is_some_and(|n| n > 1),

        is_nearby: below(row.sy_dist, 50.0),
        is_very_nearby: below(row.sy_dist, 20.0),
        // Either the archive says so, or there is a measured transit to go on
        is_transiting: is_set(row.tran_flag) || (row.pl_trandep.is_some() && period.is_some()),
        has_rv_data: is_set(row.rv_flag) && row.pl_rvamp.is_some(),
        has_ttv: is_set(row.ttv_flag),
        is_controversial: is_set(row.pl_controv_flag),

        is_solar_analog: star_class == Some(StarClass::G) && within(row.st_mass, 0.8, 1.2),
        is_sun_like_star,
        is_red_dwarf_host,
        is_young_system: below(row.st_age, 1.0),
        is_mature_system: within(row.st_age, 1.0, 8.0),
        is_ancient_system: above(row.st_age, 10.0),
        is_metal_rich_star: above(row.st_met, 0.1),
        is_metal_poor_star: below(row.st_met, -0.3),

        is_hot_jupiter: planet_type == Some(PlanetType::GasGiant) && above(temp, 1_000.0),
        is_hot_neptune: matches!(
            planet_type,
            Some(PlanetType::NeptuneLike | PlanetType::SubNeptune)
        ) && above(temp, 800.0),
        is_ultra_hot: above(temp, 2_000.0),
        is_frozen_world: below(temp, 150.0),
        is_ultra_dense: above(row.pl_dens, 8.0),
        is_puffy: below(row.pl_dens, 0.5),
        is_super_massive: above(row.pl_bmassj, 10.0),
        is_lightweight: below(row.pl_bmasse, 0.5),

        has_earth_like_insolation: within(row.pl_insol, 0.5, 2.0),
        is_conservative_habitable: within(temp, 200.0, 280.0),
        is_optimistic_habitable: within(temp, 150.0, 350.0),
        is_top_habitable_candidate: is_habitable_zone
            && within(radius, 0.5, 2.0)
            && (is_sun_like_star || is_red_dwarf_host),
        // Unknown density does not rule out a rocky composition
        is_potentially_rocky: radius.is_some_and(|r| r <= 1.6)
            && row.pl_dens.is_none_or(|d| d >= 3.5),
    }
}
