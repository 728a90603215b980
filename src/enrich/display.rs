//! Human-readable strings for distance, period, mass and radius.
//!
//! Thresholds and decimal places are part of the output contract: the
//! frontend matches on these exact strings.

pub const LIGHT_YEARS_PER_PARSEC: f64 = 3.26156;
pub const EARTH_MASSES_PER_JUPITER: f64 = 317.8;
pub const EARTH_RADII_PER_JUPITER: f64 = 11.2;
const DAYS_PER_MONTH: f64 = 30.0;
const DAYS_PER_YEAR: f64 = 365.25;

pub fn parsecs_to_light_years(parsecs: Option<f64>) -> Option<f64> {
    parsecs.map(|pc| pc * LIGHT_YEARS_PER_PARSEC)
}

pub fn format_distance(parsecs: Option<f64>) -> Option<String> {
    let ly = parsecs_to_light_years(parsecs)?;
    Some(if ly < 100.0 {
        format!("{ly:.1} light-years")
    } else if ly < 1_000.0 {
        format!("{ly:.0} light-years")
    } else {
        format!("{:.1}k light-years", ly / 1_000.0)
    })
}

pub fn format_period(days: Option<f64>) -> Option<String> {
    let days = days?;
    Some(if days < 1.0 {
        format!("{:.1} hours", days * 24.0)
    } else if days < 30.0 {
        format!("{days:.1} days")
    } else if days < 365.0 {
        format!("{:.1} months", days / DAYS_PER_MONTH)
    } else {
        format!("{:.1} years", days / DAYS_PER_YEAR)
    })
}

pub fn format_mass(earth_masses: Option<f64>) -> Option<String> {
    let m = earth_masses?;
    Some(if m < 0.1 {
        format!("{m:.3} Earth masses")
    } else if m < 10.0 {
        format!("{m:.1} Earth masses")
    } else if m < 318.0 {
        format!("{m:.0} Earth masses")
    } else {
        format!("{:.1} Jupiter masses", m / EARTH_MASSES_PER_JUPITER)
    })
}

pub fn format_radius(earth_radii: Option<f64>) -> Option<String> {
    let r = earth_radii?;
    Some(if r < 2.0 {
        format!("{r:.2} Earth radii")
    } else if r < EARTH_RADII_PER_JUPITER {
        format!("{r:.1} Earth radii")
    } else {
        format!("{:.1} Jupiter radii", r / EARTH_RADII_PER_JUPITER)
    })
}
