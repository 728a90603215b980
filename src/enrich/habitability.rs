//! Habitability score: temperature, size, host star and insolation, summed to at most 100.

use super::stellar::StarClass;

/// Equilibrium temperatures [K] outside this window score zero outright.
const VIABLE_TEMPERATURE_K: (f64, f64) = (100.0, 500.0);

/// Earth's equilibrium temperature [K], where the temperature score peaks.
const EARTH_EQUILIBRIUM_K: f64 = 255.0;

/// Per-class host star weights. Classes not listed score zero.
const STAR_WEIGHTS: [(StarClass, f64); 5] = [
    (StarClass::G, 20.0),
    (StarClass::K, 18.0),
    (StarClass::F, 15.0),
    (StarClass::M, 12.0),
    (StarClass::A, 5.0),
];

/// Inputs to [`habitability_score`]; each may be unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HabitabilityInputs {
    /// Equilibrium temperature [K]
    pub temperature: Option<f64>,
    /// Radius [Earth radii]
    pub radius: Option<f64>,
    pub star_class: Option<StarClass>,
    /// Insolation [Earth flux]
    pub insolation: Option<f64>,
}

fn temperature_points(t: f64) -> f64 {
    if (200.0..=320.0).contains(&t) {
        40.0 - (t - EARTH_EQUILIBRIUM_K).abs() / 3.0
    } else if (180.0..200.0).contains(&t) || (t > 320.0 && t <= 350.0) {
        20.0
    } else if (150.0..180.0).contains(&t) || (t > 350.0 && t <= 400.0) {
        10.0
    } else {
        0.0
    }
}

fn radius_points(r: f64) -> f64 {
    if (0.8..=1.5).contains(&r) {
        30.0
    } else if (0.5..0.8).contains(&r) || (r > 1.5 && r <= 2.0) {
        20.0
    } else if r > 2.0 && r <= 3.0 {
        10.0
    } else {
        0.0
    }
}

fn star_points(class: StarClass) -> f64 {
    STAR_WEIGHTS
        .iter()
        .find(|(weighted, _)| *weighted == class)
        .map_or(0.0, |(_, points)| *points)
}

fn insolation_points(flux: f64) -> f64 {
    if (0.5..=2.0).contains(&flux) {
        10.0
    } else if (0.25..0.5).contains(&flux) || (flux > 2.0 && flux <= 4.0) {
        5.0
    } else {
        0.0
    }
}

/// Scores a planet from 0 to 100, rounded to one decimal.
///
/// A known temperature outside 100–500 K scores 0 regardless of the other
/// inputs. Otherwise unknown inputs simply contribute nothing.
pub fn habitability_score(inputs: HabitabilityInputs) -> f64 {
    let (coldest, hottest) = VIABLE_TEMPERATURE_K;
    if inputs
        .temperature
        .is_some_and(|t| t < coldest || t > hottest)
    {
        return 0.0;
    }

    let score = inputs.temperature.map_or(0.0, temperature_points)
        + inputs.radius.map_or(0.0, radius_points)
        + inputs.star_class.map_or(0.0, star_points)
        + inputs.insolation.map_or(0.0, insolation_points);

    round_to_tenth(score)
}

/// Rounds to one decimal place, ties to even, judged on the exact binary
/// value rather than on `x * 10`, whose multiplication can itself round
/// across a half-way point.
fn round_to_tenth(x: f64) -> f64 {
    // Past 2^52 every f64 is already an integer
    if !x.is_finite() || x.abs() >= 4_503_599_627_370_496.0 {
        return x;
    }

    // Exact decimal expansion: below 2^52 it terminates within 60 places
    let exact = format!("{:.60}", x.abs());
    let Some((whole, fraction)) = exact.split_once('.') else {
        return x;
    };
    let Ok(whole) = whole.parse::<u64>() else {
        return x;
    };

    let mut digits = fraction.bytes().map(|b| u64::from(b.saturating_sub(b'0')));
    let mut tenths = whole * 10 + digits.next().unwrap_or(0);
    let round_up = match digits.next().unwrap_or(0) {
        0..=4 => false,
        5 => digits.any(|d| d != 0) || tenths % 2 == 1,
        _ => true,
    };
    if round_up {
        tenths += 1;
    }

    // Exact integer over 10, correctly rounded: the nearest f64 to the decimal
    (tenths as f64 / 10.0).copysign(x)
}
