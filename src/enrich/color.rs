//! Normalized factors in [0, 1] that drive procedural planet shading.
//!
//! An unknown measurement maps to 0.5, the neutral midpoint, rather than to
//! either extreme of the palette.

use serde::Serialize;

pub const NEUTRAL_FACTOR: f64 = 0.5;

/// Equilibrium temperature [K]: 0 is cold/blue, 1 is hot/red.
const TEMPERATURE_RANGE_K: (f64, f64) = (50.0, 2_500.0);
/// Density [g/cm³]: 0 is gaseous, 1 is rocky.
const DENSITY_RANGE: (f64, f64) = (0.3, 8.0);
/// Insolation [Earth flux], mapped on a log scale.
const INSOLATION_RANGE: (f64, f64) = (0.01, 10_000.0);
/// Stellar metallicity [Fe/H] dex.
const METALLICITY_RANGE: (f64, f64) = (-0.5, 0.5);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorFactors {
    pub temp: f64,
    pub composition: f64,
    pub irradiation: f64,
    pub metallicity: f64,
}

impl Default for ColorFactors {
    fn default() -> Self {
        Self {
            temp: NEUTRAL_FACTOR,
            composition: NEUTRAL_FACTOR,
            irradiation: NEUTRAL_FACTOR,
            metallicity: NEUTRAL_FACTOR,
        }
    }
}

fn linear(value: f64, (low, high): (f64, f64)) -> f64 {
    ((value - low) / (high - low)).clamp(0.0, 1.0)
}

pub fn temperature_factor(kelvin: Option<f64>) -> f64 {
    kelvin.map_or(NEUTRAL_FACTOR, |t| linear(t, TEMPERATURE_RANGE_K))
}

pub fn composition_factor(density: Option<f64>) -> f64 {
    density.map_or(NEUTRAL_FACTOR, |d| linear(d, DENSITY_RANGE))
}

/// Log-scaled; a non-positive flux has no logarithm and is treated as unknown.
pub fn irradiation_factor(insolation: Option<f64>) -> f64 {
    match insolation {
        Some(flux) if flux > 0.0 => {
            let (low, high) = INSOLATION_RANGE;
            linear(flux.log10(), (low.log10(), high.log10()))
        }
        _ => NEUTRAL_FACTOR,
    }
}

pub fn metallicity_factor(metallicity: Option<f64>) -> f64 {
    metallicity.map_or(NEUTRAL_FACTOR, |m| linear(m, METALLICITY_RANGE))
}

pub fn color_factors(
    temperature: Option<f64>,
    density: Option<f64>,
    insolation: Option<f64>,
    metallicity: Option<f64>,
) -> ColorFactors {
    ColorFactors {
        temp: temperature_factor(temperature),
        composition: composition_factor(density),
        irradiation: irradiation_factor(insolation),
        metallicity: metallicity_factor(metallicity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_unknown_is_neutral() {
        assert_eq!(color_factors(None, None, None, None), ColorFactors::default());
    }

    #[test]
    fn test_linear_endpoints() {
        assert!(close(temperature_factor(Some(50.0)), 0.0));
        assert!(close(temperature_factor(Some(2_500.0)), 1.0));
        assert!(close(temperature_factor(Some(1_275.0)), 0.5));
        assert!(close(composition_factor(Some(0.3)), 0.0));
        assert!(close(composition_factor(Some(8.0)), 1.0));
        assert!(close(metallicity_factor(Some(0.0)), 0.5));
    }

    #[test]
    fn test_clamped_outside_range() {
        assert!(close(temperature_factor(Some(10.0)), 0.0));
        assert!(close(temperature_factor(Some(9_000.0)), 1.0));
        assert!(close(metallicity_factor(Some(-2.0)), 0.0));
        assert!(close(irradiation_factor(Some(1e9)), 1.0));
        assert!(close(irradiation_factor(Some(1e-6)), 0.0));
    }

    #[test]
    fn test_irradiation_is_logarithmic() {
        // Earth flux sits at 2 of 6 decades
        assert!(close(irradiation_factor(Some(1.0)), 1.0 / 3.0));
        assert!(close(irradiation_factor(Some(100.0)), 2.0 / 3.0));
    }

    #[test]
    fn test_non_positive_insolation_is_neutral() {
        assert!(close(irradiation_factor(Some(0.0)), NEUTRAL_FACTOR));
        assert!(close(irradiation_factor(Some(-3.0)), NEUTRAL_FACTOR));
    }

    proptest! {
        #[test]
        fn factors_stay_in_unit_interval(
            t in proptest::num::f64::NORMAL | proptest::num::f64::ZERO,
            d in proptest::num::f64::NORMAL | proptest::num::f64::ZERO,
            i in proptest::num::f64::NORMAL | proptest::num::f64::ZERO,
            m in proptest::num::f64::NORMAL | proptest::num::f64::ZERO,
        ) {
            let factors = color_factors(Some(t), Some(d), Some(i), Some(m));
            for f in [factors.temp, factors.composition, factors.irradiation, factors.metallicity] {
                prop_assert!((0.0..=1.0).contains(&f));
            }
        }
    }
}
