//! Size-based planet type and the finer subtype that also weighs mass and temperature.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlanetType {
    SubEarth,
    EarthSized,
    SuperEarth,
    SubNeptune,
    NeptuneLike,
    GasGiant,
}

impl PlanetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SubEarth => "Sub-Earth",
            Self::EarthSized => "Earth-sized",
            Self::SuperEarth => "Super-Earth",
            Self::SubNeptune => "Sub-Neptune",
            Self::NeptuneLike => "Neptune-like",
            Self::GasGiant => "Gas Giant",
        }
    }
}

impl fmt::Display for PlanetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlanetSubtype {
    HotJupiter,
    HotNeptune,
    LavaWorld,
    IceWorld,
    Rocky,
    DenseSuperEarth,
    SuperEarth,
    MiniNeptune,
    IceGiant,
    BrownDwarfCandidate,
    Jovian,
}

impl PlanetSubtype {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HotJupiter => "Hot Jupiter",
            Self::HotNeptune => "Hot Neptune",
            Self::LavaWorld => "Lava World",
            Self::IceWorld => "Ice World",
            Self::Rocky => "Rocky",
            Self::DenseSuperEarth => "Dense Super-Earth",
            Self::SuperEarth => "Super-Earth",
            Self::MiniNeptune => "Mini-Neptune",
            Self::IceGiant => "Ice Giant",
            Self::BrownDwarfCandidate => "Brown Dwarf Candidate",
            Self::Jovian => "Jovian",
        }
    }
}

impl fmt::Display for PlanetSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Equilibrium temperature [K] above which irradiation decides the subtype.
const HOT_PLANET_K: f64 = 1_000.0;
/// Small planets colder than this [K] are ice worlds rather than rocky.
const ICE_WORLD_K: f64 = 220.0;
/// Roughly 13 Jupiter masses, in Earth masses: the deuterium-burning limit.
const BROWN_DWARF_EARTH_MASSES: f64 = 4_000.0;

/// Type from radius [Earth radii]; every upper bound is exclusive.
pub fn planet_type(radius: Option<f64>) -> Option<PlanetType> {
    let r = radius?;
    let kind = if r < 1.0 {
        PlanetType::SubEarth
    } else if r < 1.25 {
        PlanetType::EarthSized
    } else if r < 2.0 {
        PlanetType::SuperEarth
    } else if r < 4.0 {
        PlanetType::SubNeptune
    } else if r < 10.0 {
        PlanetType::NeptuneLike
    } else {
        PlanetType::GasGiant
    };
    Some(kind)
}

/// Subtype from radius [Earth radii], mass [Earth masses] and equilibrium temperature [K].
///
/// Temperature is checked first: a strongly irradiated planet is classed by
/// that regardless of what its size alone would suggest.
pub fn planet_subtype(
    radius: Option<f64>,
    mass: Option<f64>,
    temperature: Option<f64>,
) -> Option<PlanetSubtype> {
    let r = radius?;

    if let Some(t) = temperature {
        if t > HOT_PLANET_K {
            return Some(if r > 10.0 {
                PlanetSubtype::HotJupiter
            } else if r > 4.0 {
                PlanetSubtype::HotNeptune
            } else {
                PlanetSubtype::LavaWorld
            });
        }
        if t < ICE_WORLD_K && r < 2.0 {
            return Some(PlanetSubtype::IceWorld);
        }
    }

    let heavier_than = |limit: f64| mass.is_some_and(|m| m > limit);

    let subtype = if r < 1.25 {
        PlanetSubtype::Rocky
    } else if r < 2.0 {
        if heavier_than(5.0) {
            PlanetSubtype::DenseSuperEarth
        } else {
            PlanetSubtype::SuperEarth
        }
    } else if r < 4.0 {
        PlanetSubtype::MiniNeptune
    } else if r < 10.0 {
        PlanetSubtype::IceGiant
    } else if heavier_than(BROWN_DWARF_EARTH_MASSES) {
        PlanetSubtype::BrownDwarfCandidate
    } else {
        PlanetSubtype::Jovian
    };
    Some(subtype)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_type_boundaries_fall_into_larger_class() {
        let cases = [
            (0.99, PlanetType::SubEarth),
            (1.0, PlanetType::EarthSized),
            (1.25, PlanetType::SuperEarth),
            (2.0, PlanetType::SubNeptune),
            (4.0, PlanetType::NeptuneLike),
            (10.0, PlanetType::GasGiant),
            (25.0, PlanetType::GasGiant),
        ];
        for (radius, expected) in cases {
            assert_eq!(planet_type(Some(radius)), Some(expected), "radius {radius}");
        }
        assert_eq!(planet_type(None), None);
    }

    #[test]
    fn test_hot_subtypes() {
        assert_eq!(
            planet_subtype(Some(13.0), Some(300.0), Some(1_500.0)),
            Some(PlanetSubtype::HotJupiter)
        );
        assert_eq!(
            planet_subtype(Some(5.0), None, Some(1_200.0)),
            Some(PlanetSubtype::HotNeptune)
        );
        assert_eq!(
            planet_subtype(Some(1.4), Some(8.0), Some(2_000.0)),
            Some(PlanetSubtype::LavaWorld)
        );
        // Exactly 1000 K is not hot
        assert_eq!(
            planet_subtype(Some(13.0), None, Some(1_000.0)),
            Some(PlanetSubtype::Jovian)
        );
    }

    #[test]
    fn test_ice_world_needs_small_radius() {
        assert_eq!(
            planet_subtype(Some(1.0), None, Some(200.0)),
            Some(PlanetSubtype::IceWorld)
        );
        assert_eq!(
            planet_subtype(Some(2.0), None, Some(200.0)),
            Some(PlanetSubtype::MiniNeptune)
        );
        assert_eq!(
            planet_subtype(Some(1.0), None, Some(220.0)),
            Some(PlanetSubtype::Rocky)
        );
    }

    #[test]
    fn test_mass_refines_temperate_subtypes() {
        assert_eq!(
            planet_subtype(Some(1.5), Some(6.0), None),
            Some(PlanetSubtype::DenseSuperEarth)
        );
        assert_eq!(
            planet_subtype(Some(1.5), Some(5.0), None),
            Some(PlanetSubtype::SuperEarth)
        );
        assert_eq!(
            planet_subtype(Some(1.5), None, None),
            Some(PlanetSubtype::SuperEarth)
        );
        assert_eq!(
            planet_subtype(Some(11.0), Some(5_000.0), Some(150.0)),
            Some(PlanetSubtype::BrownDwarfCandidate)
        );
        assert_eq!(
            planet_subtype(Some(11.0), Some(318.0), Some(150.0)),
            Some(PlanetSubtype::Jovian)
        );
        assert_eq!(
            planet_subtype(Some(6.0), None, Some(400.0)),
            Some(PlanetSubtype::IceGiant)
        );
    }

    #[test]
    fn test_subtype_unknown_without_radius() {
        assert_eq!(planet_subtype(None, Some(1.0), Some(1_500.0)), None);
    }

    #[test]
    fn test_display_strings() {
        assert_eq!(PlanetType::GasGiant.to_string(), "Gas Giant");
        assert_eq!(
            PlanetSubtype::BrownDwarfCandidate.to_string(),
            "Brown Dwarf Candidate"
        );
    }

    proptest! {
        #[test]
        fn type_is_known_for_every_radius(radius in proptest::num::f64::NORMAL) {
            prop_assert!(planet_type(Some(radius)).is_some());
        }

        #[test]
        fn subtype_is_known_whenever_type_is(
            radius in 0.0f64..40.0,
            mass in proptest::option::of(0.0f64..10_000.0),
            temp in proptest::option::of(0.0f64..4_000.0),
        ) {
            prop_assert!(planet_subtype(Some(radius), mass, temp).is_some());
        }
    }
}
