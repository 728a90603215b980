//! Stellar classification from spectral type, falling back to effective temperature.

use serde::Serialize;
use std::fmt;

/// Harvard spectral class, extended with the brown-dwarf classes L, T and Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum StarClass {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
    L,
    T,
    Y,
}

/// Lower temperature bound (inclusive, Kelvin) of each class, hottest first.
/// Anything below the last bound is class Y.
const TEMPERATURE_BANDS: [(f64, StarClass); 9] = [
    (30_000.0, StarClass::O),
    (10_000.0, StarClass::B),
    (7_500.0, StarClass::A),
    (6_000.0, StarClass::F),
    (5_200.0, StarClass::G),
    (3_700.0, StarClass::K),
    (2_400.0, StarClass::M),
    (1_300.0, StarClass::L),
    (550.0, StarClass::T),
];

impl StarClass {
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'O' => Some(Self::O),
            'B' => Some(Self::B),
            'A' => Some(Self::A),
            'F' => Some(Self::F),
            'G' => Some(Self::G),
            'K' => Some(Self::K),
            'M' => Some(Self::M),
            'L' => Some(Self::L),
            'T' => Some(Self::T),
            'Y' => Some(Self::Y),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::O => "O",
            Self::B => "B",
            Self::A => "A",
            Self::F => "F",
            Self::G => "G",
            Self::K => "K",
            Self::M => "M",
            Self::L => "L",
            Self::T => "T",
            Self::Y => "Y",
        }
    }

    /// F, G or K: the broad sun-like range.
    pub fn is_sun_like(self) -> bool {
        matches!(self, Self::F | Self::G | Self::K)
    }
}

impl fmt::Display for StarClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Class from the leading letter of a spectral type such as `"G2V"` or `"m8"`.
pub fn class_from_spectral_type(spectral_type: &str) -> Option<StarClass> {
    spectral_type
        .trim()
        .chars()
        .next()
        .and_then(|c| StarClass::from_letter(c.to_ascii_uppercase()))
}

/// Class from effective temperature; total over every temperature.
pub fn class_from_temperature(kelvin: f64) -> StarClass {
    TEMPERATURE_BANDS
        .iter()
        .find(|(lower, _)| kelvin >= *lower)
        .map_or(StarClass::Y, |(_, class)| *class)
}

/// Spectral type wins whenever it names a recognised class.
pub fn star_class(spectral_type: Option<&str>, effective_temp: Option<f64>) -> Option<StarClass> {
    spectral_type
        .and_then(class_from_spectral_type)
        .or_else(|| effective_temp.map(class_from_temperature))
}
