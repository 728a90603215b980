use serde::Serialize;

/// Heliocentric position in parsecs; each axis independently unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Position {
    pub x_pc: Option<f64>,
    pub y_pc: Option<f64>,
    pub z_pc: Option<f64>,
}

/// Scales the archive's unit direction vector by the system distance.
///
/// Without a distance nothing is known. With one, each axis resolves on its
/// own, so a missing `y` does not hide a known `x`.
pub fn resolve_position(
    direction: (Option<f64>, Option<f64>, Option<f64>),
    distance_pc: Option<f64>,
) -> Position {
    let Some(distance) = distance_pc else {
        return Position::default();
    };
    let (x, y, z) = direction;
    Position {
        x_pc: x.map(|c| c * distance),
        y_pc: y.map(|c| c * distance),
        z_pc: z.map(|c| c * distance),
    }
}
