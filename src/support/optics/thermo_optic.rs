use uom::si::f64::{Length, TemperatureInterval};

use crate::support::units::TemperatureCoefficient;

/// Focal shift of a lens whose index changes with temperature,
/// `Δf = f · (dn/dT) · ΔT`.
///
/// This is the first-order index term only. Add [`thermal_expansion`] of the
/// mount for the full thermal defocus budget.
#[must_use]
pub fn thermal_focal_shift(
    focal_length: Length,
    dn_dt: TemperatureCoefficient,
    temp_change: TemperatureInterval,
) -> Length {
    focal_length * dn_dt * temp_change
}

/// Linear thermal expansion, `ΔL = L · α · ΔT`.
#[must_use]
pub fn thermal_expansion(
    length: Length,
    alpha: TemperatureCoefficient,
    temp_change: TemperatureInterval,
) -> Length {
    length * alpha * temp_change
}
