use uom::si::{
    f64::{HeatTransfer, Length, TemperatureInterval, Velocity},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    temperature_interval::kelvin,
    velocity::meter_per_second,
};

use crate::support::constraint::{Constrained, NonNegative, StrictlyPositive};

/// Natural convection coefficient for a vertical plate in still air.
///
/// Uses the simplified laminar correlation `h = 1.42·(ΔT/L)^¼`, with `ΔT` in
/// kelvin and `L` the plate height in metres.
#[must_use]
pub fn natural_convection_coefficient(
    temp_diff: Constrained<TemperatureInterval, StrictlyPositive>,
    length: Constrained<Length, StrictlyPositive>,
) -> HeatTransfer {
    let ratio = temp_diff.into_inner().get::<kelvin>() / length.into_inner().get::<meter>();
    HeatTransfer::new::<watt_per_square_meter_kelvin>(1.42 * ratio.powf(0.25))
}

/// Forced convection coefficient for air flowing over a surface.
///
/// Uses the empirical fit `h = 10.45 − v + 10·√v`, with `v` in m/s. The fit is
/// intended for velocities up to about 20 m/s.
///
/// The characteristic length does not enter the fit. It is accepted so the
/// natural and forced correlations can be called interchangeably.
#[must_use]
pub fn forced_convection_coefficient(
    velocity: Constrained<Velocity, NonNegative>,
    _length: Length,
) -> HeatTransfer {
    let v = velocity.into_inner().get::<meter_per_second>();
    HeatTransfer::new::<watt_per_square_meter_kelvin>(10.45 - v + 10.0 * v.sqrt())
}
