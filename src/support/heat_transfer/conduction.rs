use uom::si::f64::{Area, Length, Power, TemperatureInterval, ThermalConductivity};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    units::ThermalResistance,
};

/// One-dimensional steady conduction through a slab, `Q = k·A·ΔT / L`.
///
/// A zero-length slab is rejected when `length` is constrained, rather than
/// producing an infinite heat flow.
#[must_use]
pub fn conduction(
    k: ThermalConductivity,
    area: Area,
    temp_diff: TemperatureInterval,
    length: Constrained<Length, StrictlyPositive>,
) -> Power {
    k * area * temp_diff / length.into_inner()
}

/// Conduction resistance of a slab, `R = L / (k·A)`.
#[must_use]
pub fn conduction_resistance(
    length: Length,
    k: Constrained<ThermalConductivity, StrictlyPositive>,
    area: Constrained<Area, StrictlyPositive>,
) -> ThermalResistance {
    length / (k.into_inner() * area.into_inner())
}
