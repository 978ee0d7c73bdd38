use uom::si::f64::{Area, HeatTransfer, Power, TemperatureInterval};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    units::ThermalResistance,
};

/// Convective heat flow from a surface, `Q = h·A·ΔT`.
#[must_use]
pub fn convection(h: HeatTransfer, area: Area, temp_diff: TemperatureInterval) -> Power {
    h * area * temp_diff
}

/// Convection film resistance, `R = 1 / (h·A)`.
#[must_use]
pub fn convection_resistance(
    h: Constrained<HeatTransfer, StrictlyPositive>,
    area: Constrained<Area, StrictlyPositive>,
) -> ThermalResistance {
    (h.into_inner() * area.into_inner()).recip()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter, heat_transfer::watt_per_square_meter_kelvin, power::watt,
        temperature_interval::kelvin as delta_kelvin,
    };

    use crate::support::constraint::ConstraintResult;

    #[test]
    fn natural_convection_off_a_small_plate() {
        let q = convection(
            HeatTransfer::new::<watt_per_square_meter_kelvin>(10.0),
            Area::new::<square_meter>(0.01),
            TemperatureInterval::new::<delta_kelvin>(30.0),
        );

        assert_relative_eq!(q.get::<watt>(), 3.0, max_relative = 1e-15);
    }

    #[test]
    fn film_resistance_is_reciprocal_conductance() -> ConstraintResult<()> {
        let h = HeatTransfer::new::<watt_per_square_meter_kelvin>(25.0);
        let area = Area::new::<square_meter>(0.02);

        let r = convection_resistance(StrictlyPositive::new(h)?, StrictlyPositive::new(area)?);

        assert_relative_eq!(r.value, 2.0, max_relative = 1e-15);

        // The resistance form reproduces the heat flow form.
        let delta_t = TemperatureInterval::new::<delta_kelvin>(12.0);
        let q: Power = delta_t / r;
        assert_relative_eq!(q.get::<watt>(), convection(h, area, delta_t).get::<watt>());
        Ok(())
    }
}
