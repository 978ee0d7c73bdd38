use std::ops::Deref;

use uom::si::{
    area::square_meter,
    f64::{Area, Power, Ratio, ThermodynamicTemperature},
    power::watt,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative, UnitInterval};

/// Stefan–Boltzmann constant, in W/(m²·K⁴).
pub const STEFAN_BOLTZMANN: f64 = 5.67e-8;

/// Surface emissivity, constrained to `0 ≤ ε ≤ 1`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Emissivity(Constrained<Ratio, UnitInterval>);

impl Emissivity {
    /// Creates an emissivity from a dimensionless value.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is outside `[0, 1]` or is `NaN`.
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Creates an emissivity from a [`Ratio`].
    ///
    /// # Errors
    ///
    /// Returns an error if the ratio is outside `[0, 1]` or is `NaN`.
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(quantity)?))
    }

    /// A black body, `ε = 1`.
    #[must_use]
    pub fn black_body() -> Self {
        Self::new(1.0).expect("one is in the unit interval")
    }
}

impl Deref for Emissivity {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Net radiative exchange between a surface and its surroundings.
///
/// `Q = ε·σ·A·(T_hot⁴ − T_cold⁴)`, evaluated in kelvin. The result is negative
/// when `temp_hot` is in fact the colder of the two.
///
/// # Errors
///
/// Returns a [`ConstraintError`](crate::support::constraint::ConstraintError)
/// if either temperature is below absolute zero.
pub fn radiation(
    emissivity: Emissivity,
    area: Area,
    temp_hot: ThermodynamicTemperature,
    temp_cold: ThermodynamicTemperature,
) -> ConstraintResult<Power> {
    let t_hot = NonNegative::new(temp_hot.get::<kelvin>())?.into_inner();
    let t_cold = NonNegative::new(temp_cold.get::<kelvin>())?.into_inner();

    Ok(Power::new::<watt>(
        emissivity.get::<ratio>()
            * STEFAN_BOLTZMANN
            * area.get::<square_meter>()
            * (t_hot.powi(4) - t_cold.powi(4)),
    ))
}
