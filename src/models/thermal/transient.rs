//! First-order thermal response of a lumped mass.
//!
//! A body of thermal mass `C` is coupled to ambient through a resistance `R`
//! and heated by a constant `Q`. Its temperature relaxes exponentially from the
//! initial value toward `T_ambient + Q·R` with time constant `τ = R·C`.
//!
//! This is the usual model for estimating how long an optical module takes
//! to reach thermal equilibrium after power-on.

use twine_core::Model;
use uom::si::{
    f64::{HeatCapacity, Power, ThermodynamicTemperature, Time},
    ratio::ratio,
};

use crate::support::{
    constraint::{
        Constrained, Constraint, ConstraintError, ConstraintResult, NonNegative, StrictlyPositive,
    },
    units::{TemperatureDifference, ThermalResistance},
};

/// Exponential approach of a lumped thermal mass to steady state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirstOrderResponse {
    initial_temp: ThermodynamicTemperature,
    ambient_temp: ThermodynamicTemperature,
    thermal_mass: HeatCapacity,
    thermal_resistance: ThermalResistance,
    heat_input: Power,
}

impl FirstOrderResponse {
    #[must_use]
    pub fn new(
        initial_temp: ThermodynamicTemperature,
        ambient_temp: ThermodynamicTemperature,
        thermal_mass: Constrained<HeatCapacity, StrictlyPositive>,
        thermal_resistance: Constrained<ThermalResistance, StrictlyPositive>,
        heat_input: Power,
    ) -> Self {
        Self {
            initial_temp,
            ambient_temp,
            thermal_mass: thermal_mass.into_inner(),
            thermal_resistance: thermal_resistance.into_inner(),
            heat_input,
        }
    }

    /// Time constant `τ = R·C`.
    #[must_use]
    pub fn time_constant(&self) -> Time {
        self.thermal_mass * self.thermal_resistance
    }

    /// Temperature approached as `t → ∞`, `T_ambient + Q·R`.
    #[must_use]
    pub fn steady_state(&self) -> ThermodynamicTemperature {
        self.ambient_temp + self.heat_input * self.thermal_resistance
    }

    /// Temperature at elapsed time `t`.
    ///
    /// `T(t) = T_ss + (T_0 − T_ss)·exp(−t/τ)`. Only meaningful for `t ≥ 0`;
    /// [`response`](Self::response) and the [`Model`] adapter enforce this.
    #[must_use]
    pub fn temperature_at(&self, time: Time) -> ThermodynamicTemperature {
        let steady = self.steady_state();
        let decay = (-(time / self.time_constant()).get::<ratio>()).exp();
        steady + self.initial_temp.minus(steady) * decay
    }

    /// Temperatures at each of `times`, in the same order.
    ///
    /// # Errors
    ///
    /// Returns an error if any time is negative or `NaN`.
    pub fn response(&self, times: &[Time]) -> ConstraintResult<Vec<ThermodynamicTemperature>> {
        times
            .iter()
            .map(|time| {
                NonNegative::check(time)?;
                Ok(self.temperature_at(*time))
            })
            .collect()
    }
}

impl Model for FirstOrderResponse {
    type Input = Time;
    type Output = ThermodynamicTemperature;
    type Error = ConstraintError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        NonNegative::check(input)?;
        Ok(self.temperature_at(*input))
    }
}
