//! Problem formulation for the surface heat balance.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::{
    ConstZero,
    si::{
        f64::{HeatTransfer, Power, ThermodynamicTemperature},
        power::watt,
        thermodynamic_temperature::kelvin,
    },
};

use crate::support::{
    constraint::{Constraint, ConstraintError, ConstraintResult, NonNegative, StrictlyPositive},
    heat_sink::natural_convection_coefficient,
    heat_transfer::{convection, radiation},
    units::TemperatureDifference,
};

use super::{Surface, SurfaceEquilibrium};

/// Evaluates the heat a [`Surface`] rejects at a trial temperature.
#[derive(Debug, Clone, Copy)]
pub(super) struct SurfaceBalance {
    surface: Surface,
    ambient: ThermodynamicTemperature,
}

impl SurfaceBalance {
    pub(super) fn new(
        surface: Surface,
        ambient: ThermodynamicTemperature,
    ) -> ConstraintResult<Self> {
        NonNegative::check(&ambient.get::<kelvin>())?;
        Ok(Self { surface, ambient })
    }

    /// Heat balance with the surface at `temperature`.
    ///
    /// Below ambient there is no natural convection plume, so `h` is zero.
    pub(super) fn at(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> ConstraintResult<SurfaceEquilibrium> {
        let area = *self.surface.area.as_ref();
        let rise = temperature.minus(self.ambient);

        let h = match StrictlyPositive::new(rise) {
            Ok(rise) => natural_convection_coefficient(rise, self.surface.characteristic_length),
            Err(_) => HeatTransfer::ZERO,
        };

        Ok(SurfaceEquilibrium {
            temperature,
            convection: convection(h, area, rise),
            radiation: radiation(self.surface.emissivity, area, temperature, self.ambient)?,
            heat_transfer_coefficient: h,
        })
    }
}

impl Model for SurfaceBalance {
    type Input = ThermodynamicTemperature;
    type Output = SurfaceEquilibrium;
    type Error = ConstraintError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.at(*input)
    }
}

/// Residual `rejected − dissipated`, in watts.
pub(super) struct SurfaceBalanceProblem {
    dissipated: Power,
}

impl SurfaceBalanceProblem {
    pub(super) fn new(dissipated: Power) -> Self {
        Self { dissipated }
    }
}

impl EquationProblem<1> for SurfaceBalanceProblem {
    type Input = ThermodynamicTemperature;
    type Output = SurfaceEquilibrium;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(ThermodynamicTemperature::new::<kelvin>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([(output.rejected() - self.dissipated).get::<watt>()])
    }
}
