use thiserror::Error;
use uom::{
    ConstZero,
    si::{
        electric_current::ampere,
        f64::{ElectricCurrent, ElectricPotential, Power, TemperatureInterval},
        power::watt,
        temperature_interval::kelvin as delta_kelvin,
    },
};

use crate::support::constraint::{Constraint, StrictlyPositive};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PeltierParametersError {
    #[error("invalid qmax: {qmax:?}")]
    Qmax { qmax: Power },
    #[error("invalid delta_tmax: {delta_tmax:?}")]
    DeltaTmax { delta_tmax: TemperatureInterval },
    #[error("invalid imax: {imax:?}")]
    Imax { imax: ElectricCurrent },
    #[error("invalid vmax: {vmax:?}")]
    Vmax { vmax: ElectricPotential },
}

/// A thermoelectric module described by its datasheet maxima.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeltierModule {
    qmax: Power,
    delta_tmax: TemperatureInterval,
    imax: ElectricCurrent,
    vmax: ElectricPotential,
}

/// Where a [`PeltierModule`] is operated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    /// Hot side minus cold side temperature.
    pub delta_t: TemperatureInterval,
    pub current: ElectricCurrent,
}

/// Performance of a [`PeltierModule`] at an [`OperatingPoint`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeltierPerformance {
    /// Heat pumped from the cold side.
    pub cooling_power: Power,
    pub voltage: ElectricPotential,
    pub electrical_power: Power,
    /// Coefficient of performance, cooling power over electrical power.
    pub cop: f64,
}

impl PeltierModule {
    /// Creates a module from its datasheet constants.
    ///
    /// # Errors
    ///
    /// Returns a [`PeltierParametersError`] naming the first constant that is
    /// not strictly positive.
    pub fn new(
        qmax: Power,
        delta_tmax: TemperatureInterval,
        imax: ElectricCurrent,
        vmax: ElectricPotential,
    ) -> Result<Self, PeltierParametersError> {
        if StrictlyPositive::check(&qmax.value).is_err() {
            return Err(PeltierParametersError::Qmax { qmax });
        }
        if StrictlyPositive::check(&delta_tmax.value).is_err() {
            return Err(PeltierParametersError::DeltaTmax { delta_tmax });
        }
        if StrictlyPositive::check(&imax.value).is_err() {
            return Err(PeltierParametersError::Imax { imax });
        }
        if StrictlyPositive::check(&vmax.value).is_err() {
            return Err(PeltierParametersError::Vmax { vmax });
        }

        Ok(Self {
            qmax,
            delta_tmax,
            imax,
            vmax,
        })
    }

    #[must_use]
    pub fn qmax(&self) -> Power {
        self.qmax
    }

    #[must_use]
    pub fn delta_tmax(&self) -> TemperatureInterval {
        self.delta_tmax
    }

    #[must_use]
    pub fn imax(&self) -> ElectricCurrent {
        self.imax
    }

    #[must_use]
    pub fn vmax(&self) -> ElectricPotential {
        self.vmax
    }

    /// Heat pumped from the cold side.
    ///
    /// `Qc = Qmax·x − ΔTmax·x²·(ΔT/ΔTmax)` with `x = I/Imax`, where the loss
    /// term takes the magnitude of `ΔTmax` in kelvin as watts. Operating points
    /// where the losses exceed the pumped heat return zero rather than a
    /// negative cooling power.
    #[must_use]
    pub fn cooling_power(&self, delta_t: TemperatureInterval, current: ElectricCurrent) -> Power {
        let x = self.load_fraction(current);
        let dt_max = self.delta_tmax.get::<delta_kelvin>();
        let dt_fraction = delta_t.get::<delta_kelvin>() / dt_max;

        let qc = self.qmax.get::<watt>() * x - dt_max * x * x * dt_fraction;
        if qc < 0.0 {
            log::trace!(
                "cooling power {qc:.3} W clamped to zero at ΔT = {delta_t:?}, I = {current:?}"
            );
            return Power::ZERO;
        }
        Power::new::<watt>(qc)
    }

    /// Terminal voltage, `V = Vmax·x·(1 + ΔT/ΔTmax)`.
    #[must_use]
    pub fn voltage(
        &self,
        delta_t: TemperatureInterval,
        current: ElectricCurrent,
    ) -> ElectricPotential {
        let dt_fraction = (delta_t / self.delta_tmax).value;
        self.vmax * self.load_fraction(current) * (1.0 + dt_fraction)
    }

    /// Electrical input power, `P = V·I`.
    #[must_use]
    pub fn electrical_power(
        &self,
        delta_t: TemperatureInterval,
        current: ElectricCurrent,
    ) -> Power {
        self.voltage(delta_t, current) * current
    }

    /// Coefficient of performance, `COP = Qc / P`.
    ///
    /// Zero when the module draws no electrical power.
    #[must_use]
    pub fn cop(&self, delta_t: TemperatureInterval, current: ElectricCurrent) -> f64 {
        let power = self.electrical_power(delta_t, current);
        if power <= Power::ZERO {
            return 0.0;
        }
        (self.cooling_power(delta_t, current) / power).value
    }

    /// All performance quantities at one operating point.
    #[must_use]
    pub fn performance(&self, point: OperatingPoint) -> PeltierPerformance {
        let OperatingPoint { delta_t, current } = point;
        PeltierPerformance {
            cooling_power: self.cooling_power(delta_t, current),
            voltage: self.voltage(delta_t, current),
            electrical_power: self.electrical_power(delta_t, current),
            cop: self.cop(delta_t, current),
        }
    }

    fn load_fraction(&self, current: ElectricCurrent) -> f64 {
        current.get::<ampere>() / self.imax.get::<ampere>()
    }
}
