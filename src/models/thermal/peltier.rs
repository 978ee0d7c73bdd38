//! Thermoelectric (Peltier) cooler model.
//!
//! Performance is interpolated from the four datasheet constants `Qmax`,
//! `ΔTmax`, `Imax` and `Vmax`, with no temperature dependence of the
//! Seebeck coefficient or resistance. This is adequate for sizing a cooler and
//! choosing its drive current, not for predicting a specific unit's behavior.
//!
//! [`PeltierModule`] exposes each quantity on its own and also implements
//! [`twine_core::Model`], mapping an [`OperatingPoint`] to a
//! [`PeltierPerformance`]:
//!
//! ```
//! use optotherm::models::thermal::peltier::{OperatingPoint, PeltierModule};
//! use twine_core::Model;
//! use uom::si::{
//!     f64::{ElectricCurrent, ElectricPotential, Power, TemperatureInterval},
//!     electric_current::ampere,
//!     electric_potential::volt,
//!     power::watt,
//!     temperature_interval::kelvin,
//! };
//!
//! let module = PeltierModule::new(
//!     Power::new::<watt>(25.0),
//!     TemperatureInterval::new::<kelvin>(70.0),
//!     ElectricCurrent::new::<ampere>(4.0),
//!     ElectricPotential::new::<volt>(15.4),
//! )
//! .unwrap();
//!
//! let performance = module
//!     .call(&OperatingPoint {
//!         delta_t: TemperatureInterval::new::<kelvin>(30.0),
//!         current: ElectricCurrent::new::<ampere>(3.0),
//!     })
//!     .unwrap();
//!
//! assert!((performance.electrical_power.get::<watt>() - 49.5).abs() < 1e-9);
//! assert!(performance.cop > 0.0 && performance.cop < 0.1);
//! ```

mod core;

use std::convert::Infallible;

use twine_core::Model;

pub use self::core::{OperatingPoint, PeltierModule, PeltierParametersError, PeltierPerformance};

impl Model for PeltierModule {
    type Input = OperatingPoint;
    type Output = PeltierPerformance;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.performance(*input))
    }
}
