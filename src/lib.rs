//! # Optotherm
//!
//! Opto-thermal calculation models for optical module design: heat transfer
//! through mounts and housings, thermoelectric (Peltier) cooling, heat-sink
//! sizing, transient warm-up, paraxial optics, and post-processing of
//! measurement data.
//!
//! ## Crate layout
//!
//! - [`models`]: Thermal models exposed through [`twine_core::Model`] adapters.
//! - [`support`]: Stateless calculation toolkits and supporting utilities.
//!
//! All physical quantities use [`uom`], so the unit bookkeeping that the
//! formulas depend on (kelvin for radiation, metres for correlations, and so
//! on) is handled by the type system rather than by caller discipline.
//!
//! ## Example
//!
//! ```
//! use optotherm::models::thermal::peltier::PeltierModule;
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
//! let cooling = module.cooling_power(
//!     TemperatureInterval::new::<kelvin>(30.0),
//!     ElectricCurrent::new::<ampere>(3.0),
//! );
//! assert!((cooling.get::<watt>() - 1.875).abs() < 1e-12);
//! ```

pub mod models;
pub mod support;
