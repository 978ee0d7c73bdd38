//! Thermal models of optical module hardware.
//!
//! - [`peltier`]: Datasheet model of a thermoelectric cooler.
//! - [`transient`]: First-order warm-up of a lumped thermal mass.
//! - [`surface_temperature`]: Steady temperature of a surface rejecting a heat
//!   load to still air.

pub mod peltier;
pub mod surface_temperature;
pub mod transient;
