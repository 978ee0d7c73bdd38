//! Extensions to [`uom`].
//!
//! Every physical quantity in this crate is a [`uom`] quantity. This module
//! adds the few pieces the formulas need that [`uom`] does not name:
//!
//! - [`ThermalResistance`] (K/W), the quantity thermal networks are built from.
//! - [`TemperatureCoefficient`] (1/K), for thermal expansion and `dn/dT`.
//! - [`TemperatureDifference`], for subtracting absolute temperatures.
//!
//! Neither alias has a unit module of its own, so values are built with
//! [`kelvin_per_watt`] and [`per_kelvin`] and read back in SI through the
//! `value` field:
//!
//! ```
//! use optotherm::support::units::{kelvin_per_watt, per_kelvin};
//!
//! let r = kelvin_per_watt(2.5);
//! assert_eq!(r.value, 2.5);
//!
//! let alpha = per_kelvin(23.6e-6);
//! assert_eq!(alpha.value, 23.6e-6);
//! ```

mod temperature_difference;

use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Power, TemperatureInterval},
        power::watt,
        temperature_interval::kelvin as delta_kelvin,
    },
    typenum::{N1, N2, P1, P3, Z0},
};

pub use temperature_difference::TemperatureDifference;

/// Thermal resistance, K/W in SI.
///
/// Resistances in series add, so a network total is `r1 + r2 + ...`.
pub type ThermalResistance = Quantity<ISQ<N2, N1, P3, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Temperature coefficient, 1/K in SI.
///
/// Used for linear thermal expansion coefficients and thermo-optic
/// coefficients (`dn/dT`).
pub type TemperatureCoefficient = Quantity<ISQ<Z0, Z0, Z0, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Creates a [`ThermalResistance`] from a value in kelvin per watt.
#[must_use]
pub fn kelvin_per_watt(value: f64) -> ThermalResistance {
    TemperatureInterval::new::<delta_kelvin>(value) / Power::new::<watt>(1.0)
}

/// Creates a [`TemperatureCoefficient`] from a value per kelvin.
#[must_use]
pub fn per_kelvin(value: f64) -> TemperatureCoefficient {
    TemperatureInterval::new::<delta_kelvin>(1.0).recip() * value
}
