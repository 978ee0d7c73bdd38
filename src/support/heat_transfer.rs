//! Steady-state heat transfer and thermal resistance.
//!
//! The three transfer modes each have a formula for the heat flow they carry:
//!
//! - [`conduction`]: Fourier's law through a uniform slab, `Q = k·A·ΔT / L`
//! - [`convection`]: Newton's law of cooling, `Q = h·A·ΔT`
//! - [`radiation`]: Stefan–Boltzmann exchange with surroundings,
//!   `Q = ε·σ·A·(T_hot⁴ − T_cold⁴)`
//!
//! Conduction and convection also have resistance forms
//! ([`conduction_resistance`], [`convection_resistance`]) for building thermal
//! networks. Resistances in series add:
//!
//! ```
//! use optotherm::support::{
//!     constraint::{ConstraintResult, StrictlyPositive},
//!     heat_transfer::{conduction_resistance, convection_resistance},
//!     material::Material,
//! };
//! use uom::si::{
//!     f64::{Area, HeatTransfer, Length},
//!     area::square_meter,
//!     heat_transfer::watt_per_square_meter_kelvin,
//!     length::millimeter,
//! };
//!
//! fn main() -> ConstraintResult<()> {
//!     let area = StrictlyPositive::new(Area::new::<square_meter>(1e-3))?;
//!     let k = StrictlyPositive::new(Material::Aluminum.properties().thermal_conductivity())?;
//!     let h = StrictlyPositive::new(HeatTransfer::new::<watt_per_square_meter_kelvin>(10.0))?;
//!
//!     let wall = conduction_resistance(Length::new::<millimeter>(5.0), k, area);
//!     let film = convection_resistance(h, area);
//!     let total = wall + film;
//!
//!     assert!(total > film);
//!     Ok(())
//! }
//! ```

mod conduction;
mod convection;
mod radiation;

pub use conduction::{conduction, conduction_resistance};
pub use convection::{convection, convection_resistance};
pub use radiation::{Emissivity, STEFAN_BOLTZMANN, radiation};
