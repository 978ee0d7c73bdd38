//! Heat-sink sizing correlations.
//!
//! Empirical convection coefficients for air and the efficiency of a straight
//! rectangular fin. The correlations are dimensional: they take SI inputs and
//! are only meaningful for air near room temperature.

mod convection_coefficient;
mod fin;

pub use convection_coefficient::{forced_convection_coefficient, natural_convection_coefficient};
pub use fin::{FinEfficiency, fin_efficiency};
