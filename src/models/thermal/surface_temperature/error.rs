use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::Power;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while solving for a surface temperature.
#[derive(Debug, Error)]
pub enum SurfaceTemperatureError {
    /// An input violated a physical constraint.
    #[error("invalid input: {0}")]
    Constraint(#[from] ConstraintError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best heat balance residual achieved.
        residual: Power,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
