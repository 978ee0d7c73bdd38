use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Power, TemperatureInterval},
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
};

/// How tightly [`surface_temperature`](super::surface_temperature) balances
/// rejected heat against dissipated heat.
///
/// The search stops as soon as either tolerance is met, or gives up after
/// `max_iters` halvings of the temperature bracket.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceTemperatureConfig {
    /// Bracket halvings allowed before the solve is abandoned.
    pub max_iters: usize,

    /// Width of the surface temperature bracket considered converged.
    pub temp_tol: TemperatureInterval,

    /// Largest acceptable gap between convective plus radiative loss and the
    /// dissipated power.
    pub power_tol: Power,
}

impl Default for SurfaceTemperatureConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-9),
            power_tol: Power::new::<watt>(1e-9),
        }
    }
}

impl SurfaceTemperatureConfig {
    /// Solver settings in the raw kelvin and watt values bisection works on.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.temp_tol.get::<delta_kelvin>(),
            x_rel_tol: 0.0,
            residual_tol: self.power_tol.get::<watt>(),
        }
    }
}
