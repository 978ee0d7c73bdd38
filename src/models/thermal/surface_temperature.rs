//! Steady temperature of a surface cooled by still air.
//!
//! A surface dissipating a known heat load rejects it by natural convection
//! and by radiation to its surroundings. Because the convection coefficient
//! depends on the temperature rise and radiation is quartic in temperature,
//! the balance
//!
//! `h(T − Ta)·A·(T − Ta) + ε·σ·A·(T⁴ − Ta⁴) = Q`
//!
//! has no closed-form solution. [`surface_temperature`] finds it by bisection
//! on the surface temperature.

mod config;
mod error;
mod problem;

pub use config::SurfaceTemperatureConfig;
pub use error::SurfaceTemperatureError;

use twine_solvers::equation::bisection;
use uom::{
    ConstZero,
    si::{
        area::square_meter,
        f64::{Area, HeatTransfer, Length, Power, TemperatureInterval, ThermodynamicTemperature},
        length::meter,
        power::watt,
        temperature_interval::kelvin as delta_kelvin,
        thermodynamic_temperature::kelvin,
    },
};

use crate::support::{
    constraint::{Constrained, NonNegative, StrictlyPositive},
    heat_transfer::Emissivity,
};

use problem::{SurfaceBalance, SurfaceBalanceProblem};

/// Bracket margin above the convection-only temperature rise.
const BRACKET_MARGIN: f64 = 1.01;

/// A surface rejecting heat to still air.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub area: Constrained<Area, StrictlyPositive>,
    /// Height of the plate, used by the natural convection correlation.
    pub characteristic_length: Constrained<Length, StrictlyPositive>,
    pub emissivity: Emissivity,
}

/// The heat balance of a [`Surface`] at a given temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceEquilibrium {
    pub temperature: ThermodynamicTemperature,
    /// Heat rejected by natural convection.
    pub convection: Power,
    /// Net heat radiated to the surroundings.
    pub radiation: Power,
    /// Natural convection coefficient at this temperature.
    pub heat_transfer_coefficient: HeatTransfer,
}

impl SurfaceEquilibrium {
    /// Total heat rejected.
    #[must_use]
    pub fn rejected(&self) -> Power {
        self.convection + self.radiation
    }
}

/// Finds the temperature at which `surface` rejects `dissipated` to air at
/// `ambient`.
///
/// The search is bracketed below by ambient and above by the temperature at
/// which convection alone would already reject the full load.
///
/// # Errors
///
/// Returns [`SurfaceTemperatureError`] if the ambient temperature is below
/// absolute zero, or if the solver fails to converge.
pub fn surface_temperature(
    surface: &Surface,
    dissipated: Constrained<Power, NonNegative>,
    ambient: ThermodynamicTemperature,
    config: SurfaceTemperatureConfig,
) -> Result<SurfaceEquilibrium, SurfaceTemperatureError> {
    let model = SurfaceBalance::new(*surface, ambient)?;
    let dissipated = dissipated.into_inner();

    if dissipated == Power::ZERO {
        return Ok(model.at(ambient)?);
    }

    let upper = ambient + convection_only_rise(surface, dissipated) * BRACKET_MARGIN;
    log::debug!(
        "surface temperature bracket [{:.3}, {:.3}] K for {:.3} W",
        ambient.get::<kelvin>(),
        upper.get::<kelvin>(),
        dissipated.get::<watt>()
    );

    let problem = SurfaceBalanceProblem::new(dissipated);

    let solution = bisection::solve(
        &model,
        &problem,
        [ambient.get::<kelvin>(), upper.get::<kelvin>()],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            if event.result().is_err() {
                return Some(bisection::Action::assume_positive());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(SurfaceTemperatureError::MaxIters {
            residual: Power::new::<watt>(solution.residual),
            iters: solution.iters,
        });
    }

    log::debug!(
        "surface temperature converged to {:.6} K in {} iterations",
        solution.snapshot.output.temperature.get::<kelvin>(),
        solution.iters
    );
    Ok(solution.snapshot.output)
}

/// Temperature rise at which natural convection alone rejects `dissipated`.
///
/// Inverting `1.42·(ΔT/L)^¼·A·ΔT = Q` gives `ΔT = (Q·L^¼ / (1.42·A))^0.8`.
fn convection_only_rise(surface: &Surface, dissipated: Power) -> TemperatureInterval {
    let area = surface.area.as_ref().get::<square_meter>();
    let length = surface.characteristic_length.as_ref().get::<meter>();
    let rise = (dissipated.get::<watt>() * length.powf(0.25) / (1.42 * area)).powf(0.8);
    TemperatureInterval::new::<delta_kelvin>(rise)
}
