//! Sweeps the drive current of a thermoelectric cooler and sizes the plate
//! that must reject its hot-side heat.
//!
//! Run with `RUST_LOG=debug cargo run --example peltier_performance` to see the
//! solver's bracketing and convergence.

use optotherm::{
    models::thermal::{
        peltier::{OperatingPoint, PeltierModule},
        surface_temperature::{Surface, SurfaceTemperatureConfig, surface_temperature},
    },
    support::{
        constraint::{NonNegative, StrictlyPositive},
        heat_transfer::Emissivity,
    },
};
use twine_core::Model;
use uom::si::{
    area::square_centimeter,
    electric_current::ampere,
    electric_potential::volt,
    f64::{
        Area, ElectricCurrent, ElectricPotential, Length, Power, TemperatureInterval,
        ThermodynamicTemperature,
    },
    length::centimeter,
    power::watt,
    temperature_interval::kelvin,
    thermodynamic_temperature::degree_celsius,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // A common 40 mm module.
    let module = PeltierModule::new(
        Power::new::<watt>(25.0),
        TemperatureInterval::new::<kelvin>(70.0),
        ElectricCurrent::new::<ampere>(4.0),
        ElectricPotential::new::<volt>(15.4),
    )?;
    let delta_t = TemperatureInterval::new::<kelvin>(30.0);

    println!("Peltier sweep at ΔT = {:.0} K", delta_t.get::<kelvin>());
    println!("{:>8} {:>10} {:>10} {:>10} {:>8}", "I [A]", "Qc [W]", "V [V]", "P [W]", "COP");

    let mut best: Option<(f64, f64)> = None;
    for tenths in 5..=40 {
        let current = ElectricCurrent::new::<ampere>(f64::from(tenths) / 10.0);
        let performance = module.call(&OperatingPoint { delta_t, current })?;

        println!(
            "{:>8.1} {:>10.3} {:>10.3} {:>10.3} {:>8.4}",
            current.get::<ampere>(),
            performance.cooling_power.get::<watt>(),
            performance.voltage.get::<volt>(),
            performance.electrical_power.get::<watt>(),
            performance.cop
        );

        if best.is_none_or(|(_, cop)| performance.cop > cop) {
            best = Some((current.get::<ampere>(), performance.cop));
        }
    }

    if let Some((current, cop)) = best {
        log::info!("best COP {cop:.4} at {current:.1} A");
        println!("\nBest COP {cop:.4} at {current:.1} A");
    }

    // Hot side rejects the pumped heat plus the electrical input.
    let point = OperatingPoint {
        delta_t,
        current: ElectricCurrent::new::<ampere>(2.0),
    };
    let performance = module.call(&point)?;
    let hot_side = performance.cooling_power + performance.electrical_power;

    let plate = Surface {
        area: StrictlyPositive::new(Area::new::<square_centimeter>(400.0))?,
        characteristic_length: StrictlyPositive::new(Length::new::<centimeter>(20.0))?,
        emissivity: Emissivity::new(0.85)?,
    };
    let ambient = ThermodynamicTemperature::new::<degree_celsius>(25.0);

    let equilibrium = surface_temperature(
        &plate,
        NonNegative::new(hot_side)?,
        ambient,
        SurfaceTemperatureConfig::default(),
    )?;

    println!(
        "\nAt {:.1} A the hot side rejects {:.2} W; a 20 x 20 cm plate settles at {:.1} °C",
        point.current.get::<ampere>(),
        hot_side.get::<watt>(),
        equilibrium.temperature.get::<degree_celsius>()
    );
    println!(
        "  convection {:.2} W (h = {:.2} W/m²K), radiation {:.2} W",
        equilibrium.convection.get::<watt>(),
        equilibrium.heat_transfer_coefficient.value,
        equilibrium.radiation.get::<watt>()
    );

    Ok(())
}
