//! Warm-up of an aluminum lens barrel after power-on, and the focus drift
//! that comes with it.

use optotherm::{
    models::thermal::transient::FirstOrderResponse,
    support::{
        constraint::StrictlyPositive,
        heat_sink::natural_convection_coefficient,
        heat_transfer::convection_resistance,
        material::lookup,
        optics::{thermal_expansion, thermal_focal_shift},
        units::{TemperatureDifference, per_kelvin},
    },
};
use uom::si::{
    area::square_centimeter,
    f64::{Area, Length, Power, TemperatureInterval, ThermodynamicTemperature, Time, Volume},
    length::{micrometer, millimeter},
    power::watt,
    temperature_interval::kelvin,
    thermodynamic_temperature::degree_celsius,
    time::{minute, second},
    volume::cubic_centimeter,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let aluminum = lookup("Aluminum")?;
    let barrel_volume = Volume::new::<cubic_centimeter>(60.0);
    let thermal_mass = barrel_volume * aluminum.density() * aluminum.specific_heat();

    // Film resistance to still air, with h estimated at a 10 K rise.
    let surface = Area::new::<square_centimeter>(250.0);
    let h = natural_convection_coefficient(
        StrictlyPositive::new(TemperatureInterval::new::<kelvin>(10.0))?,
        StrictlyPositive::new(Length::new::<millimeter>(80.0))?,
    );
    let resistance =
        convection_resistance(StrictlyPositive::new(h)?, StrictlyPositive::new(surface)?);

    let ambient = ThermodynamicTemperature::new::<degree_celsius>(22.0);
    let response = FirstOrderResponse::new(
        ambient,
        ambient,
        StrictlyPositive::new(thermal_mass)?,
        StrictlyPositive::new(resistance)?,
        Power::new::<watt>(3.0),
    );

    let tau = response.time_constant();
    log::info!(
        "{}: C = {:.1} J/K, R = {:.2} K/W, τ = {:.1} min",
        aluminum.name(),
        thermal_mass.value,
        resistance.value,
        tau.get::<minute>()
    );

    let times: Vec<Time> = (0..=12).map(|k| Time::new::<minute>(10.0 * f64::from(k))).collect();
    let temperatures = response.response(&times)?;

    let focal_length = Length::new::<millimeter>(50.0);
    let dn_dt = per_kelvin(3.0e-6);

    println!("{:>8} {:>10} {:>14} {:>16}", "t [min]", "T [°C]", "focus [µm]", "barrel [µm]");
    for (time, temperature) in times.iter().zip(&temperatures) {
        let rise = temperature.minus(ambient);
        println!(
            "{:>8.0} {:>10.2} {:>14.2} {:>16.2}",
            time.get::<minute>(),
            temperature.get::<degree_celsius>(),
            thermal_focal_shift(focal_length, dn_dt, rise).get::<micrometer>(),
            thermal_expansion(focal_length, aluminum.thermal_expansion(), rise).get::<micrometer>(),
        );
    }

    println!(
        "\nSteady state {:.2} °C, reached to 1% after {:.0} s",
        response.steady_state().get::<degree_celsius>(),
        (tau * 100.0_f64.ln()).get::<second>()
    );

    Ok(())
}
