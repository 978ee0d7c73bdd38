//! Post-processes a synthetic spot diagram, a set of repeated focus
//! measurements and an edge image.

use std::f64::consts::TAU;

use optotherm::support::{
    constraint::{StrictlyPositive, UnitIntervalOpen},
    measurement::{
        DEFAULT_CONFIDENCE, DEFAULT_OUTLIER_THRESHOLD, edge_mtf, geometric_spot_radius,
        moving_average, remove_outliers, rms_spot_radius, uncertainty,
    },
    optics::airy_disk_diameter,
};
use uom::si::{f64::Length, length::micrometer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Rays on a golden-angle spiral, in µm.
    let rays = 2000;
    let (x, y): (Vec<f64>, Vec<f64>) = (0..rays)
        .map(|i| {
            let r = 6.0 * (f64::from(i) / f64::from(rays)).sqrt();
            let angle = TAU * 0.381_966 * f64::from(i);
            (r * angle.cos(), r * angle.sin())
        })
        .unzip();

    let airy = airy_disk_diameter(Length::new::<micrometer>(0.55), 4.0);
    println!("Spot diagram ({rays} rays)");
    println!("  RMS radius        {:.3} µm", rms_spot_radius(&x, &y)?);
    println!("  geometric radius  {:.3} µm", geometric_spot_radius(&x, &y)?);
    println!("  Airy radius (F/4) {:.3} µm", airy.get::<micrometer>() / 2.0);

    // Repeated back-focal-length readings in mm, one of them a bad reading.
    let readings = [
        49.982, 49.991, 49.987, 50.003, 49.995, 49.989, 49.998, 49.984, 49.993, 49.990, 49.986,
        49.997, 49.992, 49.988, 49.996, 50.120,
    ];
    let cleaned = remove_outliers(&readings, StrictlyPositive::new(DEFAULT_OUTLIER_THRESHOLD)?)?;
    let focus = uncertainty(&cleaned, UnitIntervalOpen::new(DEFAULT_CONFIDENCE)?)?;
    let smoothed = moving_average(&cleaned, 5)?;

    log::info!("kept {} of {} readings", cleaned.len(), readings.len());
    println!(
        "\nBack focal length {:.4} ± {:.4} mm (95%)",
        focus.mean, focus.half_width
    );
    println!("  smoothed trend: {smoothed:.4?}");

    // Vertical edge blurred over a few pixels.
    let image: Vec<Vec<f64>> = (0..16)
        .map(|_| {
            (0..64)
                .map(|col| 0.5 * (1.0 + ((f64::from(col) - 31.5) / 2.0).tanh()))
                .collect()
        })
        .collect();

    let pixel = StrictlyPositive::new(0.005)?;
    println!("\nEdge MTF (5 µm pixels)");
    for frequency in [0.0, 10.0, 25.0, 50.0, 100.0] {
        println!("  {frequency:>5.0} lp/mm  {:.3}", edge_mtf(&image, frequency, pixel)?);
    }

    Ok(())
}
