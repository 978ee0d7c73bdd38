use super::{MeasurementError, mean};

/// RMS radius of a spot diagram about its centroid.
///
/// # Errors
///
/// Returns an error if the coordinate slices are empty or differ in length.
pub fn rms_spot_radius(x: &[f64], y: &[f64]) -> Result<f64, MeasurementError> {
    let squared = squared_radii(x, y)?;
    Ok(mean(&squared).sqrt())
}

/// Geometric radius of a spot diagram: the largest distance of any ray from
/// the centroid.
///
/// # Errors
///
/// Returns an error if the coordinate slices are empty or differ in length.
pub fn geometric_spot_radius(x: &[f64], y: &[f64]) -> Result<f64, MeasurementError> {
    let squared = squared_radii(x, y)?;
    Ok(squared.into_iter().fold(0.0, f64::max).sqrt())
}

fn squared_radii(x: &[f64], y: &[f64]) -> Result<Vec<f64>, MeasurementError> {
    if x.len() != y.len() {
        return Err(MeasurementError::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    if x.is_empty() {
        return Err(MeasurementError::Empty);
    }

    let (cx, cy) = (mean(x), mean(y));
    Ok(x.iter()
        .zip(y)
        .map(|(xi, yi)| (xi - cx).powi(2) + (yi - cy).powi(2))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::TAU;

    use approx::assert_relative_eq;

    fn ring(radius: f64, center: (f64, f64), points: usize) -> (Vec<f64>, Vec<f64>) {
        (0..points)
            .map(|i| {
                let angle = TAU * i as f64 / points as f64;
                (center.0 + radius * angle.cos(), center.1 + radius * angle.sin())
            })
            .unzip()
    }

    #[test]
    fn symmetric_ring() -> Result<(), MeasurementError> {
        let (x, y) = ring(2.0, (10.0, -5.0), 16);

        assert_relative_eq!(rms_spot_radius(&x, &y)?, 2.0, max_relative = 1e-12);
        assert_relative_eq!(geometric_spot_radius(&x, &y)?, 2.0, max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn geometric_radius_bounds_rms() -> Result<(), MeasurementError> {
        let x = [0.0, 1.0, -1.0, 0.0, 0.0, 3.0];
        let y = [0.0, 0.0, 0.0, 1.0, -1.0, 0.0];

        let rms = rms_spot_radius(&x, &y)?;
        let geo = geometric_spot_radius(&x, &y)?;
        assert!(geo > rms);

        // Centroid is (0.5, 0); the stray ray at x = 3 is farthest.
        assert_relative_eq!(geo, 2.5);
        Ok(())
    }

    #[test]
    fn single_ray_has_zero_size() -> Result<(), MeasurementError> {
        assert_eq!(rms_spot_radius(&[3.0], &[4.0])?, 0.0);
        Ok(())
    }

    #[test]
    fn rejects_bad_inputs() {
        assert_eq!(rms_spot_radius(&[], &[]), Err(MeasurementError::Empty));
        assert_eq!(
            geometric_spot_radius(&[1.0, 2.0], &[1.0]),
            Err(MeasurementError::LengthMismatch { x: 2, y: 1 })
        );
    }
}
