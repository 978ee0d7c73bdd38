use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::support::constraint::{Constrained, UnitIntervalOpen};

use super::{MeasurementError, mean, sum_of_squares};

/// Conventional two-sided confidence level.
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// A sample mean with its two-sided confidence half-width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uncertainty {
    pub mean: f64,
    pub half_width: f64,
}

impl Uncertainty {
    /// Lower and upper bounds of the confidence interval.
    #[must_use]
    pub fn interval(&self) -> (f64, f64) {
        (self.mean - self.half_width, self.mean + self.half_width)
    }
}

/// Type A uncertainty of the mean of repeated measurements.
///
/// The half-width is `t·s/√n`, with `s` the sample standard deviation and `t`
/// the two-sided Student-t quantile for `n − 1` degrees of freedom.
///
/// # Errors
///
/// Returns [`MeasurementError::TooFewSamples`] for fewer than two samples.
pub fn uncertainty(
    data: &[f64],
    confidence: Constrained<f64, UnitIntervalOpen>,
) -> Result<Uncertainty, MeasurementError> {
    let n = data.len();
    if n < 2 {
        return Err(MeasurementError::TooFewSamples {
            required: 2,
            actual: n,
        });
    }

    let dof = n - 1;
    let student = StudentsT::new(0.0, 1.0, dof as f64)
        .map_err(|_| MeasurementError::Quantile { dof })?;
    let t = student.inverse_cdf((1.0 + confidence.into_inner()) / 2.0);

    let center = mean(data);
    let std_dev = (sum_of_squares(data, center) / dof as f64).sqrt();

    Ok(Uncertainty {
        mean: center,
        half_width: t * std_dev / (n as f64).sqrt(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn five_readings_at_ninety_five_percent() -> Result<(), Box<dyn std::error::Error>> {
        let result = uncertainty(
            &[1.0, 2.0, 3.0, 4.0, 5.0],
            UnitIntervalOpen::new(DEFAULT_CONFIDENCE)?,
        )?;

        assert_relative_eq!(result.mean, 3.0);
        // t(0.975, 4) = 2.776445, s = √2.5
        assert_relative_eq!(
            result.half_width,
            2.776_445 * 2.5_f64.sqrt() / 5.0_f64.sqrt(),
            max_relative = 1e-5
        );
        assert_relative_eq!(result.half_width, 1.963, max_relative = 1e-3);

        let (low, high) = result.interval();
        assert!(low < 3.0 && 3.0 < high);
        Ok(())
    }

    #[test]
    fn higher_confidence_widens_the_interval() -> Result<(), Box<dyn std::error::Error>> {
        let data = [9.8, 10.1, 10.0, 9.9, 10.2, 10.0];

        let narrow = uncertainty(&data, UnitIntervalOpen::new(0.68)?)?;
        let wide = uncertainty(&data, UnitIntervalOpen::new(0.99)?)?;

        assert_relative_eq!(narrow.mean, wide.mean);
        assert!(wide.half_width > narrow.half_width);
        Ok(())
    }

    #[test]
    fn needs_two_samples() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(
            uncertainty(&[1.0], UnitIntervalOpen::new(0.95)?),
            Err(MeasurementError::TooFewSamples {
                required: 2,
                actual: 1
            })
        );
        assert!(UnitIntervalOpen::new(1.0).is_err());
        Ok(())
    }
}
