use crate::support::constraint::{Constrained, StrictlyPositive};

use super::{MeasurementError, mean, sum_of_squares};

/// Conventional outlier threshold, in standard deviations.
pub const DEFAULT_OUTLIER_THRESHOLD: f64 = 3.0;

/// Moving average over full windows only.
///
/// The result has `data.len() − window + 1` samples, the `k`-th being the
/// mean of `data[k..k + window]`.
///
/// # Errors
///
/// Returns [`MeasurementError::InvalidWindow`] unless `1 ≤ window ≤ data.len()`.
pub fn moving_average(data: &[f64], window: usize) -> Result<Vec<f64>, MeasurementError> {
    if window == 0 || window > data.len() {
        return Err(MeasurementError::InvalidWindow {
            window,
            len: data.len(),
        });
    }

    let size = window as f64;
    Ok(data
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / size)
        .collect())
}

/// Drops samples lying `threshold` or more population standard deviations from
/// the mean.
///
/// Constant data (zero deviation) are returned unchanged.
///
/// # Errors
///
/// Returns [`MeasurementError::Empty`] for empty data.
pub fn remove_outliers(
    data: &[f64],
    threshold: Constrained<f64, StrictlyPositive>,
) -> Result<Vec<f64>, MeasurementError> {
    if data.is_empty() {
        return Err(MeasurementError::Empty);
    }

    let center = mean(data);
    let sigma = (sum_of_squares(data, center) / data.len() as f64).sqrt();
    if sigma == 0.0 {
        return Ok(data.to_vec());
    }

    let limit = threshold.into_inner() * sigma;
    let kept: Vec<f64> = data
        .iter()
        .copied()
        .filter(|x| (x - center).abs() < limit)
        .collect();

    log::debug!(
        "removed {} of {} samples beyond {limit:e} of mean {center:e}",
        data.len() - kept.len(),
        data.len()
    );
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::constraint::ConstraintResult;

    #[test]
    fn moving_average_valid_mode() -> Result<(), MeasurementError> {
        let smoothed = moving_average(&[1.0, 2.0, 3.0, 4.0, 5.0], 3)?;

        assert_eq!(smoothed.len(), 3);
        for (actual, expected) in smoothed.iter().zip([2.0, 3.0, 4.0]) {
            assert_relative_eq!(*actual, expected, max_relative = 1e-15);
        }

        let whole = moving_average(&[2.0, 4.0], 2)?;
        assert_eq!(whole, vec![3.0]);
        assert_eq!(moving_average(&[7.0, 8.0], 1)?, vec![7.0, 8.0]);
        Ok(())
    }

    #[test]
    fn moving_average_rejects_bad_windows() {
        assert_eq!(
            moving_average(&[1.0, 2.0], 0),
            Err(MeasurementError::InvalidWindow { window: 0, len: 2 })
        );
        assert_eq!(
            moving_average(&[1.0, 2.0], 3),
            Err(MeasurementError::InvalidWindow { window: 3, len: 2 })
        );
    }

    #[test]
    fn far_sample_is_dropped() -> Result<(), Box<dyn std::error::Error>> {
        let mut data = vec![10.0; 20];
        data[7] = 10.1;
        data[12] = 9.9;
        data.push(100.0);

        let cleaned = remove_outliers(&data, StrictlyPositive::new(DEFAULT_OUTLIER_THRESHOLD)?)?;

        assert_eq!(cleaned.len(), data.len() - 1);
        assert!(!cleaned.contains(&100.0));
        Ok(())
    }

    #[test]
    fn constant_data_is_kept() -> ConstraintResult<()> {
        let data = [4.2; 5];
        assert_eq!(
            remove_outliers(&data, StrictlyPositive::new(1.0)?),
            Ok(data.to_vec())
        );
        assert_eq!(
            remove_outliers(&[], StrictlyPositive::new(1.0)?),
            Err(MeasurementError::Empty)
        );
        Ok(())
    }
}
