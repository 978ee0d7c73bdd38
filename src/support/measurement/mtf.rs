use rustfft::{FftPlanner, num_complex::Complex64};

use crate::support::constraint::{
    Constrained, Constraint, ConstraintError, NonNegative, StrictlyPositive,
};

use super::MeasurementError;

/// Line spread function of an edge image.
///
/// Each row is differentiated along its length and the derivatives are
/// averaged column by column, giving one fewer sample than the image width.
///
/// # Errors
///
/// Returns an error if the image has no rows, rows of unequal width, or fewer
/// than two LSF samples.
pub fn line_spread_function<R: AsRef<[f64]>>(image: &[R]) -> Result<Vec<f64>, MeasurementError> {
    let first = image.first().ok_or(MeasurementError::Empty)?.as_ref();
    let width = first.len();
    if image.iter().any(|row| row.as_ref().len() != width) {
        return Err(MeasurementError::RaggedImage);
    }

    let samples = width.saturating_sub(1);
    if samples < 2 {
        return Err(MeasurementError::TooFewSamples {
            required: 2,
            actual: samples,
        });
    }

    let mut lsf = vec![0.0; samples];
    for row in image {
        for (sum, pair) in lsf.iter_mut().zip(row.as_ref().windows(2)) {
            *sum += pair[1] - pair[0];
        }
    }

    let rows = image.len() as f64;
    lsf.iter_mut().for_each(|sum| *sum /= rows);
    Ok(lsf)
}

/// Modulation transfer function of an edge image at one spatial frequency.
///
/// The LSF spectrum is normalized by its DC term and sampled at `k / (n·p)`
/// for `k < n/2`, where `n` is the LSF length and `p` the pixel size. The value
/// at `frequency` is interpolated linearly and clamped at both ends.
///
/// Frequency and pixel size share a length unit: cycles/mm with a pixel size in
/// mm, for instance.
///
/// # Errors
///
/// Returns an error if the LSF cannot be formed or has zero DC. Also returns
/// an error if `frequency` is negative or the pixel size is infinite.
pub fn edge_mtf<R: AsRef<[f64]>>(
    image: &[R],
    frequency: f64,
    pixel_size: Constrained<f64, StrictlyPositive>,
) -> Result<f64, MeasurementError> {
    NonNegative::check(&frequency).map_err(|source| MeasurementError::InvalidParameter {
        parameter: "frequency",
        source,
    })?;
    let pixel_size = pixel_size.into_inner();
    if pixel_size.is_infinite() {
        return Err(MeasurementError::InvalidParameter {
            parameter: "pixel_size",
            source: ConstraintError::NotFinite,
        });
    }

    let lsf = line_spread_function(image)?;
    let n = lsf.len();

    let magnitudes = spectrum_magnitudes(&lsf);
    let dc = magnitudes[0];
    if dc == 0.0 {
        return Err(MeasurementError::ZeroDc);
    }

    let spacing = (n as f64 * pixel_size).recip();
    Ok(interpolate(frequency / spacing, &magnitudes) / dc)
}

/// Magnitudes of the unnormalized forward FFT of `signal`, bins `0..n/2`.
fn spectrum_magnitudes(signal: &[f64]) -> Vec<f64> {
    let mut buffer: Vec<Complex64> = signal.iter().map(|&x| Complex64::new(x, 0.0)).collect();
    FftPlanner::<f64>::new()
        .plan_fft_forward(buffer.len())
        .process(&mut buffer);

    buffer[..signal.len() / 2].iter().map(|bin| bin.norm()).collect()
}

/// Linear interpolation of `values` at fractional index `position`, clamped to
/// the first and last values. An undefined position reads the first value.
fn interpolate(position: f64, values: &[f64]) -> f64 {
    let last = values.len() - 1;
    if position.is_nan() || position <= 0.0 {
        return values[0];
    }
    if position >= last as f64 {
        return values[last];
    }

    let lower = position.floor();
    let i = lower as usize;
    let fraction = position - lower;
    values[i] + fraction * (values[i + 1] - values[i])
}
