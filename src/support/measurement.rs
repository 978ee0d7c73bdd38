//! Post-processing of measured or ray-traced data.
//!
//! These functions consume plain numeric slices and are unit-agnostic: a spot
//! diagram in micrometres gives radii in micrometres. Reading the data from
//! instrument or ray-tracer exports is left to the caller.
//!
//! - [`rms_spot_radius`], [`geometric_spot_radius`]: spot diagram sizes
//! - [`moving_average`], [`remove_outliers`]: signal cleanup
//! - [`uncertainty`]: Student-t confidence interval of a mean
//! - [`edge_mtf`]: MTF from an edge image

mod filter;
mod mtf;
mod spot;
mod uncertainty;

use thiserror::Error;

use crate::support::constraint::ConstraintError;

pub use filter::{DEFAULT_OUTLIER_THRESHOLD, moving_average, remove_outliers};
pub use mtf::{edge_mtf, line_spread_function};
pub use spot::{geometric_spot_radius, rms_spot_radius};
pub use uncertainty::{DEFAULT_CONFIDENCE, Uncertainty, uncertainty};

/// Errors raised while processing measurement data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasurementError {
    #[error("input data is empty")]
    Empty,

    #[error("coordinate arrays differ in length: {x} x values, {y} y values")]
    LengthMismatch { x: usize, y: usize },

    #[error("window of {window} samples does not fit {len} samples")]
    InvalidWindow { window: usize, len: usize },

    #[error("need at least {required} samples, got {actual}")]
    TooFewSamples { required: usize, actual: usize },

    #[error("image rows differ in width")]
    RaggedImage,

    #[error("line spread function has no DC component to normalize by")]
    ZeroDc,

    #[error("Student-t quantile unavailable for {dof} degrees of freedom")]
    Quantile { dof: usize },

    #[error("invalid {parameter}: {source}")]
    InvalidParameter {
        parameter: &'static str,
        source: ConstraintError,
    },
}

/// Arithmetic mean of a non-empty slice.
fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sum of squared deviations from `center`.
fn sum_of_squares(data: &[f64], center: f64) -> f64 {
    data.iter().map(|x| (x - center).powi(2)).sum()
}
