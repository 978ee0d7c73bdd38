use uom::si::{
    angle::radian,
    f64::{Angle, Length, Ratio},
    ratio::ratio,
};

use crate::support::constraint::{Constrained, ConstraintResult, NonZero, StrictlyPositive};

/// Focal length of a single refracting surface, `f = R / (n₂ − n₁)`.
///
/// # Errors
///
/// Returns an error if the two indices are equal, since the surface then has
/// no optical power.
pub fn surface_focal_length(radius: Length, n1: f64, n2: f64) -> ConstraintResult<Length> {
    let contrast = NonZero::new(n2 - n1)?.into_inner();
    Ok(radius / contrast)
}

/// Thin-lens focal length from the lensmaker's equation,
/// `1/f = (n − 1)·(1/R₁ − 1/R₂)`.
///
/// # Errors
///
/// Returns an error if the lens has zero optical power (equal radii, or
/// `n = 1`).
pub fn thin_lens_focal_length(
    r1: Constrained<Length, NonZero>,
    r2: Constrained<Length, NonZero>,
    n: f64,
) -> ConstraintResult<Length> {
    let power = (r1.into_inner().recip() - r2.into_inner().recip()) * (n - 1.0);
    Ok(NonZero::new(power)?.into_inner().recip())
}

/// F-number `N = f / D`.
#[must_use]
pub fn f_number(focal_length: Length, aperture: Constrained<Length, StrictlyPositive>) -> f64 {
    (focal_length / aperture.into_inner()).get::<ratio>()
}

/// Numerical aperture `NA = n·sin θ` for a marginal-ray half-angle `θ`.
#[must_use]
pub fn numerical_aperture(n: f64, half_angle: Angle) -> f64 {
    n * half_angle.get::<radian>().sin()
}

/// Lateral magnification `m = −s′ / s`.
#[must_use]
pub fn magnification(object_distance: Constrained<Length, NonZero>, image_distance: Length) -> f64 {
    -(image_distance / object_distance.into_inner()).get::<ratio>()
}

/// Distortion of an F-theta scan lens, `(h − f·θ) / (f·θ)`.
///
/// Positive values mean the spot lands farther out than the ideal F-theta
/// height. Read it in percent with `get::<percent>()`.
///
/// # Errors
///
/// Returns an error if the ideal height `f·θ` is zero.
pub fn f_theta_distortion(
    focal_length: Length,
    field_angle: Angle,
    actual_height: Length,
) -> ConstraintResult<Ratio> {
    let ideal = NonZero::new(focal_length * field_angle.get::<radian>())?.into_inner();
    Ok((actual_height - ideal) / ideal)
}
