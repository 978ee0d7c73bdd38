use std::marker::PhantomData;

use uom::si::{f64::Length, length::meter};

use crate::support::constraint::{Constrained, StrictlyPositive};

/// Circle of confusion used for depth-of-field work on 35 mm format, 0.03 mm.
pub const DEFAULT_CIRCLE_OF_CONFUSION: Length = Length {
    dimension: PhantomData,
    units: PhantomData,
    // Stored in the SI base unit, metres.
    value: 3e-5,
};

/// Rayleigh resolution limit in the image plane, `1.22·λ·N`.
#[must_use]
pub fn rayleigh_resolution(wavelength: Length, f_number: f64) -> Length {
    wavelength * (1.22 * f_number)
}

/// Diameter of the Airy disk to its first dark ring, `2.44·λ·N`.
#[must_use]
pub fn airy_disk_diameter(wavelength: Length, f_number: f64) -> Length {
    wavelength * (2.44 * f_number)
}

/// Hyperfocal distance `H = f² / (N·c) + f`.
///
/// Focusing at `H` keeps everything from `H/2` to infinity acceptably sharp.
#[must_use]
pub fn hyperfocal_distance(
    focal_length: Length,
    f_number: Constrained<f64, StrictlyPositive>,
    circle_of_confusion: Constrained<Length, StrictlyPositive>,
) -> Length {
    focal_length * focal_length / (circle_of_confusion.into_inner() * f_number.into_inner())
        + focal_length
}

/// Near and far limits of acceptable focus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthOfField {
    pub near: Length,
    /// Infinite when focused at or beyond the hyperfocal distance.
    pub far: Length,
}

impl DepthOfField {
    /// Distance between the near and far limits.
    #[must_use]
    pub fn total(&self) -> Length {
        self.far - self.near
    }
}

/// Depth of field for a lens focused at `object_distance`.
///
/// With `H` the [hyperfocal distance](hyperfocal_distance) and `s` the focus
/// distance, `near = H·s / (H + s − f)` and `far = H·s / (H − s + f)`.
#[must_use]
pub fn depth_of_field(
    object_distance: Constrained<Length, StrictlyPositive>,
    focal_length: Length,
    f_number: Constrained<f64, StrictlyPositive>,
    circle_of_confusion: Constrained<Length, StrictlyPositive>,
) -> DepthOfField {
    let s = object_distance.into_inner();
    let h = hyperfocal_distance(focal_length, f_number, circle_of_confusion);

    let near = h * s / (h + s - focal_length);
    let far_denominator = h - s + focal_length;
    let far = if far_denominator.value > 0.0 {
        h * s / far_denominator
    } else {
        Length::new::<meter>(f64::INFINITY)
    };

    DepthOfField { near, far }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::length::{micrometer, millimeter};

    use crate::support::constraint::ConstraintResult;

    fn mm(value: f64) -> Length {
        Length::new::<millimeter>(value)
    }

    #[test]
    fn diffraction_limits() {
        let green = Length::new::<micrometer>(0.55);

        assert_relative_eq!(
            rayleigh_resolution(green, 2.8).get::<micrometer>(),
            1.8788,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            airy_disk_diameter(green, 2.8).get::<micrometer>(),
            2.0 * rayleigh_resolution(green, 2.8).get::<micrometer>(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn hyperfocal_for_a_fifty_millimeter_lens() -> ConstraintResult<()> {
        assert_relative_eq!(
            DEFAULT_CIRCLE_OF_CONFUSION.get::<millimeter>(),
            0.03,
            max_relative = 1e-12
        );

        let h = hyperfocal_distance(
            mm(50.0),
            StrictlyPositive::new(8.0)?,
            StrictlyPositive::new(DEFAULT_CIRCLE_OF_CONFUSION)?,
        );
        assert_relative_eq!(h.get::<millimeter>(), 2500.0 / 0.24 + 50.0, max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn depth_of_field_brackets_focus() -> ConstraintResult<()> {
        let f = mm(50.0);
        let n = StrictlyPositive::new(8.0)?;
        let coc = StrictlyPositive::new(DEFAULT_CIRCLE_OF_CONFUSION)?;
        let s = mm(3000.0);

        let dof = depth_of_field(StrictlyPositive::new(s)?, f, n, coc);
        let h = hyperfocal_distance(f, n, coc).get::<millimeter>();

        assert!(dof.near < s && s < dof.far);
        assert_relative_eq!(
            dof.near.get::<millimeter>(),
            h * 3000.0 / (h + 3000.0 - 50.0),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            dof.far.get::<millimeter>(),
            h * 3000.0 / (h - 3000.0 + 50.0),
            max_relative = 1e-12
        );
        assert!(dof.total().value > 0.0);
        Ok(())
    }

    #[test]
    fn focus_beyond_hyperfocal_reaches_infinity() -> ConstraintResult<()> {
        let f = mm(50.0);
        let n = StrictlyPositive::new(8.0)?;
        let coc = StrictlyPositive::new(DEFAULT_CIRCLE_OF_CONFUSION)?;
        let beyond = hyperfocal_distance(f, n, coc) * 2.0;

        let dof = depth_of_field(StrictlyPositive::new(beyond)?, f, n, coc);
        assert!(dof.far.value.is_infinite());
        assert!(dof.near.value.is_finite());
        Ok(())
    }
}
