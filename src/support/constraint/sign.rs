use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker for values that are zero or greater.
///
/// Used for quantities where zero is a meaningful input, such as a heat
/// transfer coefficient of a perfectly insulated surface or a still-air
/// velocity.
///
/// ```
/// use optotherm::support::constraint::NonNegative;
///
/// assert!(NonNegative::new(0.0).is_ok());
/// assert!(NonNegative::new(-1.0).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or `NaN`.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Marker for values that are greater than zero.
///
/// This is the constraint behind every denominator in the crate: lengths,
/// areas, conductivities, currents, thermal masses.
///
/// ```
/// use optotherm::support::constraint::{ConstraintError, StrictlyPositive};
///
/// assert!(StrictlyPositive::new(0.1).is_ok());
/// assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
/// assert_eq!(StrictlyPositive::new(-2), Err(ConstraintError::Negative));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or `NaN`.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Marker for values of either sign that are not zero.
///
/// Radii of curvature and object distances are signed, but a zero still
/// makes the paraxial formulas divide by zero.
///
/// ```
/// use optotherm::support::constraint::NonZero;
///
/// assert!(NonZero::new(-50.0).is_ok());
/// assert!(NonZero::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonZero;

impl NonZero {
    /// Constructs a [`Constrained<T, NonZero>`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero or `NaN`.
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, NonZero>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonZero {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Less) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        f64::{Area, HeatTransfer, Length},
        area::square_meter,
        heat_transfer::watt_per_square_meter_kelvin,
        length::millimeter,
    };

    #[test]
    fn non_negative_accepts_zero_coefficient() {
        let still = HeatTransfer::new::<watt_per_square_meter_kelvin>(0.0);
        assert!(NonNegative::new(still).is_ok());

        let negative = HeatTransfer::new::<watt_per_square_meter_kelvin>(-1.0);
        assert_eq!(NonNegative::new(negative), Err(ConstraintError::Negative));
    }

    #[test]
    fn strictly_positive_rejects_degenerate_geometry() {
        let area = Area::new::<square_meter>(1e-3);
        assert_eq!(
            StrictlyPositive::new(area).map(Constrained::into_inner),
            Ok(area)
        );

        assert_eq!(
            StrictlyPositive::new(Area::new::<square_meter>(0.0)),
            Err(ConstraintError::Zero)
        );
        assert_eq!(
            StrictlyPositive::new(Length::new::<millimeter>(-1.0)),
            Err(ConstraintError::Negative)
        );
        assert_eq!(
            StrictlyPositive::new(Length::new::<millimeter>(f64::NAN)),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn non_zero_accepts_signed_radii() {
        let concave = Length::new::<millimeter>(-50.0);
        assert_eq!(NonZero::new(concave).map(|r| *r.as_ref()), Ok(concave));
        assert_eq!(
            NonZero::new(Length::new::<millimeter>(0.0)),
            Err(ConstraintError::Zero)
        );
        assert_eq!(NonZero::new(f64::NAN), Err(ConstraintError::NotANumber));
    }
}
