use std::cmp::Ordering;

use uom::si::{f64::Ratio, ratio::ratio};

use super::{Constrained, Constraint, ConstraintError};

/// Supplies the bounds 0 and 1 for types used with the unit-interval markers.
///
/// Implemented for `f64` and [`Ratio`].
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }
    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}

/// Compares a value against both bounds, mapping `NaN` to an error.
fn bounds<T: UnitBounds>(value: &T) -> Result<(Ordering, Ordering), ConstraintError> {
    match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
        (Some(lower), Some(upper)) => Ok((lower, upper)),
        _ => Err(ConstraintError::NotANumber),
    }
}

/// Marker for the closed unit interval `0 ≤ x ≤ 1`.
///
/// Surface emissivity lives here: a perfect reflector is 0 and a black body is 1.
///
/// ```
/// use optotherm::support::constraint::UnitInterval;
///
/// assert!(UnitInterval::new(0.0).is_ok());
/// assert!(UnitInterval::new(1.0).is_ok());
/// assert!(UnitInterval::new(1.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs `Constrained<T, UnitInterval>` if `0 ≤ value ≤ 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if the value is `NaN`.
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, UnitInterval>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match bounds(value)? {
            (Ordering::Less, _) => Err(ConstraintError::BelowMinimum),
            (_, Ordering::Greater) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

/// Marker for the open unit interval `0 < x < 1`.
///
/// Confidence levels for measurement uncertainty must lie strictly inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalOpen;

impl UnitIntervalOpen {
    /// Constructs `Constrained<T, UnitIntervalOpen>` if `0 < value < 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than or equal to zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than or equal to one.
    /// - [`ConstraintError::NotANumber`] if the value is `NaN`.
    pub fn new<T: UnitBounds>(
        value: T,
    ) -> Result<Constrained<T, UnitIntervalOpen>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitIntervalOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match bounds(value)? {
            (Ordering::Less | Ordering::Equal, _) => Err(ConstraintError::BelowMinimum),
            (_, Ordering::Greater | Ordering::Equal) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

/// Marker for the lower-open unit interval `0 < x ≤ 1`.
///
/// Fin efficiency lives here: a fin always conducts some heat, and never more
/// than an isothermal fin would.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalLowerOpen;

impl UnitIntervalLowerOpen {
    /// Constructs `Constrained<T, UnitIntervalLowerOpen>` if `0 < value ≤ 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than or equal to zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if the value is `NaN`.
    pub fn new<T: UnitBounds>(
        value: T,
    ) -> Result<Constrained<T, UnitIntervalLowerOpen>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitIntervalLowerOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match bounds(value)? {
            (Ordering::Less | Ordering::Equal, _) => Err(ConstraintError::BelowMinimum),
            (_, Ordering::Greater) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

/// Marker for values no smaller than one, `x ≥ 1`.
///
/// The beam quality factor M² is bounded below by the ideal Gaussian beam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AtLeastOne;

impl AtLeastOne {
    /// Constructs `Constrained<T, AtLeastOne>` if `value ≥ 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than one.
    /// - [`ConstraintError::NotANumber`] if the value is `NaN`.
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, AtLeastOne>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for AtLeastOne {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match bounds(value)? {
            (_, Ordering::Less) => Err(ConstraintError::BelowMinimum),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::ratio::percent;

    #[test]
    fn closed_includes_both_endpoints() {
        assert!(UnitInterval::new(0.0).is_ok());
        assert!(UnitInterval::new(1.0).is_ok());
        assert_eq!(
            UnitInterval::new(-1e-15),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(
            UnitInterval::new(1.0 + 1e-15),
            Err(ConstraintError::AboveMaximum)
        );
    }

    #[test]
    fn open_excludes_both_endpoints() {
        assert!(UnitIntervalOpen::new(0.95).is_ok());
        assert_eq!(
            UnitIntervalOpen::new(0.0),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(
            UnitIntervalOpen::new(1.0),
            Err(ConstraintError::AboveMaximum)
        );
    }

    #[test]
    fn lower_open_excludes_zero_only() {
        assert!(UnitIntervalLowerOpen::new(1.0).is_ok());
        assert!(UnitIntervalLowerOpen::new(1e-300).is_ok());
        assert_eq!(
            UnitIntervalLowerOpen::new(0.0),
            Err(ConstraintError::BelowMinimum)
        );
    }

    #[test]
    fn at_least_one_is_unbounded_above() {
        assert!(AtLeastOne::new(1.0).is_ok());
        assert!(AtLeastOne::new(f64::INFINITY).is_ok());
        assert_eq!(
            AtLeastOne::new(0.999),
            Err(ConstraintError::BelowMinimum)
        );
        assert_eq!(AtLeastOne::new(f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn ratios_and_nan() {
        let emissivity = UnitInterval::new(Ratio::new::<percent>(85.0)).unwrap();
        assert!((emissivity.into_inner().get::<ratio>() - 0.85).abs() < 1e-15);

        assert_eq!(
            UnitInterval::new(Ratio::new::<percent>(120.0)),
            Err(ConstraintError::AboveMaximum)
        );
        assert_eq!(
            UnitIntervalOpen::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }
}
