//! Numeric constraints checked once, at construction.
//!
//! Most formulas in this crate divide by a length, an area, a current or a
//! time constant. Rather than checking each denominator at every call, the
//! formulas accept a [`Constrained<T, C>`] wherever a value must be, say,
//! strictly positive. The caller proves the precondition once when building the
//! value, and the formula itself can no longer fail.
//!
//! # Provided constraints
//!
//! - [`NonNegative`]: zero or greater
//! - [`StrictlyPositive`]: greater than zero
//! - [`NonZero`]: not equal to zero
//! - [`UnitInterval`]: `0 ≤ x ≤ 1`
//! - [`UnitIntervalOpen`]: `0 < x < 1`
//! - [`UnitIntervalLowerOpen`]: `0 < x ≤ 1`
//! - [`AtLeastOne`]: `x ≥ 1`
//!
//! Every marker also has an associated `new()` constructor, so
//! `StrictlyPositive::new(length)` reads the same as
//! `Constrained::<_, StrictlyPositive>::new(length)`.
//!
//! # Example
//!
//! ```
//! use optotherm::support::constraint::{ConstraintError, StrictlyPositive};
//! use uom::si::{f64::Length, length::millimeter};
//!
//! let thickness = StrictlyPositive::new(Length::new::<millimeter>(1.0)).unwrap();
//! assert_eq!(thickness.as_ref().get::<millimeter>(), 1.0);
//!
//! let flat = StrictlyPositive::new(Length::new::<millimeter>(0.0));
//! assert_eq!(flat, Err(ConstraintError::Zero));
//! ```

mod sign;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use sign::{NonNegative, NonZero, StrictlyPositive};
pub use unit_interval::{
    AtLeastOne, UnitBounds, UnitInterval, UnitIntervalLowerOpen, UnitIntervalOpen,
};

/// A numeric invariant that can be checked for a value of type `T`.
///
/// Implement this for a zero-sized marker type to define a new constraint.
pub trait Constraint<T> {
    /// Checks that `value` satisfies the constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing the violation.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// Why a value was rejected by a [`Constraint`].
///
/// This is the crate's domain-precondition error: a zero denominator, a
/// negative absolute temperature, an out-of-range ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be finite")]
    NotFinite,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// Result alias for operations whose only failure mode is a violated constraint.
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value of type `T` known to satisfy constraint `C`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
