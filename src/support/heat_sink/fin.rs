use std::ops::Deref;

use uom::si::{
    f64::{HeatTransfer, Length, Ratio, ThermalConductivity},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::constraint::{
    Constrained, ConstraintError, ConstraintResult, NonNegative, StrictlyPositive,
    UnitIntervalLowerOpen,
};

/// Below this fin parameter `m·L`, `tanh(mL)/mL` is evaluated by its series.
const SERIES_THRESHOLD: f64 = 1e-4;

/// The efficiency of a fin.
///
/// The ratio of the heat a fin actually rejects to the heat it would reject if
/// its whole surface were at the base temperature. Always in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct FinEfficiency(Constrained<Ratio, UnitIntervalLowerOpen>);

impl FinEfficiency {
    /// Create a [`FinEfficiency`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside the interval (0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create a [`FinEfficiency`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity lies outside the interval (0, 1].
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitIntervalLowerOpen::new(quantity)?))
    }
}

impl Deref for FinEfficiency {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Efficiency of a straight rectangular fin with an adiabatic tip.
///
/// With `m = √(2h / (k·t))`, the efficiency is `η = tanh(m·H) / (m·H)`.
/// A vanishing `h` gives an isothermal fin, `η = 1`.
///
/// # Errors
///
/// Returns [`ConstraintError::NotFinite`] if `m·H` is infinite, as happens
/// for an infinite `h` or a conductivity small enough to overflow `2h / (k·t)`.
/// Returns [`ConstraintError::NotANumber`] if `m·H` is undefined.
pub fn fin_efficiency(
    fin_height: Constrained<Length, StrictlyPositive>,
    fin_thickness: Constrained<Length, StrictlyPositive>,
    k: Constrained<ThermalConductivity, StrictlyPositive>,
    h: Constrained<HeatTransfer, NonNegative>,
) -> ConstraintResult<FinEfficiency> {
    let h = h.into_inner().get::<watt_per_square_meter_kelvin>();
    let k = k.into_inner().get::<watt_per_meter_kelvin>();
    let t = fin_thickness.into_inner().get::<meter>();

    let m = (2.0 * h / (k * t)).sqrt();
    let ml = m * fin_height.into_inner().get::<meter>();
    if ml.is_nan() {
        return Err(ConstraintError::NotANumber);
    }
    if ml.is_infinite() {
        return Err(ConstraintError::NotFinite);
    }

    let eta = if ml < SERIES_THRESHOLD {
        log::trace!("fin parameter mL = {ml:e} below threshold, using series");
        let ml2 = ml * ml;
        1.0 - ml2 / 3.0 + 2.0 * ml2 * ml2 / 15.0
    } else {
        ml.tanh() / ml
    };

    FinEfficiency::new(eta)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn fin(height: f64, k: f64, h: f64) -> ConstraintResult<FinEfficiency> {
        fin_efficiency(
            StrictlyPositive::new(Length::new::<meter>(height))?,
            StrictlyPositive::new(Length::new::<meter>(0.001))?,
            StrictlyPositive::new(ThermalConductivity::new::<watt_per_meter_kelvin>(k))?,
            NonNegative::new(HeatTransfer::new::<watt_per_square_meter_kelvin>(h))?,
        )
    }

    fn aluminum_fin(height: f64, h: f64) -> ConstraintResult<FinEfficiency> {
        fin(height, 167.0, h)
    }

    #[test]
    fn taller_fins_are_less_efficient() -> ConstraintResult<()> {
        let short = aluminum_fin(0.01, 10.0)?;
        let tall = aluminum_fin(0.04, 10.0)?;

        for eta in [short, tall] {
            let value = eta.get::<ratio>();
            assert!(value > 0.0 && value <= 1.0);
        }
        assert!(short > tall);
        Ok(())
    }

    #[test]
    fn matches_closed_form() -> ConstraintResult<()> {
        let ml = (2.0 * 10.0 / (167.0 * 0.001_f64)).sqrt() * 0.04;
        let eta = aluminum_fin(0.04, 10.0)?;

        assert_relative_eq!(eta.get::<ratio>(), ml.tanh() / ml, max_relative = 1e-14);
        Ok(())
    }

    #[test]
    fn isothermal_limit() -> ConstraintResult<()> {
        assert_eq!(aluminum_fin(0.02, 0.0)?.get::<ratio>(), 1.0);

        // Tiny h takes the series branch and stays continuous with tanh(x)/x.
        let series = aluminum_fin(0.02, 1e-9)?.get::<ratio>();
        assert!(series <= 1.0);
        assert_relative_eq!(series, 1.0, max_relative = 1e-9);
        Ok(())
    }

    #[test]
    fn series_and_closed_form_agree_at_threshold() {
        let below = SERIES_THRESHOLD * (1.0 - 1e-9);
        let series = 1.0 - below * below / 3.0 + 2.0 * below.powi(4) / 15.0;
        let closed = SERIES_THRESHOLD.tanh() / SERIES_THRESHOLD;
        assert_relative_eq!(series, closed, max_relative = 1e-12);
    }

    #[test]
    fn very_long_fins_stay_positive() -> ConstraintResult<()> {
        // mL ~ 1e300 leaves η = 1/mL, tiny but still inside (0, 1].
        let eta = fin(1e300, 167.0, 0.0835)?.get::<ratio>();
        assert!(eta > 0.0);
        assert_relative_eq!(eta, 1e-300, max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn unbounded_fin_parameter_is_an_error() {
        assert_eq!(
            aluminum_fin(0.02, f64::INFINITY),
            Err(ConstraintError::NotFinite)
        );
        assert_eq!(fin(0.02, 1e-310, 10.0), Err(ConstraintError::NotFinite));
        assert_eq!(
            fin(0.02, f64::INFINITY, f64::INFINITY),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert_eq!(FinEfficiency::new(0.0), Err(ConstraintError::BelowMinimum));
        assert_eq!(FinEfficiency::new(1.01), Err(ConstraintError::AboveMaximum));
        assert!(FinEfficiency::new(1.0).is_ok());
    }
}
