use std::{f64::consts::PI, ops::Deref};

use uom::si::{
    angle::radian,
    f64::{Angle, Length, Ratio},
    ratio::ratio,
};

use crate::support::constraint::{AtLeastOne, Constrained, ConstraintResult, StrictlyPositive};

/// Beam quality factor M², at least 1 (a perfect Gaussian beam).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct BeamQuality(Constrained<f64, AtLeastOne>);

impl BeamQuality {
    /// Creates a beam quality factor.
    ///
    /// # Errors
    ///
    /// Returns an error if `m_squared < 1` or is `NaN`.
    pub fn new(m_squared: f64) -> ConstraintResult<Self> {
        Ok(Self(AtLeastOne::new(m_squared)?))
    }

    /// A diffraction-limited TEM₀₀ beam, `M² = 1`.
    #[must_use]
    pub fn gaussian() -> Self {
        Self::new(1.0).expect("one is at least one")
    }
}

impl Deref for BeamQuality {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

/// Far-field divergence half-angle of a Gaussian beam, `θ = 4λ / (π·D)`.
#[must_use]
pub fn beam_divergence(
    wavelength: Length,
    beam_diameter: Constrained<Length, StrictlyPositive>,
) -> Angle {
    let theta: Ratio = wavelength * 4.0 / (beam_diameter.into_inner() * PI);
    Angle::new::<radian>(theta.get::<ratio>())
}

/// Waist radius of a Gaussian beam with divergence half-angle `θ`,
/// `w₀ = λ / (π·θ)`.
#[must_use]
pub fn gaussian_beam_waist(
    wavelength: Length,
    divergence: Constrained<Angle, StrictlyPositive>,
) -> Length {
    wavelength / (PI * divergence.into_inner().get::<radian>())
}

/// Diameter of the spot a lens focuses a collimated beam to,
/// `d = 2 · 4·M²·λ·f / (π·D)`.
#[must_use]
pub fn focused_spot_diameter(
    wavelength: Length,
    focal_length: Length,
    beam_diameter: Constrained<Length, StrictlyPositive>,
    quality: BeamQuality,
) -> Length {
    wavelength * focal_length * (8.0 * *quality) / (beam_diameter.into_inner() * PI)
}
