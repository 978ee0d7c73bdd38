//! Paraxial, diffraction, beam and thermo-optic formulas.
//!
//! Distances are [`Length`](uom::si::f64::Length)s and angles are
//! [`Angle`](uom::si::f64::Angle)s, so a wavelength in micrometres and a focal
//! length in millimetres can be mixed freely. Refractive indices, F-numbers
//! and magnifications are plain `f64`.
//!
//! Sign conventions are the usual paraxial ones: a radius of curvature is
//! positive when its centre lies to the right of the surface, and a real image
//! has a positive image distance.
//!
//! ```
//! use optotherm::support::{
//!     constraint::{ConstraintResult, NonZero, StrictlyPositive},
//!     optics::{f_number, thin_lens_focal_length},
//! };
//! use uom::si::{f64::Length, length::millimeter};
//!
//! fn main() -> ConstraintResult<()> {
//!     // BK7 biconvex singlet.
//!     let f = thin_lens_focal_length(
//!         NonZero::new(Length::new::<millimeter>(50.0))?,
//!         NonZero::new(Length::new::<millimeter>(-50.0))?,
//!         1.5168,
//!     )?;
//!     assert!((f.get::<millimeter>() - 48.37).abs() < 0.01);
//!
//!     let n = f_number(f, StrictlyPositive::new(Length::new::<millimeter>(12.0))?);
//!     assert!(n > 4.0 && n < 4.1);
//!     Ok(())
//! }
//! ```

mod beam;
mod diffraction;
mod lens;
mod thermo_optic;

pub use beam::{BeamQuality, beam_divergence, focused_spot_diameter, gaussian_beam_waist};
pub use diffraction::{
    DEFAULT_CIRCLE_OF_CONFUSION, DepthOfField, airy_disk_diameter, depth_of_field,
    hyperfocal_distance, rayleigh_resolution,
};
pub use lens::{
    f_number, f_theta_distortion, magnification, numerical_aperture, surface_focal_length,
    thin_lens_focal_length,
};
pub use thermo_optic::{thermal_expansion, thermal_focal_shift};
