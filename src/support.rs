//! Stateless calculation toolkits and supporting utilities.
//!
//! - [`material`]: Catalog of optical and structural material properties.
//! - [`heat_transfer`]: Conduction, convection and radiation, and the thermal
//!   resistances thermal networks are built from.
//! - [`heat_sink`]: Convection correlations and fin efficiency.
//! - [`optics`]: Paraxial, diffraction, beam and thermo-optic formulas.
//! - [`measurement`]: Post-processing of measured or ray-traced data.
//! - [`constraint`]: Numeric preconditions checked at construction.
//! - [`units`]: Extensions to [`uom`].

pub mod constraint;
pub mod heat_sink;
pub mod heat_transfer;
pub mod material;
pub mod measurement;
pub mod optics;
pub mod units;
