//! Physical properties of common optical and opto-mechanical materials.
//!
//! The catalog is a fixed, read-only table built once on first access. It can
//! be addressed through the typed [`Material`] enum or by name with [`lookup`]:
//!
//! ```
//! use optotherm::support::material::{Material, MaterialError, lookup};
//! use uom::si::thermal_conductivity::watt_per_meter_kelvin;
//!
//! let copper = lookup("Copper").unwrap();
//! assert_eq!(copper.thermal_conductivity().get::<watt_per_meter_kelvin>(), 400.0);
//! assert_eq!(copper, Material::Copper.properties());
//!
//! assert!(matches!(lookup("Unobtainium"), Err(MaterialError::NotFound { .. })));
//! ```
//!
//! Materials outside the catalog are built with [`MaterialProperties::new`],
//! which checks the same positivity invariants the catalog entries satisfy.

mod catalog;
mod properties;

use thiserror::Error;

use crate::support::constraint::ConstraintError;

pub use catalog::Material;
pub use properties::MaterialProperties;

/// Errors raised by material lookup and construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaterialError {
    /// No catalog entry has the requested name.
    #[error("material not found: {name}")]
    NotFound { name: String },

    /// A property value violates its physical constraint.
    #[error("invalid {property}: {source}")]
    InvalidProperty {
        property: &'static str,
        source: ConstraintError,
    },
}

/// Looks up a catalog material by its key (for example `"Fused Silica"`).
///
/// Keys are matched exactly, including case.
///
/// # Errors
///
/// Returns [`MaterialError::NotFound`] if no catalog entry has that key.
pub fn lookup(name: &str) -> Result<&'static MaterialProperties, MaterialError> {
    let material: Material = name.parse()?;
    Ok(material.properties())
}
