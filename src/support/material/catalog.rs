use std::{fmt, str::FromStr, sync::LazyLock};

use uom::si::{
    f64::{MassDensity, SpecificHeatCapacity, ThermalConductivity},
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::support::units::per_kelvin;

use super::{MaterialError, MaterialProperties};

/// Materials available in the built-in catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    /// Schott N-BK7 borosilicate crown glass.
    Bk7,
    FusedSilica,
    /// 6061-T6 aluminum alloy, the usual lens barrel material.
    Aluminum,
    Copper,
    /// 36% nickel-iron alloy with near-zero expansion.
    Invar,
}

impl Material {
    /// Every catalog entry, in catalog order.
    pub const ALL: [Material; 5] = [
        Material::Bk7,
        Material::FusedSilica,
        Material::Aluminum,
        Material::Copper,
        Material::Invar,
    ];

    /// The lookup key for this material.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Material::Bk7 => "BK7",
            Material::FusedSilica => "Fused Silica",
            Material::Aluminum => "Aluminum",
            Material::Copper => "Copper",
            Material::Invar => "Invar",
        }
    }

    /// The catalog properties for this material.
    #[must_use]
    pub fn properties(self) -> &'static MaterialProperties {
        &CATALOG[self as usize]
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Material {
    type Err = MaterialError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Material::ALL
            .into_iter()
            .find(|material| material.key() == name)
            .ok_or_else(|| {
                log::debug!("no catalog material named {name:?}");
                MaterialError::NotFound {
                    name: name.to_owned(),
                }
            })
    }
}

/// Catalog entries, indexed by `Material as usize`.
static CATALOG: LazyLock<[MaterialProperties; 5]> = LazyLock::new(|| {
    Material::ALL.map(|material| {
        let (name, k, rho, cp, alpha) = match material {
            Material::Bk7 => ("BK7 Glass", 1.114, 2510.0, 858.0, 7.1e-6),
            Material::FusedSilica => ("Fused Silica", 1.38, 2203.0, 703.0, 0.55e-6),
            Material::Aluminum => ("Aluminum 6061-T6", 167.0, 2700.0, 896.0, 23.6e-6),
            Material::Copper => ("Copper", 400.0, 8960.0, 385.0, 16.5e-6),
            Material::Invar => ("Invar", 10.7, 8050.0, 515.0, 1.2e-6),
        };

        MaterialProperties::new(
            name,
            ThermalConductivity::new::<watt_per_meter_kelvin>(k),
            MassDensity::new::<kilogram_per_cubic_meter>(rho),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(cp),
            per_kelvin(alpha),
        )
        .expect("catalog properties should be strictly positive")
    })
});

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::diffusion_coefficient::square_meter_per_second;

    use crate::support::material::lookup;

    #[test]
    fn copper_diffusivity_matches_catalog_literals() {
        let copper = Material::Copper.properties();

        let expected = 400.0 / (8960.0 * 385.0);
        assert_relative_eq!(
            copper.thermal_diffusivity().get::<square_meter_per_second>(),
            expected,
            max_relative = 1e-15
        );
        // About 1.16e-4 m²/s.
        assert_relative_eq!(expected, 1.16e-4, max_relative = 1e-2);
    }

    #[test]
    fn every_key_round_trips_through_lookup() -> Result<(), MaterialError> {
        for material in Material::ALL {
            let by_name = lookup(material.key())?;
            assert_eq!(by_name, material.properties());
            assert_eq!(material.to_string().parse::<Material>()?, material);
        }
        Ok(())
    }

    #[test]
    fn catalog_names_and_positivity() {
        assert_eq!(Material::Bk7.properties().name(), "BK7 Glass");
        assert_eq!(Material::Aluminum.properties().name(), "Aluminum 6061-T6");

        for material in Material::ALL {
            let properties = material.properties();
            assert!(properties.thermal_conductivity().value > 0.0);
            assert!(properties.density().value > 0.0);
            assert!(properties.specific_heat().value > 0.0);
        }
        assert!(
            Material::Invar.properties().thermal_expansion()
                < Material::Aluminum.properties().thermal_expansion()
        );
    }

    #[test]
    fn unknown_names_are_not_found() {
        assert_eq!(
            lookup("bk7"),
            Err(MaterialError::NotFound {
                name: "bk7".to_owned()
            })
        );
        assert!("Zerodur".parse::<Material>().is_err());
    }
}
