use std::borrow::Cow;

use uom::si::f64::{DiffusionCoefficient, MassDensity, SpecificHeatCapacity, ThermalConductivity};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    units::TemperatureCoefficient,
};

use super::MaterialError;

/// Immutable thermal and mechanical properties of a material.
///
/// Conductivity, density and specific heat are strictly positive. The thermal
/// expansion coefficient may take any sign (some glass-ceramics contract when
/// heated).
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialProperties {
    name: Cow<'static, str>,
    thermal_conductivity: ThermalConductivity,
    density: MassDensity,
    specific_heat: SpecificHeatCapacity,
    thermal_expansion: TemperatureCoefficient,
}

impl MaterialProperties {
    /// Creates a material record.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::InvalidProperty`] if conductivity, density or
    /// specific heat is not strictly positive.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        thermal_conductivity: ThermalConductivity,
        density: MassDensity,
        specific_heat: SpecificHeatCapacity,
        thermal_expansion: TemperatureCoefficient,
    ) -> Result<Self, MaterialError> {
        let invalid = |property: &'static str| {
            move |source| MaterialError::InvalidProperty { property, source }
        };

        StrictlyPositive::check(&thermal_conductivity).map_err(invalid("thermal conductivity"))?;
        StrictlyPositive::check(&density).map_err(invalid("density"))?;
        StrictlyPositive::check(&specific_heat).map_err(invalid("specific heat"))?;

        Ok(Self {
            name: name.into(),
            thermal_conductivity,
            density,
            specific_heat,
            thermal_expansion,
        })
    }

    /// Descriptive name, such as `"Aluminum 6061-T6"`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn thermal_conductivity(&self) -> ThermalConductivity {
        self.thermal_conductivity
    }

    #[must_use]
    pub fn density(&self) -> MassDensity {
        self.density
    }

    #[must_use]
    pub fn specific_heat(&self) -> SpecificHeatCapacity {
        self.specific_heat
    }

    /// Linear thermal expansion coefficient.
    #[must_use]
    pub fn thermal_expansion(&self) -> TemperatureCoefficient {
        self.thermal_expansion
    }

    /// Thermal diffusivity `k / (ρ·c_p)`, computed on every call.
    #[must_use]
    pub fn thermal_diffusivity(&self) -> DiffusionCoefficient {
        self.thermal_conductivity / (self.density * self.specific_heat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        diffusion_coefficient::square_meter_per_second,
        mass_density::kilogram_per_cubic_meter,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        thermal_conductivity::watt_per_meter_kelvin,
    };

    use crate::support::{constraint::ConstraintError, units::per_kelvin};

    fn stainless(
        k: f64,
        rho: f64,
        cp: f64,
    ) -> Result<MaterialProperties, MaterialError> {
        MaterialProperties::new(
            "Stainless 304",
            ThermalConductivity::new::<watt_per_meter_kelvin>(k),
            MassDensity::new::<kilogram_per_cubic_meter>(rho),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(cp),
            per_kelvin(17.3e-6),
        )
    }

    #[test]
    fn custom_material_diffusivity() -> Result<(), MaterialError> {
        let steel = stainless(16.2, 8000.0, 500.0)?;

        assert_eq!(steel.name(), "Stainless 304");
        assert_relative_eq!(
            steel.thermal_diffusivity().get::<square_meter_per_second>(),
            16.2 / (8000.0 * 500.0),
            max_relative = 1e-15
        );
        Ok(())
    }

    #[test]
    fn rejects_non_physical_properties() {
        assert_eq!(
            stainless(0.0, 8000.0, 500.0),
            Err(MaterialError::InvalidProperty {
                property: "thermal conductivity",
                source: ConstraintError::Zero,
            })
        );
        assert_eq!(
            stainless(16.2, -1.0, 500.0),
            Err(MaterialError::InvalidProperty {
                property: "density",
                source: ConstraintError::Negative,
            })
        );
        assert_eq!(
            stainless(16.2, 8000.0, f64::NAN),
            Err(MaterialError::InvalidProperty {
                property: "specific heat",
                source: ConstraintError::NotANumber,
            })
        );
    }
}
