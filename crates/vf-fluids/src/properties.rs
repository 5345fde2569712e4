//! Fluid property values consumed by the Venturi solver.

use crate::error::{FluidError, FluidResult};
use vf_core::units::{Density, DynVisc, KinVisc};

/// Density and viscosity of the flowing liquid, fixed for one computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidProperties {
    /// Density [kg/m³]
    pub density: Density,
    /// Dynamic viscosity [Pa·s]
    pub viscosity: DynVisc,
}

impl FluidProperties {
    /// Create from density and dynamic viscosity.
    pub fn new(density: Density, viscosity: DynVisc) -> FluidResult<Self> {
        let props = Self { density, viscosity };
        props.validate()?;
        Ok(props)
    }

    /// Create from density and kinematic viscosity (μ = ρν).
    pub fn from_kinematic(density: Density, nu: KinVisc) -> FluidResult<Self> {
        if !nu.value.is_finite() || nu.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "kinematic viscosity must be positive and finite",
            });
        }
        Self::new(density, density * nu)
    }

    /// Check that both properties are finite and strictly positive.
    pub fn validate(&self) -> FluidResult<()> {
        if !self.density.value.is_finite() || self.density.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "density must be positive and finite",
            });
        }
        if !self.viscosity.value.is_finite() || self.viscosity.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "viscosity must be positive and finite",
            });
        }
        Ok(())
    }

    pub fn density(&self) -> Density {
        self.density
    }

    pub fn viscosity(&self) -> DynVisc {
        self.viscosity
    }

    pub fn kinematic_viscosity(&self) -> KinVisc {
        self.viscosity / self.density
    }

    /// Density in kg/m³.
    pub fn rho(&self) -> f64 {
        self.density.value
    }

    /// Dynamic viscosity in Pa·s.
    pub fn mu(&self) -> f64 {
        self.viscosity.value
    }
}

/// Gauge fluid of the differential manometer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManometricFluid {
    /// Density [kg/m³]
    pub density: Density,
}

impl ManometricFluid {
    pub fn new(density: Density) -> FluidResult<Self> {
        if !density.value.is_finite() || density.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "manometric density must be positive and finite",
            });
        }
        Ok(Self { density })
    }

    /// Mercury at room temperature.
    pub fn mercury() -> Self {
        Self {
            density: vf_core::units::kgpm3(13_600.0),
        }
    }

    /// Density in kg/m³.
    pub fn rho(&self) -> f64 {
        self.density.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vf_core::units::{kgpm3, m2ps, pas};

    #[test]
    fn kinematic_round_trip() {
        let props = FluidProperties::from_kinematic(kgpm3(870.0), m2ps(40e-6)).unwrap();
        assert!((props.mu() - 870.0 * 40e-6).abs() < 1e-12);
        assert!((props.kinematic_viscosity().value - 40e-6).abs() < 1e-15);
    }

    #[test]
    fn rejects_zero_viscosity() {
        let err = FluidProperties::new(kgpm3(1000.0), pas(0.0)).unwrap_err();
        assert!(matches!(err, FluidError::NonPhysical { .. }));
    }

    #[test]
    fn rejects_negative_density() {
        assert!(FluidProperties::new(kgpm3(-1.0), pas(1e-3)).is_err());
        assert!(ManometricFluid::new(kgpm3(-13_600.0)).is_err());
    }

    #[test]
    fn validate_catches_hand_built_values() {
        let props = FluidProperties {
            density: kgpm3(1000.0),
            viscosity: pas(f64::NAN),
        };
        assert!(props.validate().is_err());
    }
}
