//! Absolute wall roughness of common pipe materials.

use crate::common::check_positive;
use crate::error::{ComponentError, ComponentResult};
use std::fmt;
use std::str::FromStr;
use vf_core::units::{Length, m};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipeMaterial {
    CommercialSteel,
    CastIron,
    /// Brass, copper and other drawn tubing
    BrassCopper,
    Pvc,
}

impl PipeMaterial {
    pub const ALL: [PipeMaterial; 4] = [
        PipeMaterial::CommercialSteel,
        PipeMaterial::CastIron,
        PipeMaterial::BrassCopper,
        PipeMaterial::Pvc,
    ];

    /// Absolute roughness ε [m].
    pub fn roughness_m(self) -> f64 {
        match self {
            PipeMaterial::CommercialSteel => 0.045e-3,
            PipeMaterial::CastIron => 0.26e-3,
            PipeMaterial::BrassCopper => 0.0015e-3,
            PipeMaterial::Pvc => 0.00015e-3,
        }
    }

    pub fn roughness(self) -> Length {
        m(self.roughness_m())
    }

    /// ε/D for a bore of the given diameter.
    pub fn relative_roughness(self, diameter: Length) -> ComponentResult<f64> {
        let d = check_positive(diameter.value, "diameter")?;
        Ok(self.roughness_m() / d)
    }

    pub fn id(self) -> &'static str {
        match self {
            PipeMaterial::CommercialSteel => "commercial-steel",
            PipeMaterial::CastIron => "cast-iron",
            PipeMaterial::BrassCopper => "brass",
            PipeMaterial::Pvc => "pvc",
        }
    }
}

impl fmt::Display for PipeMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for PipeMaterial {
    type Err = ComponentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "commercial-steel" | "steel" => Ok(PipeMaterial::CommercialSteel),
            "cast-iron" | "iron" => Ok(PipeMaterial::CastIron),
            "brass" | "copper" | "drawn-tubing" => Ok(PipeMaterial::BrassCopper),
            "pvc" | "plastic" => Ok(PipeMaterial::Pvc),
            _ => Err(ComponentError::InvalidArg {
                what: "unknown pipe material",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_values() {
        assert_eq!(PipeMaterial::CommercialSteel.roughness_m(), 4.5e-5);
        assert_eq!(PipeMaterial::CastIron.roughness_m(), 2.6e-4);
    }

    #[test]
    fn parse_round_trips_ids() {
        for material in PipeMaterial::ALL {
            assert_eq!(material.id().parse::<PipeMaterial>().unwrap(), material);
        }
        assert_eq!("Copper".parse::<PipeMaterial>().unwrap(), PipeMaterial::BrassCopper);
        assert!("wood".parse::<PipeMaterial>().is_err());
    }

    #[test]
    fn relative_roughness_scales_with_diameter() {
        let small = PipeMaterial::CastIron.relative_roughness(m(0.05)).unwrap();
        let large = PipeMaterial::CastIron.relative_roughness(m(0.10)).unwrap();
        assert!((small - 2.0 * large).abs() < 1e-15);
        assert!(PipeMaterial::Pvc.relative_roughness(m(0.0)).is_err());
    }
}
