//! Operating modes and loss modelling choices.

use crate::error::{SolveError, SolveResult};
use vf_components::{ENTRANCE_CONTRACTION_K, PipeMaterial};
use vf_core::units::{Length, m};

/// Darcy f assumed for a lossy meter whose scenario names no friction.
pub const DEFAULT_METER_FRICTION: f64 = 0.02;

/// Where the Darcy friction factor comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrictionSetting {
    /// Fixed Darcy f
    Fixed(f64),
    /// Resolved from Reynolds number and absolute wall roughness
    Computed { roughness: Length },
}

impl FrictionSetting {
    pub fn from_material(material: PipeMaterial) -> Self {
        FrictionSetting::Computed {
            roughness: material.roughness(),
        }
    }

    /// Hydraulically smooth wall.
    pub fn smooth() -> Self {
        FrictionSetting::Computed { roughness: m(0.0) }
    }

    pub fn validate(&self) -> SolveResult<()> {
        match *self {
            FrictionSetting::Fixed(f) if !(f.is_finite() && f > 0.0) => Err(SolveError::InvalidInput {
                what: "friction factor must be positive and finite",
            }),
            FrictionSetting::Computed { roughness }
                if !(roughness.value.is_finite() && roughness.value >= 0.0) =>
            {
                Err(SolveError::InvalidInput {
                    what: "wall roughness must be non-negative and finite",
                })
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossModel {
    /// Darcy-Weisbach over mean velocity and diameter along the whole length
    Lumped,
    /// Entrance contraction, throat friction and diffuser recovery
    Segmented,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OperatingMode {
    /// No losses, Cd = 1
    Ideal,
    Realistic {
        friction: FrictionSetting,
        model: LossModel,
    },
    /// Flow recovered from a manometer reading. With `cd < 1` and no
    /// friction, [`DEFAULT_METER_FRICTION`] is used for the head loss.
    Meter {
        cd: f64,
        friction: Option<FrictionSetting>,
    },
}

impl OperatingMode {
    pub fn label(&self) -> &'static str {
        match self {
            OperatingMode::Ideal => "ideal",
            OperatingMode::Realistic { .. } => "realistic",
            OperatingMode::Meter { .. } => "meter",
        }
    }

    pub fn friction(&self) -> Option<FrictionSetting> {
        match *self {
            OperatingMode::Ideal => None,
            OperatingMode::Realistic { friction, .. } => Some(friction),
            OperatingMode::Meter { friction, .. } => friction,
        }
    }

    pub fn discharge_coefficient(&self) -> f64 {
        match *self {
            OperatingMode::Meter { cd, .. } => cd,
            _ => 1.0,
        }
    }

    /// Entrance contraction K applied by this mode.
    pub fn entrance_loss_coefficient(&self) -> f64 {
        match self {
            OperatingMode::Realistic {
                model: LossModel::Segmented,
                ..
            } => ENTRANCE_CONTRACTION_K,
            _ => 0.0,
        }
    }

    pub fn validate(&self) -> SolveResult<()> {
        if let OperatingMode::Meter { cd, .. } = *self {
            if !(cd.is_finite() && cd > 0.0 && cd <= 1.0) {
                return Err(SolveError::InvalidInput {
                    what: "discharge coefficient must lie in (0, 1]",
                });
            }
        }
        match self.friction() {
            Some(setting) => setting.validate(),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cd_range_enforced() {
        for cd in [0.0, -0.5, 1.01, f64::NAN] {
            let mode = OperatingMode::Meter { cd, friction: None };
            assert!(mode.validate().is_err(), "cd = {cd}");
        }
        assert!(OperatingMode::Meter { cd: 1.0, friction: None }.validate().is_ok());
    }

    #[test]
    fn friction_setting_validation() {
        assert!(FrictionSetting::Fixed(0.0).validate().is_err());
        assert!(FrictionSetting::Computed { roughness: m(-1e-5) }.validate().is_err());
        assert!(FrictionSetting::smooth().validate().is_ok());
        assert!(FrictionSetting::from_material(PipeMaterial::CastIron).validate().is_ok());
    }

    #[test]
    fn entrance_coefficient_only_for_segmented() {
        let segmented = OperatingMode::Realistic {
            friction: FrictionSetting::Fixed(0.02),
            model: LossModel::Segmented,
        };
        assert_eq!(segmented.entrance_loss_coefficient(), ENTRANCE_CONTRACTION_K);
        assert_eq!(OperatingMode::Ideal.entrance_loss_coefficient(), 0.0);
        assert_eq!(OperatingMode::Ideal.discharge_coefficient(), 1.0);
    }
}
