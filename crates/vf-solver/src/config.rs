//! Solver policies.

use crate::error::{GeometryError, SolveError, SolveResult};
use vf_components::FrictionConfig;
use vf_core::units::constants::{G_MPS2, P_ATM_PA};

/// Accepted range of the diameter ratio β.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetaBand {
    pub min: f64,
    pub max: f64,
}

impl Default for BetaBand {
    fn default() -> Self {
        Self { min: 0.30, max: 0.75 }
    }
}

impl BetaBand {
    /// Band that accepts any β in (0, 1).
    pub fn unrestricted() -> Self {
        Self { min: 0.0, max: 1.0 }
    }

    pub fn check(&self, beta: f64) -> SolveResult<()> {
        if beta < self.min || beta > self.max {
            return Err(GeometryError::BetaOutOfBand {
                beta,
                min: self.min,
                max: self.max,
            }
            .into());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Gravitational acceleration [m/s²]
    pub gravity: f64,
    /// Inlet pressure datum P1 [Pa]
    pub reference_pressure: f64,
    pub beta_band: BetaBand,
    /// Required (ρm − ρ) as a fraction of ρ
    pub min_density_margin: f64,
    pub friction: FrictionConfig,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            gravity: G_MPS2,
            reference_pressure: P_ATM_PA,
            beta_band: BetaBand::default(),
            min_density_margin: 0.01,
            friction: FrictionConfig::default(),
        }
    }
}

impl SolverConfig {
    pub fn validate(&self) -> SolveResult<()> {
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(SolveError::InvalidInput {
                what: "gravity must be positive and finite",
            });
        }
        if !self.reference_pressure.is_finite() {
            return Err(SolveError::InvalidInput {
                what: "reference pressure must be finite",
            });
        }
        if !(self.min_density_margin.is_finite() && self.min_density_margin >= 0.0) {
            return Err(SolveError::InvalidInput {
                what: "density margin must be non-negative",
            });
        }
        if !(self.beta_band.min.is_finite()
            && self.beta_band.max.is_finite()
            && self.beta_band.min <= self.beta_band.max)
        {
            return Err(SolveError::InvalidInput {
                what: "beta band must be an ordered finite interval",
            });
        }
        if self.friction.max_iterations == 0 {
            return Err(SolveError::InvalidInput {
                what: "friction iteration limit must be at least 1",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_band_edges_inclusive() {
        let band = BetaBand::default();
        assert!(band.check(0.30).is_ok());
        assert!(band.check(0.75).is_ok());
        assert!(band.check(0.29).is_err());
        assert!(band.check(0.76).is_err());
    }

    #[test]
    fn default_config_is_valid() {
        let cfg = SolverConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.gravity, 9.81);
        assert_eq!(cfg.reference_pressure, 101_325.0);
    }

    #[test]
    fn rejects_bad_gravity() {
        let cfg = SolverConfig {
            gravity: 0.0,
            ..SolverConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
