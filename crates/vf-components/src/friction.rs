//! Reynolds number and Darcy friction factor.

use crate::common::{check_finite, check_positive};
use crate::error::{ComponentError, ComponentResult};
use crate::regime::{FlowRegime, LAMINAR_LIMIT_RE, TURBULENT_LIMIT_RE};
use std::f64::consts::LN_10;

/// Colebrook iteration settings and the sanity band applied to turbulent values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionConfig {
    /// Maximum Newton steps before falling back to Swamee-Jain
    pub max_iterations: usize,
    /// Relative step tolerance on 1/√f
    pub rel_tol: f64,
    /// Lower clamp for turbulent friction factors
    pub f_min: f64,
    /// Upper clamp for turbulent friction factors
    pub f_max: f64,
}

impl Default for FrictionConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            rel_tol: 1e-10,
            f_min: 0.008,
            f_max: 0.1,
        }
    }
}

/// How a friction factor was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrictionMethod {
    /// f = 64/Re
    Laminar,
    /// Colebrook-White converged after `iterations` Newton steps
    Colebrook { iterations: usize },
    /// Linear blend between the laminar value at Re = 2300 and the turbulent value at Re = 4000
    TransitionalBlend,
    /// Colebrook did not converge; explicit Swamee-Jain value used instead
    SwameeJainFallback,
    /// Supplied by the caller
    Prescribed,
}

/// Darcy friction factor together with the regime and method that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionFactor {
    pub value: f64,
    pub regime: FlowRegime,
    pub method: FrictionMethod,
}

impl FrictionFactor {
    /// Wrap a caller-supplied friction factor, classifying the regime at `re`.
    pub fn prescribed(value: f64, re: f64) -> ComponentResult<Self> {
        let value = check_positive(value, "friction factor")?;
        Ok(Self {
            value,
            regime: FlowRegime::classify(re),
            method: FrictionMethod::Prescribed,
        })
    }
}

/// Reynolds number ρvD/μ.
pub fn reynolds(rho: f64, velocity: f64, diameter: f64, mu: f64) -> ComponentResult<f64> {
    check_positive(mu, "dynamic viscosity")?;
    check_finite(rho, "density")?;
    check_finite(velocity, "velocity")?;
    check_finite(diameter, "diameter")?;
    check_finite(rho * velocity * diameter / mu, "Reynolds number")
}

/// Swamee-Jain explicit approximation of Colebrook-White.
pub fn swamee_jain(re: f64, relative_roughness: f64) -> f64 {
    let a = relative_roughness / 3.7;
    let b = 5.74 / re.powf(0.9);
    0.25 / (a + b).log10().powi(2)
}

/// Darcy friction factor with the default [`FrictionConfig`].
pub fn friction_factor(re: f64, relative_roughness: f64) -> ComponentResult<FrictionFactor> {
    friction_factor_with(re, relative_roughness, &FrictionConfig::default())
}

/// Darcy friction factor for a Reynolds number and relative roughness ε/D.
///
/// Laminar flow uses the exact 64/Re. Turbulent flow solves Colebrook-White
/// and never fails on non-convergence: it logs a warning and returns the
/// explicit Swamee-Jain value. The transitional band is bridged linearly so
/// the result is continuous across Re = 2300.
pub fn friction_factor_with(
    re: f64,
    relative_roughness: f64,
    config: &FrictionConfig,
) -> ComponentResult<FrictionFactor> {
    check_positive(re, "Reynolds number")?;
    check_finite(relative_roughness, "relative roughness")?;
    if relative_roughness < 0.0 {
        return Err(ComponentError::InvalidArg {
            what: "relative roughness must be non-negative",
        });
    }

    let regime = FlowRegime::classify(re);
    let factor = match regime {
        FlowRegime::Laminar => FrictionFactor {
            value: 64.0 / re,
            regime,
            method: FrictionMethod::Laminar,
        },
        FlowRegime::Transitional => {
            let f_lam = 64.0 / LAMINAR_LIMIT_RE;
            let (f_turb, _) = turbulent(TURBULENT_LIMIT_RE, relative_roughness, config);
            let t = (re - LAMINAR_LIMIT_RE) / (TURBULENT_LIMIT_RE - LAMINAR_LIMIT_RE);
            FrictionFactor {
                value: f_lam + (f_turb - f_lam) * t,
                regime,
                method: FrictionMethod::TransitionalBlend,
            }
        }
        FlowRegime::Turbulent => {
            let (value, method) = turbulent(re, relative_roughness, config);
            FrictionFactor {
                value,
                regime,
                method,
            }
        }
    };

    check_finite(factor.value, "friction factor")?;
    Ok(factor)
}

fn turbulent(re: f64, relative_roughness: f64, config: &FrictionConfig) -> (f64, FrictionMethod) {
    let (f, method) = match colebrook(re, relative_roughness, config) {
        Some((f, iterations)) => (f, FrictionMethod::Colebrook { iterations }),
        None => {
            let f = swamee_jain(re, relative_roughness);
            tracing::warn!(
                re,
                relative_roughness,
                f,
                "Colebrook-White did not converge; using Swamee-Jain"
            );
            (f, FrictionMethod::SwameeJainFallback)
        }
    };
    (f.clamp(config.f_min, config.f_max), method)
}

/// Newton iteration on x = 1/√f for x + 2·log10(ε/D/3.7 + 2.51·x/Re) = 0.
fn colebrook(re: f64, relative_roughness: f64, config: &FrictionConfig) -> Option<(f64, usize)> {
    let a = relative_roughness / 3.7;
    let b = 2.51 / re;

    let seed = swamee_jain(re, relative_roughness);
    if !seed.is_finite() || seed <= 0.0 {
        return None;
    }
    let mut x = 1.0 / seed.sqrt();

    for iter in 1..=config.max_iterations {
        let arg = a + b * x;
        if arg <= 0.0 {
            return None;
        }
        let g = x + 2.0 * arg.log10();
        let dg = 1.0 + 2.0 * b / (arg * LN_10);
        let dx = g / dg;
        x -= dx;

        if !x.is_finite() || x <= 0.0 {
            return None;
        }
        if dx.abs() <= config.rel_tol * x.abs() {
            return Some((1.0 / (x * x), iter));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn laminar_is_exact() {
        let f = friction_factor(1000.0, 0.001).unwrap();
        assert_eq!(f.value, 0.064);
        assert_eq!(f.method, FrictionMethod::Laminar);
        assert_eq!(f.regime, FlowRegime::Laminar);
    }

    #[test]
    fn colebrook_satisfies_its_equation() {
        let re = 1.0e5;
        let eps_d = 1.0e-4;
        let f = friction_factor(re, eps_d).unwrap();
        assert!(matches!(f.method, FrictionMethod::Colebrook { .. }));

        let lhs = 1.0 / f.value.sqrt();
        let rhs = -2.0 * (eps_d / 3.7 + 2.51 / (re * f.value.sqrt())).log10();
        assert!((lhs - rhs).abs() < 1e-8);
    }

    #[test]
    fn smooth_pipe_reference_value() {
        // Moody chart: smooth pipe at Re = 1e5 gives f ≈ 0.0180
        let f = friction_factor(1.0e5, 0.0).unwrap();
        assert!((f.value - 0.0180).abs() < 3e-4, "f = {}", f.value);
    }

    #[test]
    fn swamee_jain_is_close_to_colebrook() {
        let re = 5.0e5;
        let eps_d = 5.0e-4;
        let exact = friction_factor(re, eps_d).unwrap().value;
        let approx = swamee_jain(re, eps_d);
        assert!((exact - approx).abs() / exact < 0.02);
    }

    #[test]
    fn fallback_when_iteration_budget_is_zero() {
        let config = FrictionConfig {
            max_iterations: 0,
            ..FrictionConfig::default()
        };
        let f = friction_factor_with(1.0e5, 1e-4, &config).unwrap();
        assert_eq!(f.method, FrictionMethod::SwameeJainFallback);
        assert!((f.value - swamee_jain(1.0e5, 1e-4)).abs() < 1e-15);
    }

    #[test]
    fn turbulent_value_is_clamped() {
        // Extremely rough wall would exceed the sanity band
        let f = friction_factor(1.0e5, 0.5).unwrap();
        assert!(f.value <= 0.1);
        let f = friction_factor(1.0e9, 0.0).unwrap();
        assert!(f.value >= 0.008);
    }

    #[test]
    fn continuous_across_laminar_limit() {
        let below = friction_factor(LAMINAR_LIMIT_RE - 1e-6, 1e-4).unwrap().value;
        let above = friction_factor(LAMINAR_LIMIT_RE, 1e-4).unwrap().value;
        assert!((below - above).abs() / below < 0.05);
    }

    #[test]
    fn continuous_across_turbulent_limit() {
        let below = friction_factor(TURBULENT_LIMIT_RE - 1e-6, 1e-4).unwrap().value;
        let above = friction_factor(TURBULENT_LIMIT_RE, 1e-4).unwrap().value;
        assert!((below - above).abs() / above < 1e-6);
    }

    #[test]
    fn invalid_inputs() {
        assert!(friction_factor(0.0, 0.0).is_err());
        assert!(friction_factor(-5.0, 0.0).is_err());
        assert!(friction_factor(1e5, -1e-4).is_err());
        assert!(reynolds(1000.0, 1.0, 0.1, 0.0).is_err());
    }

    #[test]
    fn prescribed_keeps_value() {
        let f = FrictionFactor::prescribed(0.025, 5.0e4).unwrap();
        assert_eq!(f.value, 0.025);
        assert_eq!(f.regime, FlowRegime::Turbulent);
        assert!(FrictionFactor::prescribed(0.0, 5.0e4).is_err());
    }

    #[test]
    fn reynolds_basic() {
        let re = reynolds(1000.0, 2.0, 0.05, 1.0e-3).unwrap();
        assert!((re - 100_000.0).abs() < 1e-6);
    }
}
