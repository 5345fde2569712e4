//! vf-components: friction and loss correlations for Venturi meters.
//!
//! Provides the pure building blocks the solver composes:
//! - Reynolds number and flow regime classification
//! - Darcy friction factor (laminar, Colebrook-White with explicit fallback)
//! - Wall roughness table for common pipe materials
//! - Empirical loss coefficients (entrance contraction, diffuser recovery)
//!
//! Nothing in this crate holds state; every function is a deterministic
//! transformation of its arguments.
//!
//! # Example
//!
//! ```
//! use vf_components::{FlowRegime, PipeMaterial, friction_factor, reynolds};
//! use vf_core::units::m;
//!
//! let re = reynolds(1000.0, 7.64, 0.05, 1.0e-3).unwrap();
//! let eps_d = PipeMaterial::CommercialSteel.relative_roughness(m(0.05)).unwrap();
//! let f = friction_factor(re, eps_d).unwrap();
//! assert_eq!(f.regime, FlowRegime::Turbulent);
//! assert!(f.value > 0.008 && f.value < 0.1);
//! ```

pub mod common;
pub mod error;
pub mod friction;
pub mod losses;
pub mod regime;
pub mod roughness;

// Re-exports
pub use error::{ComponentError, ComponentResult};
pub use friction::{
    FrictionConfig, FrictionFactor, FrictionMethod, friction_factor, friction_factor_with,
    reynolds, swamee_jain,
};
pub use losses::{
    DiffuserRecovery, ENTRANCE_CONTRACTION_K, darcy_head_loss, diffuser_recovery, velocity_head,
};
pub use regime::{FlowRegime, LAMINAR_LIMIT_RE, TURBULENT_LIMIT_RE};
pub use roughness::PipeMaterial;
