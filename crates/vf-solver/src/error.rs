//! Error types for solver operations.

use thiserror::Error;
use vf_components::ComponentError;
use vf_core::error::VfError;
use vf_fluids::FluidError;

/// Geometric validity violations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("{what} must be positive and finite (got {value})")]
    NonPositive { what: &'static str, value: f64 },

    #[error("Throat diameter {throat} m must be smaller than inlet diameter {inlet} m")]
    ThroatNotNarrower { inlet: f64, throat: f64 },

    #[error("Diameter ratio beta = {beta:.3} outside allowed band [{min}, {max}]")]
    BetaOutOfBand { beta: f64, min: f64, max: f64 },

    #[error("Cone angle {degrees}° must lie strictly between 0° and 180°")]
    InvalidConeAngle { degrees: f64 },
}

/// Errors that can occur during a Venturi computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error(
        "Manometric fluid density {rho_m} kg/m³ must exceed fluid density {rho} kg/m³ by at least {margin} kg/m³"
    )]
    FluidConfig { rho: f64, rho_m: f64, margin: f64 },

    #[error("Property error: {0}")]
    Property(#[from] FluidError),

    #[error("Invalid input: {what}")]
    InvalidInput { what: &'static str },

    #[error("Mode {mode} cannot be driven by a {condition} boundary condition")]
    ModeMismatch {
        mode: &'static str,
        condition: &'static str,
    },

    #[error("Correlation error: {0}")]
    Component(#[from] ComponentError),

    #[error("Non-finite result for {what}")]
    NonFinite { what: &'static str },
}

pub type SolveResult<T> = Result<T, SolveError>;

impl From<SolveError> for VfError {
    fn from(e: SolveError) -> Self {
        match e {
            SolveError::Geometry(err) => VfError::Geometry {
                message: err.to_string(),
            },
            SolveError::FluidConfig { .. } => VfError::InvalidArg {
                what: "manometric fluid",
            },
            SolveError::Property(err) => err.into(),
            SolveError::InvalidInput { what } => VfError::InvalidArg { what },
            SolveError::ModeMismatch { .. } => VfError::InvalidArg {
                what: "mode/boundary condition combination",
            },
            SolveError::Component(err) => err.into(),
            SolveError::NonFinite { what } => VfError::NonFinite {
                what,
                value: f64::NAN,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geometry_error_display() {
        let err = GeometryError::ThroatNotNarrower {
            inlet: 0.05,
            throat: 0.05,
        };
        assert!(err.to_string().contains("smaller"));
    }

    #[test]
    fn conversion_to_vf_error() {
        let err: VfError = SolveError::Geometry(GeometryError::BetaOutOfBand {
            beta: 0.9,
            min: 0.3,
            max: 0.75,
        })
        .into();
        assert!(matches!(err, VfError::Geometry { .. }));

        let err: VfError = SolveError::Property(FluidError::NonPhysical { what: "viscosity" }).into();
        assert!(matches!(err, VfError::Property { .. }));
    }
}
