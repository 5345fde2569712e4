//! Fluid property errors.

use thiserror::Error;
use vf_core::VfError;

/// Result type for fluid operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur while obtaining fluid properties.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Non-physical values (negative density, zero viscosity, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// State point outside the source's valid range.
    #[error("Value out of range for {what}: {value} (valid {min}..={max})")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// The source does not know this fluid identifier.
    #[error("Unknown fluid '{id}' for source {source_name}")]
    UnknownFluid { id: String, source_name: String },
}

impl From<FluidError> for VfError {
    fn from(err: FluidError) -> Self {
        VfError::Property {
            message: err.to_string(),
        }
    }
}
