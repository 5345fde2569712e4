//! Error types for correlation evaluation.

use thiserror::Error;
use vf_core::error::VfError;

/// Errors that can occur while evaluating a correlation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

pub type ComponentResult<T> = Result<T, ComponentError>;

impl From<ComponentError> for VfError {
    fn from(e: ComponentError) -> Self {
        match e {
            ComponentError::NonPhysical { what } => VfError::Invariant { what },
            ComponentError::InvalidArg { what } => VfError::InvalidArg { what },
        }
    }
}
