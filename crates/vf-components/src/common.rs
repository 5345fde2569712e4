//! Common helpers for correlation evaluation.

use crate::error::{ComponentError, ComponentResult};
use vf_core::VfError;
use vf_core::numeric::{ensure_finite, ensure_positive};

/// Ensure a value is finite, returning ComponentError if not.
pub fn check_finite(value: f64, what: &'static str) -> ComponentResult<f64> {
    ensure_finite(value, what).map_err(|_| ComponentError::NonPhysical { what })
}

/// Ensure a value is finite and strictly positive.
pub fn check_positive(value: f64, what: &'static str) -> ComponentResult<f64> {
    ensure_positive(value, what).map_err(|e| match e {
        VfError::NonFinite { .. } => ComponentError::NonPhysical { what },
        _ => ComponentError::InvalidArg { what },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_finite() {
        assert!(check_finite(1.0, "test").is_ok());
        assert!(check_finite(f64::INFINITY, "test").is_err());
        assert!(check_finite(f64::NAN, "test").is_err());
    }

    #[test]
    fn test_check_positive() {
        assert_eq!(check_positive(2.0, "x").unwrap(), 2.0);
        assert!(matches!(
            check_positive(0.0, "x"),
            Err(ComponentError::InvalidArg { .. })
        ));
        assert!(matches!(
            check_positive(f64::NAN, "x"),
            Err(ComponentError::NonPhysical { .. })
        ));
    }
}
