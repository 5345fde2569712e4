//! Empirical loss coefficients for the converging and diverging cones.

use crate::common::check_finite;
use crate::error::{ComponentError, ComponentResult};

/// Minor-loss coefficient of a well-rounded Venturi contraction, applied to
/// the throat dynamic pressure.
pub const ENTRANCE_CONTRACTION_K: f64 = 0.04;

/// Pressure recovery of a conical diffuser.
///
/// `cp_real` comes from a fit for a 15° included-angle cone (Fox & McDonald
/// diffuser charts) and is clamped to `[0, cp_ideal]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiffuserRecovery {
    /// Outlet-to-inlet area ratio AR = (D1/D2)²
    pub area_ratio: f64,
    /// 1 − 1/AR²
    pub cp_ideal: f64,
    pub cp_real: f64,
}

impl DiffuserRecovery {
    /// K_diffuser = Cp_ideal − Cp_real, applied to the throat dynamic pressure.
    pub fn loss_coefficient(&self) -> f64 {
        (self.cp_ideal - self.cp_real).max(0.0)
    }
}

/// Recovery coefficients for a diffuser of the given area ratio (AR ≥ 1).
pub fn diffuser_recovery(area_ratio: f64) -> ComponentResult<DiffuserRecovery> {
    let ar = check_finite(area_ratio, "area ratio")?;
    if ar < 1.0 {
        return Err(ComponentError::InvalidArg {
            what: "diffuser area ratio must be at least 1",
        });
    }

    let cp_ideal = 1.0 - 1.0 / (ar * ar);
    let cp_fit = if ar < 1.2 {
        1.4 * (ar - 1.0)
    } else if ar > 4.0 {
        0.64
    } else {
        0.0394 * ar.powi(3) - 0.3954 * ar.powi(2) + 1.3095 * ar - 0.7897
    };

    Ok(DiffuserRecovery {
        area_ratio: ar,
        cp_ideal,
        cp_real: cp_fit.clamp(0.0, cp_ideal),
    })
}

/// Velocity head v²/2g [m].
pub fn velocity_head(velocity: f64, g: f64) -> f64 {
    velocity * velocity / (2.0 * g)
}

/// Darcy-Weisbach head loss f·(L/D)·v²/2g [m].
pub fn darcy_head_loss(f: f64, length: f64, diameter: f64, velocity: f64, g: f64) -> f64 {
    f * (length / diameter) * velocity_head(velocity, g)
}
