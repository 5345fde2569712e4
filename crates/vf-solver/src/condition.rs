//! The single flow or pressure input that drives a computation.

use crate::error::{SolveError, SolveResult};
use crate::geometry::FlowGeometry;
use vf_core::units::{Length, Velocity, VolumeRate};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryCondition {
    FlowRate(VolumeRate),
    InletVelocity(Velocity),
    ThroatVelocity(Velocity),
    /// Differential manometer reading Δh
    ManometerDeflection(Length),
}

impl BoundaryCondition {
    /// True for the variants that fix Q directly (forward branch).
    pub fn is_flow_like(&self) -> bool {
        !matches!(self, BoundaryCondition::ManometerDeflection(_))
    }

    pub fn value(&self) -> f64 {
        match self {
            BoundaryCondition::FlowRate(q) => q.value,
            BoundaryCondition::InletVelocity(v) | BoundaryCondition::ThroatVelocity(v) => v.value,
            BoundaryCondition::ManometerDeflection(h) => h.value,
        }
    }

    pub fn validate(&self) -> SolveResult<()> {
        let v = self.value();
        if v.is_finite() && v > 0.0 {
            Ok(())
        } else {
            Err(SolveError::InvalidInput {
                what: "boundary condition must be positive and finite",
            })
        }
    }

    /// Volumetric flow rate implied by a flow-like condition; `None` for a deflection.
    pub fn flow_rate(&self, geometry: &FlowGeometry) -> Option<VolumeRate> {
        match *self {
            BoundaryCondition::FlowRate(q) => Some(q),
            BoundaryCondition::InletVelocity(v) => Some(v * geometry.inlet_area()),
            BoundaryCondition::ThroatVelocity(v) => Some(v * geometry.throat_area()),
            BoundaryCondition::ManometerDeflection(_) => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BoundaryCondition::FlowRate(_) => "flow rate",
            BoundaryCondition::InletVelocity(_) => "inlet velocity",
            BoundaryCondition::ThroatVelocity(_) => "throat velocity",
            BoundaryCondition::ManometerDeflection(_) => "manometer deflection",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vf_core::units::{m, m3ps, mps};

    #[test]
    fn velocities_convert_through_matching_area() {
        let g = FlowGeometry::with_total_length(m(0.10), m(0.05), m(0.3));
        let q = BoundaryCondition::InletVelocity(mps(2.0)).flow_rate(&g).unwrap();
        assert!((q.value - 2.0 * g.inlet_area().value).abs() < 1e-15);
        let q = BoundaryCondition::ThroatVelocity(mps(2.0)).flow_rate(&g).unwrap();
        assert!((q.value - 2.0 * g.throat_area().value).abs() < 1e-15);
        assert!(BoundaryCondition::ManometerDeflection(m(0.1)).flow_rate(&g).is_none());
    }

    #[test]
    fn rejects_zero_and_nan() {
        assert!(BoundaryCondition::FlowRate(m3ps(0.0)).validate().is_err());
        assert!(BoundaryCondition::ManometerDeflection(m(f64::NAN)).validate().is_err());
        assert!(BoundaryCondition::FlowRate(m3ps(0.01)).validate().is_ok());
    }

    #[test]
    fn classification() {
        assert!(BoundaryCondition::ThroatVelocity(mps(1.0)).is_flow_like());
        assert!(!BoundaryCondition::ManometerDeflection(m(0.1)).is_flow_like());
    }
}
