//! Immutable snapshot of one Venturi computation.

use crate::geometry::FlowGeometry;
use crate::mode::OperatingMode;
use std::fmt;
use vf_components::{DiffuserRecovery, FlowRegime, FrictionFactor};
use vf_core::units::{Length, Pressure, Velocity, VolumeRate, m, m3ps, mps, pa};

/// Which closed-form path produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Flow known, pressures and deflection derived
    Forward,
    /// Deflection known, flow derived
    Inverse,
}

/// Head losses by origin [m of flowing fluid].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LossBreakdown {
    pub entrance: f64,
    pub friction: f64,
    pub diffuser: f64,
}

impl LossBreakdown {
    pub fn total(&self) -> f64 {
        self.entrance + self.friction + self.diffuser
    }
}

/// Notice that the throat flow is outside the regime Venturi calibrations assume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegimeAdvisory {
    pub regime: FlowRegime,
    pub reynolds: f64,
}

impl fmt::Display for RegimeAdvisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} flow at the throat (Re = {:.0}); meter coefficients assume turbulent flow",
            self.regime, self.reynolds
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationKind {
    Inlet,
    ThroatStart,
    ThroatEnd,
    Exit,
}

/// Conditions at one of the four reference sections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Station {
    pub kind: StationKind,
    /// Axial position from the inlet [m]
    pub position: f64,
    pub diameter: f64,
    pub velocity: f64,
    pub pressure: f64,
}

/// All outputs of a computation, in SI units.
#[derive(Debug, Clone, PartialEq)]
pub struct VenturiResult {
    pub mode: OperatingMode,
    pub branch: Branch,
    pub geometry: FlowGeometry,
    /// [m²]
    pub inlet_area: f64,
    /// [m²]
    pub throat_area: f64,
    pub beta: f64,
    /// Flowing fluid density [kg/m³]
    pub rho: f64,
    /// Manometer fluid density [kg/m³]
    pub rho_manometric: f64,
    pub gravity: f64,
    /// [m³/s]
    pub flow_rate: f64,
    /// Inlet velocity [m/s]
    pub v1: f64,
    /// Throat velocity [m/s]
    pub v2: f64,
    /// Inlet pressure [Pa]
    pub p1: f64,
    /// Throat-entry pressure [Pa]
    pub p2: f64,
    pub p2_throat_end: f64,
    pub p3_exit: f64,
    /// P1 − P2 [Pa]
    pub delta_p: f64,
    /// Manometer deflection [m]
    pub delta_h: f64,
    /// Total head loss [m]
    pub head_loss: f64,
    pub losses: LossBreakdown,
    pub reynolds_inlet: f64,
    pub reynolds_throat: f64,
    /// Regime at the throat
    pub regime: FlowRegime,
    pub friction: Option<FrictionFactor>,
    pub discharge_coefficient: f64,
    pub diffuser: Option<DiffuserRecovery>,
}

impl VenturiResult {
    pub fn flow_rate(&self) -> VolumeRate {
        m3ps(self.flow_rate)
    }

    pub fn inlet_velocity(&self) -> Velocity {
        mps(self.v1)
    }

    pub fn throat_velocity(&self) -> Velocity {
        mps(self.v2)
    }

    pub fn pressure_drop(&self) -> Pressure {
        pa(self.delta_p)
    }

    pub fn deflection(&self) -> Length {
        m(self.delta_h)
    }

    pub fn head_loss(&self) -> Length {
        m(self.head_loss)
    }

    /// Permanent pressure loss P1 − P3 [Pa].
    pub fn permanent_pressure_loss(&self) -> f64 {
        self.p1 - self.p3_exit
    }

    /// Non-turbulent throat flow is reported, never rejected.
    pub fn advisory(&self) -> Option<RegimeAdvisory> {
        if self.regime.is_suitable_for_metering() {
            None
        } else {
            Some(RegimeAdvisory {
                regime: self.regime,
                reynolds: self.reynolds_throat,
            })
        }
    }

    pub fn stations(&self) -> [Station; 4] {
        let s = self.geometry.segments();
        let d1 = self.geometry.inlet_diameter.value;
        let d2 = self.geometry.throat_diameter.value;
        let x_start = s.entrance.value;
        let x_end = x_start + s.throat.value;
        [
            Station {
                kind: StationKind::Inlet,
                position: 0.0,
                diameter: d1,
                velocity: self.v1,
                pressure: self.p1,
            },
            Station {
                kind: StationKind::ThroatStart,
                position: x_start,
                diameter: d2,
                velocity: self.v2,
                pressure: self.p2,
            },
            Station {
                kind: StationKind::ThroatEnd,
                position: x_end,
                diameter: d2,
                velocity: self.v2,
                pressure: self.p2_throat_end,
            },
            Station {
                kind: StationKind::Exit,
                position: s.total().value,
                diameter: d1,
                velocity: self.v1,
                pressure: self.p3_exit,
            },
        ]
    }
}
