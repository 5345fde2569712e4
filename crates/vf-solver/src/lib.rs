//! Steady incompressible Venturi meter solver.
//!
//! A computation maps one fully specified scenario (geometry, fluid,
//! manometer fluid, boundary condition, operating mode) to an immutable
//! [`VenturiResult`]. Two closed-form branches exist:
//!
//! - forward: a flow-like boundary condition gives pressures and the
//!   manometer deflection;
//! - inverse: a manometer deflection gives the flow rate through the
//!   discharge-coefficient form of the meter equation.
//!
//! The only iteration happens inside the friction resolver in
//! `vf-components`. The solver is stateless; sweeps evaluate points in
//! parallel.

pub mod condition;
pub mod config;
pub mod error;
pub mod geometry;
pub mod mode;
pub mod profile;
pub mod result;
pub mod solve;
pub mod sweep;

pub use condition::BoundaryCondition;
pub use config::{BetaBand, SolverConfig};
pub use error::{GeometryError, SolveError, SolveResult};
pub use geometry::{DEFAULT_CONE_ANGLE_DEG, FlowGeometry, SectionLengths, Segments};
pub use mode::{DEFAULT_METER_FRICTION, FrictionSetting, LossModel, OperatingMode};
pub use profile::{AxialProfile, ProfilePoint};
pub use result::{Branch, LossBreakdown, RegimeAdvisory, Station, StationKind, VenturiResult};
pub use solve::{VenturiSolver, solve};
pub use sweep::{
    BetaPoint, CalibrationPoint, DischargePoint, ReynoldsPoint, Sweep, SweepFailure, SweepRunner,
    linspace,
};
