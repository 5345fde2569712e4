//! Property source trait.

use crate::error::FluidResult;
use crate::properties::FluidProperties;
use vf_core::units::{Pressure, Temperature, celsius, constants};

/// Thermodynamic state at which properties are requested.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatePoint {
    pub temperature: Temperature,
    pub pressure: Pressure,
}

impl StatePoint {
    pub fn new(temperature: Temperature, pressure: Pressure) -> Self {
        Self {
            temperature,
            pressure,
        }
    }

    /// 20 °C at one standard atmosphere.
    pub fn standard() -> Self {
        Self::new(celsius(20.0), constants::p_atm())
    }
}

/// Something that can supply density and viscosity for a named fluid.
///
/// Implementations must be thread-safe (Send + Sync) so sweeps can evaluate
/// points in parallel. A lookup either returns validated properties or an
/// error; it never falls back to a default fluid.
pub trait PropertySource: Send + Sync {
    /// Source name (for logging and error messages).
    fn name(&self) -> &str;

    /// Whether `fluid_id` is known to this source.
    fn supports(&self, fluid_id: &str) -> bool;

    /// Properties of `fluid_id` at `state`.
    fn lookup(&self, fluid_id: &str, state: StatePoint) -> FluidResult<FluidProperties>;
}
