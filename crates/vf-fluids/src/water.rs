//! Temperature-dependent properties of liquid water.
//!
//! Density follows the Tanaka et al. (2001) fit of the VSMOW data, viscosity
//! the Vogel equation. Both are used at atmospheric pressure only; the state
//! pressure is checked for sanity but does not enter the correlations.

use crate::error::{FluidError, FluidResult};
use crate::model::{PropertySource, StatePoint};
use crate::properties::FluidProperties;
use uom::si::thermodynamic_temperature::degree_celsius;
use vf_core::units::{kgpm3, pas};

/// Liquid water correlation valid between 0 °C and 100 °C.
#[derive(Debug, Clone, Copy, Default)]
pub struct WaterCorrelation;

impl WaterCorrelation {
    pub const T_MIN_C: f64 = 0.0;
    pub const T_MAX_C: f64 = 100.0;

    pub fn new() -> Self {
        Self
    }

    /// Density [kg/m³] at `t_c` degrees Celsius.
    pub fn density(t_c: f64) -> f64 {
        const A1: f64 = -3.983_035;
        const A2: f64 = 301.797;
        const A3: f64 = 522_528.9;
        const A4: f64 = 69.348_81;
        const A5: f64 = 999.974_950;
        A5 * (1.0 - (t_c + A1).powi(2) * (t_c + A2) / (A3 * (t_c + A4)))
    }

    /// Dynamic viscosity [Pa·s] at `t_c` degrees Celsius.
    pub fn viscosity(t_c: f64) -> f64 {
        const A: f64 = 2.414e-5;
        const B: f64 = 247.8;
        const C: f64 = 140.0;
        let t_k = t_c + 273.15;
        A * 10f64.powf(B / (t_k - C))
    }

    fn properties_at(&self, state: StatePoint) -> FluidResult<FluidProperties> {
        let t_c = state.temperature.get::<degree_celsius>();
        // Celsius round-trips through kelvin, so allow a rounding-sized slack.
        const SLACK: f64 = 1e-9;
        if !t_c.is_finite() || t_c < Self::T_MIN_C - SLACK || t_c > Self::T_MAX_C + SLACK {
            return Err(FluidError::OutOfRange {
                what: "water temperature [°C]",
                value: t_c,
                min: Self::T_MIN_C,
                max: Self::T_MAX_C,
            });
        }
        if !state.pressure.value.is_finite() || state.pressure.value <= 0.0 {
            return Err(FluidError::InvalidArg {
                what: "pressure must be positive and finite",
            });
        }
        FluidProperties::new(kgpm3(Self::density(t_c)), pas(Self::viscosity(t_c)))
    }
}

impl PropertySource for WaterCorrelation {
    fn name(&self) -> &str {
        "water-correlation"
    }

    fn supports(&self, fluid_id: &str) -> bool {
        let id = fluid_id.trim();
        id.eq_ignore_ascii_case("water") || id.eq_ignore_ascii_case("h2o")
    }

    fn lookup(&self, fluid_id: &str, state: StatePoint) -> FluidResult<FluidProperties> {
        if !self.supports(fluid_id) {
            return Err(FluidError::UnknownFluid {
                id: fluid_id.to_string(),
                source_name: self.name().to_string(),
            });
        }
        self.properties_at(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vf_core::units::{celsius, constants};

    #[test]
    fn room_temperature_values() {
        assert!((WaterCorrelation::density(20.0) - 998.2).abs() < 0.1);
        assert!((WaterCorrelation::viscosity(20.0) - 1.002e-3).abs() < 1e-5);
    }

    #[test]
    fn maximum_density_near_four_degrees() {
        let rho4 = WaterCorrelation::density(4.0);
        assert!(rho4 > WaterCorrelation::density(0.0));
        assert!(rho4 > WaterCorrelation::density(10.0));
    }

    #[test]
    fn out_of_range_temperature_fails() {
        let state = StatePoint::new(celsius(120.0), constants::p_atm());
        let err = WaterCorrelation::new().lookup("water", state).unwrap_err();
        assert!(matches!(err, FluidError::OutOfRange { .. }));
    }

    #[test]
    fn only_water_is_supported() {
        let err = WaterCorrelation::new()
            .lookup("ethanol", StatePoint::standard())
            .unwrap_err();
        assert!(matches!(err, FluidError::UnknownFluid { .. }));
    }
}
