//! vf-fluids: fluid property sources for venturiflow.
//!
//! Provides:
//! - `FluidProperties` / `ManometricFluid` value types consumed by the solver
//! - `PropertySource` trait isolating the solver from where ρ/μ come from
//! - A static preset catalog (common liquids and manometer fluids)
//! - A temperature-dependent correlation for liquid water
//!
//! # Example
//!
//! ```
//! use vf_fluids::{PresetCatalog, PropertySource, StatePoint};
//!
//! let catalog = PresetCatalog::new();
//! let water = catalog.lookup("water-20c", StatePoint::standard()).unwrap();
//! assert!((water.density().value - 1000.0).abs() < 1e-9);
//! ```

pub mod catalog;
pub mod error;
pub mod model;
pub mod properties;
pub mod water;

// Re-exports for ergonomics
pub use catalog::{
    FluidPreset, ManometricPreset, PresetCatalog, fluid_presets, manometric_presets,
};
pub use error::{FluidError, FluidResult};
pub use model::{PropertySource, StatePoint};
pub use properties::{FluidProperties, ManometricFluid};
pub use water::WaterCorrelation;
