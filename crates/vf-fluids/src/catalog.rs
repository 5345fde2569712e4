//! Static preset tables for flowing liquids and manometer fluids.

use crate::error::{FluidError, FluidResult};
use crate::model::{PropertySource, StatePoint};
use crate::properties::{FluidProperties, ManometricFluid};
use vf_core::units::{kgpm3, m2ps};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FluidPreset {
    pub id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
    /// Density [kg/m³]
    pub density_kg_m3: f64,
    /// Kinematic viscosity [m²/s]
    pub kinematic_viscosity_m2_s: f64,
    pub description: &'static str,
}

impl FluidPreset {
    pub fn matches_query(&self, query: &str) -> bool {
        matches_query(self.id, self.display_name, self.aliases, query)
    }

    pub fn is_named(&self, name: &str) -> bool {
        is_named(self.id, self.aliases, name)
    }

    pub fn properties(&self) -> FluidResult<FluidProperties> {
        FluidProperties::from_kinematic(
            kgpm3(self.density_kg_m3),
            m2ps(self.kinematic_viscosity_m2_s),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManometricPreset {
    pub id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
    /// Density [kg/m³]
    pub density_kg_m3: f64,
}

impl ManometricPreset {
    pub fn matches_query(&self, query: &str) -> bool {
        matches_query(self.id, self.display_name, self.aliases, query)
    }

    pub fn is_named(&self, name: &str) -> bool {
        is_named(self.id, self.aliases, name)
    }

    pub fn fluid(&self) -> FluidResult<ManometricFluid> {
        ManometricFluid::new(kgpm3(self.density_kg_m3))
    }
}

fn matches_query(id: &str, display_name: &str, aliases: &[&str], query: &str) -> bool {
    let query = query.trim().to_ascii_lowercase();
    if query.is_empty() {
        return true;
    }

    id.to_ascii_lowercase().contains(&query)
        || display_name.to_ascii_lowercase().contains(&query)
        || aliases
            .iter()
            .any(|alias| alias.to_ascii_lowercase().contains(&query))
}

fn is_named(id: &str, aliases: &[&str], name: &str) -> bool {
    let name = name.trim();
    id.eq_ignore_ascii_case(name) || aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
}

const FLUID_PRESETS: [FluidPreset; 8] = [
    FluidPreset {
        id: "water-20c",
        display_name: "Water (20 °C)",
        aliases: &["water"],
        density_kg_m3: 1000.0,
        kinematic_viscosity_m2_s: 1.004e-6,
        description: "Water at room temperature",
    },
    FluidPreset {
        id: "water-4c",
        display_name: "Water (4 °C)",
        aliases: &[],
        density_kg_m3: 1000.0,
        kinematic_viscosity_m2_s: 1.567e-6,
        description: "Water at maximum density",
    },
    FluidPreset {
        id: "water-60c",
        display_name: "Water (60 °C)",
        aliases: &["hot water"],
        density_kg_m3: 983.0,
        kinematic_viscosity_m2_s: 0.478e-6,
        description: "Heated water",
    },
    FluidPreset {
        id: "oil-sae10",
        display_name: "SAE 10 oil",
        aliases: &["sae10", "light oil"],
        density_kg_m3: 870.0,
        kinematic_viscosity_m2_s: 40e-6,
        description: "Light lubricating oil",
    },
    FluidPreset {
        id: "oil-sae30",
        display_name: "SAE 30 oil",
        aliases: &["sae30"],
        density_kg_m3: 890.0,
        kinematic_viscosity_m2_s: 110e-6,
        description: "Medium lubricating oil",
    },
    FluidPreset {
        id: "gasoline",
        display_name: "Gasoline",
        aliases: &["petrol"],
        density_kg_m3: 720.0,
        kinematic_viscosity_m2_s: 0.6e-6,
        description: "Liquid fuel",
    },
    FluidPreset {
        id: "ethanol",
        display_name: "Ethanol",
        aliases: &["ethyl alcohol"],
        density_kg_m3: 789.0,
        kinematic_viscosity_m2_s: 1.52e-6,
        description: "Ethyl alcohol",
    },
    FluidPreset {
        id: "glycerin-20c",
        display_name: "Glycerin (20 °C)",
        aliases: &["glycerin", "glycerol"],
        density_kg_m3: 1260.0,
        kinematic_viscosity_m2_s: 1180e-6,
        description: "Very viscous liquid",
    },
];

const MANOMETRIC_PRESETS: [ManometricPreset; 4] = [
    ManometricPreset {
        id: "mercury",
        display_name: "Mercury",
        aliases: &["hg"],
        density_kg_m3: 13_600.0,
    },
    ManometricPreset {
        id: "water",
        display_name: "Water",
        aliases: &[],
        density_kg_m3: 1000.0,
    },
    ManometricPreset {
        id: "light-oil",
        display_name: "Light oil",
        aliases: &[],
        density_kg_m3: 850.0,
    },
    ManometricPreset {
        id: "carbon-tetrachloride",
        display_name: "Carbon tetrachloride",
        aliases: &["ccl4"],
        density_kg_m3: 1590.0,
    },
];

pub fn fluid_presets() -> &'static [FluidPreset] {
    &FLUID_PRESETS
}

pub fn manometric_presets() -> &'static [ManometricPreset] {
    &MANOMETRIC_PRESETS
}

/// Property source backed by the static preset tables.
///
/// Presets are tabulated at a fixed temperature, so the requested state point
/// is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresetCatalog;

impl PresetCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn fluid(&self, name: &str) -> Option<&'static FluidPreset> {
        FLUID_PRESETS.iter().find(|p| p.is_named(name))
    }

    pub fn manometric(&self, name: &str) -> FluidResult<ManometricFluid> {
        MANOMETRIC_PRESETS
            .iter()
            .find(|p| p.is_named(name))
            .ok_or_else(|| FluidError::UnknownFluid {
                id: name.to_string(),
                source_name: self.name().to_string(),
            })?
            .fluid()
    }

    pub fn search(&self, query: &str) -> Vec<&'static FluidPreset> {
        FLUID_PRESETS
            .iter()
            .filter(|p| p.matches_query(query))
            .collect()
    }
}

impl PropertySource for PresetCatalog {
    fn name(&self) -> &str {
        "presets"
    }

    fn supports(&self, fluid_id: &str) -> bool {
        self.fluid(fluid_id).is_some()
    }

    fn lookup(&self, fluid_id: &str, _state: StatePoint) -> FluidResult<FluidProperties> {
        self.fluid(fluid_id)
            .ok_or_else(|| FluidError::UnknownFluid {
                id: fluid_id.to_string(),
                source_name: self.name().to_string(),
            })?
            .properties()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_and_accepts_aliases() {
        let catalog = PresetCatalog::new();
        assert!(catalog.supports("WATER-20C"));
        assert!(catalog.supports("glycerol"));
        assert!(!catalog.supports("unobtainium"));
    }

    #[test]
    fn preset_viscosity_is_dynamic() {
        let catalog = PresetCatalog::new();
        let oil = catalog.lookup("oil-sae30", StatePoint::standard()).unwrap();
        assert!((oil.mu() - 890.0 * 110e-6).abs() < 1e-12);
    }

    #[test]
    fn unknown_fluid_is_an_error() {
        let err = PresetCatalog::new()
            .lookup("lava", StatePoint::standard())
            .unwrap_err();
        assert!(matches!(err, FluidError::UnknownFluid { .. }));
    }

    #[test]
    fn manometric_mercury() {
        let hg = PresetCatalog::new().manometric("Hg").unwrap();
        assert_eq!(hg.rho(), 13_600.0);
    }

    #[test]
    fn search_filters_by_substring() {
        let found = PresetCatalog::new().search("oil");
        assert_eq!(found.len(), 2);
        assert_eq!(PresetCatalog::new().search("").len(), fluid_presets().len());
    }
}
