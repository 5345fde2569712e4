//! Scenario file schema.
//!
//! All quantities are SI with the unit spelled out in the field name.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    pub geometry: GeometryDef,
    pub fluid: FluidDef,
    pub manometric: ManometricDef,
    pub condition: ConditionDef,
    pub mode: ModeDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solver: Option<SolverDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeometryDef {
    pub inlet_diameter_m: f64,
    pub throat_diameter_m: f64,
    pub lengths: LengthsDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum LengthsDef {
    Total {
        length_m: f64,
    },
    Derived {
        throat_length_m: f64,
        #[serde(default = "default_cone_angle_deg")]
        cone_angle_deg: f64,
    },
}

fn default_cone_angle_deg() -> f64 {
    vf_solver::DEFAULT_CONE_ANGLE_DEG
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum FluidDef {
    /// Looked up by id in a property source
    Preset { id: String },
    Custom {
        density_kg_per_m3: f64,
        viscosity_pa_s: f64,
    },
    CustomKinematic {
        density_kg_per_m3: f64,
        kinematic_viscosity_m2_per_s: f64,
    },
    /// Liquid water at the given temperature
    Water { temperature_c: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ManometricDef {
    Preset { id: String },
    Custom { density_kg_per_m3: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ConditionDef {
    FlowRate { q_m3_per_s: f64 },
    InletVelocity { v_m_per_s: f64 },
    ThroatVelocity { v_m_per_s: f64 },
    ManometerDeflection { delta_h_m: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum FrictionDef {
    Fixed { f: f64 },
    /// Wall roughness from the material table
    Material { material: String },
    Roughness { roughness_m: f64 },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LossModelDef {
    #[default]
    Lumped,
    Segmented,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum ModeDef {
    Ideal,
    Realistic {
        friction: FrictionDef,
        #[serde(default)]
        model: LossModelDef,
    },
    Meter {
        cd: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        friction: Option<FrictionDef>,
    },
}

/// Overrides of the solver defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SolverDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gravity_m_per_s2: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_pressure_pa: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta_min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beta_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_density_margin: Option<f64>,
}

impl ConditionDef {
    pub fn is_flow_like(&self) -> bool {
        !matches!(self, ConditionDef::ManometerDeflection { .. })
    }
}
