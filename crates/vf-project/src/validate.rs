//! Scenario validation logic.

use crate::schema::{
    ConditionDef, FluidDef, FrictionDef, GeometryDef, LengthsDef, ManometricDef, ModeDef, Scenario,
    SolverDef,
};
use vf_components::PipeMaterial;
use vf_solver::BetaBand;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Missing value: {field}")]
    Missing { field: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported feature: {feature} - {reason}")]
    Unsupported { feature: String, reason: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }
    if scenario.name.trim().is_empty() {
        return Err(ValidationError::Missing {
            field: "name".to_string(),
        });
    }

    validate_geometry(&scenario.geometry)?;
    validate_fluid(&scenario.fluid)?;
    validate_manometric(&scenario.manometric)?;
    validate_condition(&scenario.condition)?;
    validate_mode(&scenario.mode)?;

    match (&scenario.mode, scenario.condition.is_flow_like()) {
        (ModeDef::Meter { .. }, true) => {
            return Err(ValidationError::Unsupported {
                feature: "meter mode with a flow condition".to_string(),
                reason: "meter mode recovers flow from a manometer deflection".to_string(),
            });
        }
        (ModeDef::Realistic { .. }, false) => {
            return Err(ValidationError::Unsupported {
                feature: "realistic mode with a manometer deflection".to_string(),
                reason: "use meter mode to recover flow from a reading".to_string(),
            });
        }
        _ => {}
    }

    let band = match &scenario.solver {
        Some(solver) => validate_solver(solver)?,
        None => BetaBand::default(),
    };
    let beta = scenario.geometry.throat_diameter_m / scenario.geometry.inlet_diameter_m;
    if beta < band.min || beta > band.max {
        return Err(ValidationError::InvalidValue {
            field: "geometry.throat_diameter_m".to_string(),
            value: format!("β = {beta:.4}"),
            reason: format!("diameter ratio outside [{}, {}]", band.min, band.max),
        });
    }

    Ok(())
}

fn validate_geometry(geometry: &GeometryDef) -> Result<(), ValidationError> {
    positive("geometry.inlet_diameter_m", geometry.inlet_diameter_m)?;
    positive("geometry.throat_diameter_m", geometry.throat_diameter_m)?;
    if geometry.throat_diameter_m >= geometry.inlet_diameter_m {
        return Err(invalid(
            "geometry.throat_diameter_m",
            geometry.throat_diameter_m,
            "throat must be narrower than the inlet",
        ));
    }
    match geometry.lengths {
        LengthsDef::Total { length_m } => positive("geometry.lengths.length_m", length_m)?,
        LengthsDef::Derived {
            throat_length_m,
            cone_angle_deg,
        } => {
            positive("geometry.lengths.throat_length_m", throat_length_m)?;
            if !(cone_angle_deg.is_finite() && cone_angle_deg > 0.0 && cone_angle_deg < 180.0) {
                return Err(invalid(
                    "geometry.lengths.cone_angle_deg",
                    cone_angle_deg,
                    "must lie strictly between 0 and 180",
                ));
            }
        }
    }
    Ok(())
}

fn validate_fluid(fluid: &FluidDef) -> Result<(), ValidationError> {
    match fluid {
        FluidDef::Preset { id } => {
            if id.trim().is_empty() {
                return Err(ValidationError::Missing {
                    field: "fluid.id".to_string(),
                });
            }
        }
        FluidDef::Custom {
            density_kg_per_m3,
            viscosity_pa_s,
        } => {
            positive("fluid.density_kg_per_m3", *density_kg_per_m3)?;
            positive("fluid.viscosity_pa_s", *viscosity_pa_s)?;
        }
        FluidDef::CustomKinematic {
            density_kg_per_m3,
            kinematic_viscosity_m2_per_s,
        } => {
            positive("fluid.density_kg_per_m3", *density_kg_per_m3)?;
            positive(
                "fluid.kinematic_viscosity_m2_per_s",
                *kinematic_viscosity_m2_per_s,
            )?;
        }
        FluidDef::Water { temperature_c } => {
            if !temperature_c.is_finite() {
                return Err(invalid("fluid.temperature_c", *temperature_c, "must be finite"));
            }
        }
    }
    Ok(())
}

fn validate_manometric(manometric: &ManometricDef) -> Result<(), ValidationError> {
    match manometric {
        ManometricDef::Preset { id } if id.trim().is_empty() => Err(ValidationError::Missing {
            field: "manometric.id".to_string(),
        }),
        ManometricDef::Preset { .. } => Ok(()),
        ManometricDef::Custom { density_kg_per_m3 } => {
            positive("manometric.density_kg_per_m3", *density_kg_per_m3)
        }
    }
}

fn validate_condition(condition: &ConditionDef) -> Result<(), ValidationError> {
    match *condition {
        ConditionDef::FlowRate { q_m3_per_s } => positive("condition.q_m3_per_s", q_m3_per_s),
        ConditionDef::InletVelocity { v_m_per_s } | ConditionDef::ThroatVelocity { v_m_per_s } => {
            positive("condition.v_m_per_s", v_m_per_s)
        }
        ConditionDef::ManometerDeflection { delta_h_m } => {
            positive("condition.delta_h_m", delta_h_m)
        }
    }
}

fn validate_mode(mode: &ModeDef) -> Result<(), ValidationError> {
    match mode {
        ModeDef::Ideal => Ok(()),
        ModeDef::Realistic { friction, .. } => validate_friction(friction),
        ModeDef::Meter { cd, friction } => {
            if !(cd.is_finite() && *cd > 0.0 && *cd <= 1.0) {
                return Err(invalid("mode.cd", *cd, "must lie in (0, 1]"));
            }
            match friction {
                Some(friction) => validate_friction(friction),
                None => Ok(()),
            }
        }
    }
}

fn validate_friction(friction: &FrictionDef) -> Result<(), ValidationError> {
    match friction {
        FrictionDef::Fixed { f } => positive("mode.friction.f", *f),
        FrictionDef::Material { material } => {
            material
                .parse::<PipeMaterial>()
                .map_err(|e| ValidationError::InvalidValue {
                    field: "mode.friction.material".to_string(),
                    value: material.clone(),
                    reason: e.to_string(),
                })?;
            Ok(())
        }
        FrictionDef::Roughness { roughness_m } => {
            if !(roughness_m.is_finite() && *roughness_m >= 0.0) {
                return Err(invalid(
                    "mode.friction.roughness_m",
                    *roughness_m,
                    "must be non-negative",
                ));
            }
            Ok(())
        }
    }
}

/// Checks the solver overrides and returns the β band they resolve to.
fn validate_solver(solver: &SolverDef) -> Result<BetaBand, ValidationError> {
    if let Some(g) = solver.gravity_m_per_s2 {
        positive("solver.gravity_m_per_s2", g)?;
    }
    if let Some(p) = solver.reference_pressure_pa {
        if !p.is_finite() {
            return Err(invalid("solver.reference_pressure_pa", p, "must be finite"));
        }
    }
    if let Some(margin) = solver.min_density_margin {
        if !(margin.is_finite() && margin >= 0.0) {
            return Err(invalid("solver.min_density_margin", margin, "must be non-negative"));
        }
    }
    let band = BetaBand::default();
    let min = solver.beta_min.unwrap_or(band.min);
    let max = solver.beta_max.unwrap_or(band.max);
    if !(min.is_finite() && max.is_finite() && min <= max) {
        return Err(ValidationError::InvalidValue {
            field: "solver.beta_min/beta_max".to_string(),
            value: format!("{min}..{max}"),
            reason: "must be an ordered finite interval".to_string(),
        });
    }
    Ok(BetaBand { min, max })
}

fn positive(field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, value, "must be positive and finite"))
    }
}

fn invalid(field: &str, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
