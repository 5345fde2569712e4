//! Turning a scenario file into solver inputs.

use crate::ProjectResult;
use crate::schema::{
    ConditionDef, FluidDef, FrictionDef, LengthsDef, LossModelDef, ManometricDef, ModeDef,
    Scenario, SolverDef,
};
use crate::validate::validate_scenario;
use vf_components::PipeMaterial;
use vf_core::units::{celsius, constants, deg, kgpm3, m, m2ps, m3ps, mps, pas};
use vf_fluids::{
    FluidProperties, ManometricFluid, PresetCatalog, PropertySource, StatePoint, WaterCorrelation,
};
use vf_solver::{
    BetaBand, BoundaryCondition, FlowGeometry, FrictionSetting, LossModel, OperatingMode,
    SolveResult, SolverConfig, SweepRunner, VenturiResult, VenturiSolver,
};

/// Typed solver inputs built from a [`Scenario`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedScenario {
    pub geometry: FlowGeometry,
    pub fluid: FluidProperties,
    pub manometric: ManometricFluid,
    pub condition: BoundaryCondition,
    pub mode: OperatingMode,
    pub config: SolverConfig,
}

impl ResolvedScenario {
    pub fn solver(&self) -> VenturiSolver {
        VenturiSolver::with_config(self.config)
    }

    pub fn solve(&self) -> SolveResult<VenturiResult> {
        self.solver().solve(
            &self.geometry,
            &self.fluid,
            &self.manometric,
            self.condition,
            self.mode,
        )
    }

    pub fn sweep_runner(&self) -> SweepRunner {
        SweepRunner::new(self.geometry, self.fluid, self.manometric, self.mode)
            .with_solver(self.solver())
    }
}

impl Scenario {
    /// Validate and convert to solver inputs.
    ///
    /// `Preset` fluids are looked up in `source` at standard conditions;
    /// `Water` fluids always use the water correlation.
    pub fn resolve(&self, source: &dyn PropertySource) -> ProjectResult<ResolvedScenario> {
        validate_scenario(self)?;

        let geometry = {
            let g = &self.geometry;
            let (d1, d2) = (m(g.inlet_diameter_m), m(g.throat_diameter_m));
            match g.lengths {
                LengthsDef::Total { length_m } => {
                    FlowGeometry::with_total_length(d1, d2, m(length_m))
                }
                LengthsDef::Derived {
                    throat_length_m,
                    cone_angle_deg,
                } => FlowGeometry::with_cone_angle(
                    d1,
                    d2,
                    m(throat_length_m),
                    deg(cone_angle_deg),
                ),
            }
        };

        let fluid = match &self.fluid {
            FluidDef::Preset { id } => source.lookup(id, StatePoint::standard())?,
            FluidDef::Custom {
                density_kg_per_m3,
                viscosity_pa_s,
            } => FluidProperties::new(kgpm3(*density_kg_per_m3), pas(*viscosity_pa_s))?,
            FluidDef::CustomKinematic {
                density_kg_per_m3,
                kinematic_viscosity_m2_per_s,
            } => FluidProperties::from_kinematic(
                kgpm3(*density_kg_per_m3),
                m2ps(*kinematic_viscosity_m2_per_s),
            )?,
            FluidDef::Water { temperature_c } => WaterCorrelation::new().lookup(
                "water",
                StatePoint::new(celsius(*temperature_c), constants::p_atm()),
            )?,
        };

        let manometric = match &self.manometric {
            ManometricDef::Preset { id } => PresetCatalog::new().manometric(id)?,
            ManometricDef::Custom { density_kg_per_m3 } => {
                ManometricFluid::new(kgpm3(*density_kg_per_m3))?
            }
        };

        let condition = match self.condition {
            ConditionDef::FlowRate { q_m3_per_s } => BoundaryCondition::FlowRate(m3ps(q_m3_per_s)),
            ConditionDef::InletVelocity { v_m_per_s } => {
                BoundaryCondition::InletVelocity(mps(v_m_per_s))
            }
            ConditionDef::ThroatVelocity { v_m_per_s } => {
                BoundaryCondition::ThroatVelocity(mps(v_m_per_s))
            }
            ConditionDef::ManometerDeflection { delta_h_m } => {
                BoundaryCondition::ManometerDeflection(m(delta_h_m))
            }
        };

        let mode = match &self.mode {
            ModeDef::Ideal => OperatingMode::Ideal,
            ModeDef::Realistic { friction, model } => OperatingMode::Realistic {
                friction: friction_setting(friction)?,
                model: match model {
                    LossModelDef::Lumped => LossModel::Lumped,
                    LossModelDef::Segmented => LossModel::Segmented,
                },
            },
            ModeDef::Meter { cd, friction } => OperatingMode::Meter {
                cd: *cd,
                friction: friction.as_ref().map(friction_setting).transpose()?,
            },
        };

        Ok(ResolvedScenario {
            geometry,
            fluid,
            manometric,
            condition,
            mode,
            config: solver_config(self.solver.as_ref()),
        })
    }
}

fn friction_setting(def: &FrictionDef) -> ProjectResult<FrictionSetting> {
    Ok(match def {
        FrictionDef::Fixed { f } => FrictionSetting::Fixed(*f),
        FrictionDef::Material { material } => {
            FrictionSetting::from_material(material.parse::<PipeMaterial>()?)
        }
        FrictionDef::Roughness { roughness_m } => FrictionSetting::Computed {
            roughness: m(*roughness_m),
        },
    })
}

fn solver_config(def: Option<&SolverDef>) -> SolverConfig {
    let defaults = SolverConfig::default();
    let Some(def) = def else {
        return defaults;
    };
    SolverConfig {
        gravity: def.gravity_m_per_s2.unwrap_or(defaults.gravity),
        reference_pressure: def
            .reference_pressure_pa
            .unwrap_or(defaults.reference_pressure),
        beta_band: BetaBand {
            min: def.beta_min.unwrap_or(defaults.beta_band.min),
            max: def.beta_max.unwrap_or(defaults.beta_band.max),
        },
        min_density_margin: def
            .min_density_margin
            .unwrap_or(defaults.min_density_margin),
        friction: defaults.friction,
    }
}
