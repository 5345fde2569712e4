//! Closed-form forward and inverse Venturi computations.

use crate::condition::BoundaryCondition;
use crate::config::SolverConfig;
use crate::error::{SolveError, SolveResult};
use crate::geometry::FlowGeometry;
use crate::mode::{DEFAULT_METER_FRICTION, FrictionSetting, LossModel, OperatingMode};
use crate::result::{Branch, LossBreakdown, VenturiResult};
use tracing::{debug, warn};
use vf_components::{
    DiffuserRecovery, FlowRegime, FrictionFactor, darcy_head_loss, diffuser_recovery,
    friction_factor_with, reynolds,
};
use vf_core::numeric::{Tolerances, nearly_equal};
use vf_fluids::{FluidProperties, ManometricFluid};

/// Solve one scenario with the default [`SolverConfig`].
pub fn solve(
    geometry: &FlowGeometry,
    fluid: &FluidProperties,
    manometric: &ManometricFluid,
    condition: BoundaryCondition,
    mode: OperatingMode,
) -> SolveResult<VenturiResult> {
    VenturiSolver::default().solve(geometry, fluid, manometric, condition, mode)
}

/// Stateless Venturi solver holding only its policies.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct VenturiSolver {
    config: SolverConfig,
}

/// Quantities shared by every branch once inputs are validated.
struct Setup {
    a1: f64,
    a2: f64,
    d1: f64,
    d2: f64,
    rho: f64,
    mu: f64,
    rho_m: f64,
    g: f64,
    p1: f64,
}

/// Branch-specific outputs before assembly into a [`VenturiResult`].
struct Solved {
    branch: Branch,
    q: f64,
    p2: f64,
    p2_end: f64,
    p3: f64,
    losses: LossBreakdown,
    friction: Option<FrictionFactor>,
    diffuser: Option<DiffuserRecovery>,
}

impl VenturiSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Compute the full operating point for one scenario.
    ///
    /// Inputs are validated before any numeric work, in this order: geometry,
    /// β band, fluid properties, manometer density margin, parameter ranges,
    /// then mode/condition consistency. A flow-like condition runs the forward
    /// branch; a manometer deflection runs the inverse branch.
    pub fn solve(
        &self,
        geometry: &FlowGeometry,
        fluid: &FluidProperties,
        manometric: &ManometricFluid,
        condition: BoundaryCondition,
        mode: OperatingMode,
    ) -> SolveResult<VenturiResult> {
        let setup = self.validate(geometry, fluid, manometric, condition, mode)?;

        let solved = match condition.flow_rate(geometry) {
            Some(q) => {
                debug!(
                    mode = mode.label(),
                    condition = condition.label(),
                    q = q.value,
                    "forward branch"
                );
                self.forward(&setup, geometry, q.value, mode)?
            }
            None => {
                debug!(
                    mode = mode.label(),
                    delta_h = condition.value(),
                    "inverse branch"
                );
                self.inverse(&setup, geometry, condition.value(), mode)?
            }
        };

        let result = assemble(&setup, geometry, mode, solved)?;
        debug!(
            q = result.flow_rate,
            delta_p = result.delta_p,
            delta_h = result.delta_h,
            head_loss = result.head_loss,
            re_throat = result.reynolds_throat,
            "venturi solved"
        );
        if let Some(advisory) = result.advisory() {
            warn!(%advisory, "regime advisory");
        }
        Ok(result)
    }

    fn validate(
        &self,
        geometry: &FlowGeometry,
        fluid: &FluidProperties,
        manometric: &ManometricFluid,
        condition: BoundaryCondition,
        mode: OperatingMode,
    ) -> SolveResult<Setup> {
        self.config.validate()?;
        geometry.validate()?;
        self.config.beta_band.check(geometry.beta())?;

        fluid.validate()?;
        let manometric = ManometricFluid::new(manometric.density)?;
        let (rho, rho_m) = (fluid.rho(), manometric.rho());
        let margin = self.config.min_density_margin * rho;
        let delta_rho = rho_m - rho;
        if delta_rho <= 0.0 || delta_rho < margin {
            return Err(SolveError::FluidConfig { rho, rho_m, margin });
        }

        condition.validate()?;
        mode.validate()?;

        match (mode, condition.is_flow_like()) {
            (OperatingMode::Meter { .. }, true) | (OperatingMode::Realistic { .. }, false) => {
                return Err(SolveError::ModeMismatch {
                    mode: mode.label(),
                    condition: condition.label(),
                });
            }
            _ => {}
        }

        Ok(Setup {
            a1: geometry.inlet_area().value,
            a2: geometry.throat_area().value,
            d1: geometry.inlet_diameter.value,
            d2: geometry.throat_diameter.value,
            rho,
            mu: fluid.mu(),
            rho_m,
            g: self.config.gravity,
            p1: self.config.reference_pressure,
        })
    }

    fn forward(
        &self,
        s: &Setup,
        geometry: &FlowGeometry,
        q: f64,
        mode: OperatingMode,
    ) -> SolveResult<Solved> {
        let v1 = q / s.a1;
        let v2 = q / s.a2;
        let dynamic = 0.5 * s.rho * (v2 * v2 - v1 * v1);

        match mode {
            OperatingMode::Realistic {
                friction,
                model: LossModel::Lumped,
            } => {
                let (ff, h_l) = self.lumped_loss(s, geometry, friction, v1, v2)?;
                let p2 = s.p1 - (dynamic + s.rho * s.g * h_l);
                Ok(Solved {
                    branch: Branch::Forward,
                    q,
                    p2,
                    p2_end: p2,
                    p3: s.p1 - s.rho * s.g * h_l,
                    losses: LossBreakdown {
                        friction: h_l,
                        ..LossBreakdown::default()
                    },
                    friction: Some(ff),
                    diffuser: None,
                })
            }
            OperatingMode::Realistic {
                friction,
                model: LossModel::Segmented,
            } => {
                let k = mode.entrance_loss_coefficient();
                let throat_dynamic = 0.5 * s.rho * v2 * v2;
                let p2 = s.p1 - 0.5 * s.rho * (v2 * v2 * (1.0 + k) - v1 * v1);

                let ff = self.friction_at(s, friction, v2, s.d2)?;
                let h_f = darcy_head_loss(ff.value, geometry.segments().throat.value, s.d2, v2, s.g);
                let p2_end = p2 - s.rho * s.g * h_f;

                let recovery = diffuser_recovery(geometry.area_ratio())?;
                let diffuser_loss = recovery.loss_coefficient() * throat_dynamic;
                let p3 = p2_end + dynamic - diffuser_loss;

                let rho_g = s.rho * s.g;
                Ok(Solved {
                    branch: Branch::Forward,
                    q,
                    p2,
                    p2_end,
                    p3,
                    losses: LossBreakdown {
                        entrance: k * throat_dynamic / rho_g,
                        friction: h_f,
                        diffuser: diffuser_loss / rho_g,
                    },
                    friction: Some(ff),
                    diffuser: Some(recovery),
                })
            }
            OperatingMode::Ideal => {
                let p2 = s.p1 - dynamic;
                Ok(Solved {
                    branch: Branch::Forward,
                    q,
                    p2,
                    p2_end: p2,
                    p3: s.p1,
                    losses: LossBreakdown::default(),
                    friction: None,
                    diffuser: None,
                })
            }
            OperatingMode::Meter { .. } => Err(SolveError::ModeMismatch {
                mode: mode.label(),
                condition: "flow-like",
            }),
        }
    }

    fn inverse(
        &self,
        s: &Setup,
        geometry: &FlowGeometry,
        delta_h: f64,
        mode: OperatingMode,
    ) -> SolveResult<Solved> {
        let cd = mode.discharge_coefficient();
        let delta_p = delta_h * (s.rho_m - s.rho) * s.g;
        let area_term = 1.0 - (s.a2 / s.a1).powi(2);
        let q = cd * s.a2 * (2.0 * delta_p / (s.rho * area_term)).sqrt();
        let v1 = q / s.a1;
        let v2 = q / s.a2;

        let (friction, losses) = if nearly_equal(cd, 1.0, Tolerances::default()) {
            (None, LossBreakdown::default())
        } else {
            let setting = mode
                .friction()
                .unwrap_or(FrictionSetting::Fixed(DEFAULT_METER_FRICTION));
            let (ff, h_f) = self.lumped_loss(s, geometry, setting, v1, v2)?;
            // Total head between inlet and throat drops by (1 − Cd²)ΔP/ρg.
            let contraction = (1.0 - cd * cd) * delta_p / (s.rho * s.g);
            (
                Some(ff),
                LossBreakdown {
                    entrance: contraction,
                    friction: h_f,
                    diffuser: 0.0,
                },
            )
        };

        let p2 = s.p1 - delta_p;
        Ok(Solved {
            branch: Branch::Inverse,
            q,
            p2,
            p2_end: p2,
            p3: s.p1 - s.rho * s.g * losses.total(),
            losses,
            friction,
            diffuser: None,
        })
    }

    /// Darcy-Weisbach loss over the whole length at mean velocity and diameter.
    fn lumped_loss(
        &self,
        s: &Setup,
        geometry: &FlowGeometry,
        setting: FrictionSetting,
        v1: f64,
        v2: f64,
    ) -> SolveResult<(FrictionFactor, f64)> {
        let v_mean = 0.5 * (v1 + v2);
        let d_mean = 0.5 * (s.d1 + s.d2);
        let ff = self.friction_at(s, setting, v_mean, d_mean)?;
        let h_l = darcy_head_loss(ff.value, geometry.total_length().value, d_mean, v_mean, s.g);
        Ok((ff, h_l))
    }

    fn friction_at(
        &self,
        s: &Setup,
        setting: FrictionSetting,
        velocity: f64,
        diameter: f64,
    ) -> SolveResult<FrictionFactor> {
        let re = reynolds(s.rho, velocity, diameter, s.mu)?;
        let ff = match setting {
            FrictionSetting::Fixed(f) => FrictionFactor::prescribed(f, re)?,
            FrictionSetting::Computed { roughness } => {
                friction_factor_with(re, roughness.value / diameter, &self.config.friction)?
            }
        };
        Ok(ff)
    }
}

fn assemble(
    s: &Setup,
    geometry: &FlowGeometry,
    mode: OperatingMode,
    solved: Solved,
) -> SolveResult<VenturiResult> {
    let v1 = solved.q / s.a1;
    let v2 = solved.q / s.a2;
    let delta_p = s.p1 - solved.p2;
    let delta_h = delta_p / ((s.rho_m - s.rho) * s.g);
    let reynolds_inlet = reynolds(s.rho, v1, s.d1, s.mu)?;
    let reynolds_throat = reynolds(s.rho, v2, s.d2, s.mu)?;

    for (what, value) in [
        ("flow rate", solved.q),
        ("throat pressure", solved.p2),
        ("throat-end pressure", solved.p2_end),
        ("exit pressure", solved.p3),
        ("manometer deflection", delta_h),
        ("head loss", solved.losses.total()),
    ] {
        if !value.is_finite() {
            return Err(SolveError::NonFinite { what });
        }
    }

    Ok(VenturiResult {
        mode,
        branch: solved.branch,
        geometry: *geometry,
        inlet_area: s.a1,
        throat_area: s.a2,
        beta: geometry.beta(),
        rho: s.rho,
        rho_manometric: s.rho_m,
        gravity: s.g,
        flow_rate: solved.q,
        v1,
        v2,
        p1: s.p1,
        p2: solved.p2,
        p2_throat_end: solved.p2_end,
        p3_exit: solved.p3,
        delta_p,
        delta_h,
        head_loss: solved.losses.total(),
        losses: solved.losses,
        reynolds_inlet,
        reynolds_throat,
        regime: FlowRegime::classify(reynolds_throat),
        friction: solved.friction,
        discharge_coefficient: mode.discharge_coefficient(),
        diffuser: solved.diffuser,
    })
}
