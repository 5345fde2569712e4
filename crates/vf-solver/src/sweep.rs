//! Parametric sweeps over one scenario, evaluated in parallel.

use crate::condition::BoundaryCondition;
use crate::error::{SolveError, SolveResult};
use crate::geometry::FlowGeometry;
use crate::mode::OperatingMode;
use crate::solve::VenturiSolver;
use rayon::prelude::*;
use tracing::debug;
use vf_components::FlowRegime;
use vf_core::units::{m, m3ps};
use vf_fluids::{FluidProperties, ManometricFluid};

/// `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SweepFailure {
    pub index: usize,
    pub input: f64,
    pub error: SolveError,
}

/// Successful points in input order plus the inputs that failed.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep<T> {
    pub points: Vec<T>,
    pub failures: Vec<SweepFailure>,
}

impl<T> Sweep<T> {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationPoint {
    pub flow_rate: f64,
    pub delta_h: f64,
    pub delta_p: f64,
    pub reynolds_throat: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DischargePoint {
    pub cd: f64,
    pub flow_rate: f64,
    pub head_loss: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BetaPoint {
    pub beta: f64,
    pub throat_diameter: f64,
    pub delta_h: f64,
    pub delta_p: f64,
    pub v2: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReynoldsPoint {
    pub flow_rate: f64,
    pub reynolds_throat: f64,
    pub regime: FlowRegime,
}

/// Fixed scenario whose single input is varied by each sweep.
#[derive(Debug, Clone, Copy)]
pub struct SweepRunner {
    solver: VenturiSolver,
    geometry: FlowGeometry,
    fluid: FluidProperties,
    manometric: ManometricFluid,
    mode: OperatingMode,
}

impl SweepRunner {
    pub fn new(
        geometry: FlowGeometry,
        fluid: FluidProperties,
        manometric: ManometricFluid,
        mode: OperatingMode,
    ) -> Self {
        Self {
            solver: VenturiSolver::default(),
            geometry,
            fluid,
            manometric,
            mode,
        }
    }

    pub fn with_solver(mut self, solver: VenturiSolver) -> Self {
        self.solver = solver;
        self
    }

    /// Mode used for flow-driven sweeps; a meter scenario is swept ideally.
    fn forward_mode(&self) -> OperatingMode {
        match self.mode {
            OperatingMode::Meter { .. } => OperatingMode::Ideal,
            mode => mode,
        }
    }

    /// Manometer deflection and pressure drop against flow rate.
    pub fn calibration_curve(&self, flow_rates: &[f64]) -> Sweep<CalibrationPoint> {
        let mode = self.forward_mode();
        run(flow_rates, |q| {
            let r = self.solver.solve(
                &self.geometry,
                &self.fluid,
                &self.manometric,
                BoundaryCondition::FlowRate(m3ps(q)),
                mode,
            )?;
            Ok(CalibrationPoint {
                flow_rate: r.flow_rate,
                delta_h: r.delta_h,
                delta_p: r.delta_p,
                reynolds_throat: r.reynolds_throat,
            })
        })
    }

    /// Recovered flow rate against discharge coefficient for a fixed reading.
    pub fn discharge_sensitivity(&self, cds: &[f64], delta_h: f64) -> Sweep<DischargePoint> {
        let friction = self.mode.friction();
        run(cds, |cd| {
            let r = self.solver.solve(
                &self.geometry,
                &self.fluid,
                &self.manometric,
                BoundaryCondition::ManometerDeflection(m(delta_h)),
                OperatingMode::Meter {
                    cd,
                    friction,
                },
            )?;
            Ok(DischargePoint {
                cd,
                flow_rate: r.flow_rate,
                head_loss: r.head_loss,
            })
        })
    }

    /// Meter response against β at a fixed inlet bore and flow rate.
    pub fn beta_effect(&self, betas: &[f64], flow_rate: f64) -> Sweep<BetaPoint> {
        let mode = self.forward_mode();
        run(betas, |beta| {
            let geometry = FlowGeometry {
                throat_diameter: self.geometry.inlet_diameter * beta,
                ..self.geometry
            };
            let r = self.solver.solve(
                &geometry,
                &self.fluid,
                &self.manometric,
                BoundaryCondition::FlowRate(m3ps(flow_rate)),
                mode,
            )?;
            Ok(BetaPoint {
                beta: r.beta,
                throat_diameter: geometry.throat_diameter.value,
                delta_h: r.delta_h,
                delta_p: r.delta_p,
                v2: r.v2,
            })
        })
    }

    /// Throat Reynolds number and regime against flow rate.
    pub fn reynolds_sweep(&self, flow_rates: &[f64]) -> Sweep<ReynoldsPoint> {
        let mode = self.forward_mode();
        run(flow_rates, |q| {
            let r = self.solver.solve(
                &self.geometry,
                &self.fluid,
                &self.manometric,
                BoundaryCondition::FlowRate(m3ps(q)),
                mode,
            )?;
            Ok(ReynoldsPoint {
                flow_rate: r.flow_rate,
                reynolds_throat: r.reynolds_throat,
                regime: r.regime,
            })
        })
    }
}

fn run<T, F>(inputs: &[f64], eval: F) -> Sweep<T>
where
    T: Send,
    F: Fn(f64) -> SolveResult<T> + Sync,
{
    let outcomes: Vec<(usize, f64, SolveResult<T>)> = inputs
        .par_iter()
        .enumerate()
        .map(|(index, &input)| (index, input, eval(input)))
        .collect();

    let mut points = Vec::with_capacity(outcomes.len());
    let mut failures = Vec::new();
    for (index, input, outcome) in outcomes {
        match outcome {
            Ok(point) => points.push(point),
            Err(error) => failures.push(SweepFailure {
                index,
                input,
                error,
            }),
        }
    }
    debug!(points = points.len(), failures = failures.len(), "sweep complete");
    Sweep { points, failures }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vf_core::units::{kgpm3, pas};

    fn runner(mode: OperatingMode) -> SweepRunner {
        SweepRunner::new(
            FlowGeometry::with_total_length(m(0.10), m(0.05), m(0.3)),
            FluidProperties::new(kgpm3(1000.0), pas(1.0e-3)).unwrap(),
            ManometricFluid::mercury(),
            mode,
        )
    }

    #[test]
    fn linspace_endpoints() {
        let xs = linspace(0.005, 0.025, 5);
        assert_eq!(xs.len(), 5);
        assert_eq!(xs[0], 0.005);
        assert_eq!(xs[4], 0.025);
        assert!((xs[2] - 0.015).abs() < 1e-15);
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
    }

    #[test]
    fn calibration_is_ordered_and_increasing() {
        let sweep = runner(OperatingMode::Ideal).calibration_curve(&linspace(0.005, 0.025, 21));
        assert!(sweep.is_complete());
        assert_eq!(sweep.points.len(), 21);
        for pair in sweep.points.windows(2) {
            assert!(pair[1].flow_rate > pair[0].flow_rate);
            assert!(pair[1].delta_h > pair[0].delta_h);
        }
    }

    #[test]
    fn failures_keep_their_index() {
        let sweep = runner(OperatingMode::Ideal).calibration_curve(&[0.01, -1.0, 0.02]);
        assert_eq!(sweep.points.len(), 2);
        assert_eq!(sweep.failures.len(), 1);
        assert_eq!(sweep.failures[0].index, 1);
        assert_eq!(sweep.failures[0].input, -1.0);
    }

    #[test]
    fn flow_scales_with_cd() {
        let sweep = runner(OperatingMode::Ideal).discharge_sensitivity(&[0.9, 0.95, 1.0], 0.15);
        assert!(sweep.is_complete());
        let q_ref = sweep.points[2].flow_rate;
        for p in &sweep.points {
            assert!((p.flow_rate / q_ref - p.cd).abs() < 1e-12);
        }
        assert!(sweep.points[0].head_loss > 0.0);
        assert_eq!(sweep.points[2].head_loss, 0.0);
    }

    #[test]
    fn smaller_beta_raises_deflection() {
        let sweep = runner(OperatingMode::Ideal).beta_effect(&linspace(0.3, 0.7, 9), 0.01);
        assert!(sweep.is_complete());
        for pair in sweep.points.windows(2) {
            assert!(pair[1].delta_h < pair[0].delta_h);
            assert!(pair[1].v2 < pair[0].v2);
        }
    }

    #[test]
    fn beta_outside_band_reported_per_point() {
        let sweep = runner(OperatingMode::Ideal).beta_effect(&[0.5, 0.9], 0.01);
        assert_eq!(sweep.points.len(), 1);
        assert_eq!(sweep.failures[0].index, 1);
    }

    #[test]
    fn meter_scenario_swept_ideally() {
        let sweep = runner(OperatingMode::Meter {
            cd: 0.98,
            friction: None,
        })
        .reynolds_sweep(&linspace(0.0001, 0.02, 10));
        assert!(sweep.is_complete());
        assert_eq!(sweep.points[9].regime, FlowRegime::Turbulent);
    }
}
