//! Serializable views of solver outputs for `--json`.

use serde::Serialize;
use vf_solver::{
    AxialProfile, BetaPoint, Branch, CalibrationPoint, DischargePoint, ReynoldsPoint, Sweep,
    VenturiResult,
};

#[derive(Debug, Serialize)]
pub struct SolveReport {
    pub mode: &'static str,
    pub branch: &'static str,
    pub beta: f64,
    pub area_ratio: f64,
    pub flow_rate_m3_per_s: f64,
    pub v1_m_per_s: f64,
    pub v2_m_per_s: f64,
    pub p1_pa: f64,
    pub p2_pa: f64,
    pub p2_throat_end_pa: f64,
    pub p3_exit_pa: f64,
    pub delta_p_pa: f64,
    pub delta_h_m: f64,
    pub head_loss_m: f64,
    pub entrance_loss_m: f64,
    pub friction_loss_m: f64,
    pub diffuser_loss_m: f64,
    pub reynolds_inlet: f64,
    pub reynolds_throat: f64,
    pub regime: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friction_factor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friction_method: Option<String>,
    pub discharge_coefficient: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cp_ideal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cp_real: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisory: Option<String>,
}

impl From<&VenturiResult> for SolveReport {
    fn from(r: &VenturiResult) -> Self {
        Self {
            mode: r.mode.label(),
            branch: match r.branch {
                Branch::Forward => "forward",
                Branch::Inverse => "inverse",
            },
            beta: r.beta,
            area_ratio: r.geometry.area_ratio(),
            flow_rate_m3_per_s: r.flow_rate,
            v1_m_per_s: r.v1,
            v2_m_per_s: r.v2,
            p1_pa: r.p1,
            p2_pa: r.p2,
            p2_throat_end_pa: r.p2_throat_end,
            p3_exit_pa: r.p3_exit,
            delta_p_pa: r.delta_p,
            delta_h_m: r.delta_h,
            head_loss_m: r.head_loss,
            entrance_loss_m: r.losses.entrance,
            friction_loss_m: r.losses.friction,
            diffuser_loss_m: r.losses.diffuser,
            reynolds_inlet: r.reynolds_inlet,
            reynolds_throat: r.reynolds_throat,
            regime: r.regime.label(),
            friction_factor: r.friction.map(|f| f.value),
            friction_method: r.friction.map(|f| format!("{:?}", f.method)),
            discharge_coefficient: r.discharge_coefficient,
            cp_ideal: r.diffuser.map(|d| d.cp_ideal),
            cp_real: r.diffuser.map(|d| d.cp_real),
            advisory: r.advisory().map(|a| a.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileRow {
    pub x_m: f64,
    pub diameter_m: f64,
    pub velocity_m_per_s: f64,
    pub pressure_pa: f64,
    pub piezometric_head_m: f64,
    pub total_head_m: f64,
}

pub fn profile_rows(profile: &AxialProfile) -> Vec<ProfileRow> {
    profile
        .points
        .iter()
        .map(|p| ProfileRow {
            x_m: p.x,
            diameter_m: p.diameter,
            velocity_m_per_s: p.velocity,
            pressure_pa: p.pressure,
            piezometric_head_m: p.piezometric_head,
            total_head_m: p.total_head,
        })
        .collect()
}

/// One sweep as a table: column names, rows and failed inputs.
#[derive(Debug, Serialize)]
pub struct SweepTable {
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<f64>>,
    pub failures: Vec<SweepFailureRow>,
}

#[derive(Debug, Serialize)]
pub struct SweepFailureRow {
    pub index: usize,
    pub input: f64,
    pub error: String,
}

impl SweepTable {
    fn from_sweep<T>(columns: Vec<&'static str>, sweep: &Sweep<T>, row: impl Fn(&T) -> Vec<f64>) -> Self {
        Self {
            columns,
            rows: sweep.points.iter().map(row).collect(),
            failures: sweep
                .failures
                .iter()
                .map(|f| SweepFailureRow {
                    index: f.index,
                    input: f.input,
                    error: f.error.to_string(),
                })
                .collect(),
        }
    }

    pub fn calibration(sweep: &Sweep<CalibrationPoint>) -> Self {
        Self::from_sweep(
            vec!["q_m3_per_s", "delta_h_m", "delta_p_pa", "reynolds_throat"],
            sweep,
            |p| vec![p.flow_rate, p.delta_h, p.delta_p, p.reynolds_throat],
        )
    }

    pub fn discharge(sweep: &Sweep<DischargePoint>) -> Self {
        Self::from_sweep(
            vec!["cd", "q_m3_per_s", "head_loss_m"],
            sweep,
            |p| vec![p.cd, p.flow_rate, p.head_loss],
        )
    }

    pub fn beta(sweep: &Sweep<BetaPoint>) -> Self {
        Self::from_sweep(
            vec!["beta", "throat_diameter_m", "delta_h_m", "delta_p_pa", "v2_m_per_s"],
            sweep,
            |p| vec![p.beta, p.throat_diameter, p.delta_h, p.delta_p, p.v2],
        )
    }

    pub fn reynolds(sweep: &Sweep<ReynoldsPoint>) -> Self {
        Self::from_sweep(
            vec!["q_m3_per_s", "reynolds_throat"],
            sweep,
            |p| vec![p.flow_rate, p.reynolds_throat],
        )
    }
}
