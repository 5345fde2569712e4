mod error;
mod report;

use clap::{Parser, Subcommand, ValueEnum};
use error::{CliError, CliResult};
use report::{SolveReport, SweepTable, profile_rows};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use vf_components::{FrictionConfig, PipeMaterial, friction_factor_with};
use vf_fluids::{PresetCatalog, fluid_presets, manometric_presets};
use vf_project::ResolvedScenario;
use vf_solver::{AxialProfile, linspace};

#[derive(Parser)]
#[command(name = "vf-cli")]
#[command(about = "VenturiFlow CLI - Venturi flow meter calculations", long_about = None)]
struct Cli {
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a scenario file
    Validate {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
    },
    /// Solve a scenario
    Solve {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
    },
    /// Sweep one input of a scenario
    Sweep {
        #[arg(value_enum)]
        kind: SweepKind,
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
        /// First swept value (m³/s, Cd or β)
        #[arg(long)]
        from: f64,
        /// Last swept value
        #[arg(long)]
        to: f64,
        #[arg(long, default_value_t = 11)]
        points: usize,
        /// Fixed flow rate for beta sweeps, or fixed deflection for cd sweeps
        #[arg(long)]
        at: Option<f64>,
    },
    /// Sample pressure and head along the meter
    Profile {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
        #[arg(long, default_value_t = 41)]
        points: usize,
    },
    /// Darcy friction factor for a Reynolds number
    Friction {
        #[arg(long)]
        re: f64,
        /// Relative roughness ε/D
        #[arg(long, default_value_t = 0.0)]
        roughness: f64,
        /// Pipe material, used with --diameter instead of --roughness
        #[arg(long)]
        material: Option<String>,
        /// Bore diameter in metres
        #[arg(long)]
        diameter: Option<f64>,
    },
    /// List fluid and manometer presets
    Fluids,
}

#[derive(Clone, Copy, ValueEnum)]
enum SweepKind {
    /// Deflection against flow rate
    Calibration,
    /// Flow rate against discharge coefficient
    Cd,
    /// Meter response against diameter ratio
    Beta,
    /// Throat Reynolds number against flow rate
    Reynolds,
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Solve { scenario_path } => cmd_solve(&scenario_path, cli.json),
        Commands::Sweep {
            kind,
            scenario_path,
            from,
            to,
            points,
            at,
        } => cmd_sweep(kind, &scenario_path, from, to, points, at, cli.json),
        Commands::Profile {
            scenario_path,
            points,
        } => cmd_profile(&scenario_path, points, cli.json),
        Commands::Friction {
            re,
            roughness,
            material,
            diameter,
        } => cmd_friction(re, roughness, material.as_deref(), diameter, cli.json),
        Commands::Fluids => cmd_fluids(cli.json),
    }
}

fn resolve(path: &Path) -> CliResult<ResolvedScenario> {
    let scenario = vf_project::load(path)?;
    tracing::info!(name = %scenario.name, "scenario loaded");
    Ok(scenario.resolve(&PresetCatalog::new())?)
}

fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn cmd_validate(path: &Path) -> CliResult<()> {
    println!("Validating scenario: {}", path.display());
    let resolved = resolve(path)?;
    resolved.solver().config().validate()?;
    println!("✓ Scenario is valid");
    Ok(())
}

fn cmd_solve(path: &Path, json: bool) -> CliResult<()> {
    let resolved = resolve(path)?;
    let result = resolved.solve()?;
    let report = SolveReport::from(&result);
    if json {
        return print_json(&report);
    }

    println!("Mode: {} ({} branch)", report.mode, report.branch);
    println!("  beta = {:.4}, AR = {:.4}", report.beta, report.area_ratio);
    println!("  Q    = {:.6} m³/s", report.flow_rate_m3_per_s);
    println!(
        "  v1   = {:.4} m/s, v2 = {:.4} m/s",
        report.v1_m_per_s, report.v2_m_per_s
    );
    println!(
        "  P1   = {:.1} Pa, P2 = {:.1} Pa, P2 end = {:.1} Pa, P3 = {:.1} Pa",
        report.p1_pa, report.p2_pa, report.p2_throat_end_pa, report.p3_exit_pa
    );
    println!(
        "  ΔP   = {:.1} Pa, Δh = {:.4} m",
        report.delta_p_pa, report.delta_h_m
    );
    println!(
        "  h_L  = {:.5} m (entrance {:.5}, friction {:.5}, diffuser {:.5})",
        report.head_loss_m, report.entrance_loss_m, report.friction_loss_m, report.diffuser_loss_m
    );
    println!(
        "  Re   = {:.0} inlet, {:.0} throat ({})",
        report.reynolds_inlet, report.reynolds_throat, report.regime
    );
    if let (Some(f), Some(method)) = (report.friction_factor, &report.friction_method) {
        println!("  f    = {:.5} [{}]", f, method);
    }
    println!("  Cd   = {:.3}", report.discharge_coefficient);
    if let (Some(ideal), Some(real)) = (report.cp_ideal, report.cp_real) {
        println!("  Cp   = {:.4} ideal, {:.4} real", ideal, real);
    }
    if let Some(advisory) = &report.advisory {
        println!("! {}", advisory);
    }
    Ok(())
}

fn cmd_sweep(
    kind: SweepKind,
    path: &Path,
    from: f64,
    to: f64,
    points: usize,
    at: Option<f64>,
    json: bool,
) -> CliResult<()> {
    if points < 2 {
        return Err(CliError::InvalidArgument(
            "a sweep needs at least two points".to_string(),
        ));
    }
    let resolved = resolve(path)?;
    let runner = resolved.sweep_runner();
    let inputs = linspace(from, to, points);
    let require_at = |what: &str| {
        at.ok_or_else(|| CliError::InvalidArgument(format!("--at <{what}> is required")))
    };

    let table = match kind {
        SweepKind::Calibration => SweepTable::calibration(&runner.calibration_curve(&inputs)),
        SweepKind::Cd => {
            SweepTable::discharge(&runner.discharge_sensitivity(&inputs, require_at("delta_h_m")?))
        }
        SweepKind::Beta => SweepTable::beta(&runner.beta_effect(&inputs, require_at("q_m3_per_s")?)),
        SweepKind::Reynolds => SweepTable::reynolds(&runner.reynolds_sweep(&inputs)),
    };

    if json {
        return print_json(&table);
    }
    println!("{}", table.columns.join("\t"));
    for row in &table.rows {
        let cells: Vec<String> = row.iter().map(|v| format!("{:.6e}", v)).collect();
        println!("{}", cells.join("\t"));
    }
    for failure in &table.failures {
        println!("✗ point {} ({}): {}", failure.index, failure.input, failure.error);
    }
    Ok(())
}

fn cmd_profile(path: &Path, points: usize, json: bool) -> CliResult<()> {
    let resolved = resolve(path)?;
    let result = resolved.solve()?;
    let profile = AxialProfile::sample(&result, points)?;
    let rows = profile_rows(&profile);
    if json {
        return print_json(&rows);
    }
    println!("x_m\tdiameter_m\tv_m_per_s\tp_pa\thgl_m\tegl_m");
    for r in &rows {
        println!(
            "{:.4}\t{:.4}\t{:.4}\t{:.1}\t{:.4}\t{:.4}",
            r.x_m, r.diameter_m, r.velocity_m_per_s, r.pressure_pa, r.piezometric_head_m, r.total_head_m
        );
    }
    Ok(())
}

fn cmd_friction(
    re: f64,
    roughness: f64,
    material: Option<&str>,
    diameter: Option<f64>,
    json: bool,
) -> CliResult<()> {
    let relative_roughness = match (material, diameter) {
        (Some(name), Some(d)) => {
            let material: PipeMaterial = name.parse()?;
            material.relative_roughness(vf_core::units::m(d))?
        }
        (Some(_), None) => {
            return Err(CliError::InvalidArgument(
                "--material needs --diameter".to_string(),
            ));
        }
        _ => roughness,
    };
    let f = friction_factor_with(re, relative_roughness, &FrictionConfig::default())?;
    if json {
        return print_json(&serde_json::json!({
            "reynolds": re,
            "relative_roughness": relative_roughness,
            "friction_factor": f.value,
            "regime": f.regime.label(),
            "method": format!("{:?}", f.method),
        }));
    }
    println!("Re = {:.0}, ε/D = {:.3e}", re, relative_roughness);
    println!("f  = {:.6} ({}, {:?})", f.value, f.regime, f.method);
    Ok(())
}

fn cmd_fluids(json: bool) -> CliResult<()> {
    if json {
        let fluids: Vec<_> = fluid_presets()
            .iter()
            .map(|p| {
                serde_json::json!({
                    "id": p.id,
                    "name": p.display_name,
                    "density_kg_per_m3": p.density_kg_m3,
                    "kinematic_viscosity_m2_per_s": p.kinematic_viscosity_m2_s,
                })
            })
            .collect();
        let manometric: Vec<_> = manometric_presets()
            .iter()
            .map(|p| serde_json::json!({ "id": p.id, "name": p.display_name, "density_kg_per_m3": p.density_kg_m3 }))
            .collect();
        return print_json(&serde_json::json!({ "fluids": fluids, "manometric": manometric }));
    }

    println!("Fluids:");
    for p in fluid_presets() {
        println!(
            "  {:<14} {:<28} ρ = {:>7.1} kg/m³, ν = {:.3e} m²/s",
            p.id, p.display_name, p.density_kg_m3, p.kinematic_viscosity_m2_s
        );
    }
    println!("Manometer fluids:");
    for p in manometric_presets() {
        println!(
            "  {:<14} {:<28} ρ = {:>7.1} kg/m³",
            p.id, p.display_name, p.density_kg_m3
        );
    }
    Ok(())
}
