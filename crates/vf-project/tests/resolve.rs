use std::path::PathBuf;
use vf_fluids::{FluidError, PresetCatalog};
use vf_project::schema::*;
use vf_project::{ProjectError, ValidationError, validate_scenario};
use vf_solver::{Branch, FrictionSetting, OperatingMode};

fn scenario_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(|p| p.parent())
        .map(|root| root.join("scenarios"))
        .unwrap()
}

#[test]
fn bundled_scenarios_load_and_solve() {
    let catalog = PresetCatalog::new();
    for name in [
        "01_ideal_water.yaml",
        "02_segmented_steel.yaml",
        "03_meter_readback.yaml",
        "04_oil_lumped.json",
    ] {
        let path = scenario_dir().join(name);
        let scenario = vf_project::load(&path)
            .unwrap_or_else(|e| panic!("Failed to load {}: {}", name, e));
        let resolved = scenario
            .resolve(&catalog)
            .unwrap_or_else(|e| panic!("Failed to resolve {}: {}", name, e));
        resolved
            .solve()
            .unwrap_or_else(|e| panic!("Failed to solve {}: {}", name, e));
    }
}

#[test]
fn meter_scenario_resolves_to_inverse_branch() {
    let scenario = vf_project::load_yaml(&scenario_dir().join("03_meter_readback.yaml")).unwrap();
    let resolved = scenario.resolve(&PresetCatalog::new()).unwrap();
    assert_eq!(
        resolved.mode,
        OperatingMode::Meter {
            cd: 0.98,
            friction: Some(FrictionSetting::Fixed(0.02)),
        }
    );
    let result = resolved.solve().unwrap();
    assert_eq!(result.branch, Branch::Inverse);
    assert!(result.head_loss > 0.0);
}

#[test]
fn solver_overrides_apply() {
    let scenario = vf_project::load_json(&scenario_dir().join("04_oil_lumped.json")).unwrap();
    let resolved = scenario.resolve(&PresetCatalog::new()).unwrap();
    assert_eq!(resolved.config.beta_band.max, 0.7);
    assert_eq!(resolved.config.beta_band.min, 0.30);
    assert!((resolved.fluid.rho() - 890.0).abs() < 1e-9);
}

#[test]
fn unknown_fluid_is_property_error() {
    let mut scenario = vf_project::load_yaml(&scenario_dir().join("01_ideal_water.yaml")).unwrap();
    scenario.fluid = FluidDef::Preset {
        id: "unobtainium".to_string(),
    };
    let err = scenario.resolve(&PresetCatalog::new()).unwrap_err();
    assert!(matches!(
        err,
        ProjectError::Property(FluidError::UnknownFluid { .. })
    ));
}

#[test]
fn water_outside_correlation_range() {
    let mut scenario = vf_project::load_yaml(&scenario_dir().join("01_ideal_water.yaml")).unwrap();
    scenario.fluid = FluidDef::Water {
        temperature_c: 150.0,
    };
    let err = scenario.resolve(&PresetCatalog::new()).unwrap_err();
    assert!(matches!(
        err,
        ProjectError::Property(FluidError::OutOfRange { .. })
    ));
}

#[test]
fn meter_mode_needs_deflection() {
    let mut scenario = vf_project::load_yaml(&scenario_dir().join("01_ideal_water.yaml")).unwrap();
    scenario.mode = ModeDef::Meter {
        cd: 0.98,
        friction: None,
    };
    assert!(matches!(
        validate_scenario(&scenario),
        Err(ValidationError::Unsupported { .. })
    ));
}

#[test]
fn beta_outside_default_band_rejected() {
    let mut scenario = vf_project::load_yaml(&scenario_dir().join("01_ideal_water.yaml")).unwrap();
    scenario.geometry.throat_diameter_m = 0.08;
    let err = validate_scenario(&scenario).unwrap_err();
    match err {
        ValidationError::InvalidValue { field, .. } => {
            assert_eq!(field, "geometry.throat_diameter_m");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn beta_band_override_widens_validation() {
    let mut scenario = vf_project::load_yaml(&scenario_dir().join("01_ideal_water.yaml")).unwrap();
    scenario.geometry.throat_diameter_m = 0.08;
    scenario.solver = Some(SolverDef {
        beta_max: Some(0.85),
        ..SolverDef::default()
    });
    assert!(validate_scenario(&scenario).is_ok());

    let resolved = scenario.resolve(&PresetCatalog::new()).unwrap();
    assert_eq!(resolved.config.beta_band.max, 0.85);
}

#[test]
fn unknown_material_rejected() {
    let mut scenario = vf_project::load_yaml(&scenario_dir().join("02_segmented_steel.yaml")).unwrap();
    scenario.mode = ModeDef::Realistic {
        friction: FrictionDef::Material {
            material: "balsa".to_string(),
        },
        model: LossModelDef::Lumped,
    };
    assert!(matches!(
        validate_scenario(&scenario),
        Err(ValidationError::InvalidValue { .. })
    ));
}
