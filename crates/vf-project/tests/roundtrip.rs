use vf_project::schema::*;
use vf_project::{ProjectError, load_json, load_yaml, save_json, save_yaml, validate_scenario};

fn base_scenario() -> Scenario {
    Scenario {
        version: 1,
        name: "Round trip".to_string(),
        geometry: GeometryDef {
            inlet_diameter_m: 0.10,
            throat_diameter_m: 0.05,
            lengths: LengthsDef::Derived {
                throat_length_m: 0.05,
                cone_angle_deg: 15.0,
            },
        },
        fluid: FluidDef::Preset {
            id: "water-20c".to_string(),
        },
        manometric: ManometricDef::Preset {
            id: "mercury".to_string(),
        },
        condition: ConditionDef::FlowRate { q_m3_per_s: 0.015 },
        mode: ModeDef::Realistic {
            friction: FrictionDef::Material {
                material: "cast-iron".to_string(),
            },
            model: LossModelDef::Segmented,
        },
        solver: Some(SolverDef {
            beta_max: Some(0.7),
            ..SolverDef::default()
        }),
    }
}

#[test]
fn roundtrip_yaml() {
    let scenario = base_scenario();
    validate_scenario(&scenario).unwrap();

    let path = std::env::temp_dir().join("vf_project_roundtrip.yaml");
    save_yaml(&path, &scenario).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn roundtrip_json_meter() {
    let scenario = Scenario {
        name: "Meter".to_string(),
        condition: ConditionDef::ManometerDeflection { delta_h_m: 0.15 },
        mode: ModeDef::Meter {
            cd: 0.98,
            friction: None,
        },
        solver: None,
        ..base_scenario()
    };

    let path = std::env::temp_dir().join("vf_project_roundtrip_meter.json");
    save_json(&path, &scenario).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(scenario, loaded);
}

#[test]
fn save_rejects_invalid_scenario() {
    let scenario = Scenario {
        geometry: GeometryDef {
            inlet_diameter_m: 0.05,
            throat_diameter_m: 0.05,
            lengths: LengthsDef::Total { length_m: 0.3 },
        },
        ..base_scenario()
    };
    let path = std::env::temp_dir().join("vf_project_invalid.yaml");
    let err = save_yaml(&path, &scenario).unwrap_err();
    assert!(matches!(err, ProjectError::Validation(_)));
}

#[test]
fn cone_angle_defaults_when_omitted() {
    let yaml = r#"
version: 1
name: Default cone
geometry:
  inlet_diameter_m: 0.1
  throat_diameter_m: 0.05
  lengths:
    type: Derived
    throat_length_m: 0.05
fluid:
  type: Water
  temperature_c: 15.0
manometric:
  type: Preset
  id: hg
condition:
  type: ThroatVelocity
  v_m_per_s: 5.0
mode:
  type: Ideal
"#;
    let scenario: Scenario = serde_yaml::from_str(yaml).unwrap();
    match scenario.geometry.lengths {
        LengthsDef::Derived { cone_angle_deg, .. } => assert_eq!(cone_angle_deg, 15.0),
        other => panic!("unexpected lengths {other:?}"),
    }
    validate_scenario(&scenario).unwrap();
}
