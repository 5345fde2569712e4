//! Integration tests for the property sources behind the `PropertySource` trait.

use proptest::prelude::*;
use vf_core::units::{celsius, constants, pa};
use vf_fluids::{FluidError, PresetCatalog, PropertySource, StatePoint, WaterCorrelation};

fn sources() -> Vec<Box<dyn PropertySource>> {
    vec![Box::new(PresetCatalog::new()), Box::new(WaterCorrelation::new())]
}

#[test]
fn every_source_answers_for_water() {
    for source in sources() {
        let props = source.lookup("water", StatePoint::standard()).unwrap();
        assert!(
            (props.rho() - 1000.0).abs() < 2.0,
            "{} gave {}",
            source.name(),
            props.rho()
        );
        assert!(props.mu() > 9e-4 && props.mu() < 1.1e-3);
    }
}

#[test]
fn correlation_and_preset_agree_at_sixty_degrees() {
    let preset = PresetCatalog::new()
        .lookup("water-60c", StatePoint::standard())
        .unwrap();
    let state = StatePoint::new(celsius(60.0), constants::p_atm());
    let correlation = WaterCorrelation::new().lookup("water", state).unwrap();

    assert!((preset.rho() - correlation.rho()).abs() < 1.0);
    let nu_rel = (preset.kinematic_viscosity().value - correlation.kinematic_viscosity().value)
        .abs()
        / preset.kinematic_viscosity().value;
    assert!(nu_rel < 0.03, "kinematic viscosity mismatch {nu_rel}");
}

#[test]
fn negative_pressure_is_rejected() {
    let state = StatePoint::new(celsius(20.0), pa(-1.0));
    let err = WaterCorrelation::new().lookup("water", state).unwrap_err();
    assert!(matches!(err, FluidError::InvalidArg { .. }));
}

proptest! {
    #[test]
    fn water_viscosity_decreases_with_temperature(t in 0.0_f64..99.0) {
        let mu_cold = WaterCorrelation::viscosity(t);
        let mu_warm = WaterCorrelation::viscosity(t + 1.0);
        prop_assert!(mu_warm < mu_cold);
    }

    #[test]
    fn correlation_is_valid_across_range(t in 0.0_f64..=100.0) {
        let state = StatePoint::new(celsius(t), constants::p_atm());
        let props = WaterCorrelation::new().lookup("water", state);
        prop_assert!(props.is_ok());
    }
}
