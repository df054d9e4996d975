//! End-to-end cycle tests against the CoolProp backend.
//!
//! The textbook scenario: R-134a, -10°C evaporating, 40°C condensing,
//! 5 K superheat, 5 K subcooling, 80% compressor efficiency. Tolerances are
//! broad to ride out backend version differences; the structural invariants
//! are exact.

use vcc_core::units::{dt_k, k, kgps, pa};
use vcc_cycle::{BoundarySpec, CycleError, CycleInputs, CycleLocation, compute_cycle, ph_diagram};
use vcc_fluids::{CoolPropModel, PropertyModel, Refrigerant};

fn textbook_inputs() -> CycleInputs {
    CycleInputs {
        evaporator: BoundarySpec::SaturationTemperature(k(263.15)), // -10°C
        condenser: BoundarySpec::SaturationTemperature(k(313.15)),  // 40°C
        superheat: dt_k(5.0),
        subcooling: dt_k(5.0),
        isentropic_efficiency: 0.8,
        mass_flow: None,
    }
}

#[test]
fn textbook_r134a_cycle() {
    let model = CoolPropModel::new();
    let result = compute_cycle(&model, Refrigerant::R134a, &textbook_inputs()).unwrap();

    // Suction enthalpy lands near 400 kJ/kg with CoolProp's default
    // reference state for R134a.
    let h1 = result.state(CycleLocation::EvaporatorExit).enthalpy;
    assert!(
        h1 > 370.0e3 && h1 < 430.0e3,
        "h1 = {} J/kg",
        h1
    );

    assert!(result.specific_work > 0.0);
    assert!(
        result.cop > 2.5 && result.cop < 4.0,
        "COP = {}",
        result.cop
    );

    // Discharge must be hotter than the condensing temperature.
    let t2 = result.state(CycleLocation::CompressorDischarge).temperature;
    assert!(t2.value > 313.15, "T2 = {} K", t2.value);

    // Expansion outlet flashes partway into the dome.
    let quality = result
        .state(CycleLocation::EvaporatorInlet)
        .quality
        .expect("state 4 is two-phase");
    assert!(quality > 0.1 && quality < 0.6, "x4 = {}", quality);
}

#[test]
fn textbook_cycle_invariants_are_exact() {
    let model = CoolPropModel::new();
    let result = compute_cycle(&model, Refrigerant::R134a, &textbook_inputs()).unwrap();

    let h3 = result.state(CycleLocation::CondenserExit).enthalpy;
    let h4 = result.state(CycleLocation::EvaporatorInlet).enthalpy;
    assert_eq!(h3, h4, "expansion must be isenthalpic");

    assert!(result.energy_balance_residual() < 1e-9);

    let h1 = result.state(CycleLocation::EvaporatorExit).enthalpy;
    let h2 = result.state(CycleLocation::CompressorDischarge).enthalpy;
    assert!((result.specific_work - (h2 - h1)).abs() < 1e-9);
}

#[test]
fn pressure_entry_matches_temperature_entry() {
    let model = CoolPropModel::new();
    let by_temperature =
        compute_cycle(&model, Refrigerant::R134a, &textbook_inputs()).unwrap();

    let p_evap = by_temperature
        .state(CycleLocation::EvaporatorExit)
        .pressure;
    let p_cond = by_temperature
        .state(CycleLocation::CompressorDischarge)
        .pressure;

    let inputs = CycleInputs {
        evaporator: BoundarySpec::Pressure(p_evap),
        condenser: BoundarySpec::Pressure(p_cond),
        ..textbook_inputs()
    };
    let by_pressure = compute_cycle(&model, Refrigerant::R134a, &inputs).unwrap();

    let cop_diff = (by_pressure.cop - by_temperature.cop).abs();
    assert!(cop_diff < 0.05, "COP difference: {}", cop_diff);
}

#[test]
fn ideal_compressor_reduces_to_isentropic_case() {
    let model = CoolPropModel::new();
    let inputs = CycleInputs {
        isentropic_efficiency: 1.0,
        ..textbook_inputs()
    };
    let result = compute_cycle(&model, Refrigerant::R134a, &inputs).unwrap();

    let h2 = result.state(CycleLocation::CompressorDischarge).enthalpy;
    let diff = (h2 - result.ideal_discharge_enthalpy).abs();
    assert!(diff < 1.0, "h2 - h2s = {} J/kg", diff);
}

#[test]
fn mass_flow_scales_to_plant_metrics() {
    let model = CoolPropModel::new();
    let inputs = CycleInputs {
        mass_flow: Some(kgps(0.05)),
        ..textbook_inputs()
    };
    let result = compute_cycle(&model, Refrigerant::R134a, &inputs).unwrap();

    let plant = result.plant.expect("plant metrics requested");
    assert!(plant.compressor_power.value > 0.0);
    assert!(plant.cooling_capacity.value > plant.compressor_power.value);
    assert!(plant.tons_of_refrigeration > 0.0);
    assert!(plant.kw_per_ton > 0.0);

    let closure = plant.cooling_capacity.value + plant.compressor_power.value
        - plant.heat_rejection.value;
    assert!(closure.abs() < 1.0, "plant balance residual: {} W", closure);
}

#[test]
fn swapped_boundaries_are_infeasible() {
    let model = CoolPropModel::new();
    let inputs = CycleInputs {
        evaporator: BoundarySpec::SaturationTemperature(k(313.15)),
        condenser: BoundarySpec::SaturationTemperature(k(263.15)),
        ..textbook_inputs()
    };
    let err = compute_cycle(&model, Refrigerant::R134a, &inputs).unwrap_err();
    assert!(matches!(err, CycleError::InfeasibleCycle { .. }));
}

#[test]
fn condensing_above_critical_is_a_property_error() {
    let model = CoolPropModel::new();
    let critical = model.critical_point(Refrigerant::R134a).unwrap();
    let inputs = CycleInputs {
        condenser: BoundarySpec::Pressure(pa(critical.pressure.value * 1.2)),
        ..textbook_inputs()
    };
    let err = compute_cycle(&model, Refrigerant::R134a, &inputs).unwrap_err();
    assert!(matches!(err, CycleError::PropertyLookup(_)));
}

#[test]
fn every_catalog_refrigerant_computes_a_moderate_cycle() {
    let model = CoolPropModel::new();

    // A modest lift every catalog fluid can deliver subcritically, including
    // CO2 (critical point at 31°C).
    let inputs = CycleInputs {
        evaporator: BoundarySpec::SaturationTemperature(k(253.15)), // -20°C
        condenser: BoundarySpec::SaturationTemperature(k(293.15)),  // 20°C
        ..textbook_inputs()
    };

    for refrigerant in Refrigerant::ALL {
        let result = compute_cycle(&model, refrigerant, &inputs)
            .unwrap_or_else(|e| panic!("{} failed: {e}", refrigerant));
        assert!(result.cop > 0.0, "{}", refrigerant);
        assert!(result.specific_work > 0.0, "{}", refrigerant);
    }
}

#[test]
fn diagram_brackets_the_cycle() {
    let model = CoolPropModel::new();
    let result = compute_cycle(&model, Refrigerant::R134a, &textbook_inputs()).unwrap();
    let diagram = ph_diagram(&model, &result, 50).unwrap();

    assert_eq!(diagram.dome.len(), 50);
    let p_evap = result.state(CycleLocation::EvaporatorExit).pressure.value;
    let p_cond = result
        .state(CycleLocation::CompressorDischarge)
        .pressure
        .value;

    let p_first = diagram.dome.first().unwrap().pressure.value;
    let p_last = diagram.dome.last().unwrap().pressure.value;
    assert!(p_first < p_evap);
    assert!(p_last > p_cond);

    for point in &diagram.dome {
        assert!(point.enthalpy_liquid < point.enthalpy_vapor);
    }
}
