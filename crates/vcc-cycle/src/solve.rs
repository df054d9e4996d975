//! Cycle evaluation: four property lookups plus closed-form relations.

use crate::error::CycleError;
use crate::inputs::{BoundarySpec, CycleInputs};
use crate::point::{CycleLocation, StatePoint};
use crate::result::{CycleResult, PlantPerformance};
use uom::si::mass_density::kilogram_per_cubic_meter;
use vcc_core::numeric::{Tolerances, nearly_equal};
use vcc_core::units::{Density, Pressure, Temperature, k};
use vcc_fluids::{PropertyModel, Refrigerant, StateInput, refrigerant_catalog};

/// Minimum effective superheat/subcooling [K].
///
/// Saturated P-T queries are degenerate on the dome, so zero is nudged to a
/// value just beside it.
const SAT_OFFSET_K: f64 = 1e-3;

/// Slack allowed on the expansion-outlet quality before a cycle is rejected.
const QUALITY_SLACK: f64 = 1e-6;

/// Evaluate a single-stage vapor-compression cycle.
///
/// The property backend is passed in explicitly; the function is pure given
/// a deterministic backend and holds no state between calls.
///
/// # Errors
///
/// - [`CycleError::InvalidInput`] for malformed values or an unsupported
///   refrigerant, detected before any property lookup
/// - [`CycleError::InfeasibleCycle`] when the request is thermodynamically
///   inconsistent (no compression possible, expansion outside the dome)
/// - [`CycleError::PropertyLookup`] when the backend cannot resolve a state
/// - [`CycleError::EnergyImbalance`] when the first-law closure check fails
pub fn compute_cycle(
    model: &dyn PropertyModel,
    refrigerant: Refrigerant,
    inputs: &CycleInputs,
) -> Result<CycleResult, CycleError> {
    inputs.validate()?;

    let whitelisted = refrigerant_catalog()
        .iter()
        .any(|entry| entry.refrigerant == refrigerant);
    if !whitelisted || !model.supports(refrigerant) {
        return Err(CycleError::InvalidInput {
            field: "refrigerant",
            reason: "refrigerant is not supported by the property model",
        });
    }

    // Boundary resolution: whichever of T/P was given, derive the other from
    // the saturation curve.
    let (p_evap, t_evap_sat) = resolve_boundary(model, refrigerant, &inputs.evaporator)?;
    let (p_cond, t_cond_sat) = resolve_boundary(model, refrigerant, &inputs.condenser)?;

    if p_cond.value <= p_evap.value {
        return Err(CycleError::InfeasibleCycle {
            reason: "condensing pressure must exceed evaporating pressure",
        });
    }
    if t_cond_sat.value <= t_evap_sat.value {
        return Err(CycleError::InfeasibleCycle {
            reason: "condensing temperature must exceed evaporating temperature",
        });
    }

    let superheat = inputs.superheat.value.max(SAT_OFFSET_K);
    let subcooling = inputs.subcooling.value.max(SAT_OFFSET_K);

    // State 1: superheated vapor at the evaporator exit.
    let t1 = k(t_evap_sat.value + superheat);
    let st1 = model.state(StateInput::PT { p: p_evap, t: t1 }, refrigerant)?;
    let h1 = model.h(&st1)?;
    let s1 = model.s(&st1)?;
    let rho1 = model.rho(&st1)?;

    // State 2s: ideal discharge, isentropic lookup at condensing pressure.
    let st2s = model.state(StateInput::PS { p: p_cond, s: s1 }, refrigerant)?;
    let h2s = model.h(&st2s)?;

    let ideal_work = h2s - h1;
    if ideal_work <= 0.0 {
        return Err(CycleError::InfeasibleCycle {
            reason: "isentropic compression produced no enthalpy rise",
        });
    }
    let actual_work = ideal_work / inputs.isentropic_efficiency;
    let h2 = h1 + actual_work;

    // State 2: actual discharge. Temperature is back-derived for display
    // only; it does not feed the other states.
    let st2 = model.state(StateInput::PH { p: p_cond, h: h2 }, refrigerant)?;
    let t2 = st2.temperature();
    let s2 = model.s(&st2)?;
    let rho2 = model.rho(&st2)?;

    // State 3: subcooled liquid at the condenser exit. Subcooling counts
    // down from the saturated-liquid (bubble-point) temperature, which for
    // zeotropic blends sits below the dew point by the temperature glide.
    let cond_bubble = model.saturated_state(refrigerant, p_cond, 0.0)?;
    let t3_val = cond_bubble.temperature.value - subcooling;
    if t3_val <= 0.0 {
        return Err(CycleError::InfeasibleCycle {
            reason: "subcooling drives the condenser exit below absolute zero",
        });
    }
    let t3 = k(t3_val);
    let st3 = model.state(StateInput::PT { p: p_cond, t: t3 }, refrigerant)?;
    let h3 = model.h(&st3)?;
    let s3 = model.s(&st3)?;
    let rho3 = model.rho(&st3)?;

    // State 4: isenthalpic expansion into the dome.
    let h4 = h3;
    let sat_liquid = model.saturated_state(refrigerant, p_evap, 0.0)?;
    let sat_vapor = model.saturated_state(refrigerant, p_evap, 1.0)?;
    let latent = sat_vapor.enthalpy - sat_liquid.enthalpy;
    if latent <= 0.0 {
        return Err(CycleError::InfeasibleCycle {
            reason: "no latent heat at the evaporating pressure",
        });
    }

    let quality4 = (h4 - sat_liquid.enthalpy) / latent;
    if !(-QUALITY_SLACK..=1.0 + QUALITY_SLACK).contains(&quality4) {
        return Err(CycleError::InfeasibleCycle {
            reason: "expansion must end in the two-phase region",
        });
    }
    let quality4 = quality4.clamp(0.0, 1.0);

    // Two-phase mixture relations for the informational properties.
    let t4 = sat_liquid.temperature;
    let s4 = sat_liquid.entropy + quality4 * (sat_vapor.entropy - sat_liquid.entropy);
    let v4 = (1.0 / sat_liquid.density.value)
        + quality4 * (1.0 / sat_vapor.density.value - 1.0 / sat_liquid.density.value);
    let rho4 = Density::new::<kilogram_per_cubic_meter>(1.0 / v4);

    // Derived metrics. The work identity w == actual_work holds by
    // construction; keep it as a consistency assertion.
    let specific_work = h2 - h1;
    debug_assert!(nearly_equal(specific_work, actual_work, Tolerances::default()));

    let refrigeration_effect = h1 - h4;
    let specific_heat_rejected = h2 - h3;
    if refrigeration_effect <= 0.0 {
        return Err(CycleError::InfeasibleCycle {
            reason: "no refrigeration effect at the evaporator",
        });
    }
    let cop = refrigeration_effect / specific_work;

    // First-law closure: q_cond must equal q_evap + w. Anything beyond
    // roundoff means a contaminated property lookup and is surfaced.
    let tol = Tolerances::energy_balance();
    let residual = (specific_heat_rejected - (refrigeration_effect + specific_work)).abs();
    let relative_error = residual / specific_heat_rejected.abs().max(1.0);
    if !relative_error.is_finite() || relative_error > tol.rel {
        return Err(CycleError::EnergyImbalance { relative_error });
    }

    let states = [
        StatePoint {
            location: CycleLocation::EvaporatorExit,
            pressure: p_evap,
            temperature: t1,
            density: rho1,
            enthalpy: h1,
            entropy: s1,
            quality: None,
        },
        StatePoint {
            location: CycleLocation::CompressorDischarge,
            pressure: p_cond,
            temperature: t2,
            density: rho2,
            enthalpy: h2,
            entropy: s2,
            quality: None,
        },
        StatePoint {
            location: CycleLocation::CondenserExit,
            pressure: p_cond,
            temperature: t3,
            density: rho3,
            enthalpy: h3,
            entropy: s3,
            quality: None,
        },
        StatePoint {
            location: CycleLocation::EvaporatorInlet,
            pressure: p_evap,
            temperature: t4,
            density: rho4,
            enthalpy: h4,
            entropy: s4,
            quality: Some(quality4),
        },
    ];

    let plant = inputs.mass_flow.map(|mass_flow| {
        PlantPerformance::from_specifics(
            mass_flow,
            specific_work,
            refrigeration_effect,
            specific_heat_rejected,
        )
    });

    Ok(CycleResult {
        refrigerant,
        states,
        ideal_discharge_enthalpy: h2s,
        specific_work,
        refrigeration_effect,
        specific_heat_rejected,
        cop,
        plant,
    })
}

fn resolve_boundary(
    model: &dyn PropertyModel,
    refrigerant: Refrigerant,
    spec: &BoundarySpec,
) -> Result<(Pressure, Temperature), CycleError> {
    match spec {
        BoundarySpec::SaturationTemperature(t) => {
            let p = model.saturation_pressure(refrigerant, *t)?;
            Ok((p, *t))
        }
        BoundarySpec::Pressure(p) => {
            let t = model.saturation_temperature(refrigerant, *p)?;
            Ok((*p, t))
        }
    }
}
