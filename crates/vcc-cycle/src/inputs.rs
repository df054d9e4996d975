//! User-facing cycle inputs.

use crate::error::CycleError;
use vcc_core::units::{MassRate, Pressure, TempInterval, Temperature};

/// How an evaporator or condenser boundary is specified.
///
/// The two entry points are interchangeable: a saturation temperature fixes
/// the pressure through the refrigerant's saturation curve and vice versa.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundarySpec {
    /// Saturation temperature on the boundary [K].
    SaturationTemperature(Temperature),
    /// Absolute pressure on the boundary [Pa].
    Pressure(Pressure),
}

/// Inputs for a single cycle evaluation.
///
/// All values are canonical SI; the shells normalize user units before
/// constructing this. Consumed once per `compute_cycle` invocation; nothing
/// here is long-lived or shared.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleInputs {
    /// Evaporator-side boundary (low-pressure side).
    pub evaporator: BoundarySpec,

    /// Condenser-side boundary (high-pressure side).
    pub condenser: BoundarySpec,

    /// Vapor superheat above saturation at the evaporator exit [K].
    pub superheat: TempInterval,

    /// Liquid subcooling below saturation at the condenser exit [K].
    pub subcooling: TempInterval,

    /// Compressor isentropic efficiency, strictly in (0, 1].
    pub isentropic_efficiency: f64,

    /// Optional refrigerant mass flow rate for plant-level metrics [kg/s].
    pub mass_flow: Option<MassRate>,
}

impl CycleInputs {
    /// Validate all fields before any property lookup.
    pub fn validate(&self) -> Result<(), CycleError> {
        validate_boundary(&self.evaporator, "evaporator")?;
        validate_boundary(&self.condenser, "condenser")?;

        let superheat = self.superheat.value;
        if !superheat.is_finite() || superheat < 0.0 {
            return Err(CycleError::InvalidInput {
                field: "superheat",
                reason: "must be a finite value >= 0 K",
            });
        }

        let subcooling = self.subcooling.value;
        if !subcooling.is_finite() || subcooling < 0.0 {
            return Err(CycleError::InvalidInput {
                field: "subcooling",
                reason: "must be a finite value >= 0 K",
            });
        }

        let eff = self.isentropic_efficiency;
        if !eff.is_finite() || !(eff > 0.0 && eff <= 1.0) {
            return Err(CycleError::InvalidInput {
                field: "isentropic_efficiency",
                reason: "must be in (0, 1]",
            });
        }

        if let Some(mass_flow) = self.mass_flow {
            if !mass_flow.value.is_finite() || mass_flow.value <= 0.0 {
                return Err(CycleError::InvalidInput {
                    field: "mass_flow",
                    reason: "must be a finite value > 0 kg/s",
                });
            }
        }

        Ok(())
    }
}

fn validate_boundary(spec: &BoundarySpec, field: &'static str) -> Result<(), CycleError> {
    let value = match spec {
        BoundarySpec::SaturationTemperature(t) => t.value,
        BoundarySpec::Pressure(p) => p.value,
    };
    if !value.is_finite() || value <= 0.0 {
        return Err(CycleError::InvalidInput {
            field,
            reason: "must be a finite absolute value > 0",
        });
    }
    Ok(())
}
