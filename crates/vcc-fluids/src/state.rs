//! Thermodynamic state definitions.

use crate::error::{FluidError, FluidResult};
use crate::refrigerant::Refrigerant;
use vcc_core::units::{Pressure, Temperature};

/// Specific enthalpy [J/kg].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEnthalpy = f64;

/// Specific entropy [J/(kg·K)].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecEntropy = f64;

/// Input specification for creating a thermodynamic state.
#[derive(Debug, Clone, PartialEq)]
pub enum StateInput {
    /// Pressure and temperature.
    PT { p: Pressure, t: Temperature },
    /// Pressure and specific enthalpy.
    PH { p: Pressure, h: SpecEnthalpy },
    /// Pressure and specific entropy.
    PS { p: Pressure, s: SpecEntropy },
}

/// Single-phase thermodynamic state: pressure, temperature, and refrigerant.
///
/// This is the minimal set of independent properties.
/// Derived properties (density, enthalpy, entropy) are computed on demand
/// via the `PropertyModel` trait.
///
/// Two-phase states are degenerate in pressure-temperature coordinates and
/// are handled through `PropertyModel::saturated_state` instead.
#[derive(Debug, Clone, PartialEq)]
pub struct ThermoState {
    p: Pressure,
    t: Temperature,
    refrigerant: Refrigerant,
}

impl ThermoState {
    /// Create a state from pressure, temperature, and refrigerant.
    ///
    /// Validates that pressure and temperature are positive and finite.
    pub fn from_pt(p: Pressure, t: Temperature, refrigerant: Refrigerant) -> FluidResult<Self> {
        let p_val = p.value;
        if !p_val.is_finite() || p_val <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }

        let t_val = t.value;
        if !t_val.is_finite() || t_val <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }

        Ok(Self { p, t, refrigerant })
    }

    /// Get pressure.
    pub fn pressure(&self) -> Pressure {
        self.p
    }

    /// Get temperature.
    pub fn temperature(&self) -> Temperature {
        self.t
    }

    /// Get refrigerant.
    pub fn refrigerant(&self) -> Refrigerant {
        self.refrigerant
    }
}
