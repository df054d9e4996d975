//! Property model trait and validation helpers.

use crate::error::{FluidError, FluidResult};
use crate::refrigerant::Refrigerant;
use crate::state::{SpecEnthalpy, SpecEntropy, StateInput, ThermoState};
use vcc_core::units::{Density, Pressure, Temperature};

/// Properties on the saturation line at a given pressure and quality.
///
/// Quality 0 is saturated liquid, quality 1 is saturated vapor; intermediate
/// values describe the two-phase mixture.
#[derive(Clone, Debug, PartialEq)]
pub struct SaturatedState {
    /// Saturation temperature [K]
    pub temperature: Temperature,

    /// Density [kg/m³]
    pub density: Density,

    /// Specific enthalpy [J/kg]
    pub enthalpy: SpecEnthalpy,

    /// Specific entropy [J/(kg·K)]
    pub entropy: SpecEntropy,
}

/// Critical point of a refrigerant.
///
/// Used to bound saturation sweeps; the saturation line does not extend
/// beyond it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CriticalPoint {
    pub temperature: Temperature,
    pub pressure: Pressure,
}

/// Trait for refrigerant property models.
///
/// Implementations must be thread-safe (Send + Sync) and deterministic:
/// identical inputs must produce identical outputs. All failures are
/// reported as `FluidError` values, never panics, so the cycle model can
/// surface them as property-lookup errors.
pub trait PropertyModel: Send + Sync {
    /// Get the model name (for debugging/logging).
    fn name(&self) -> &str;

    /// Check if this model supports the given refrigerant.
    fn supports(&self, refrigerant: Refrigerant) -> bool;

    /// Create a thermodynamic state from input specification.
    ///
    /// For PT input: validates and creates state directly.
    /// For PH/PS input: solves for temperature, then creates state.
    fn state(&self, input: StateInput, refrigerant: Refrigerant) -> FluidResult<ThermoState>;

    /// Compute density [kg/m³] at the given state.
    fn rho(&self, state: &ThermoState) -> FluidResult<Density>;

    /// Compute specific enthalpy [J/kg] at the given state.
    fn h(&self, state: &ThermoState) -> FluidResult<SpecEnthalpy>;

    /// Compute specific entropy [J/(kg·K)] at the given state.
    fn s(&self, state: &ThermoState) -> FluidResult<SpecEntropy>;

    /// Saturation pressure at the given temperature.
    fn saturation_pressure(
        &self,
        refrigerant: Refrigerant,
        t: Temperature,
    ) -> FluidResult<Pressure>;

    /// Saturation temperature at the given pressure.
    fn saturation_temperature(
        &self,
        refrigerant: Refrigerant,
        p: Pressure,
    ) -> FluidResult<Temperature>;

    /// Properties on the saturation line at the given pressure and quality.
    fn saturated_state(
        &self,
        refrigerant: Refrigerant,
        p: Pressure,
        quality: f64,
    ) -> FluidResult<SaturatedState>;

    /// Critical point of the refrigerant.
    fn critical_point(&self, refrigerant: Refrigerant) -> FluidResult<CriticalPoint>;
}

/// Validation helpers for property inputs.
pub(crate) mod validation {
    use super::*;

    /// Ensure pressure is positive and finite.
    pub fn validate_pressure(p: Pressure) -> FluidResult<()> {
        if !p.value.is_finite() || p.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure temperature is positive and finite.
    pub fn validate_temperature(t: Temperature) -> FluidResult<()> {
        if !t.value.is_finite() || t.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }
        Ok(())
    }

    /// Ensure enthalpy is finite (can be negative).
    pub fn validate_enthalpy(h: f64) -> FluidResult<()> {
        if !h.is_finite() {
            return Err(FluidError::NonPhysical {
                what: "enthalpy must be finite",
            });
        }
        Ok(())
    }

    /// Ensure entropy is finite (can be negative).
    pub fn validate_entropy(s: f64) -> FluidResult<()> {
        if !s.is_finite() {
            return Err(FluidError::NonPhysical {
                what: "entropy must be finite",
            });
        }
        Ok(())
    }

    /// Ensure quality lies in [0, 1].
    pub fn validate_quality(q: f64) -> FluidResult<()> {
        if !q.is_finite() || !(0.0..=1.0).contains(&q) {
            return Err(FluidError::OutOfRange {
                what: "quality must be between 0 and 1",
            });
        }
        Ok(())
    }

    /// Ensure density is positive and finite.
    pub fn validate_density(rho: Density) -> FluidResult<()> {
        if !rho.value.is_finite() || rho.value <= 0.0 {
            return Err(FluidError::NonPhysical {
                what: "density must be positive and finite",
            });
        }
        Ok(())
    }
}
