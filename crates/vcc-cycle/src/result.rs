//! Cycle evaluation results.

use crate::point::{CycleLocation, StatePoint};
use vcc_core::units::{MassRate, Power, watts};
use vcc_fluids::{Refrigerant, SpecEnthalpy};

/// One ton of refrigeration in watts (12,000 BTU/hr).
pub const WATTS_PER_TON: f64 = 3_516.85;

/// Plant-level performance for a given refrigerant mass flow rate.
#[derive(Debug, Clone, PartialEq)]
pub struct PlantPerformance {
    /// Refrigerant mass flow rate [kg/s]
    pub mass_flow: MassRate,

    /// Compressor power input [W]
    pub compressor_power: Power,

    /// Heat removed in the evaporator [W]
    pub cooling_capacity: Power,

    /// Heat rejected in the condenser [W]
    pub heat_rejection: Power,

    /// Cooling capacity in tons of refrigeration
    pub tons_of_refrigeration: f64,

    /// Compressor kW per ton of cooling
    pub kw_per_ton: f64,
}

impl PlantPerformance {
    /// Scale specific (per-kg) cycle quantities by a mass flow rate.
    pub fn from_specifics(
        mass_flow: MassRate,
        specific_work: f64,
        refrigeration_effect: f64,
        specific_heat_rejected: f64,
    ) -> Self {
        let mdot = mass_flow.value;
        let compressor_power = watts(mdot * specific_work);
        let cooling_capacity = watts(mdot * refrigeration_effect);
        let heat_rejection = watts(mdot * specific_heat_rejected);

        let tons_of_refrigeration = cooling_capacity.value / WATTS_PER_TON;
        let kw_per_ton = if tons_of_refrigeration > 0.0 {
            (compressor_power.value / 1_000.0) / tons_of_refrigeration
        } else {
            f64::INFINITY
        };

        Self {
            mass_flow,
            compressor_power,
            cooling_capacity,
            heat_rejection,
            tons_of_refrigeration,
            kw_per_ton,
        }
    }
}

/// Complete result of one cycle evaluation.
///
/// Created fresh per calculation; never mutated afterwards and never
/// persisted. All specific quantities are per unit mass of refrigerant.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleResult {
    pub refrigerant: Refrigerant,

    /// The four state points in flow order (1, 2, 3, 4).
    pub states: [StatePoint; 4],

    /// Ideal (isentropic) compressor discharge enthalpy h2s [J/kg].
    ///
    /// Intermediate value kept for display and the efficiency identity;
    /// it does not feed back into the other states.
    pub ideal_discharge_enthalpy: SpecEnthalpy,

    /// Specific compressor work input w = h2 - h1 [J/kg]
    pub specific_work: f64,

    /// Specific refrigeration effect q_evap = h1 - h4 [J/kg]
    pub refrigeration_effect: f64,

    /// Specific heat rejected q_cond = h2 - h3 [J/kg]
    pub specific_heat_rejected: f64,

    /// Coefficient of performance q_evap / w
    pub cop: f64,

    /// Plant-level metrics, present when a mass flow rate was given.
    pub plant: Option<PlantPerformance>,
}

impl CycleResult {
    /// Get the state point at the given cycle location.
    pub fn state(&self, location: CycleLocation) -> &StatePoint {
        &self.states[location.number() - 1]
    }

    /// Relative first-law closure residual |q_cond - (q_evap + w)| / q_cond.
    pub fn energy_balance_residual(&self) -> f64 {
        let residual =
            (self.specific_heat_rejected - (self.refrigeration_effect + self.specific_work)).abs();
        residual / self.specific_heat_rejected.abs().max(1.0)
    }
}
