//! Cycle state points.

use vcc_core::units::{Density, Pressure, Temperature};
use vcc_fluids::{SpecEnthalpy, SpecEntropy};

/// Position of a state point in the cycle, in flow order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CycleLocation {
    /// State 1: superheated vapor leaving the evaporator, compressor inlet.
    EvaporatorExit,
    /// State 2: actual compressor discharge.
    CompressorDischarge,
    /// State 3: subcooled liquid leaving the condenser.
    CondenserExit,
    /// State 4: two-phase mixture after the expansion device.
    EvaporatorInlet,
}

impl CycleLocation {
    pub const ALL: [CycleLocation; 4] = [
        CycleLocation::EvaporatorExit,
        CycleLocation::CompressorDischarge,
        CycleLocation::CondenserExit,
        CycleLocation::EvaporatorInlet,
    ];

    /// Conventional 1-based state number.
    pub fn number(&self) -> usize {
        match self {
            CycleLocation::EvaporatorExit => 1,
            CycleLocation::CompressorDischarge => 2,
            CycleLocation::CondenserExit => 3,
            CycleLocation::EvaporatorInlet => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CycleLocation::EvaporatorExit => "evaporator exit",
            CycleLocation::CompressorDischarge => "compressor discharge",
            CycleLocation::CondenserExit => "condenser exit",
            CycleLocation::EvaporatorInlet => "evaporator inlet",
        }
    }
}

impl std::fmt::Display for CycleLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "State {} ({})", self.number(), self.label())
    }
}

/// A fully resolved point in the cycle.
///
/// Created by `compute_cycle`; immutable afterwards. Quality is only present
/// for two-phase points (the evaporator inlet in a normal cycle).
#[derive(Debug, Clone, PartialEq)]
pub struct StatePoint {
    pub location: CycleLocation,

    /// Pressure [Pa]
    pub pressure: Pressure,

    /// Temperature [K]
    pub temperature: Temperature,

    /// Density [kg/m³]
    pub density: Density,

    /// Specific enthalpy [J/kg]
    pub enthalpy: SpecEnthalpy,

    /// Specific entropy [J/(kg·K)]
    pub entropy: SpecEntropy,

    /// Vapor quality, if the point is inside the dome.
    pub quality: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations_are_numbered_in_flow_order() {
        let numbers: Vec<usize> = CycleLocation::ALL.iter().map(|l| l.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn display_includes_number_and_label() {
        let text = CycleLocation::EvaporatorInlet.to_string();
        assert!(text.contains("State 4"));
        assert!(text.contains("evaporator inlet"));
    }
}
