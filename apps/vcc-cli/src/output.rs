//! Result formatting: text tables, unit conversion for display, JSON report,
//! and CSV diagram export.

use clap::ValueEnum;
use serde::Serialize;
use vcc_cycle::{CycleResult, PhDiagram};

/// Display unit system.
///
/// Everything is SI internally; conversion happens only here, at the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnitSystem {
    /// °C, kPa, kJ/kg, kW
    Si,
    /// °F, psia, BTU/lb, BTU/hr
    Ip,
}

struct DisplayUnits {
    temperature: &'static str,
    pressure: &'static str,
    density: &'static str,
    enthalpy: &'static str,
    entropy: &'static str,
    power: &'static str,
}

impl UnitSystem {
    fn units(self) -> DisplayUnits {
        match self {
            UnitSystem::Si => DisplayUnits {
                temperature: "°C",
                pressure: "kPa",
                density: "kg/m³",
                enthalpy: "kJ/kg",
                entropy: "kJ/(kg·K)",
                power: "kW",
            },
            UnitSystem::Ip => DisplayUnits {
                temperature: "°F",
                pressure: "psia",
                density: "lbm/ft³",
                enthalpy: "BTU/lb",
                entropy: "BTU/(lbm·°F)",
                power: "BTU/hr",
            },
        }
    }

    fn temperature(self, kelvin: f64) -> f64 {
        match self {
            UnitSystem::Si => kelvin - 273.15,
            UnitSystem::Ip => kelvin * 9.0 / 5.0 - 459.67,
        }
    }

    fn pressure(self, pascal: f64) -> f64 {
        match self {
            UnitSystem::Si => pascal / 1.0e3,
            UnitSystem::Ip => pascal / 6_894.76,
        }
    }

    fn density(self, kg_m3: f64) -> f64 {
        match self {
            UnitSystem::Si => kg_m3,
            UnitSystem::Ip => kg_m3 * 0.062_428,
        }
    }

    fn enthalpy(self, j_kg: f64) -> f64 {
        match self {
            UnitSystem::Si => j_kg / 1.0e3,
            UnitSystem::Ip => j_kg / 2_326.0,
        }
    }

    fn entropy(self, j_kg_k: f64) -> f64 {
        match self {
            UnitSystem::Si => j_kg_k / 1.0e3,
            UnitSystem::Ip => j_kg_k / 4_186.8,
        }
    }

    fn power(self, watt: f64) -> f64 {
        match self {
            UnitSystem::Si => watt / 1.0e3,
            UnitSystem::Ip => watt * 3.412_142,
        }
    }
}

/// Print the cycle result as a text table plus performance metrics.
pub fn print_result(result: &CycleResult, units: UnitSystem) {
    let u = units.units();

    println!("\n--- Refrigeration Cycle Results ({}) ---", result.refrigerant);
    println!(
        " State |  T({:<3}) |  P({:<4}) | rho({:<7}) |  h({:<6}) |  s({:<11}) | quality",
        u.temperature, u.pressure, u.density, u.enthalpy, u.entropy
    );
    println!("{}", "-".repeat(92));

    for state in &result.states {
        let quality = state
            .quality
            .map(|q| format!("{q:.3}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:>4} | {:>8.2} | {:>8.1} | {:>12.3} | {:>9.2} | {:>14.4} | {:>7}",
            state.location.number(),
            units.temperature(state.temperature.value),
            units.pressure(state.pressure.value),
            units.density(state.density.value),
            units.enthalpy(state.enthalpy),
            units.entropy(state.entropy),
            quality,
        );
    }

    println!("\n--- Performance Metrics (per kg of refrigerant) ---");
    println!(
        "Specific work input:        {:>9.2} {}",
        units.enthalpy(result.specific_work),
        u.enthalpy
    );
    println!(
        "Refrigeration effect:       {:>9.2} {}",
        units.enthalpy(result.refrigeration_effect),
        u.enthalpy
    );
    println!(
        "Heat rejected:              {:>9.2} {}",
        units.enthalpy(result.specific_heat_rejected),
        u.enthalpy
    );
    println!("Coefficient of performance: {:>9.2}", result.cop);

    if let Some(plant) = &result.plant {
        println!("\n--- Plant Performance ({:.4} kg/s) ---", plant.mass_flow.value);
        println!(
            "Compressor power:   {:>12.1} {}",
            units.power(plant.compressor_power.value),
            u.power
        );
        println!(
            "Cooling capacity:   {:>12.1} {} ({:.2} tons)",
            units.power(plant.cooling_capacity.value),
            u.power,
            plant.tons_of_refrigeration
        );
        println!(
            "Heat rejection:     {:>12.1} {}",
            units.power(plant.heat_rejection.value),
            u.power
        );
        println!("kW per ton:         {:>12.2}", plant.kw_per_ton);
    }

    println!(
        "\nFirst-law check: compressor work plus evaporator heat equals the\ncondenser heat rejection (residual {:.1e}).",
        result.energy_balance_residual()
    );
}

/// Flat, SI-only report for machine consumption.
#[derive(Debug, Serialize)]
pub struct CycleReport {
    pub refrigerant: String,
    pub states: Vec<StateReport>,
    pub ideal_discharge_enthalpy_j_per_kg: f64,
    pub specific_work_j_per_kg: f64,
    pub refrigeration_effect_j_per_kg: f64,
    pub heat_rejected_j_per_kg: f64,
    pub cop: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant: Option<PlantReport>,
}

#[derive(Debug, Serialize)]
pub struct StateReport {
    pub state: usize,
    pub location: String,
    pub pressure_pa: f64,
    pub temperature_k: f64,
    pub density_kg_m3: f64,
    pub enthalpy_j_per_kg: f64,
    pub entropy_j_per_kg_k: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct PlantReport {
    pub mass_flow_kg_s: f64,
    pub compressor_power_w: f64,
    pub cooling_capacity_w: f64,
    pub heat_rejection_w: f64,
    pub tons_of_refrigeration: f64,
    pub kw_per_ton: f64,
}

impl CycleReport {
    pub fn from_result(result: &CycleResult) -> Self {
        Self {
            refrigerant: result.refrigerant.key().to_string(),
            states: result
                .states
                .iter()
                .map(|state| StateReport {
                    state: state.location.number(),
                    location: state.location.label().to_string(),
                    pressure_pa: state.pressure.value,
                    temperature_k: state.temperature.value,
                    density_kg_m3: state.density.value,
                    enthalpy_j_per_kg: state.enthalpy,
                    entropy_j_per_kg_k: state.entropy,
                    quality: state.quality,
                })
                .collect(),
            ideal_discharge_enthalpy_j_per_kg: result.ideal_discharge_enthalpy,
            specific_work_j_per_kg: result.specific_work,
            refrigeration_effect_j_per_kg: result.refrigeration_effect,
            heat_rejected_j_per_kg: result.specific_heat_rejected,
            cop: result.cop,
            plant: result.plant.as_ref().map(|plant| PlantReport {
                mass_flow_kg_s: plant.mass_flow.value,
                compressor_power_w: plant.compressor_power.value,
                cooling_capacity_w: plant.cooling_capacity.value,
                heat_rejection_w: plant.heat_rejection.value,
                tons_of_refrigeration: plant.tons_of_refrigeration,
                kw_per_ton: plant.kw_per_ton,
            }),
        }
    }
}

/// Build the diagram CSV: one row per point, tagged by series.
pub fn diagram_csv(diagram: &PhDiagram) -> String {
    let mut csv = String::from("series,enthalpy_j_per_kg,pressure_pa\n");
    for point in &diagram.dome {
        csv.push_str(&format!(
            "dome_liquid,{},{}\n",
            point.enthalpy_liquid, point.pressure.value
        ));
    }
    for point in &diagram.dome {
        csv.push_str(&format!(
            "dome_vapor,{},{}\n",
            point.enthalpy_vapor, point.pressure.value
        ));
    }
    for (enthalpy, pressure) in diagram.cycle_polyline() {
        csv.push_str(&format!("cycle,{},{}\n", enthalpy, pressure));
    }
    csv
}
