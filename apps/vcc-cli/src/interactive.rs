//! Interactive prompt loop.
//!
//! Mirrors the classic terminal workflow: pick a refrigerant, choose
//! temperature or pressure entry per boundary, then superheat, subcooling,
//! efficiency, and an optional mass flow. Invalid entries re-prompt instead
//! of aborting.

use std::io::{self, Write};

use crate::CliError;
use crate::output::{UnitSystem, print_result};
use vcc_core::units::{dt_k, k, kgps, pa};
use vcc_cycle::{BoundarySpec, CycleInputs, compute_cycle};
use vcc_fluids::{CoolPropModel, Quantity, Refrigerant, parse_quantity, refrigerant_catalog};

pub fn run() -> Result<(), CliError> {
    let model = CoolPropModel::new();

    println!("Refrigeration Cycle Calculator");
    println!("Values accept units, e.g. \"-10C\", \"200kPa\", \"14.7psia\", \"80%\".\n");

    loop {
        let refrigerant = prompt_refrigerant()?;

        let evaporator = prompt_boundary("evaporator")?;
        let condenser = prompt_boundary("condenser")?;

        let superheat = prompt_quantity("Superheat", "5K", Quantity::TemperatureDifference)?;
        let subcooling = prompt_quantity("Subcooling", "5K", Quantity::TemperatureDifference)?;
        let efficiency =
            prompt_quantity("Compressor isentropic efficiency", "80%", Quantity::Efficiency)?;
        let mass_flow = prompt_optional_quantity(
            "Mass flow rate (blank for per-kg results)",
            Quantity::MassFlowRate,
        )?;

        let inputs = CycleInputs {
            evaporator,
            condenser,
            superheat: dt_k(superheat),
            subcooling: dt_k(subcooling),
            isentropic_efficiency: efficiency,
            mass_flow: mass_flow.map(kgps),
        };

        match compute_cycle(&model, refrigerant, &inputs) {
            Ok(result) => print_result(&result, UnitSystem::Si),
            Err(err) => println!("Could not compute this cycle: {err}"),
        }

        let again = prompt("\nCalculate another cycle? [y/N]: ")?;
        if !again.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }
        println!();
    }
}

fn prompt(label: &str) -> Result<String, CliError> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_refrigerant() -> Result<Refrigerant, CliError> {
    println!("Supported refrigerants:");
    for entry in refrigerant_catalog() {
        println!("  {:<8} {}", entry.canonical_id, entry.display_name);
    }

    loop {
        let text = prompt("Refrigerant [R134a]: ")?;
        if text.is_empty() {
            return Ok(Refrigerant::R134a);
        }
        match text.parse::<Refrigerant>() {
            Ok(refrigerant) => return Ok(refrigerant),
            Err(_) => println!("Unknown refrigerant '{text}'. Please pick one from the list."),
        }
    }
}

fn prompt_boundary(side: &str) -> Result<BoundarySpec, CliError> {
    loop {
        let choice = prompt(&format!(
            "Enter the {side} as (1) saturation temperature or (2) pressure [1]: "
        ))?;
        match choice.as_str() {
            "" | "1" => {
                let value = prompt_quantity(
                    &format!("{side} saturation temperature"),
                    "",
                    Quantity::Temperature,
                )?;
                return Ok(BoundarySpec::SaturationTemperature(k(value)));
            }
            "2" => {
                let value =
                    prompt_quantity(&format!("{side} pressure"), "", Quantity::Pressure)?;
                return Ok(BoundarySpec::Pressure(pa(value)));
            }
            _ => println!("Invalid choice. Please enter 1 or 2."),
        }
    }
}

fn prompt_quantity(label: &str, default: &str, quantity: Quantity) -> Result<f64, CliError> {
    loop {
        let text = if default.is_empty() {
            prompt(&format!("{label}: "))?
        } else {
            prompt(&format!("{label} [{default}]: "))?
        };

        let effective = if text.is_empty() {
            default
        } else {
            text.as_str()
        };
        if effective.is_empty() {
            println!("A value is required.");
            continue;
        }

        match parse_quantity(effective, quantity) {
            Ok(value) => return Ok(value),
            Err(err) => println!("{err}. Please try again."),
        }
    }
}

fn prompt_optional_quantity(label: &str, quantity: Quantity) -> Result<Option<f64>, CliError> {
    loop {
        let text = prompt(&format!("{label}: "))?;
        if text.is_empty() {
            return Ok(None);
        }
        match parse_quantity(&text, quantity) {
            Ok(value) => return Ok(Some(value)),
            Err(err) => println!("{err}. Please try again."),
        }
    }
}
