use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;

use vcc_core::units::{dt_k, k, kgps, pa};
use vcc_cycle::{BoundarySpec, CycleError, CycleInputs, compute_cycle, ph_diagram};
use vcc_fluids::{CoolPropModel, Quantity, Refrigerant, filter_refrigerant_catalog, parse_quantity};

mod interactive;
mod output;

use output::{CycleReport, UnitSystem, diagram_csv, print_result};

#[derive(Parser)]
#[command(name = "vcc-cli")]
#[command(about = "Vaporcycle CLI - vapor-compression refrigeration cycle calculator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported refrigerants
    Refrigerants {
        /// Filter by name or alias
        #[arg(long, default_value = "")]
        filter: String,
    },
    /// Compute a cycle from command-line parameters
    Compute {
        #[command(flatten)]
        spec: CycleSpecArgs,
        /// Display units
        #[arg(long, value_enum, default_value = "si")]
        units: UnitSystem,
        /// Emit the result as JSON instead of tables
        #[arg(long)]
        json: bool,
    },
    /// Export pressure-enthalpy diagram data as CSV
    Diagram {
        #[command(flatten)]
        spec: CycleSpecArgs,
        /// Number of saturation-dome pressure levels
        #[arg(long, default_value_t = 60)]
        samples: usize,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Prompt for inputs interactively
    Interactive,
}

/// Cycle parameters shared by `compute` and `diagram`.
///
/// Values carry units in the text (e.g. "-10C", "200kPa", "80%"); anything
/// unitless is read as SI.
#[derive(Args)]
struct CycleSpecArgs {
    /// Refrigerant identifier (e.g. R134a, R410A, ammonia)
    refrigerant: String,

    /// Evaporator saturation temperature (e.g. "-10C", "263.15K", "14F")
    #[arg(long, conflicts_with = "evap_pressure")]
    evap_temp: Option<String>,

    /// Evaporator pressure (e.g. "200kPa", "29.5psia")
    #[arg(long)]
    evap_pressure: Option<String>,

    /// Condenser saturation temperature
    #[arg(long, conflicts_with = "cond_pressure")]
    cond_temp: Option<String>,

    /// Condenser pressure
    #[arg(long)]
    cond_pressure: Option<String>,

    /// Superheat at the evaporator exit
    #[arg(long, default_value = "5K")]
    superheat: String,

    /// Subcooling at the condenser exit
    #[arg(long, default_value = "5K")]
    subcooling: String,

    /// Compressor isentropic efficiency ("0.8" or "80%")
    #[arg(long, default_value = "80%")]
    efficiency: String,

    /// Refrigerant mass flow rate (e.g. "0.05kg/s", "5lbm/min")
    #[arg(long)]
    mass_flow: Option<String>,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("{0}")]
    Arg(String),

    #[error(transparent)]
    Cycle(#[from] CycleError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Refrigerants { filter } => cmd_refrigerants(&filter),
        Commands::Compute { spec, units, json } => cmd_compute(&spec, units, json),
        Commands::Diagram {
            spec,
            samples,
            output,
        } => cmd_diagram(&spec, samples, output.as_deref()),
        Commands::Interactive => interactive::run(),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn cmd_refrigerants(filter: &str) -> Result<(), CliError> {
    let entries = filter_refrigerant_catalog(filter);
    if entries.is_empty() {
        println!("No refrigerants match '{filter}'");
        return Ok(());
    }

    println!("Supported refrigerants:");
    for entry in entries {
        if entry.aliases.is_empty() {
            println!("  {:<8} {}", entry.canonical_id, entry.display_name);
        } else {
            println!(
                "  {:<8} {} (aliases: {})",
                entry.canonical_id,
                entry.display_name,
                entry.aliases.join(", ")
            );
        }
    }
    Ok(())
}

fn cmd_compute(spec: &CycleSpecArgs, units: UnitSystem, json: bool) -> Result<(), CliError> {
    let (refrigerant, inputs) = build_inputs(spec)?;
    let model = CoolPropModel::new();

    let result = compute_cycle(&model, refrigerant, &inputs)?;
    tracing::debug!(
        refrigerant = %refrigerant,
        cop = result.cop,
        specific_work = result.specific_work,
        "cycle computed"
    );

    if json {
        let report = CycleReport::from_result(&result);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_result(&result, units);
    }
    Ok(())
}

fn cmd_diagram(
    spec: &CycleSpecArgs,
    samples: usize,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let (refrigerant, inputs) = build_inputs(spec)?;
    let model = CoolPropModel::new();

    let result = compute_cycle(&model, refrigerant, &inputs)?;
    let diagram = ph_diagram(&model, &result, samples)?;
    let csv = diagram_csv(&diagram);

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} dome levels and the cycle outline to {}",
            diagram.dome.len(),
            path.display()
        );
    } else {
        print!("{csv}");
    }
    Ok(())
}

fn build_inputs(spec: &CycleSpecArgs) -> Result<(Refrigerant, CycleInputs), CliError> {
    let refrigerant: Refrigerant = spec
        .refrigerant
        .parse()
        .map_err(|_| CliError::Arg(format!("unknown refrigerant '{}'", spec.refrigerant)))?;

    let evaporator = parse_boundary(
        spec.evap_temp.as_deref(),
        spec.evap_pressure.as_deref(),
        "--evap-temp",
        "--evap-pressure",
    )?;
    let condenser = parse_boundary(
        spec.cond_temp.as_deref(),
        spec.cond_pressure.as_deref(),
        "--cond-temp",
        "--cond-pressure",
    )?;

    let superheat = parse_arg(&spec.superheat, Quantity::TemperatureDifference, "--superheat")?;
    let subcooling = parse_arg(
        &spec.subcooling,
        Quantity::TemperatureDifference,
        "--subcooling",
    )?;
    let efficiency = parse_arg(&spec.efficiency, Quantity::Efficiency, "--efficiency")?;
    let mass_flow = spec
        .mass_flow
        .as_deref()
        .map(|text| parse_arg(text, Quantity::MassFlowRate, "--mass-flow"))
        .transpose()?
        .map(kgps);

    let inputs = CycleInputs {
        evaporator,
        condenser,
        superheat: dt_k(superheat),
        subcooling: dt_k(subcooling),
        isentropic_efficiency: efficiency,
        mass_flow,
    };

    Ok((refrigerant, inputs))
}

fn parse_boundary(
    temperature: Option<&str>,
    pressure: Option<&str>,
    temp_flag: &str,
    pressure_flag: &str,
) -> Result<BoundarySpec, CliError> {
    match (temperature, pressure) {
        (Some(text), None) => Ok(BoundarySpec::SaturationTemperature(k(parse_arg(
            text,
            Quantity::Temperature,
            temp_flag,
        )?))),
        (None, Some(text)) => Ok(BoundarySpec::Pressure(pa(parse_arg(
            text,
            Quantity::Pressure,
            pressure_flag,
        )?))),
        _ => Err(CliError::Arg(format!(
            "provide exactly one of {temp_flag} or {pressure_flag}"
        ))),
    }
}

fn parse_arg(text: &str, quantity: Quantity, flag: &str) -> Result<f64, CliError> {
    parse_quantity(text, quantity).map_err(|err| CliError::Arg(format!("{flag}: {err}")))
}
