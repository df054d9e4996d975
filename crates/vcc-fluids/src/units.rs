//! Unit-aware numeric input system.
//!
//! Provides a reusable architecture for parsing and storing values with units.
//! The shells feed user text through here so the rest of the system only ever
//! sees canonical SI values.
//!
//! # Key Design
//!
//! - **Raw text**: User's input exactly as entered
//! - **Canonical value**: Parsed numeric in SI base units
//! - **Quantity type**: Temperature, Pressure, etc.
//! - **Parser boundary**: Separated so future expression parsers can plug in cleanly

use std::fmt;

/// Dimension/quantity family for a numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    /// Absolute temperature (canonical: Kelvin)
    Temperature,
    /// Absolute pressure (canonical: Pa)
    Pressure,
    /// Temperature difference for superheat/subcooling (canonical: K)
    TemperatureDifference,
    /// Efficiency fraction (canonical: 0-1, accepts %)
    Efficiency,
    /// Mass flow rate (canonical: kg/s)
    MassFlowRate,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "Temperature"),
            Self::Pressure => write!(f, "Absolute Pressure"),
            Self::TemperatureDifference => write!(f, "Temperature Difference"),
            Self::Efficiency => write!(f, "Efficiency"),
            Self::MassFlowRate => write!(f, "Mass Flow Rate"),
        }
    }
}

/// Error in unit parsing or conversion.
#[derive(Debug, Clone)]
pub enum UnitError {
    /// Input text did not parse to a number + optional unit
    ParseError(String),
    /// Unit not recognized for this quantity
    UnknownUnit { unit: String, quantity: String },
    /// Unit not allowed for this quantity (e.g., plain "psi" requires "psia" or "psig")
    AmbiguousUnit { unit: String, reason: String },
    /// Value out of physical range (e.g., negative absolute temperature)
    OutOfRange { value: f64, reason: String },
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParseError(msg) => write!(f, "Parse error: {}", msg),
            Self::UnknownUnit { unit, quantity } => {
                write!(f, "Unknown unit '{}' for {}", unit, quantity)
            }
            Self::AmbiguousUnit { unit, reason } => {
                write!(f, "Ambiguous unit '{}': {}", unit, reason)
            }
            Self::OutOfRange { value, reason } => {
                write!(f, "Value {} out of range: {}", value, reason)
            }
        }
    }
}

impl std::error::Error for UnitError {}

/// Stores a value with its original user input and canonical SI representation.
#[derive(Debug, Clone)]
pub struct UnitValue {
    /// Raw text as the user entered it (e.g., "14.7 psia", "-10C")
    pub raw_text: String,
    /// Canonical value in SI/base units for computation
    pub canonical_si: f64,
    /// Associated quantity type
    pub quantity: Quantity,
}

impl UnitValue {
    /// Create a new unit value from raw text, parsing and converting to canonical SI form.
    pub fn from_text(raw_text: impl Into<String>, quantity: Quantity) -> Result<Self, UnitError> {
        let text = raw_text.into();
        let canonical_si = parse_quantity(&text, quantity)?;
        Ok(Self {
            raw_text: text,
            canonical_si,
            quantity,
        })
    }

    /// Get the canonical SI value for this quantity.
    pub fn si_value(&self) -> f64 {
        self.canonical_si
    }

    /// Replace the raw text and re-parse, returning error if parsing fails.
    pub fn update_text(&mut self, new_text: impl Into<String>) -> Result<(), UnitError> {
        let text = new_text.into();
        let canonical_si = parse_quantity(&text, self.quantity)?;
        self.raw_text = text;
        self.canonical_si = canonical_si;
        Ok(())
    }
}

/// Parse a quantity value from user input text.
///
/// Handles unit tags and converts to canonical SI units.
///
/// # Arguments
///
/// - `raw_text`: User input (e.g., "-10C", "14.7 psia", "80%")
/// - `quantity`: Dimension/quantity family for validation
pub fn parse_quantity(raw_text: &str, quantity: Quantity) -> Result<f64, UnitError> {
    let trimmed = raw_text.trim();

    match quantity {
        Quantity::Temperature => parse_temperature(trimmed),
        Quantity::Pressure => parse_pressure(trimmed),
        Quantity::TemperatureDifference => parse_temperature_difference(trimmed),
        Quantity::Efficiency => parse_efficiency(trimmed),
        Quantity::MassFlowRate => parse_mass_flow(trimmed),
    }
}

/// Parse temperature in various units, return Kelvin.
fn parse_temperature(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let kelvin = match unit.to_lowercase().as_str() {
        "k" | "kelvin" => value,
        "c" | "°c" | "celsius" => value + 273.15,
        "f" | "°f" | "fahrenheit" => (value + 459.67) * 5.0 / 9.0,
        "r" | "°r" | "rankine" => value * 5.0 / 9.0,
        // Default to Kelvin if no unit specified
        "" => value,
        _ => {
            return Err(UnitError::UnknownUnit {
                unit: unit.to_string(),
                quantity: "Temperature".to_string(),
            });
        }
    };

    if kelvin <= 0.0 {
        return Err(UnitError::OutOfRange {
            value: kelvin,
            reason: "Absolute temperature must be > 0 K".to_string(),
        });
    }

    Ok(kelvin)
}

/// Parse pressure in various units, return Pa (absolute).
fn parse_pressure(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let pa = match unit.to_lowercase().as_str() {
        "pa" | "pascal" => value,
        "kpa" => value * 1e3,
        "mpa" => value * 1e6,
        "bar" => value * 1e5, // bar treated as absolute
        "atm" => value * 101_325.0,
        "psia" => value * 6_894.76, // pounds absolute
        "psig" => (value + 14.696) * 6_894.76, // gauge -> absolute
        "barg" => (value + 1.0) * 1e5, // gauge -> absolute
        // Explicitly reject ambiguous units
        "psi" => {
            return Err(UnitError::AmbiguousUnit {
                unit: "psi".to_string(),
                reason: "Use 'psia' (absolute) or 'psig' (gauge)".to_string(),
            });
        }
        "" => value, // Default to Pa
        _ => {
            return Err(UnitError::UnknownUnit {
                unit: unit.to_string(),
                quantity: "Pressure".to_string(),
            });
        }
    };

    if pa <= 0.0 {
        return Err(UnitError::OutOfRange {
            value: pa,
            reason: "Absolute pressure must be positive".to_string(),
        });
    }

    Ok(pa)
}

/// Parse a temperature difference (superheat/subcooling), return kelvin.
///
/// Celsius and kelvin differences are the same size; Fahrenheit and Rankine
/// differences scale by 5/9. No 273.15 offsets apply to differences.
fn parse_temperature_difference(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let delta_k = match unit.to_lowercase().as_str() {
        "k" | "kelvin" | "c" | "°c" => value,
        "f" | "°f" | "r" | "°r" => value * 5.0 / 9.0,
        "" => value,
        _ => {
            return Err(UnitError::UnknownUnit {
                unit: unit.to_string(),
                quantity: "Temperature Difference".to_string(),
            });
        }
    };

    if delta_k < 0.0 {
        return Err(UnitError::OutOfRange {
            value: delta_k,
            reason: "Superheat and subcooling cannot be negative".to_string(),
        });
    }

    Ok(delta_k)
}

/// Parse efficiency as a fraction, accepting percent notation.
fn parse_efficiency(input: &str) -> Result<f64, UnitError> {
    let trimmed = input.trim();
    let fraction = if trimmed.ends_with('%') {
        let num_str = trimmed.trim_end_matches('%').trim();
        let percent: f64 = num_str.parse().map_err(|_| {
            UnitError::ParseError(format!("Could not parse efficiency from '{}'", input))
        })?;
        percent / 100.0
    } else {
        trimmed.parse().map_err(|_| {
            UnitError::ParseError(format!("Could not parse efficiency from '{}'", input))
        })?
    };

    if !(fraction > 0.0 && fraction <= 1.0) {
        return Err(UnitError::OutOfRange {
            value: fraction,
            reason: "Efficiency must be in (0, 1]; use % for percent input".to_string(),
        });
    }

    Ok(fraction)
}

/// Parse mass flow rate in various units, return kg/s.
fn parse_mass_flow(input: &str) -> Result<f64, UnitError> {
    let (value, unit) = split_value_and_unit(input)?;

    let kg_s = match unit.to_lowercase().as_str() {
        "kg/s" => value,
        "kg/min" => value / 60.0,
        "kg/h" | "kg/hr" => value / 3600.0,
        "g/s" => value / 1e3,
        "lbm/min" => value * 0.453_592 / 60.0,
        "lbm/h" | "lbm/hr" => value * 0.453_592 / 3600.0,
        // Reject ambiguous "lb"
        "lb/min" | "lb/h" | "lb/hr" => {
            return Err(UnitError::AmbiguousUnit {
                unit: unit.to_string(),
                reason: "Use 'lbm' for mass flow".to_string(),
            });
        }
        "" => value, // Default to kg/s
        _ => {
            return Err(UnitError::UnknownUnit {
                unit: unit.to_string(),
                quantity: "Mass Flow Rate".to_string(),
            });
        }
    };

    if kg_s <= 0.0 {
        return Err(UnitError::OutOfRange {
            value: kg_s,
            reason: "Mass flow rate must be positive".to_string(),
        });
    }

    Ok(kg_s)
}

/// Split a value+unit string into (numeric_value, unit_string).
///
/// Examples:
/// - "-10C" -> (-10.0, "C")
/// - "14.7 psia" -> (14.7, "psia")
/// - "300" -> (300.0, "")
fn split_value_and_unit(input: &str) -> Result<(f64, String), UnitError> {
    let trimmed = input.trim();

    // Find where the numeric part ends
    let split_idx = trimmed
        .find(|c: char| !c.is_numeric() && c != '.' && c != '-' && c != '+' && c != 'e' && c != 'E')
        .unwrap_or(trimmed.len());

    let (num_part, unit_part) = trimmed.split_at(split_idx);
    let num_part = num_part.trim();
    let unit_part = unit_part.trim();

    let value: f64 = num_part.parse().map_err(|_| {
        UnitError::ParseError(format!("Could not parse numeric value from '{}'", input))
    })?;

    Ok((value, unit_part.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_kelvin() {
        assert_eq!(parse_temperature("300 K").unwrap(), 300.0);
        assert_eq!(parse_temperature("300K").unwrap(), 300.0);
    }

    #[test]
    fn parse_celsius() {
        let c = parse_temperature("-10C").unwrap();
        assert!((c - 263.15).abs() < 1e-9);
    }

    #[test]
    fn parse_fahrenheit() {
        let f = parse_temperature("32F").unwrap();
        assert!((f - 273.15).abs() < 0.01);
    }

    #[test]
    fn reject_negative_absolute_temperature() {
        assert!(parse_temperature("-100K").is_err());
    }

    #[test]
    fn parse_pressure_absolute() {
        assert_eq!(parse_pressure("101325 Pa").unwrap(), 101_325.0);
        assert_eq!(parse_pressure("1 bar").unwrap(), 1e5);
        let psia = parse_pressure("14.7 psia").unwrap();
        assert!((psia - 101_353.0).abs() < 20.0);
    }

    #[test]
    fn reject_plain_psi() {
        assert!(matches!(
            parse_pressure("14.7 psi"),
            Err(UnitError::AmbiguousUnit { unit, .. }) if unit == "psi"
        ));
    }

    #[test]
    fn temperature_difference_has_no_offset() {
        assert_eq!(parse_temperature_difference("5K").unwrap(), 5.0);
        assert_eq!(parse_temperature_difference("5C").unwrap(), 5.0);
        let f_diff = parse_temperature_difference("9F").unwrap();
        assert!((f_diff - 5.0).abs() < 1e-9);
    }

    #[test]
    fn reject_negative_superheat() {
        assert!(parse_temperature_difference("-3K").is_err());
    }

    #[test]
    fn parse_efficiency_fraction_and_percent() {
        assert_eq!(parse_efficiency("0.8").unwrap(), 0.8);
        assert_eq!(parse_efficiency("80%").unwrap(), 0.8);
        assert_eq!(parse_efficiency("100%").unwrap(), 1.0);
        assert!(parse_efficiency("0").is_err());
        assert!(parse_efficiency("1.2").is_err());
    }

    #[test]
    fn parse_mass_flow_units() {
        assert_eq!(parse_mass_flow("0.05 kg/s").unwrap(), 0.05);
        let lbm_min = parse_mass_flow("5 lbm/min").unwrap();
        assert!((lbm_min - 0.037_799).abs() < 1e-4);
        assert!(matches!(
            parse_mass_flow("5 lb/min"),
            Err(UnitError::AmbiguousUnit { .. })
        ));
    }

    #[test]
    fn unit_value_roundtrip() {
        let uv = UnitValue::from_text("40C", Quantity::Temperature).unwrap();
        assert_eq!(uv.raw_text, "40C");
        assert!((uv.si_value() - 313.15).abs() < 1e-9);
    }

    #[test]
    fn unit_value_update_keeps_quantity() {
        let mut uv = UnitValue::from_text("1 bar", Quantity::Pressure).unwrap();
        uv.update_text("200 kPa").unwrap();
        assert_eq!(uv.si_value(), 200_000.0);
        assert!(uv.update_text("banana").is_err());
        assert_eq!(uv.si_value(), 200_000.0);
    }

    proptest! {
        #[test]
        fn celsius_and_kelvin_agree(t_c in -100.0f64..200.0) {
            let via_c = parse_temperature(&format!("{t_c}C")).unwrap();
            let via_k = parse_temperature(&format!("{}K", t_c + 273.15)).unwrap();
            prop_assert!((via_c - via_k).abs() < 1e-6);
        }

        #[test]
        fn bar_is_always_1e5_pa(p_bar in 0.01f64..500.0) {
            let si = parse_pressure(&format!("{p_bar} bar")).unwrap();
            prop_assert!((si - p_bar * 1e5).abs() < 1e-6 * si);
        }
    }
}
