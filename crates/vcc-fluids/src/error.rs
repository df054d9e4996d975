//! Refrigerant property errors.

use thiserror::Error;

/// Result type for property operations.
pub type FluidResult<T> = Result<T, FluidError>;

/// Errors that can occur during refrigerant property calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FluidError {
    /// Non-physical values (negative pressure, zero absolute temperature, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Requested state lies outside the backend's validity region.
    #[error("Value out of range for {what}")]
    OutOfRange { what: &'static str },

    /// Operation not supported (e.g., unsupported refrigerant, supercritical solve).
    #[error("Not supported: {what}")]
    NotSupported { what: &'static str },

    /// Backend (CoolProp) error.
    #[error("Backend error: {message}")]
    Backend { message: String },

    /// Convergence failure (e.g., solving for T given P,h).
    #[error("Convergence failed for {what}")]
    ConvergenceFailed { what: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FluidError::NonPhysical { what: "pressure" };
        assert!(err.to_string().contains("pressure"));

        let err = FluidError::Backend {
            message: "CoolProp failed".into(),
        };
        assert!(err.to_string().contains("CoolProp"));
    }
}
