//! Cycle calculation errors.

use thiserror::Error;
use vcc_fluids::FluidError;

/// Errors that can occur while evaluating a cycle.
///
/// All variants are terminal for the current calculation: none are worth
/// retrying, since identical inputs produce identical failures. No partial
/// result is ever returned alongside one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CycleError {
    /// Malformed or out-of-domain user value, detected before any property lookup.
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: &'static str,
    },

    /// Thermodynamically inconsistent request (e.g., condenser pressure not
    /// exceeding evaporator pressure).
    #[error("Infeasible cycle: {reason}")]
    InfeasibleCycle { reason: &'static str },

    /// The property backend could not resolve a requested state.
    ///
    /// Always propagated, never retried: the request is outside the
    /// provider's valid domain.
    #[error("Property lookup failed: {0}")]
    PropertyLookup(#[from] FluidError),

    /// First-law closure check failed.
    ///
    /// The balance is algebraic, so a violation signals contaminated
    /// property lookups rather than a modeling decision.
    #[error("Energy balance violated: relative error {relative_error:e}")]
    EnergyImbalance { relative_error: f64 },
}
