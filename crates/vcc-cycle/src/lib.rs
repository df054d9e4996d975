//! vcc-cycle: single-stage vapor-compression refrigeration cycle model.
//!
//! Provides:
//! - CycleInputs with interchangeable temperature/pressure boundary entry
//! - compute_cycle: four property lookups + closed-form cycle relations
//! - CycleResult with the four state points and derived performance metrics
//! - Pressure-enthalpy diagram data (saturation dome + cycle corners)
//!
//! # Architecture
//!
//! The cycle model is a pure function over the `PropertyModel` trait from
//! vcc-fluids. The property backend is always passed in explicitly, so the
//! same code runs against CoolProp, a test model, or any future backend, and
//! holds no state between calls.
//!
//! # Example
//!
//! ```no_run
//! use vcc_core::units::{dt_k, k};
//! use vcc_cycle::{BoundarySpec, CycleInputs, compute_cycle};
//! use vcc_fluids::{CoolPropModel, Refrigerant};
//!
//! let model = CoolPropModel::new();
//! let inputs = CycleInputs {
//!     evaporator: BoundarySpec::SaturationTemperature(k(263.15)),
//!     condenser: BoundarySpec::SaturationTemperature(k(313.15)),
//!     superheat: dt_k(5.0),
//!     subcooling: dt_k(5.0),
//!     isentropic_efficiency: 0.8,
//!     mass_flow: None,
//! };
//!
//! let result = compute_cycle(&model, Refrigerant::R134a, &inputs).unwrap();
//! println!("COP = {:.2}", result.cop);
//! ```

pub mod diagram;
pub mod error;
pub mod inputs;
pub mod point;
pub mod result;
pub mod solve;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports for ergonomics
pub use diagram::{CycleCorner, DomePoint, PhDiagram, ph_diagram};
pub use error::CycleError;
pub use inputs::{BoundarySpec, CycleInputs};
pub use point::{CycleLocation, StatePoint};
pub use result::{CycleResult, PlantPerformance};
pub use solve::compute_cycle;
