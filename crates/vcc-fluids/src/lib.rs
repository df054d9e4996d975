//! vcc-fluids: refrigerant property calculations for vaporcycle.
//!
//! Provides:
//! - Refrigerant definitions (R134a, R410A, R717, etc.)
//! - Thermodynamic state representation
//! - PropertyModel trait for property calculations
//! - CoolProp backend for real refrigerant properties
//! - Unit-aware input parsing
//!
//! # Architecture
//!
//! This crate defines a stable API (`PropertyModel` trait) that isolates the
//! cycle model from backend dependencies. Currently, CoolProp (via `rfluids`)
//! is the primary backend, but the architecture allows for future additions:
//! - Tabulated property data for teaching material
//! - REFPROP bindings
//! - Custom equation-of-state implementations
//!
//! # Example
//!
//! ```no_run
//! use vcc_fluids::{CoolPropModel, PropertyModel, Refrigerant, StateInput};
//! use vcc_core::units::{k, pa};
//!
//! let model = CoolPropModel::new();
//! let input = StateInput::PT {
//!     p: pa(200_000.0),
//!     t: k(280.0),
//! };
//!
//! let state = model.state(input, Refrigerant::R134a).unwrap();
//! let h = model.h(&state).unwrap();
//! println!("Enthalpy: {} J/kg", h);
//! ```

pub mod catalog;
pub mod coolprop;
pub mod error;
pub mod model;
pub mod refrigerant;
pub mod state;
pub mod units;

// Re-exports for ergonomics
pub use catalog::{RefrigerantCatalogEntry, filter_refrigerant_catalog, refrigerant_catalog};
pub use coolprop::CoolPropModel;
pub use error::{FluidError, FluidResult};
pub use model::{CriticalPoint, PropertyModel, SaturatedState};
pub use refrigerant::Refrigerant;
pub use state::{SpecEnthalpy, SpecEntropy, StateInput, ThermoState};
pub use units::{Quantity, UnitError, UnitValue, parse_quantity};
