//! Core automaton logic: field storage, rule sets, and stepping.
//!
//! This module holds the pure simulation pieces. The engine in `engine.rs`
//! owns a field and drives these functions; the FFI layer in `ffi/` wraps the
//! engine for C callers.

pub mod activation;
pub mod convolve;
pub mod grid;
pub mod kernel;
pub mod patterns;
pub mod region;
pub mod rules;
pub mod stepping;

pub use activation::Activation;
pub use convolve::{convolve, convolve_into};
pub use grid::{create_field, field_from_cells, field_get, field_set, wrap_coord, Field};
pub use kernel::Kernel;
pub use patterns::Pattern;
pub use region::{fill_square, paint, stamp};
pub use rules::{RuleSet, RuleSetRegistry};
pub use stepping::step_field;
