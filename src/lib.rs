//! Kernel Automata - 2D Convolutional Cellular Automata Library
//!
//! A scalar field on a torus is advanced by convolving each cell's 3x3
//! neighborhood with a rule set's kernel and passing the score through the
//! rule set's activation. The field renders to an RGB byte buffer.
//!
//! Rust callers use [`SimulationEngine`]; display hosts written in other
//! languages link the C ABI in [`ffi`].

pub mod automaton;
pub mod config;
pub mod engine;
pub mod error;
pub mod ffi;
pub mod render;

#[cfg(test)]
mod tests;

pub use automaton::{Activation, Field, Kernel, Pattern, RuleSet, RuleSetRegistry};
pub use config::EngineConfig;
pub use engine::SimulationEngine;
pub use error::EngineError;
pub use render::{FrameBuffer, Palette};
