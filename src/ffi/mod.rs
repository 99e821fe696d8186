//! C FFI layer for host display loops.
//!
//! This module exports C ABI functions for a host process (window, input,
//! widgets) that drives the engine. All functions are marked with
//! `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic lives in `engine` and `automaton`. These functions are thin
//! wrappers that handle null checks, pointer safety, and error-to-status
//! conversion. Calls on one handle must not overlap.

pub mod frame;
pub mod grid;
pub mod lifecycle;
pub mod rules;

pub use frame::{ka_frame_len, ka_render};
pub use grid::{
    ka_get_cell, ka_get_iterations, ka_paint, ka_reset, ka_set_cell, ka_set_iterations, ka_step,
    ka_tick,
};
pub use lifecycle::{
    ka_cols, ka_create, ka_create_with_palette, ka_destroy, ka_get_generation, ka_rows,
};
pub use rules::{ka_rule_set_count, ka_rule_set_name, ka_select_rule_set};

use crate::error::EngineError;

/// Call succeeded.
pub const KA_OK: i32 = 0;
/// Null handle or invalid argument.
pub const KA_ERR_ARGUMENT: i32 = 1;
/// Rule set name not registered.
pub const KA_ERR_UNKNOWN_RULE_SET: i32 = 2;
/// A step produced NaN or infinity; the field was left at the last good generation.
pub const KA_ERR_NON_FINITE: i32 = 3;

/// Map an engine error onto a C status code.
pub(crate) fn status_of(err: &EngineError) -> i32 {
    match err {
        EngineError::UnknownRuleSet { .. } => KA_ERR_UNKNOWN_RULE_SET,
        EngineError::NonFiniteResult { .. } => KA_ERR_NON_FINITE,
        _ => KA_ERR_ARGUMENT,
    }
}
