//! Field reseeding, stepping, painting, and cell access.

use super::{status_of, KA_ERR_ARGUMENT, KA_OK};
use crate::engine::SimulationEngine;

/// Replaces the field with a fresh random 0/1 field.
///
/// # Safety
/// - `ptr` must be a valid engine pointer, or null (no-op)
#[no_mangle]
pub unsafe extern "C" fn ka_reset(ptr: *mut SimulationEngine) {
    if ptr.is_null() {
        return;
    }
    (*ptr).reset();
}

/// Advances the field by `count` generations under the active rule set.
///
/// # Safety
/// - `ptr` must be a valid engine pointer, or null
///
/// # Returns
/// `KA_OK`, `KA_ERR_ARGUMENT` for a null pointer, or `KA_ERR_NON_FINITE` if a
/// generation produced NaN/infinity (the field keeps the last good generation).
#[no_mangle]
pub unsafe extern "C" fn ka_step(ptr: *mut SimulationEngine, count: u32) -> i32 {
    if ptr.is_null() {
        return KA_ERR_ARGUMENT;
    }

    match (*ptr).step(count) {
        Ok(()) => KA_OK,
        Err(err) => status_of(&err),
    }
}

/// Advances the field by the configured iterations per tick.
///
/// # Safety
/// - `ptr` must be a valid engine pointer, or null
///
/// # Returns
/// Same status codes as `ka_step()`.
#[no_mangle]
pub unsafe extern "C" fn ka_tick(ptr: *mut SimulationEngine) -> i32 {
    if ptr.is_null() {
        return KA_ERR_ARGUMENT;
    }

    match (*ptr).tick() {
        Ok(()) => KA_OK,
        Err(err) => status_of(&err),
    }
}

/// Sets the iterations executed by `ka_tick()`. Zero is treated as one.
///
/// # Safety
/// - `ptr` must be a valid engine pointer, or null (no-op)
#[no_mangle]
pub unsafe extern "C" fn ka_set_iterations(ptr: *mut SimulationEngine, iterations: u32) {
    if ptr.is_null() {
        return;
    }
    (*ptr).set_iterations_per_tick(iterations);
}

/// # Safety
/// - `ptr` must be a valid engine pointer, or null (returns 0)
#[no_mangle]
pub unsafe extern "C" fn ka_get_iterations(ptr: *const SimulationEngine) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).iterations_per_tick()
}

/// Sets the inclusive square `[row-half, row+half] x [col-half, col+half]` to live cells.
///
/// Coordinates wrap around the field edges.
///
/// # Safety
/// - `ptr` must be a valid engine pointer, or null (no-op)
#[no_mangle]
pub unsafe extern "C" fn ka_paint(ptr: *mut SimulationEngine, row: i32, col: i32, half_size: u32) {
    if ptr.is_null() {
        return;
    }
    (*ptr).paint(row as isize, col as isize, half_size as usize);
}

/// Gets a cell value. Coordinates wrap.
///
/// # Safety
/// - `ptr` must be a valid engine pointer, or null
///
/// # Returns
/// The cell value, or 0.0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn ka_get_cell(ptr: *const SimulationEngine, row: i32, col: i32) -> f64 {
    if ptr.is_null() {
        return 0.0;
    }
    (*ptr).cell(row as isize, col as isize)
}

/// Sets a cell value. Coordinates wrap; non-finite values are ignored.
///
/// # Safety
/// - `ptr` must be a valid engine pointer, or null (no-op)
#[no_mangle]
pub unsafe extern "C" fn ka_set_cell(ptr: *mut SimulationEngine, row: i32, col: i32, value: f64) {
    if ptr.is_null() || !value.is_finite() {
        return;
    }
    (*ptr).set_cell(row as isize, col as isize, value);
}
