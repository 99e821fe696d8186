//! Engine creation, destruction, and shape/generation queries.

use crate::config::EngineConfig;
use crate::engine::SimulationEngine;
use crate::render::Palette;

fn create(config: EngineConfig) -> *mut SimulationEngine {
    match SimulationEngine::new(config) {
        Ok(engine) => Box::into_raw(Box::new(engine)),
        Err(err) => {
            log::warn!("engine creation failed: {}", err);
            std::ptr::null_mut()
        }
    }
}

fn base_config(rows: u32, cols: u32, seed: u64, num_threads: u8) -> EngineConfig {
    EngineConfig {
        seed: if seed == 0 { None } else { Some(seed) },
        num_threads: num_threads as usize,
        ..EngineConfig::with_dimensions(rows as usize, cols as usize)
    }
}

/// Creates a new engine with a random field and palette.
///
/// `seed` 0 draws a seed from entropy. `num_threads` 0 uses one worker per core.
///
/// # Returns
/// A pointer to a new engine, or null if `rows` or `cols` is zero or the
/// grid is too large to allocate.
///
/// # Safety
/// The returned pointer must eventually be freed with `ka_destroy()`.
#[no_mangle]
pub extern "C" fn ka_create(
    rows: u32,
    cols: u32,
    seed: u64,
    num_threads: u8,
) -> *mut SimulationEngine {
    create(base_config(rows, cols, seed, num_threads))
}

/// Creates a new engine with a fixed palette.
///
/// # Returns
/// A pointer to a new engine, or null if a dimension is zero or a palette
/// channel lies outside [0, 1].
#[no_mangle]
pub extern "C" fn ka_create_with_palette(
    rows: u32,
    cols: u32,
    seed: u64,
    red: f64,
    green: f64,
    blue: f64,
) -> *mut SimulationEngine {
    create(EngineConfig {
        palette: Some(Palette::from_channels([red, green, blue])),
        ..base_config(rows, cols, seed, 0)
    })
}

/// Destroys an engine and frees its memory.
///
/// # Safety
/// - `ptr` must be a valid pointer returned by `ka_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn ka_destroy(ptr: *mut SimulationEngine) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Gets the number of generations since creation or the last reset.
///
/// # Safety
/// - `ptr` must be a valid engine pointer, or null
///
/// # Returns
/// The generation counter, or 0 if ptr is null.
#[no_mangle]
pub unsafe extern "C" fn ka_get_generation(ptr: *const SimulationEngine) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).generation()
}

/// # Safety
/// - `ptr` must be a valid engine pointer, or null (returns 0)
#[no_mangle]
pub unsafe extern "C" fn ka_rows(ptr: *const SimulationEngine) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).rows() as u32
}

/// # Safety
/// - `ptr` must be a valid engine pointer, or null (returns 0)
#[no_mangle]
pub unsafe extern "C" fn ka_cols(ptr: *const SimulationEngine) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).cols() as u32
}
