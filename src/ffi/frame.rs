//! Frame rendering for the host display surface.

use crate::engine::SimulationEngine;
use crate::render::CHANNELS;

/// Size in bytes of a rendered frame: `rows * cols * 3`.
///
/// # Safety
/// - `ptr` must be a valid engine pointer, or null (returns 0)
#[no_mangle]
pub unsafe extern "C" fn ka_frame_len(ptr: *const SimulationEngine) -> u64 {
    if ptr.is_null() {
        return 0;
    }
    let engine = &*ptr;
    (engine.rows() * engine.cols() * CHANNELS) as u64
}

/// Renders the current field into `out_buf` as interleaved RGB bytes.
///
/// # Layout
/// Row-major, three bytes per cell: `out_buf[(row * cols + col) * 3 + channel]`.
///
/// # Safety
/// - `ptr` must be a valid engine pointer, or null
/// - `out_buf` must point to at least `len` writable bytes, or be null
///
/// # Returns
/// Number of bytes written, or 0 if a pointer is null or `len` is smaller
/// than `ka_frame_len()`.
#[no_mangle]
pub unsafe extern "C" fn ka_render(
    ptr: *const SimulationEngine,
    out_buf: *mut u8,
    len: u64,
) -> u64 {
    if ptr.is_null() || out_buf.is_null() {
        return 0;
    }

    let engine = &*ptr;
    let needed = engine.rows() * engine.cols() * CHANNELS;
    if (len as usize) < needed {
        return 0;
    }

    let frame = engine.current_frame();
    let out_slice = std::slice::from_raw_parts_mut(out_buf, needed);
    out_slice.copy_from_slice(frame.as_bytes());

    needed as u64
}
