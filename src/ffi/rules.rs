//! Rule set selection and enumeration.

use std::ffi::{c_char, CStr};

use super::{status_of, KA_ERR_ARGUMENT, KA_OK};
use crate::engine::SimulationEngine;

/// Selects the active rule set by name, effective from the next step.
///
/// # Safety
/// - `ptr` must be a valid engine pointer, or null
/// - `name` must be a NUL-terminated string, or null
///
/// # Returns
/// `KA_OK`, `KA_ERR_ARGUMENT` for null pointers or non-UTF-8 names, or
/// `KA_ERR_UNKNOWN_RULE_SET` (the active rule set is unchanged).
#[no_mangle]
pub unsafe extern "C" fn ka_select_rule_set(
    ptr: *mut SimulationEngine,
    name: *const c_char,
) -> i32 {
    if ptr.is_null() || name.is_null() {
        return KA_ERR_ARGUMENT;
    }

    let name = match CStr::from_ptr(name).to_str() {
        Ok(name) => name,
        Err(_) => return KA_ERR_ARGUMENT,
    };

    match (*ptr).select_rule_set(name) {
        Ok(()) => KA_OK,
        Err(err) => status_of(&err),
    }
}

/// Number of registered rule sets.
///
/// # Safety
/// - `ptr` must be a valid engine pointer, or null (returns 0)
#[no_mangle]
pub unsafe extern "C" fn ka_rule_set_count(ptr: *const SimulationEngine) -> u32 {
    if ptr.is_null() {
        return 0;
    }
    (*ptr).registry().len() as u32
}

/// Copies the name of the rule set at display position `index` into `buf`,
/// NUL-terminated.
///
/// # Safety
/// - `ptr` must be a valid engine pointer, or null
/// - `buf` must point to at least `len` writable bytes, or be null
///
/// # Returns
/// Bytes written excluding the terminator, or 0 if `index` is out of range,
/// a pointer is null, or the name plus terminator does not fit in `len`.
#[no_mangle]
pub unsafe extern "C" fn ka_rule_set_name(
    ptr: *const SimulationEngine,
    index: u32,
    buf: *mut c_char,
    len: usize,
) -> usize {
    if ptr.is_null() || buf.is_null() {
        return 0;
    }

    let rule = match (*ptr).registry().get_index(index as usize) {
        Some(rule) => rule,
        None => return 0,
    };

    let bytes = rule.name.as_bytes();
    if bytes.len() + 1 > len {
        return 0;
    }

    let out = std::slice::from_raw_parts_mut(buf as *mut u8, len);
    out[..bytes.len()].copy_from_slice(bytes);
    out[bytes.len()] = 0;
    bytes.len()
}
