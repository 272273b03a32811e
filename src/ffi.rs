//! FFI bindings for agecalc
//!
//! This module provides C-compatible functions so a presentation layer in any
//! host can call the engine. All functions use C strings (null-terminated) and
//! return allocated memory that must be freed by the caller using
//! `agecalc_free_string`.
//!
//! Reference instants are passed as local `YYYY-MM-DDTHH:MM:SS` strings; a
//! NULL instant means "sample the local clock now".

use std::cell::RefCell;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use chrono::{Local, NaiveDateTime};

use crate::anthropometry::anthropometrics_json;
use crate::config::{AgeConfig, DisplayProfile};
use crate::error::InvalidReason;
use crate::pipeline::{age_snapshot_json, validate_birth_date, SnapshotProcessor};

/// Format accepted for reference instants
pub const INSTANT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

// Thread-local storage for the last error message
thread_local! {
    static LAST_ERROR: RefCell<Option<CString>> = const { RefCell::new(None) };
}

/// Set the last error message
fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

/// Clear the last error message
fn clear_last_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Helper to convert C string to Rust string
unsafe fn cstr_to_string(ptr: *const c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok().map(|s| s.to_string())
}

/// Helper to convert Rust string to C string (caller must free)
fn string_to_cstr(s: &str) -> *mut c_char {
    match CString::new(s) {
        Ok(cstr) => cstr.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Resolve the reference instant: NULL samples the local clock
unsafe fn resolve_now(now: *const c_char) -> Result<NaiveDateTime, String> {
    if now.is_null() {
        return Ok(Local::now().naive_local());
    }
    let raw = cstr_to_string(now).ok_or_else(|| "Invalid instant string".to_string())?;
    NaiveDateTime::parse_from_str(raw.trim(), INSTANT_FORMAT)
        .map_err(|e| format!("Invalid reference instant '{}': {}", raw, e))
}

// ============================================================================
// Stateless API
// ============================================================================

/// Validate a birth date.
///
/// Returns 0 when valid, 1 when missing or unparseable, 2 when in the future,
/// 3 when more than 130 years old, and -1 when `now` cannot be parsed.
///
/// # Safety
/// - `birth_date` must be NULL or a valid null-terminated C string.
/// - `now` must be NULL or a valid null-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn agecalc_validate_birth_date(
    birth_date: *const c_char,
    now: *const c_char,
) -> i32 {
    clear_last_error();

    let now = match resolve_now(now) {
        Ok(now) => now,
        Err(msg) => {
            set_last_error(&msg);
            return -1;
        }
    };

    let candidate = cstr_to_string(birth_date);
    match validate_birth_date(candidate.as_deref(), now) {
        Ok(()) => 0,
        Err(reason) => {
            set_last_error(&reason.to_string());
            match reason {
                InvalidReason::MissingDate => 1,
                InvalidReason::FutureDate => 2,
                InvalidReason::Unrealistic => 3,
            }
        }
    }
}

/// Compute the age snapshot for a birth date and return it as JSON.
///
/// # Safety
/// - `birth_date` must be a valid null-terminated C string.
/// - `now` must be NULL or a valid null-terminated C string.
/// - Returns a newly allocated string that must be freed with `agecalc_free_string`.
/// - Returns NULL on error; call `agecalc_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn agecalc_snapshot_json(
    birth_date: *const c_char,
    now: *const c_char,
) -> *mut c_char {
    clear_last_error();

    let birth_str = match cstr_to_string(birth_date) {
        Some(s) => s,
        None => {
            set_last_error("Invalid birth date string pointer");
            return ptr::null_mut();
        }
    };

    let now = match resolve_now(now) {
        Ok(now) => now,
        Err(msg) => {
            set_last_error(&msg);
            return ptr::null_mut();
        }
    };

    match age_snapshot_json(&birth_str, now) {
        Ok(json) => string_to_cstr(&json),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

/// Run the anthropometric estimator on a JSON request and return JSON.
///
/// # Safety
/// - `request_json` must be a valid null-terminated C string.
/// - Returns a newly allocated string that must be freed with `agecalc_free_string`.
/// - Returns NULL on error; call `agecalc_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn agecalc_anthropometrics_json(request_json: *const c_char) -> *mut c_char {
    clear_last_error();

    let json_str = match cstr_to_string(request_json) {
        Some(s) => s,
        None => {
            set_last_error("Invalid JSON string pointer");
            return ptr::null_mut();
        }
    };

    match anthropometrics_json(&json_str) {
        Ok(result) => string_to_cstr(&result),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

// ============================================================================
// Render Session API
// ============================================================================

/// Opaque handle to a SnapshotProcessor
pub struct SnapshotProcessorHandle {
    processor: SnapshotProcessor,
}

/// Create a processor for a render session.
///
/// `compact` selects the compact display profile when non-zero.
///
/// # Safety
/// - Returns a pointer to a newly allocated SnapshotProcessor.
/// - Must be freed with `agecalc_processor_free`.
#[no_mangle]
pub unsafe extern "C" fn agecalc_processor_new(compact: i32) -> *mut SnapshotProcessorHandle {
    clear_last_error();

    let config = AgeConfig {
        profile: if compact != 0 {
            DisplayProfile::Compact
        } else {
            DisplayProfile::Desktop
        },
        ..Default::default()
    };

    let handle = Box::new(SnapshotProcessorHandle {
        processor: SnapshotProcessor::with_config(&config),
    });
    Box::into_raw(handle)
}

/// Free a SnapshotProcessor.
///
/// # Safety
/// - `processor` must be a valid pointer returned by `agecalc_processor_new`.
/// - After calling this function, the pointer is invalid.
#[no_mangle]
pub unsafe extern "C" fn agecalc_processor_free(processor: *mut SnapshotProcessorHandle) {
    if !processor.is_null() {
        drop(Box::from_raw(processor));
    }
}

/// Tick interval of the processor's display profile in milliseconds.
///
/// # Safety
/// - `processor` must be a valid pointer returned by `agecalc_processor_new`.
/// - Returns 0 for a NULL processor.
#[no_mangle]
pub unsafe extern "C" fn agecalc_processor_tick_interval_ms(
    processor: *const SnapshotProcessorHandle,
) -> u64 {
    if processor.is_null() {
        return 0;
    }
    (*processor).processor.settings().tick_interval_ms
}

/// Compute one tick and return the encoded frame as JSON.
///
/// # Safety
/// - `processor` must be a valid pointer returned by `agecalc_processor_new`.
/// - `birth_date` must be a valid null-terminated C string.
/// - `now` must be NULL or a valid null-terminated C string.
/// - Returns a newly allocated string that must be freed with `agecalc_free_string`.
/// - Returns NULL on error; call `agecalc_last_error` to get the error message.
#[no_mangle]
pub unsafe extern "C" fn agecalc_processor_tick(
    processor: *const SnapshotProcessorHandle,
    birth_date: *const c_char,
    now: *const c_char,
) -> *mut c_char {
    clear_last_error();

    if processor.is_null() {
        set_last_error("Null processor pointer");
        return ptr::null_mut();
    }

    let birth_str = match cstr_to_string(birth_date) {
        Some(s) => s,
        None => {
            set_last_error("Invalid birth date string pointer");
            return ptr::null_mut();
        }
    };

    let now = match resolve_now(now) {
        Ok(now) => now,
        Err(msg) => {
            set_last_error(&msg);
            return ptr::null_mut();
        }
    };

    match (*processor).processor.process(&birth_str, now) {
        Ok(json) => string_to_cstr(&json),
        Err(e) => {
            set_last_error(&e.to_string());
            ptr::null_mut()
        }
    }
}

// ============================================================================
// Memory Management
// ============================================================================

/// Free a string returned by agecalc.
///
/// # Safety
/// - `ptr` must be a pointer returned by an agecalc function, or NULL.
/// - After calling this function, the pointer is invalid.
#[no_mangle]
pub unsafe extern "C" fn agecalc_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Get the last error message.
///
/// # Safety
/// - Returns a pointer to a thread-local error string.
/// - The returned pointer is valid until the next agecalc call on this thread.
/// - Do NOT free the returned pointer.
/// - Returns NULL if no error occurred.
#[no_mangle]
pub unsafe extern "C" fn agecalc_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match &*e.borrow() {
        Some(cstr) => cstr.as_ptr(),
        None => ptr::null(),
    })
}

/// Get the agecalc library version.
///
/// # Safety
/// - Returns a pointer to a static string. Do NOT free.
#[no_mangle]
pub unsafe extern "C" fn agecalc_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    fn now() -> CString {
        CString::new("2024-06-15T12:00:00").unwrap()
    }

    #[test]
    fn test_ffi_snapshot_json() {
        let birth = CString::new("1990-05-20").unwrap();
        let now = now();

        unsafe {
            let result = agecalc_snapshot_json(birth.as_ptr(), now.as_ptr());
            assert!(!result.is_null());

            let result_str = CStr::from_ptr(result).to_str().unwrap();
            let value: serde_json::Value = serde_json::from_str(result_str).unwrap();
            assert_eq!(value["age"]["years"], 34);
            assert_eq!(value["zodiac"]["name"], "Taurus");

            agecalc_free_string(result);
        }
    }

    #[test]
    fn test_ffi_validation_codes() {
        let now = now();
        let future = CString::new("2030-01-01").unwrap();
        let ancient = CString::new("1800-01-01").unwrap();
        let valid = CString::new("2000-01-01").unwrap();

        unsafe {
            assert_eq!(agecalc_validate_birth_date(valid.as_ptr(), now.as_ptr()), 0);
            assert_eq!(agecalc_validate_birth_date(ptr::null(), now.as_ptr()), 1);
            assert_eq!(agecalc_validate_birth_date(future.as_ptr(), now.as_ptr()), 2);
            assert_eq!(agecalc_validate_birth_date(ancient.as_ptr(), now.as_ptr()), 3);

            let error_str = CStr::from_ptr(agecalc_last_error()).to_str().unwrap();
            assert!(error_str.contains("130 years"));
        }
    }

    #[test]
    fn test_ffi_processor_lifecycle() {
        let birth = CString::new("2000-02-29").unwrap();
        let now = CString::new("2023-03-01T08:00:00").unwrap();

        unsafe {
            let processor = agecalc_processor_new(1);
            assert!(!processor.is_null());
            assert_eq!(agecalc_processor_tick_interval_ms(processor), 2000);

            let result = agecalc_processor_tick(processor, birth.as_ptr(), now.as_ptr());
            assert!(!result.is_null());

            let result_str = CStr::from_ptr(result).to_str().unwrap();
            assert!(result_str.contains("age.snapshot.v1"));

            agecalc_free_string(result);
            agecalc_processor_free(processor);
        }
    }

    #[test]
    fn test_ffi_anthropometrics() {
        let request = CString::new(r#"{"gender":"male","height":180,"weight":75}"#).unwrap();

        unsafe {
            let result = agecalc_anthropometrics_json(request.as_ptr());
            assert!(!result.is_null());
            let result_str = CStr::from_ptr(result).to_str().unwrap();
            assert!(result_str.contains("\"bmi_category\":\"normal\""));
            agecalc_free_string(result);
        }
    }

    #[test]
    fn test_ffi_error_handling() {
        let birth = CString::new("1990-05-20").unwrap();
        let bad_now = CString::new("yesterday").unwrap();
        let missing = CString::new(r#"{"height":180,"weight":75}"#).unwrap();

        unsafe {
            let result = agecalc_snapshot_json(birth.as_ptr(), bad_now.as_ptr());
            assert!(result.is_null());
            let error_str = CStr::from_ptr(agecalc_last_error()).to_str().unwrap();
            assert!(error_str.contains("reference instant"));

            let result = agecalc_anthropometrics_json(missing.as_ptr());
            assert!(result.is_null());
            let error_str = CStr::from_ptr(agecalc_last_error()).to_str().unwrap();
            assert_eq!(error_str, "Missing required field: gender");
        }
    }

    #[test]
    fn test_ffi_version() {
        unsafe {
            let version = agecalc_version();
            assert!(!version.is_null());

            let version_str = CStr::from_ptr(version).to_str().unwrap();
            assert!(!version_str.is_empty());
        }
    }
}
