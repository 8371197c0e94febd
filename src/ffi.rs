//! C Foreign Function Interface (FFI) for the rotator.
//!
//! A handle owns one mounted [`Rotator`]. The host calls
//! `rotating_text_poll` from its own loop to apply timer ticks, and
//! `rotating_text_next` to advance on demand.
//!
//! # Safety
//!
//! All functions that accept pointers require valid pointers obtained from
//! this module (or NULL, which is rejected). Strings returned by
//! `rotating_text_current` are borrowed from the handle and stay valid until
//! the next call that mutates it.
//!
//! # Example (C)
//!
//! ```c
//! const char* texts[] = { "hi there", "stay tuned" };
//! RotatingText* rt = rotating_text_new(texts, 2, 2000, true, true);
//! if (!rt) return 1;
//!
//! rotating_text_next(rt);
//! printf("%s\n", rotating_text_current(rt));   // "stay tuned"
//!
//! rotating_text_destroy(rt);
//! ```

// FFI modules intentionally use unsafe and no_mangle
#![allow(unsafe_code)]
#![allow(unsafe_op_in_unsafe_fn)]
#![allow(clippy::missing_safety_doc)]
#![allow(clippy::not_unsafe_ptr_arg_deref)]

use crate::config::RotatorConfig;
use crate::rotator::Rotator;
use std::ffi::{CStr, CString};
use std::os::raw::{c_char, c_uint};
use std::ptr;
use std::time::Duration;

// =============================================================================
// Opaque Handle Types
// =============================================================================

/// Opaque handle to a mounted rotator.
pub struct RotatingTextHandle {
    rotator: Rotator,
    /// NUL-terminated copies of the phrases, indexed like the rotator's.
    phrases: Vec<CString>,
}

// =============================================================================
// Result Codes
// =============================================================================

/// Result codes for FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotatingTextResult {
    /// Operation succeeded.
    Ok = 0,
    /// Null pointer passed.
    NullPointer = 1,
    /// Invalid UTF-8 string.
    InvalidUtf8 = 2,
    /// Configuration rejected.
    InvalidConfig = 3,
    /// Timer thread could not be started.
    TimerError = 4,
}

// =============================================================================
// Lifecycle
// =============================================================================

/// Create and mount a rotator over `count` NUL-terminated UTF-8 phrases.
///
/// Returns NULL on a null/invalid phrase, an empty list, a zero interval with
/// `auto`, or a timer spawn failure.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rotating_text_new(
    texts: *const *const c_char,
    count: usize,
    interval_ms: u32,
    auto: bool,
    loop_phrases: bool,
) -> *mut RotatingTextHandle {
    match build(texts, count, interval_ms, auto, loop_phrases) {
        Ok(handle) => Box::into_raw(Box::new(handle)),
        Err(code) => {
            log::warn!("rotating_text_new failed: {code:?}");
            ptr::null_mut()
        }
    }
}

unsafe fn build(
    texts: *const *const c_char,
    count: usize,
    interval_ms: u32,
    auto: bool,
    loop_phrases: bool,
) -> Result<RotatingTextHandle, RotatingTextResult> {
    if texts.is_null() && count > 0 {
        return Err(RotatingTextResult::NullPointer);
    }

    let mut phrases = Vec::with_capacity(count);
    for i in 0..count {
        let text = *texts.add(i);
        if text.is_null() {
            return Err(RotatingTextResult::NullPointer);
        }
        let text = CStr::from_ptr(text);
        if text.to_str().is_err() {
            return Err(RotatingTextResult::InvalidUtf8);
        }
        phrases.push(text.to_owned());
    }

    let texts = phrases
        .iter()
        .map(|p| p.to_str().map(str::to_string))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| RotatingTextResult::InvalidUtf8)?;

    let config = RotatorConfig::new(texts)
        .with_auto(auto)
        .with_rotation_interval(Duration::from_millis(u64::from(interval_ms)))
        .with_loop(loop_phrases);
    let mut rotator = Rotator::new(config).map_err(|_| RotatingTextResult::InvalidConfig)?;
    rotator.mount().map_err(|_| RotatingTextResult::TimerError)?;

    Ok(RotatingTextHandle { rotator, phrases })
}

/// Destroy a handle, stopping its timer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rotating_text_destroy(handle: *mut RotatingTextHandle) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

// =============================================================================
// Rotation
// =============================================================================

/// Advance one phrase.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rotating_text_next(handle: *mut RotatingTextHandle) -> RotatingTextResult {
    if handle.is_null() {
        return RotatingTextResult::NullPointer;
    }
    (*handle).rotator.next();
    RotatingTextResult::Ok
}

/// Apply pending timer ticks. Returns the number of rotations applied.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rotating_text_poll(handle: *mut RotatingTextHandle) -> c_uint {
    if handle.is_null() {
        return 0;
    }
    let advanced = (*handle).rotator.poll();
    c_uint::try_from(advanced).unwrap_or(c_uint::MAX)
}

/// Enable or disable automatic rotation.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rotating_text_set_auto(
    handle: *mut RotatingTextHandle,
    auto: bool,
) -> RotatingTextResult {
    if handle.is_null() {
        return RotatingTextResult::NullPointer;
    }
    match (*handle).rotator.set_auto(auto) {
        Ok(()) => RotatingTextResult::Ok,
        Err(crate::Error::Config(_)) => RotatingTextResult::InvalidConfig,
        Err(crate::Error::Timer(_)) => RotatingTextResult::TimerError,
    }
}

/// Current phrase index (0 for NULL).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rotating_text_index(handle: *const RotatingTextHandle) -> usize {
    if handle.is_null() {
        return 0;
    }
    (*handle).rotator.index()
}

/// Current phrase as a borrowed NUL-terminated string (NULL for NULL).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn rotating_text_current(handle: *const RotatingTextHandle) -> *const c_char {
    if handle.is_null() {
        return ptr::null();
    }
    let handle = &*handle;
    handle
        .phrases
        .get(handle.rotator.index())
        .map_or(ptr::null(), |p| p.as_ptr())
}

// =============================================================================
// Version Information
// =============================================================================

/// Get the library version string.
#[unsafe(no_mangle)]
pub extern "C" fn rotating_text_version() -> *const c_char {
    static VERSION: &[u8] = b"0.1.0\0";
    VERSION.as_ptr().cast::<c_char>()
}
