// Every extern "C" export takes raw pointers from C callers and checks them
// itself, so per-function safety docs would only repeat the module docs.
#![allow(clippy::missing_safety_doc)]
//! # myconsts-abi
//!
//! C ABI boundary for the myconsts constants.
//!
//! This crate produces a `cdylib` (`libmyconsts.so`) so C translation units can
//! link the values instead of textually including a header. Every value comes
//! from `myconsts-core`; nothing here redefines them.
//!
//! ```text
//! C caller -> MYCONSTS_* static / myconsts_* fn (this crate) -> myconsts-core
//! ```
//!
//! Status-returning functions never unwind across the boundary: they report
//! `MYCONSTS_SUCCESS` or `MYCONSTS_ERROR`.

use std::ffi::{CStr, c_char, c_int, c_uchar};

use myconsts_core::consts;

/// C view of [`consts::TRUE`].
#[unsafe(no_mangle)]
pub static MYCONSTS_TRUE: c_int = consts::TRUE as c_int;

/// C view of [`consts::FALSE`].
#[unsafe(no_mangle)]
pub static MYCONSTS_FALSE: c_int = consts::FALSE as c_int;

/// C view of [`consts::ERROR`].
#[unsafe(no_mangle)]
pub static MYCONSTS_ERROR: c_int = consts::ERROR as c_int;

/// C view of [`consts::SUCCESS`].
#[unsafe(no_mangle)]
pub static MYCONSTS_SUCCESS: c_int = consts::SUCCESS as c_int;

/// C view of [`consts::FAILURE`].
#[unsafe(no_mangle)]
pub static MYCONSTS_FAILURE: c_int = consts::FAILURE as c_int;

/// C view of [`consts::GARBAGE`].
#[unsafe(no_mangle)]
pub static MYCONSTS_GARBAGE: c_uchar = consts::GARBAGE;

/// Resolve a constant by name.
///
/// Writes the value (as a C `int`) to `out` and returns `MYCONSTS_SUCCESS`.
/// Returns `MYCONSTS_ERROR` and leaves `out` untouched when either pointer is
/// null, the name is not UTF-8, or no constant has that name.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn myconsts_lookup(name: *const c_char, out: *mut c_int) -> c_int {
    if name.is_null() || out.is_null() {
        return MYCONSTS_ERROR;
    }

    // SAFETY: non-null; caller guarantees a NUL-terminated string.
    let name = unsafe { CStr::from_ptr(name) };
    let Ok(name) = name.to_str() else {
        return MYCONSTS_ERROR;
    };
    let Some(entry) = myconsts_core::lookup(name) else {
        return MYCONSTS_ERROR;
    };

    // SAFETY: non-null; caller guarantees `out` is writable.
    unsafe { out.write(entry.value.as_c_int()) };
    MYCONSTS_SUCCESS
}

/// Returns `MYCONSTS_TRUE` if `byte` is the debug fill pattern.
#[unsafe(no_mangle)]
pub extern "C" fn myconsts_is_garbage(byte: c_uchar) -> c_int {
    if byte == consts::GARBAGE {
        MYCONSTS_TRUE
    } else {
        MYCONSTS_FALSE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statics_match_core() {
        assert_eq!(MYCONSTS_TRUE, 1);
        assert_eq!(MYCONSTS_FALSE, 0);
        assert_eq!(MYCONSTS_SUCCESS, MYCONSTS_TRUE);
        assert_eq!(MYCONSTS_ERROR, MYCONSTS_FALSE);
        assert_eq!(MYCONSTS_FAILURE, MYCONSTS_FALSE);
        assert_eq!(MYCONSTS_GARBAGE, 0xA3);
    }

    #[test]
    fn lookup_null_name_is_error() {
        let mut out: c_int = -1;
        // SAFETY: null name is handled; out is a valid local.
        let rc = unsafe { myconsts_lookup(std::ptr::null(), &mut out) };
        assert_eq!(rc, MYCONSTS_ERROR);
        assert_eq!(out, -1);
    }

    #[test]
    fn is_garbage_only_for_a3() {
        assert_eq!(myconsts_is_garbage(0xA3), MYCONSTS_TRUE);
        assert_eq!(myconsts_is_garbage(0x00), MYCONSTS_FALSE);
        assert_eq!(myconsts_is_garbage(0xFF), MYCONSTS_FALSE);
    }
}
