//! Integration test: C ABI lookup contract.
//!
//! Calls the exported functions the way a C caller would (NUL-terminated
//! strings, out-pointers) and checks every value against `myconsts-core`.
//!
//! Run: cargo test -p myconsts-abi --test abi_lookup_contract_test

use std::ffi::{CString, c_int};

use myconsts::{
    MYCONSTS_ERROR, MYCONSTS_FAILURE, MYCONSTS_FALSE, MYCONSTS_GARBAGE, MYCONSTS_SUCCESS,
    MYCONSTS_TRUE, myconsts_is_garbage, myconsts_lookup,
};
use myconsts_core::CATALOG;

fn lookup(name: &str) -> (c_int, c_int) {
    let name = CString::new(name).unwrap();
    let mut out: c_int = -1;
    // SAFETY: both pointers are valid for the duration of the call.
    let rc = unsafe { myconsts_lookup(name.as_ptr(), &mut out) };
    (rc, out)
}

#[test]
fn every_catalog_entry_resolves() {
    for entry in CATALOG.iter() {
        let (rc, out) = lookup(entry.name);
        assert_eq!(rc, MYCONSTS_SUCCESS, "{} should resolve", entry.name);
        assert_eq!(out, entry.value.as_c_int(), "{} value", entry.name);
    }
}

#[test]
fn exported_statics_agree_with_rust_constants() {
    assert_eq!(MYCONSTS_TRUE, c_int::from(myconsts_core::TRUE));
    assert_eq!(MYCONSTS_FALSE, c_int::from(myconsts_core::FALSE));
    assert_eq!(MYCONSTS_ERROR, c_int::from(myconsts_core::ERROR));
    assert_eq!(MYCONSTS_SUCCESS, c_int::from(myconsts_core::SUCCESS));
    assert_eq!(MYCONSTS_FAILURE, c_int::from(myconsts_core::FAILURE));
    assert_eq!(MYCONSTS_GARBAGE, myconsts_core::GARBAGE);
}

#[test]
fn unknown_and_miscased_names_are_errors() {
    for name in ["", "true", "Garbage", "NULL", "TRUE "] {
        let (rc, out) = lookup(name);
        assert_eq!(rc, MYCONSTS_ERROR, "{name:?} must not resolve");
        assert_eq!(out, -1, "out must be untouched for {name:?}");
    }
}

#[test]
fn null_out_pointer_is_error() {
    let name = CString::new("TRUE").unwrap();
    // SAFETY: null out pointer is rejected before any write.
    let rc = unsafe { myconsts_lookup(name.as_ptr(), std::ptr::null_mut()) };
    assert_eq!(rc, MYCONSTS_ERROR);
}

#[test]
fn non_utf8_name_is_error() {
    let name = CString::new(vec![0xC3, 0x28]).unwrap();
    let mut out: c_int = 7;
    // SAFETY: valid NUL-terminated buffer and writable out.
    let rc = unsafe { myconsts_lookup(name.as_ptr(), &mut out) };
    assert_eq!(rc, MYCONSTS_ERROR);
    assert_eq!(out, 7);
}

#[test]
fn garbage_predicate_scans_a_poisoned_buffer() {
    let buf = [0xA3u8, 0xA3, 0x00, 0xA3];
    let hits: Vec<_> = buf
        .iter()
        .map(|&b| myconsts_is_garbage(b) == MYCONSTS_TRUE)
        .collect();
    assert_eq!(hits, [true, true, false, true]);
}
