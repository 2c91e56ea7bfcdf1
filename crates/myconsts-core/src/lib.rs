//! myconsts core crate.
//!
//! Named constants shared by every consumer in the workspace: boolean truth
//! values, operation-status aliases, and the garbage byte used to make
//! uninitialized or freed memory recognizable while debugging.
//!
//! The [`catalog`] module describes the same values as data so tooling (the
//! C-ABI export and the conformance harness) can enumerate them.

pub mod catalog;
pub mod consts;

pub use catalog::{CATALOG, ConstEntry, ConstRole, ConstValue, lookup, status_names};
pub use consts::{ERROR, FAILURE, FALSE, GARBAGE, SUCCESS, TRUE};
