//! Truth, status, and debug-fill constants.
//!
//! Declared unconditionally: the module system already guarantees a single
//! definition no matter how many crates or modules import these names.

/// Logical truth.
pub const TRUE: bool = 1 == 1;

/// Logical falsehood. Always the negation of [`TRUE`].
pub const FALSE: bool = !TRUE;

/// Operation did not succeed.
///
/// Same value as [`FAILURE`]. The two names carry no distinct meaning and are
/// candidates for consolidation.
pub const ERROR: bool = FALSE;

/// Operation completed normally.
pub const SUCCESS: bool = TRUE;

/// Operation did not succeed. See [`ERROR`].
pub const FAILURE: bool = FALSE;

/// Fill byte for memory debugging.
///
/// Written into freed or not-yet-initialized storage so stray reads show up
/// as a recognizable `0xA3` pattern instead of plausible data.
pub const GARBAGE: u8 = 0xA3;

const _: () = assert!(FALSE == !TRUE);
const _: () = assert!(ERROR == FALSE && FAILURE == FALSE);
const _: () = assert!(SUCCESS == TRUE);
// Must not look like zeroed or all-ones memory.
const _: () = assert!(GARBAGE != 0x00 && GARBAGE != 0xFF);
