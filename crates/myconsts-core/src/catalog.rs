//! Static description of every exported constant.

use std::fmt;

use crate::consts::{ERROR, FAILURE, FALSE, GARBAGE, SUCCESS, TRUE};

/// Value carried by a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstValue {
    /// Truth or status value.
    Bool(bool),
    /// Single unsigned byte.
    Byte(u8),
}

impl ConstValue {
    /// Value as seen by C code: booleans become 1/0, bytes stay 0..=255.
    #[must_use]
    pub const fn as_c_int(self) -> i32 {
        match self {
            Self::Bool(b) => b as i32,
            Self::Byte(b) => b as i32,
        }
    }

    /// Returns the boolean, or `None` for byte values.
    #[must_use]
    pub const fn as_bool(self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(b),
            Self::Byte(_) => None,
        }
    }
}

impl fmt::Display for ConstValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_c_int())
    }
}

/// What a constant is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstRole {
    /// `TRUE` / `FALSE`.
    Truth,
    /// Operation-result alias of a truth value.
    Status,
    /// Memory-debugging fill pattern.
    DebugFill,
}

impl ConstRole {
    /// Stable lowercase name used in fixtures and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Truth => "truth",
            Self::Status => "status",
            Self::DebugFill => "debug_fill",
        }
    }
}

/// One row of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstEntry {
    /// Exported name.
    pub name: &'static str,
    /// Bound value.
    pub value: ConstValue,
    /// Purpose of the constant.
    pub role: ConstRole,
    /// Constant this one is defined in terms of, if any.
    pub aliases: Option<&'static str>,
    /// One-line description.
    pub summary: &'static str,
}

/// All constants, in declaration order.
pub static CATALOG: [ConstEntry; 6] = [
    ConstEntry {
        name: "TRUE",
        value: ConstValue::Bool(TRUE),
        role: ConstRole::Truth,
        aliases: None,
        summary: "logical truth",
    },
    ConstEntry {
        name: "FALSE",
        value: ConstValue::Bool(FALSE),
        role: ConstRole::Truth,
        aliases: Some("TRUE"),
        summary: "logical negation of TRUE",
    },
    ConstEntry {
        name: "ERROR",
        value: ConstValue::Bool(ERROR),
        role: ConstRole::Status,
        aliases: Some("FALSE"),
        summary: "operation did not succeed",
    },
    ConstEntry {
        name: "SUCCESS",
        value: ConstValue::Bool(SUCCESS),
        role: ConstRole::Status,
        aliases: Some("TRUE"),
        summary: "operation completed normally",
    },
    ConstEntry {
        name: "FAILURE",
        value: ConstValue::Bool(FAILURE),
        role: ConstRole::Status,
        aliases: Some("FALSE"),
        summary: "operation did not succeed (same as ERROR)",
    },
    ConstEntry {
        name: "GARBAGE",
        value: ConstValue::Byte(GARBAGE),
        role: ConstRole::DebugFill,
        aliases: None,
        summary: "fill byte for uninitialized or freed memory",
    },
];

/// Find a constant by exact (case-sensitive) name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static ConstEntry> {
    CATALOG.iter().find(|entry| entry.name == name)
}

/// Every status alias bound to `value`, in catalog order.
#[must_use]
pub fn status_names(value: bool) -> Vec<&'static str> {
    CATALOG
        .iter()
        .filter(|entry| entry.role == ConstRole::Status)
        .filter(|entry| entry.value == ConstValue::Bool(value))
        .map(|entry| entry.name)
        .collect()
}
