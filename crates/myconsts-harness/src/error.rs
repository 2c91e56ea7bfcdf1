//! Harness error type.

use thiserror::Error;

use crate::structured_log::LogValidationError;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("fixture digest mismatch: recorded {recorded}, computed {computed}")]
    DigestMismatch { recorded: String, computed: String },
    #[error("unknown constant '{0}'")]
    UnknownConstant(String),
    #[error("case '{0}' requires an operand")]
    MissingOperand(String),
    #[error("constant '{0}' is not boolean")]
    NotBoolean(String),
    #[error("{} invalid log line(s)", .0.len())]
    InvalidLog(Vec<LogValidationError>),
}
