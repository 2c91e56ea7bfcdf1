//! Conformance testing harness for myconsts.
//!
//! This crate provides:
//! - Fixture capture: record the constant catalog as JSON reference data
//! - Fixture verify: evaluate captured cases against the current build
//! - Structured JSONL logging for verification runs
//! - Report generation: markdown + machine-readable summaries

#![forbid(unsafe_code)]

pub mod capture;
pub mod diff;
pub mod error;
pub mod evaluate;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;

pub use error::HarnessError;
pub use fixtures::{CheckKind, FixtureCase, FixtureSet};
pub use report::{ConformanceReport, VerificationResult, VerificationSummary};
pub use runner::TestRunner;
