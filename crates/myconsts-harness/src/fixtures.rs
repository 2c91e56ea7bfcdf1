//! Fixture loading and management.

use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::HarnessError;

/// What a fixture case asserts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// The constant's C-int value.
    Value,
    /// `constant == !operand`.
    Negation,
    /// `constant` and `operand` hold the same value.
    Alias,
}

impl CheckKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Negation => "negation",
            Self::Alias => "alias",
        }
    }
}

/// A single fixture test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    pub check: CheckKind,
    /// Constant under test.
    pub constant: String,
    /// Second constant for relation checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operand: Option<String>,
    /// Expected rendered output.
    pub expected_output: String,
}

/// A collection of fixture cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    /// Hex SHA-256 over the compact JSON of `cases`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string.
    pub fn from_json(json: &str) -> Result<Self, HarnessError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize fixture set to pretty JSON.
    pub fn to_json(&self) -> Result<String, HarnessError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Write the fixture set as pretty JSON with a trailing newline.
    pub fn write_file(&self, path: &Path) -> Result<(), HarnessError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let mut json = self.to_json()?;
        json.push('\n');
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Lowercase hex SHA-256 of the compact JSON encoding of `cases`.
    pub fn compute_digest(&self) -> Result<String, HarnessError> {
        let bytes = serde_json::to_vec(&self.cases)?;
        let hash = Sha256::digest(&bytes);
        Ok(hash.iter().map(|b| format!("{b:02x}")).collect())
    }

    /// Check the recorded digest, if any. A fixture without one is accepted.
    pub fn verify_digest(&self) -> Result<(), HarnessError> {
        let Some(recorded) = &self.digest else {
            return Ok(());
        };
        let computed = self.compute_digest()?;
        if !recorded.eq_ignore_ascii_case(&computed) {
            return Err(HarnessError::DigestMismatch {
                recorded: recorded.clone(),
                computed,
            });
        }
        Ok(())
    }

    /// Recompute and store the digest.
    pub fn seal(&mut self) -> Result<(), HarnessError> {
        self.digest = Some(self.compute_digest()?);
        Ok(())
    }
}
