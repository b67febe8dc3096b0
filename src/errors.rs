//! Structured error types for the roicast boundary.
//!
//! The calculation core itself is infallible over its typed inputs; errors
//! arise only at the edges: reading case files, precondition checks,
//! config parsing, report storage. Seams use `anyhow::Result`, with these
//! types supplying the categories worth matching on.

use std::path::PathBuf;
use thiserror::Error;

/// One failed precondition on a case file's numeric inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreconditionViolation {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for PreconditionViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Error)]
pub enum RoicastError {
    /// Numeric precondition failures, accumulated so the caller sees every
    /// problem at once instead of fixing them one round-trip at a time.
    #[error("invalid inputs: {}", format_violations(.0))]
    Validation(Vec<PreconditionViolation>),

    /// Case file could not be read or parsed (includes unrecognized
    /// categorical values, which serde rejects).
    #[error("failed to load case file {path}: {message}")]
    CaseFile { path: PathBuf, message: String },

    /// Report store failures (write, read, or malformed stored report).
    #[error("report store error: {0}")]
    Storage(String),
}

fn format_violations(violations: &[PreconditionViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl RoicastError {
    pub fn case_file(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        RoicastError::CaseFile {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        RoicastError::Storage(message.into())
    }
}
