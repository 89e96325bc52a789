//! Cross-cutting error types for Scout.
//!
//! Crate-specific errors (`SourceError`, `ResearchError`, `ConfigError`) live
//! in their own crates and converge in `scout-cli` through `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any Scout crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A run phase transition was attempted that is not allowed.
    #[error("Invalid phase transition: from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    /// A string could not be parsed into one of the known values.
    #[error("Unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownValue {
        kind: &'static str,
        value: String,
        expected: String,
    },
}
