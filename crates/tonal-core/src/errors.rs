//! Cross-cutting error types for Tonal.
//!
//! Domain-specific errors (`TwitterError`, `ScoreError`, `ConfigError`) are
//! defined in their respective crates and converge as `anyhow::Error` in
//! `tonal-cli`.

use thiserror::Error;

/// Errors that can be raised by any Tonal crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
