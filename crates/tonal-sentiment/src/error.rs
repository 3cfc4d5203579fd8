//! Scoring error types.

use thiserror::Error;

/// Errors raised while scoring a post.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreError {
    /// The text is empty or only whitespace.
    #[error("cannot score empty text")]
    EmptyText,

    /// A scorer implementation failed for its own reasons.
    #[error("scorer failed: {0}")]
    Scorer(String),
}
