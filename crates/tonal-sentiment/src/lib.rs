//! # tonal-sentiment
//!
//! Sentiment scoring and aggregation for Tonal.
//!
//! - [`SentimentScorer`] turns one text into a [`SentimentSample`].
//! - [`PatternScorer`] is the built-in lexicon scorer.
//! - [`SentimentAggregator`] averages samples over an account's posts.

mod aggregator;
mod error;
mod lexicon;
mod pattern;

pub use aggregator::{AccountSentiment, SentimentAggregator, aggregate};
pub use error::ScoreError;
pub use pattern::PatternScorer;

use tonal_core::entities::SentimentSample;

/// Scores a single text for polarity and subjectivity.
pub trait SentimentScorer: Send + Sync {
    /// Score `text`.
    ///
    /// # Errors
    ///
    /// Returns [`ScoreError`] when the text cannot be scored.
    fn score(&self, text: &str) -> Result<SentimentSample, ScoreError>;
}

impl<S: SentimentScorer + ?Sized> SentimentScorer for &S {
    fn score(&self, text: &str) -> Result<SentimentSample, ScoreError> {
        (**self).score(text)
    }
}
