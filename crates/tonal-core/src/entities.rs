//! Directory entities and sentiment values.

use serde::{Deserialize, Serialize};

/// An account on the directory service. Immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    /// Opaque account identifier assigned by the directory.
    pub id: String,
    /// Public username, without the leading `@`.
    pub handle: String,
    /// Free-form display name.
    pub display_name: String,
}

/// A text post authored by an account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub text: String,
}

impl Post {
    /// Build a post from bare text, with an empty id.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            text: text.into(),
        }
    }
}

/// Sentiment of a single post.
///
/// `polarity` lies in `[-1.0, 1.0]` (negative to positive) and
/// `subjectivity` in `[0.0, 1.0]` (factual to opinionated).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SentimentSample {
    pub polarity: f64,
    pub subjectivity: f64,
}

impl SentimentSample {
    /// A sample with no sentiment signal.
    pub const NEUTRAL: Self = Self {
        polarity: 0.0,
        subjectivity: 0.0,
    };

    /// Build a sample, clamping both values into their valid ranges.
    #[must_use]
    pub fn clamped(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }
}

/// Averaged sentiment over one or more posts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MeanSentiment {
    pub mean_polarity: f64,
    pub mean_subjectivity: f64,
}

impl MeanSentiment {
    /// Mean polarity as a whole percentage (`0.333` -> `33`).
    #[must_use]
    pub fn polarity_percent(&self) -> i64 {
        to_percent(self.mean_polarity)
    }

    /// Mean subjectivity as a whole percentage.
    #[must_use]
    pub fn subjectivity_percent(&self) -> i64 {
        to_percent(self.mean_subjectivity)
    }
}

/// Scale a unit value to a whole percentage.
///
/// Rounds the `f64` product `value * 100.0` half away from zero. Exact halves
/// such as `0.125` become `13` (and `-0.125` becomes `-13`), but a decimal like
/// `0.145` whose product lands just below `14.5` in binary becomes `14`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn to_percent(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Sentiment summary for one followed account.
///
/// `sentiment` is `None` exactly when `post_count` is zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccountReport {
    pub account: Account,
    pub post_count: usize,
    pub sentiment: Option<MeanSentiment>,
}

impl AccountReport {
    /// Whether any posts were scored for this account.
    #[must_use]
    pub const fn has_data(&self) -> bool {
        self.sentiment.is_some()
    }
}
