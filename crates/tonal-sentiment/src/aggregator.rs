//! Per-account sentiment averaging.

use tonal_core::entities::{Account, AccountReport, MeanSentiment, Post, SentimentSample};

use crate::{ScoreError, SentimentScorer};

/// Result of aggregating one account's posts.
///
/// `sentiment` is `None` exactly when `post_count` is zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccountSentiment {
    pub post_count: usize,
    pub sentiment: Option<MeanSentiment>,
}

/// Running sums over scored posts.
#[derive(Debug, Default, Clone, Copy)]
struct Totals {
    polarity: f64,
    subjectivity: f64,
    count: usize,
}

impl Totals {
    fn push(&mut self, sample: SentimentSample) {
        self.polarity += sample.polarity;
        self.subjectivity += sample.subjectivity;
        self.count += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    fn finish(self) -> AccountSentiment {
        let sentiment = (self.count > 0).then(|| {
            let n = self.count as f64;
            MeanSentiment {
                mean_polarity: self.polarity / n,
                mean_subjectivity: self.subjectivity / n,
            }
        });
        AccountSentiment {
            post_count: self.count,
            sentiment,
        }
    }
}

/// Score every post once, in order, and average the samples.
///
/// An empty slice yields `post_count == 0` and no sentiment.
///
/// # Errors
///
/// Returns the first [`ScoreError`] raised by `scorer`; later posts are not scored.
pub fn aggregate<S: SentimentScorer + ?Sized>(
    scorer: &S,
    posts: &[Post],
) -> Result<AccountSentiment, ScoreError> {
    let mut totals = Totals::default();
    for post in posts {
        totals.push(scorer.score(&post.text)?);
    }
    Ok(totals.finish())
}

/// Binds a scorer to the aggregation step.
pub struct SentimentAggregator<S> {
    scorer: S,
}

impl<S: SentimentScorer> SentimentAggregator<S> {
    #[must_use]
    pub const fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// See [`aggregate`].
    ///
    /// # Errors
    ///
    /// Returns the first [`ScoreError`] raised by the scorer.
    pub fn aggregate(&self, posts: &[Post]) -> Result<AccountSentiment, ScoreError> {
        aggregate(&self.scorer, posts)
    }

    /// Aggregate `posts` and attach the result to `account`.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScoreError`] raised by the scorer.
    pub fn report(&self, account: Account, posts: &[Post]) -> Result<AccountReport, ScoreError> {
        let AccountSentiment {
            post_count,
            sentiment,
        } = self.aggregate(posts)?;
        tracing::debug!(handle = %account.handle, post_count, "aggregated account sentiment");
        Ok(AccountReport {
            account,
            post_count,
            sentiment,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    /// Looks each text up in a fixed table.
    struct TableScorer(HashMap<&'static str, SentimentSample>);

    impl TableScorer {
        fn polarities(entries: &[(&'static str, f64)]) -> Self {
            Self(
                entries
                    .iter()
                    .map(|(text, p)| {
                        (
                            *text,
                            SentimentSample {
                                polarity: *p,
                                subjectivity: 0.5,
                            },
                        )
                    })
                    .collect(),
            )
        }
    }

    impl SentimentScorer for TableScorer {
        fn score(&self, text: &str) -> Result<SentimentSample, ScoreError> {
            self.0
                .get(text)
                .copied()
                .ok_or_else(|| ScoreError::Scorer(format!("unknown text {text:?}")))
        }
    }

    /// Counts calls and rejects empty text.
    #[derive(Default)]
    struct CountingScorer {
        calls: AtomicUsize,
    }

    impl SentimentScorer for CountingScorer {
        fn score(&self, text: &str) -> Result<SentimentSample, ScoreError> {
            self.calls.fetch_add(1, Ordering::Relaxed);
            if text.is_empty() {
                return Err(ScoreError::EmptyText);
            }
            Ok(SentimentSample {
                polarity: 0.0,
                subjectivity: 0.0,
            })
        }
    }

    fn posts(texts: &[&str]) -> Vec<Post> {
        texts.iter().map(|t| Post::from_text(*t)).collect()
    }

    #[test]
    fn mean_of_known_polarities() {
        let scorer = TableScorer::polarities(&[("a", 0.5), ("b", -0.5), ("c", 1.0)]);
        let result = aggregate(&scorer, &posts(&["a", "b", "c"])).unwrap();

        assert_eq!(result.post_count, 3);
        let mean = result.sentiment.unwrap();
        assert!((mean.mean_polarity - 1.0 / 3.0).abs() < 1e-9);
        assert!((mean.mean_subjectivity - 0.5).abs() < 1e-9);
        assert_eq!(mean.polarity_percent(), 33);
    }

    #[rstest]
    #[case(1.0, 100)]
    #[case(-1.0, -100)]
    #[case(0.0, 0)]
    fn uniform_polarity_is_preserved(#[case] polarity: f64, #[case] percent: i64) {
        let scorer = TableScorer::polarities(&[("same", polarity)]);
        let result = aggregate(&scorer, &posts(&["same"; 7])).unwrap();
        let mean = result.sentiment.unwrap();
        assert!((mean.mean_polarity - polarity).abs() < 1e-12);
        assert_eq!(mean.polarity_percent(), percent);
    }

    #[test]
    fn empty_posts_produce_no_data() {
        let scorer = TableScorer::polarities(&[]);
        let result = aggregate(&scorer, &[]).unwrap();
        assert_eq!(
            result,
            AccountSentiment {
                post_count: 0,
                sentiment: None,
            }
        );
    }

    #[test]
    fn scorer_error_stops_aggregation() {
        let scorer = CountingScorer::default();
        let err = aggregate(&scorer, &posts(&["fine", "", "never scored"])).unwrap_err();
        assert_eq!(err, ScoreError::EmptyText);
        assert_eq!(scorer.calls.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn scorer_called_once_per_post() {
        let scorer = CountingScorer::default();
        aggregate(&scorer, &posts(&["a", "b", "c", "d"])).unwrap();
        assert_eq!(scorer.calls.load(Ordering::Relaxed), 4);
    }

    #[test]
    fn report_attaches_account() {
        let aggregator =
            SentimentAggregator::new(TableScorer::polarities(&[("x", 0.25), ("y", 0.75)]));
        let account = Account {
            id: "9".into(),
            handle: "someone".into(),
            display_name: "Some One".into(),
        };
        let report = aggregator.report(account.clone(), &posts(&["x", "y"])).unwrap();
        assert_eq!(report.account, account);
        assert_eq!(report.post_count, 2);
        assert_eq!(report.sentiment.unwrap().polarity_percent(), 50);
    }
}
