//! Report types emitted by the `tonal` binary.
//!
//! The text renderer and the JSON output formats both read from
//! [`FollowingReport`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::AccountReport;

/// Sentiment of every account followed by one user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FollowingReport {
    /// Handle the run was started with.
    pub handle: String,
    /// Resolved id of `handle`.
    pub user_id: String,
    /// Number of followed accounts returned by the directory.
    pub following_count: usize,
    /// One entry per followed account, in directory order.
    pub accounts: Vec<AccountReport>,
    pub generated_at: DateTime<Utc>,
}

impl FollowingReport {
    /// Accounts that had at least one scored post.
    pub fn scored(&self) -> impl Iterator<Item = &AccountReport> {
        self.accounts.iter().filter(|report| report.has_data())
    }

    /// Total number of posts scored across all accounts.
    #[must_use]
    pub fn total_posts(&self) -> usize {
        self.accounts.iter().map(|report| report.post_count).sum()
    }
}
