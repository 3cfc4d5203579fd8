//! Report pipeline: resolve → list following → fetch posts → score.
//!
//! Runs strictly one account at a time. Every failure propagates; an account
//! with no posts is not a failure and is reported without sentiment. Each
//! piece goes to the [`ReportSink`] as soon as it is known, so accounts scored
//! before a failure have already been emitted.

use anyhow::Context;
use tonal_core::entities::{Account, AccountReport};
use tonal_core::handle::Handle;
use tonal_core::responses::FollowingReport;
use tonal_sentiment::{SentimentAggregator, SentimentScorer};
use tonal_twitter::Directory;

use crate::output::ReportSink;
use crate::progress::Progress;

/// Build the sentiment report for every account `handle` follows.
pub async fn run_report<D, S, K>(
    directory: &D,
    scorer: &S,
    handle: &Handle,
    sink: &mut K,
) -> anyhow::Result<FollowingReport>
where
    D: Directory + Sync,
    S: SentimentScorer,
    K: ReportSink,
{
    let user = directory
        .resolve_handle(handle)
        .await
        .with_context(|| format!("failed to resolve @{handle}"))?;
    tracing::info!(%handle, user_id = %user.id, "resolved handle");
    sink.user_resolved(&user.id)?;

    let following = directory
        .following(&user.id)
        .await
        .with_context(|| format!("failed to list accounts followed by @{handle}"))?;
    tracing::info!(count = following.len(), "fetched followed accounts");
    sink.following_listed(following.len())?;

    let aggregator = SentimentAggregator::new(scorer);
    let progress = Progress::bar(following.len() as u64, "scoring followed accounts");
    let scored = score_accounts(directory, &aggregator, following, &progress, sink).await;
    let accounts = match scored {
        Ok(accounts) => {
            progress.finish_clear();
            accounts
        }
        Err(error) => {
            progress.finish_err("failed");
            return Err(error);
        }
    };

    let report = FollowingReport {
        handle: handle.to_string(),
        user_id: user.id,
        following_count: accounts.len(),
        accounts,
        generated_at: chrono::Utc::now(),
    };
    tracing::info!(
        scored = report.scored().count(),
        posts = report.total_posts(),
        "report complete"
    );
    Ok(report)
}

async fn score_accounts<D, S, K>(
    directory: &D,
    aggregator: &SentimentAggregator<&S>,
    following: Vec<Account>,
    progress: &Progress,
    sink: &mut K,
) -> anyhow::Result<Vec<AccountReport>>
where
    D: Directory + Sync,
    S: SentimentScorer,
    K: ReportSink,
{
    let mut reports = Vec::with_capacity(following.len());
    for account in following {
        progress.set_message(&format!("@{}", account.handle));

        let posts = directory
            .recent_posts(&account.id)
            .await
            .with_context(|| format!("failed to fetch tweets for @{}", account.handle))?;
        tracing::debug!(handle = %account.handle, posts = posts.len(), "fetched tweets");

        let handle = account.handle.clone();
        let report = aggregator
            .report(account, &posts)
            .with_context(|| format!("failed to score tweets for @{handle}"))?;
        progress.suspend(|| sink.account_scored(&report))?;
        reports.push(report);
        progress.inc(1);
    }
    Ok(reports)
}
