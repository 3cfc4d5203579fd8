//! # tonal-twitter
//!
//! Directory service for Tonal, backed by the Twitter v2 REST API.
//!
//! Three lookups are needed, each a single request:
//! - resolve a handle to an account (`/2/users/by/username/{handle}`)
//! - list accounts a user follows (`/2/users/{id}/following`)
//! - list a user's recent tweets (`/2/users/{id}/tweets`)
//!
//! Pagination tokens are never followed and rate limits are reported, not retried.

mod error;
mod http;
mod tweets;
mod users;
mod wire;

pub use error::TwitterError;

use std::future::Future;
use std::time::Duration;

use tonal_config::TwitterConfig;
use tonal_core::entities::{Account, Post};
use tonal_core::handle::Handle;

// ── Directory ──────────────────────────────────────────────────────

/// Account and post lookups the report pipeline depends on.
pub trait Directory {
    /// Resolve a handle to its account.
    fn resolve_handle(
        &self,
        handle: &Handle,
    ) -> impl Future<Output = Result<Account, TwitterError>> + Send;

    /// Accounts followed by `user_id` (first page only).
    fn following(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<Account>, TwitterError>> + Send;

    /// Recent posts authored by `user_id` (first page only). An account with
    /// no visible posts yields an empty list.
    fn recent_posts(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<Post>, TwitterError>> + Send;
}

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the Twitter v2 API using app-only bearer auth.
pub struct TwitterClient {
    http: reqwest::Client,
    base_url: String,
    bearer_token: String,
    following_page_size: u32,
    timeline_page_size: u32,
}

impl TwitterClient {
    /// Build a client from validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TwitterError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: &TwitterConfig, bearer_token: &str) -> Result<Self, TwitterError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("tonal/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url().to_string(),
            bearer_token: bearer_token.to_string(),
            following_page_size: config.following_page_size,
            timeline_page_size: config.timeline_page_size,
        })
    }

    /// Build a versioned endpoint URL, e.g. `endpoint("users/123/tweets")`.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/2/{path}", self.base_url)
    }

    /// Authenticated GET.
    async fn get(&self, url: &str) -> Result<reqwest::Response, TwitterError> {
        tracing::debug!(url, "GET");
        let resp = self
            .http
            .get(url)
            .bearer_auth(&self.bearer_token)
            .send()
            .await?;
        http::check_response(resp).await
    }
}

impl Directory for TwitterClient {
    async fn resolve_handle(&self, handle: &Handle) -> Result<Account, TwitterError> {
        self.get_user_by_username(handle).await
    }

    async fn following(&self, user_id: &str) -> Result<Vec<Account>, TwitterError> {
        self.get_following(user_id).await
    }

    async fn recent_posts(&self, user_id: &str) -> Result<Vec<Post>, TwitterError> {
        self.get_user_tweets(user_id).await
    }
}
