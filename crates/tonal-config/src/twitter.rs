//! Twitter API configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Environment variable holding the bearer credential.
pub const BEARER_TOKEN_ENV: &str = "TWITTER_BEARER_TOKEN";

/// Upper bound the following endpoint accepts for `max_results`.
pub const MAX_FOLLOWING_PAGE_SIZE: u32 = 1000;

/// Bounds the user timeline endpoint accepts for `max_results`.
pub const MIN_TIMELINE_PAGE_SIZE: u32 = 5;
pub const MAX_TIMELINE_PAGE_SIZE: u32 = 100;

/// Default Twitter API base URL.
fn default_api_url() -> String {
    String::from("https://api.twitter.com")
}

const fn default_following_page_size() -> u32 {
    MAX_FOLLOWING_PAGE_SIZE
}

const fn default_timeline_page_size() -> u32 {
    MAX_TIMELINE_PAGE_SIZE
}

/// Default per-request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Clone, Deserialize, Serialize)]
pub struct TwitterConfig {
    /// App-only bearer token sent as `Authorization: Bearer <token>`.
    #[serde(default)]
    pub bearer_token: String,

    /// API base URL, without a trailing `/2`.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// `max_results` for the single following page.
    #[serde(default = "default_following_page_size")]
    pub following_page_size: u32,

    /// `max_results` for the single timeline page per followed account.
    #[serde(default = "default_timeline_page_size")]
    pub timeline_page_size: u32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for TwitterConfig {
    fn default() -> Self {
        Self {
            bearer_token: String::new(),
            api_url: default_api_url(),
            following_page_size: default_following_page_size(),
            timeline_page_size: default_timeline_page_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl fmt::Debug for TwitterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.bearer_token.is_empty() {
            "<unset>"
        } else {
            "<redacted>"
        };
        f.debug_struct("TwitterConfig")
            .field("bearer_token", &token)
            .field("api_url", &self.api_url)
            .field("following_page_size", &self.following_page_size)
            .field("timeline_page_size", &self.timeline_page_size)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl TwitterConfig {
    /// Check if a bearer token is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.bearer_token.trim().is_empty()
    }

    /// Return the bearer token, or fail before any request is attempted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when no token was found in any source.
    pub fn require_token(&self) -> Result<&str, ConfigError> {
        if self.is_configured() {
            Ok(self.bearer_token.trim())
        } else {
            Err(ConfigError::NotConfigured {
                section: "twitter".to_string(),
                hint: format!(
                    "bearer token not set (export {BEARER_TOKEN_ENV} or set twitter.bearer_token)"
                ),
            })
        }
    }

    /// Check value ranges and URL shape.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.api_url.starts_with("https://") || self.api_url.starts_with("http://")) {
            return Err(invalid("twitter.api_url", "must start with http:// or https://"));
        }
        if !(1..=MAX_FOLLOWING_PAGE_SIZE).contains(&self.following_page_size) {
            return Err(invalid(
                "twitter.following_page_size",
                &format!("must be between 1 and {MAX_FOLLOWING_PAGE_SIZE}"),
            ));
        }
        if !(MIN_TIMELINE_PAGE_SIZE..=MAX_TIMELINE_PAGE_SIZE).contains(&self.timeline_page_size) {
            return Err(invalid(
                "twitter.timeline_page_size",
                &format!("must be between {MIN_TIMELINE_PAGE_SIZE} and {MAX_TIMELINE_PAGE_SIZE}"),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(invalid("twitter.timeout_secs", "must be greater than zero"));
        }
        Ok(())
    }

    /// Base URL with any trailing slash removed.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
