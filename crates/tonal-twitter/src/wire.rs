//! Twitter v2 response envelopes.
//!
//! Every v2 endpoint answers with `{"data": ..., "errors": [...], "meta": {...}}`
//! where `data` may be absent. The envelope keeps both optional so the
//! endpoint modules decide what "absent" means for them.

use serde::Deserialize;
use tonal_core::entities::{Account, Post};

use crate::error::TwitterError;

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<Problem>,
    pub meta: Option<Meta>,
}

/// A v2 problem object, returned alongside or instead of `data`.
#[derive(Debug, Deserialize)]
pub(crate) struct Problem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub detail: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Meta {
    #[serde(default)]
    pub next_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserObject {
    pub id: String,
    pub username: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TweetObject {
    pub id: String,
    pub text: String,
}

impl From<UserObject> for Account {
    fn from(user: UserObject) -> Self {
        Self {
            id: user.id,
            handle: user.username,
            display_name: user.name,
        }
    }
}

impl From<TweetObject> for Post {
    fn from(tweet: TweetObject) -> Self {
        Self {
            id: tweet.id,
            text: tweet.text,
        }
    }
}

impl<T> Envelope<T> {
    /// The first problem as a [`TwitterError::Upstream`], if any.
    pub fn first_problem(&self) -> Option<TwitterError> {
        self.errors.first().map(|p| TwitterError::Upstream {
            title: p.title.clone(),
            detail: p.detail.clone(),
        })
    }

    /// Whether the response says more pages exist.
    pub fn has_more(&self) -> bool {
        self.meta
            .as_ref()
            .and_then(|m| m.next_token.as_ref())
            .is_some()
    }
}
