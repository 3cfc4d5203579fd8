//! Validated account handles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Longest handle the directory accepts.
pub const MAX_HANDLE_LEN: usize = 15;

/// A public account username, stored without the leading `@`.
///
/// Handles are 1 to 15 ASCII letters, digits, or underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Handle(String);

impl Handle {
    /// Parse a handle, accepting an optional leading `@`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the handle is empty, too long, or
    /// contains characters outside `[A-Za-z0-9_]`.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        let bare = trimmed.strip_prefix('@').unwrap_or(trimmed);

        if bare.is_empty() {
            return Err(CoreError::Validation("handle is empty".to_string()));
        }
        if bare.len() > MAX_HANDLE_LEN {
            return Err(CoreError::Validation(format!(
                "handle '{bare}' is longer than {MAX_HANDLE_LEN} characters"
            )));
        }
        if let Some(bad) = bare
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '_'))
        {
            return Err(CoreError::Validation(format!(
                "handle '{bare}' contains invalid character '{bad}'"
            )));
        }

        Ok(Self(bare.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Handle {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Handle {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Handle> for String {
    fn from(handle: Handle) -> Self {
        handle.0
    }
}

impl AsRef<str> for Handle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
