//! Core data types for Token Wiki.
//!
//! A wiki is partitioned by [`Token`]: every page belongs to exactly one
//! token namespace, and a page is addressed by `(token, title)`. The token is
//! an opaque namespace key handed out to a browser or CLI user. It is not a
//! credential and grants nothing beyond selecting a namespace.

use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Number of random bytes in a generated token (22 URL-safe characters).
pub const TOKEN_BYTES: usize = 16;

// ============================================================================
// Token
// ============================================================================

/// Opaque namespace key partitioning pages.
///
/// Any non-blank string is accepted. Clients that have no token yet get one
/// from [`Token::generate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Token(String);

impl Token {
    /// Wraps a client-supplied token, rejecting blank values.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::EmptyToken);
        }
        Ok(Self(value))
    }

    /// Generates a fresh random token.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = [0u8; TOKEN_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(URL_SAFE_NO_PAD.encode(bytes))
    }

    /// Returns the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Token {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Token {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Page
// ============================================================================

/// A stored page: the `(token, title) -> (content, updated_at)` record seen
/// from inside one token namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Title, unique within the token namespace.
    pub title: String,
    /// Freeform text, possibly containing `[keyword]` links.
    pub content: String,
    /// Time of the last create or update.
    pub updated_at: DateTime<Utc>,
}

impl Page {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            updated_at,
        }
    }
}

/// Returns true if the page matches a free-text listing query.
///
/// The comparison is a case-insensitive substring match against both title
/// and content. An empty query matches everything; whitespace is matched
/// literally like any other character.
#[must_use]
pub fn matches_query(page: &Page, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    page.title.to_lowercase().contains(&needle) || page.content.to_lowercase().contains(&needle)
}

// ============================================================================
// Validation
// ============================================================================

/// Input rejected before it reaches storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Content was empty or whitespace-only.
    #[error("content is empty")]
    EmptyContent,

    /// Token was empty or whitespace-only.
    #[error("token is empty")]
    EmptyToken,
}

/// Checks that page content is non-blank.
pub fn validate_content(content: &str) -> Result<(), ValidationError> {
    if content.trim().is_empty() {
        Err(ValidationError::EmptyContent)
    } else {
        Ok(())
    }
}
