//! Database models for the storage layer.
//!
//! These types map directly to rows of the `wiki_pages` table and are used
//! for sqlx queries. They convert into the domain [`Page`] from wiki-core.

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use wiki_core::{Page, bracketed};

/// Page columns as selected by every read query.
#[derive(Debug, Clone, FromRow)]
pub struct PageRow {
    pub title: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

impl From<PageRow> for Page {
    fn from(row: PageRow) -> Self {
        Page {
            title: row.title,
            content: row.content,
            updated_at: row.updated_at,
        }
    }
}

/// Escape LIKE pattern metacharacters (`%`, `_` and the `\` escape itself)
/// so user text matches literally.
pub fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// LIKE pattern matching any value that contains `needle` literally.
pub fn contains_pattern(needle: &str) -> String {
    format!("%{}%", escape_like(needle))
}

/// LIKE pattern matching content that contains `[keyword]` literally.
pub fn keyword_pattern(keyword: &str) -> String {
    contains_pattern(&bracketed(keyword))
}
