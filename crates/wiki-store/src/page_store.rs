//! The page storage seam.
//!
//! [`PageStore`] is the low-level `(token, title) -> (content, updated_at)`
//! mapping. Implementations do not validate input or read the clock; both
//! are the [`Repository`](crate::Repository)'s job. Every method is scoped to
//! one token and is a single atomic unit against the backing store.
//!
//! All listings are ordered by `updated_at` descending. Order among rows
//! with identical timestamps is unspecified.

use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use wiki_core::{Page, Token};

use crate::error::StoreResult;

pub trait PageStore: Send + Sync {
    /// Insert the page, or overwrite `content` and `updated_at` of the
    /// existing `(token, title)` row. Returns the stored page.
    fn upsert_page<'a>(
        &'a self,
        token: &'a Token,
        title: &'a str,
        content: &'a str,
        updated_at: DateTime<Utc>,
    ) -> BoxFuture<'a, StoreResult<Page>>;

    /// Exact title lookup.
    fn get_page<'a>(
        &'a self,
        token: &'a Token,
        title: &'a str,
    ) -> BoxFuture<'a, StoreResult<Option<Page>>>;

    /// The most recently updated page.
    fn most_recent_page<'a>(&'a self, token: &'a Token)
    -> BoxFuture<'a, StoreResult<Option<Page>>>;

    /// All titles, most recent first.
    fn list_titles<'a>(&'a self, token: &'a Token) -> BoxFuture<'a, StoreResult<Vec<String>>>;

    /// All pages, most recent first, optionally filtered by a
    /// case-insensitive substring of title or content.
    fn list_pages<'a>(
        &'a self,
        token: &'a Token,
        query: Option<&'a str>,
    ) -> BoxFuture<'a, StoreResult<Vec<Page>>>;

    /// Titles of pages whose content contains `[keyword]` literally.
    fn titles_with_keyword<'a>(
        &'a self,
        token: &'a Token,
        keyword: &'a str,
    ) -> BoxFuture<'a, StoreResult<Vec<String>>>;

    /// Pages other than `exclude_title` linked through any of `keywords`:
    /// content contains `[K]` or title equals `K`.
    fn linked_pages<'a>(
        &'a self,
        token: &'a Token,
        exclude_title: &'a str,
        keywords: &'a [String],
    ) -> BoxFuture<'a, StoreResult<Vec<Page>>>;
}
