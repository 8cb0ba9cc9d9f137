//! Repository layer providing the wiki operations.
//!
//! This module wraps a [`PageStore`] with the rules that sit above raw
//! storage:
//!
//! - Content validation (blank content is rejected before any write)
//! - `updated_at` stamping from a [`Clock`]
//! - Not-found mapping for point lookups
//! - Keyword link resolution for related pages
//! - Archive rendering

use std::sync::Arc;

use wiki_core::{
    Clock, Page, SystemClock, Token, extract_keywords, render_archive, validate_content,
};

use crate::error::{StoreError, StoreResult};
use crate::page_store::PageStore;

/// Wiki operations over a page store.
///
/// Cheap to clone; clones share the store and clock.
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn PageStore>,
    clock: Arc<dyn Clock>,
}

impl Repository {
    /// Create a repository over `store` using wall-clock time.
    pub fn new(store: Arc<dyn PageStore>) -> Self {
        Self::with_clock(store, Arc::new(SystemClock))
    }

    /// Create a repository with a custom time source.
    pub fn with_clock(store: Arc<dyn PageStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    // ========================================================================
    // Page Operations
    // ========================================================================

    /// Create or overwrite the page `title`.
    ///
    /// Blank content is rejected with [`ValidationError::EmptyContent`] and
    /// leaves any existing page untouched.
    ///
    /// [`ValidationError::EmptyContent`]: wiki_core::ValidationError::EmptyContent
    pub async fn save(&self, token: &Token, title: &str, content: &str) -> StoreResult<Page> {
        validate_content(content)?;

        if title.trim().is_empty() {
            tracing::warn!("Saving page with a blank title");
        }

        let page = self
            .store
            .upsert_page(token, title, content, self.clock.now())
            .await?;
        tracing::debug!(title = %page.title, bytes = page.content.len(), "Saved page");
        Ok(page)
    }

    /// Get a page by exact title.
    pub async fn get(&self, token: &Token, title: &str) -> StoreResult<Page> {
        self.store
            .get_page(token, title)
            .await?
            .ok_or_else(|| StoreError::PageNotFound {
                title: title.to_string(),
            })
    }

    /// Get the most recently updated page.
    pub async fn most_recent(&self, token: &Token) -> StoreResult<Page> {
        self.store
            .most_recent_page(token)
            .await?
            .ok_or(StoreError::NoPages)
    }

    /// All titles, most recently updated first.
    pub async fn list_titles(&self, token: &Token) -> StoreResult<Vec<String>> {
        self.store.list_titles(token).await
    }

    /// All pages, most recently updated first.
    ///
    /// A non-empty `query` keeps pages whose title or content contains it,
    /// ignoring case. Whitespace in the query is not trimmed.
    pub async fn list_pages(&self, token: &Token, query: Option<&str>) -> StoreResult<Vec<Page>> {
        let query = query.filter(|q| !q.is_empty());
        let pages = self.store.list_pages(token, query).await?;
        tracing::debug!(filtered = query.is_some(), count = pages.len(), "Listed pages");
        Ok(pages)
    }

    /// Render every page of the token as a plain-text archive, most recently
    /// updated first.
    pub async fn export_all(&self, token: &Token) -> StoreResult<String> {
        let pages = self.store.list_pages(token, None).await?;
        tracing::debug!(count = pages.len(), "Exporting archive");
        Ok(render_archive(&pages))
    }

    /// Titles of pages whose content contains `[keyword]`.
    ///
    /// The keyword is used as given: no trimming, case-sensitive.
    pub async fn keyword_search(&self, token: &Token, keyword: &str) -> StoreResult<Vec<String>> {
        self.store.titles_with_keyword(token, keyword).await
    }

    // ========================================================================
    // Link Resolution
    // ========================================================================

    /// Pages related to the page `current_title` whose content is `content`.
    ///
    /// Returns nothing, without querying the store, when `content` holds no
    /// keywords.
    pub async fn related_to(
        &self,
        token: &Token,
        current_title: &str,
        content: &str,
    ) -> StoreResult<Vec<Page>> {
        let keywords = extract_keywords(content);
        if keywords.is_empty() {
            return Ok(Vec::new());
        }

        let pages = self
            .store
            .linked_pages(token, current_title, &keywords)
            .await?;
        tracing::debug!(
            keywords = keywords.len(),
            count = pages.len(),
            "Resolved related pages"
        );
        Ok(pages)
    }

    /// Pages related to the stored page `title`.
    pub async fn related_pages(&self, token: &Token, title: &str) -> StoreResult<Vec<Page>> {
        let page = self.get(token, title).await?;
        self.related_to(token, &page.title, &page.content).await
    }
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::{DateTime, Utc};
    use futures::future::BoxFuture;
    use wiki_core::{ManualClock, ValidationError};

    use super::*;
    use crate::error::ErrorKind;
    use crate::memory::MemoryPageStore;

    fn repo() -> (Repository, Arc<MemoryPageStore>) {
        let store = Arc::new(MemoryPageStore::new());
        let repo = Repository::with_clock(store.clone(), Arc::new(ManualClock::ticking()));
        (repo, store)
    }

    fn token(s: &str) -> Token {
        Token::new(s).unwrap()
    }

    fn titles(pages: Vec<Page>) -> Vec<String> {
        pages.into_iter().map(|p| p.title).collect()
    }

    #[tokio::test]
    async fn test_save_twice_keeps_one_page() {
        let (repo, store) = repo();
        let t = token("t");

        repo.save(&t, "X", "hello").await.unwrap();
        repo.save(&t, "X", "hello").await.unwrap();

        assert_eq!(store.page_count(&t), 1);
        assert_eq!(repo.list_titles(&t).await.unwrap(), vec!["X"]);
    }

    #[tokio::test]
    async fn test_save_advances_updated_at() {
        let (repo, _) = repo();
        let t = token("t");

        let first = repo.save(&t, "X", "hello").await.unwrap();
        let second = repo.save(&t, "X", "hello").await.unwrap();

        assert!(second.updated_at > first.updated_at);
    }

    #[tokio::test]
    async fn test_empty_content_rejected_without_mutation() {
        let (repo, _) = repo();
        let t = token("t");

        repo.save(&t, "X", "original").await.unwrap();

        for blank in ["", "   ", "\n\t"] {
            let err = repo.save(&t, "X", blank).await.unwrap_err();
            assert!(matches!(
                err,
                StoreError::Validation(ValidationError::EmptyContent)
            ));
            assert_eq!(err.kind(), ErrorKind::Validation);
        }

        assert_eq!(repo.get(&t, "X").await.unwrap().content, "original");
    }

    #[tokio::test]
    async fn test_empty_content_on_new_title_creates_nothing() {
        let (repo, store) = repo();
        let t = token("t");

        assert!(repo.save(&t, "X", " ").await.is_err());
        assert_eq!(store.page_count(&t), 0);
    }

    #[tokio::test]
    async fn test_get_after_save() {
        let (repo, _) = repo();
        let t = token("t");

        repo.save(&t, "X", "hello").await.unwrap();
        assert_eq!(repo.get(&t, "X").await.unwrap().content, "hello");

        let err = repo.get(&t, "Y").await.unwrap_err();
        assert!(matches!(err, StoreError::PageNotFound { ref title } if title == "Y"));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_blank_title_is_allowed() {
        let (repo, _) = repo();
        let t = token("t");

        repo.save(&t, "", "untitled").await.unwrap();
        assert_eq!(repo.get(&t, "").await.unwrap().content, "untitled");
    }

    #[tokio::test]
    async fn test_titles_by_recency() {
        let (repo, _) = repo();
        let t = token("t");

        repo.save(&t, "A", "a").await.unwrap();
        repo.save(&t, "B", "b").await.unwrap();
        repo.save(&t, "A", "a again").await.unwrap();

        assert_eq!(repo.list_titles(&t).await.unwrap(), vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_most_recent() {
        let (repo, _) = repo();
        let t = token("t");

        assert_eq!(
            repo.most_recent(&t).await.unwrap_err().kind(),
            ErrorKind::NotFound
        );

        repo.save(&t, "A", "a").await.unwrap();
        repo.save(&t, "B", "b").await.unwrap();
        assert_eq!(repo.most_recent(&t).await.unwrap().title, "B");

        repo.save(&t, "A", "a2").await.unwrap();
        let recent = repo.most_recent(&t).await.unwrap();
        assert_eq!((recent.title.as_str(), recent.content.as_str()), ("A", "a2"));
    }

    #[tokio::test]
    async fn test_list_pages_with_query() {
        let (repo, _) = repo();
        let t = token("t");

        repo.save(&t, "Rust", "ownership").await.unwrap();
        repo.save(&t, "Go", "goroutines, no OWNERSHIP").await.unwrap();
        repo.save(&t, "Zig", "comptime").await.unwrap();

        assert_eq!(
            titles(repo.list_pages(&t, None).await.unwrap()),
            vec!["Zig", "Go", "Rust"]
        );
        assert_eq!(
            titles(repo.list_pages(&t, Some("Ownership")).await.unwrap()),
            vec!["Go", "Rust"]
        );
        assert_eq!(
            titles(repo.list_pages(&t, Some("zig")).await.unwrap()),
            vec!["Zig"]
        );
        assert_eq!(repo.list_pages(&t, Some("")).await.unwrap().len(), 3);
        assert_eq!(
            titles(repo.list_pages(&t, Some(" ")).await.unwrap()),
            vec!["Go"]
        );
        assert!(repo.list_pages(&t, Some("python")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_keyword_search() {
        let (repo, _) = repo();
        let t = token("t");

        repo.save(&t, "P", "see [Foo] for more").await.unwrap();
        repo.save(&t, "Q", "Foo without brackets").await.unwrap();

        assert_eq!(repo.keyword_search(&t, "Foo").await.unwrap(), vec!["P"]);
        assert!(repo.keyword_search(&t, "Bar").await.unwrap().is_empty());
        assert!(repo.keyword_search(&t, "foo").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_related_pages() {
        let (repo, _) = repo();
        let t = token("t");

        repo.save(&t, "X", "[Y]").await.unwrap();
        repo.save(&t, "Y", "about Y").await.unwrap();
        repo.save(&t, "Z", "unrelated").await.unwrap();

        assert_eq!(titles(repo.related_pages(&t, "X").await.unwrap()), vec!["Y"]);
    }

    #[tokio::test]
    async fn test_related_by_shared_keyword_ordered_by_recency() {
        let (repo, _) = repo();
        let t = token("t");

        repo.save(&t, "Current", "links [Rust] and [Go]").await.unwrap();
        repo.save(&t, "Older", "mentions [Go]").await.unwrap();
        repo.save(&t, "Newer", "mentions [Rust]").await.unwrap();
        repo.save(&t, "Plain", "mentions Rust without brackets").await.unwrap();

        assert_eq!(
            titles(repo.related_pages(&t, "Current").await.unwrap()),
            vec!["Newer", "Older"]
        );
    }

    #[tokio::test]
    async fn test_self_reference_excluded() {
        let (repo, _) = repo();
        let t = token("t");

        repo.save(&t, "Me", "I am [Me]").await.unwrap();
        repo.save(&t, "Other", "also [Me]").await.unwrap();

        assert_eq!(
            titles(repo.related_pages(&t, "Me").await.unwrap()),
            vec!["Other"]
        );
    }

    #[tokio::test]
    async fn test_related_missing_page() {
        let (repo, _) = repo();
        let t = token("t");

        let err = repo.related_pages(&t, "nope").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_export_all() {
        let (repo, _) = repo();
        let t = token("t");

        repo.save(&t, "First", "one").await.unwrap();
        repo.save(&t, "Second", "two\nlines").await.unwrap();

        let archive = repo.export_all(&t).await.unwrap();
        assert_eq!(archive, "# Second\ntwo\nlines\n\n# First\none\n\n");
        assert_eq!(archive.matches("# ").count(), 2);
    }

    #[tokio::test]
    async fn test_token_isolation() {
        let (repo, _) = repo();
        let t1 = token("t1");
        let t2 = token("t2");

        repo.save(&t1, "T", "private [K]").await.unwrap();
        repo.save(&t2, "Other", "mine [K]").await.unwrap();

        assert_eq!(repo.list_titles(&t2).await.unwrap(), vec!["Other"]);
        assert!(repo.list_pages(&t2, Some("private")).await.unwrap().is_empty());
        assert_eq!(repo.keyword_search(&t2, "K").await.unwrap(), vec!["Other"]);
        assert!(!repo.export_all(&t2).await.unwrap().contains("# T\n"));
        assert!(repo.get(&t2, "T").await.is_err());
        assert!(repo.related_pages(&t2, "Other").await.unwrap().is_empty());
        assert_eq!(repo.most_recent(&t2).await.unwrap().title, "Other");
    }

    /// Store wrapper counting `linked_pages` calls.
    struct CountingStore {
        inner: MemoryPageStore,
        linked_calls: AtomicUsize,
    }

    impl PageStore for CountingStore {
        fn upsert_page<'a>(
            &'a self,
            token: &'a Token,
            title: &'a str,
            content: &'a str,
            updated_at: DateTime<Utc>,
        ) -> BoxFuture<'a, StoreResult<Page>> {
            self.inner.upsert_page(token, title, content, updated_at)
        }

        fn get_page<'a>(
            &'a self,
            token: &'a Token,
            title: &'a str,
        ) -> BoxFuture<'a, StoreResult<Option<Page>>> {
            self.inner.get_page(token, title)
        }

        fn most_recent_page<'a>(
            &'a self,
            token: &'a Token,
        ) -> BoxFuture<'a, StoreResult<Option<Page>>> {
            self.inner.most_recent_page(token)
        }

        fn list_titles<'a>(&'a self, token: &'a Token) -> BoxFuture<'a, StoreResult<Vec<String>>> {
            self.inner.list_titles(token)
        }

        fn list_pages<'a>(
            &'a self,
            token: &'a Token,
            query: Option<&'a str>,
        ) -> BoxFuture<'a, StoreResult<Vec<Page>>> {
            self.inner.list_pages(token, query)
        }

        fn titles_with_keyword<'a>(
            &'a self,
            token: &'a Token,
            keyword: &'a str,
        ) -> BoxFuture<'a, StoreResult<Vec<String>>> {
            self.inner.titles_with_keyword(token, keyword)
        }

        fn linked_pages<'a>(
            &'a self,
            token: &'a Token,
            exclude_title: &'a str,
            keywords: &'a [String],
        ) -> BoxFuture<'a, StoreResult<Vec<Page>>> {
            self.linked_calls.fetch_add(1, Ordering::SeqCst);
            self.inner.linked_pages(token, exclude_title, keywords)
        }
    }

    fn assert_send<F: Future + Send>(f: F) -> F {
        f
    }

    #[tokio::test]
    async fn test_no_keywords_skips_store_query() {
        let store = Arc::new(CountingStore {
            inner: MemoryPageStore::new(),
            linked_calls: AtomicUsize::new(0),
        });
        let repo = Repository::new(store.clone());
        let t = token("t");

        repo.save(&t, "Lonely", "no links here").await.unwrap();
        repo.save(&t, "Other", "[Lonely]").await.unwrap();

        let related = assert_send(repo.related_pages(&t, "Lonely")).await.unwrap();
        assert!(related.is_empty());
        assert_eq!(store.linked_calls.load(Ordering::SeqCst), 0);

        let related = repo.related_pages(&t, "Other").await.unwrap();
        assert_eq!(titles(related), vec!["Lonely"]);
        assert_eq!(store.linked_calls.load(Ordering::SeqCst), 1);
    }
}
