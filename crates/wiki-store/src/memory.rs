//! In-memory page store for tests and database-less runs.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use futures::future::BoxFuture;
use wiki_core::{Page, Token, bracketed, is_related, matches_query};

use crate::error::StoreResult;
use crate::page_store::PageStore;

#[derive(Debug, Clone)]
struct StoredPage {
    content: String,
    updated_at: DateTime<Utc>,
    /// Write sequence, breaks ties between equal timestamps.
    seq: u64,
}

#[derive(Debug, Default)]
struct Inner {
    namespaces: BTreeMap<Token, BTreeMap<String, StoredPage>>,
    next_seq: u64,
}

impl Inner {
    /// Pages of one token, most recent first.
    fn sorted(&self, token: &Token) -> Vec<(&String, &StoredPage)> {
        let mut pages: Vec<_> = self
            .namespaces
            .get(token)
            .map(|ns| ns.iter().collect())
            .unwrap_or_default();
        pages.sort_by(|a, b| {
            b.1.updated_at
                .cmp(&a.1.updated_at)
                .then_with(|| b.1.seq.cmp(&a.1.seq))
        });
        pages
    }

    fn sorted_pages(&self, token: &Token) -> Vec<Page> {
        self.sorted(token)
            .into_iter()
            .map(|(title, stored)| to_page(title, stored))
            .collect()
    }
}

fn to_page(title: &str, stored: &StoredPage) -> Page {
    Page::new(title, stored.content.clone(), stored.updated_at)
}

/// Page store held in process memory.
///
/// Thread-safe via `RwLock`; a lock is held only for one synchronous
/// operation. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryPageStore {
    inner: RwLock<Inner>,
}

impl MemoryPageStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Number of stored pages for a token.
    pub fn page_count(&self, token: &Token) -> usize {
        self.read().namespaces.get(token).map_or(0, BTreeMap::len)
    }
}

impl PageStore for MemoryPageStore {
    fn upsert_page<'a>(
        &'a self,
        token: &'a Token,
        title: &'a str,
        content: &'a str,
        updated_at: DateTime<Utc>,
    ) -> BoxFuture<'a, StoreResult<Page>> {
        Box::pin(async move {
            let mut inner = self.write();
            inner.next_seq += 1;
            let stored = StoredPage {
                content: content.to_string(),
                updated_at,
                seq: inner.next_seq,
            };
            inner
                .namespaces
                .entry(token.clone())
                .or_default()
                .insert(title.to_string(), stored.clone());
            Ok(to_page(title, &stored))
        })
    }

    fn get_page<'a>(
        &'a self,
        token: &'a Token,
        title: &'a str,
    ) -> BoxFuture<'a, StoreResult<Option<Page>>> {
        Box::pin(async move {
            Ok(self
                .read()
                .namespaces
                .get(token)
                .and_then(|ns| ns.get(title))
                .map(|stored| to_page(title, stored)))
        })
    }

    fn most_recent_page<'a>(
        &'a self,
        token: &'a Token,
    ) -> BoxFuture<'a, StoreResult<Option<Page>>> {
        Box::pin(async move {
            let inner = self.read();
            Ok(inner
                .sorted(token)
                .first()
                .map(|(title, stored)| to_page(title, stored)))
        })
    }

    fn list_titles<'a>(&'a self, token: &'a Token) -> BoxFuture<'a, StoreResult<Vec<String>>> {
        Box::pin(async move {
            let inner = self.read();
            Ok(inner
                .sorted(token)
                .into_iter()
                .map(|(title, _)| title.clone())
                .collect())
        })
    }

    fn list_pages<'a>(
        &'a self,
        token: &'a Token,
        query: Option<&'a str>,
    ) -> BoxFuture<'a, StoreResult<Vec<Page>>> {
        Box::pin(async move {
            let pages = self.read().sorted_pages(token);
            Ok(match query {
                Some(q) => pages.into_iter().filter(|p| matches_query(p, q)).collect(),
                None => pages,
            })
        })
    }

    fn titles_with_keyword<'a>(
        &'a self,
        token: &'a Token,
        keyword: &'a str,
    ) -> BoxFuture<'a, StoreResult<Vec<String>>> {
        Box::pin(async move {
            let needle = bracketed(keyword);
            let inner = self.read();
            Ok(inner
                .sorted(token)
                .into_iter()
                .filter(|(_, stored)| stored.content.contains(&needle))
                .map(|(title, _)| title.clone())
                .collect())
        })
    }

    fn linked_pages<'a>(
        &'a self,
        token: &'a Token,
        exclude_title: &'a str,
        keywords: &'a [String],
    ) -> BoxFuture<'a, StoreResult<Vec<Page>>> {
        Box::pin(async move {
            Ok(self
                .read()
                .sorted_pages(token)
                .into_iter()
                .filter(|p| is_related(p, exclude_title, keywords))
                .collect())
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(secs)
    }

    #[tokio::test]
    async fn upsert_overwrites_in_place() {
        let store = MemoryPageStore::new();
        let token = Token::new("t").unwrap();

        store.upsert_page(&token, "X", "one", at(1)).await.unwrap();
        let page = store.upsert_page(&token, "X", "two", at(2)).await.unwrap();

        assert_eq!(page, Page::new("X", "two", at(2)));
        assert_eq!(store.page_count(&token), 1);
        assert_eq!(
            store.get_page(&token, "X").await.unwrap().unwrap().content,
            "two"
        );
    }

    #[tokio::test]
    async fn equal_timestamps_fall_back_to_write_order() {
        let store = MemoryPageStore::new();
        let token = Token::new("t").unwrap();

        store.upsert_page(&token, "A", "a", at(5)).await.unwrap();
        store.upsert_page(&token, "B", "b", at(5)).await.unwrap();

        assert_eq!(store.list_titles(&token).await.unwrap(), vec!["B", "A"]);
    }

    #[tokio::test]
    async fn unknown_token_is_empty() {
        let store = MemoryPageStore::new();
        let token = Token::new("nobody").unwrap();

        assert!(store.most_recent_page(&token).await.unwrap().is_none());
        assert!(store.list_titles(&token).await.unwrap().is_empty());
        assert!(store.list_pages(&token, None).await.unwrap().is_empty());
        assert!(store.get_page(&token, "X").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn keyword_match_is_literal() {
        let store = MemoryPageStore::new();
        let token = Token::new("t").unwrap();

        store.upsert_page(&token, "P", "[a%b]", at(1)).await.unwrap();
        store.upsert_page(&token, "Q", "[axxb]", at(2)).await.unwrap();

        assert_eq!(
            store.titles_with_keyword(&token, "a%b").await.unwrap(),
            vec!["P"]
        );
    }

    #[test]
    fn whitespace_query_is_matched_literally() {
        let store = MemoryPageStore::new();
        let token = Token::new("t").unwrap();

        tokio_test::block_on(async {
            store.upsert_page(&token, "Go", "no OWNERSHIP", at(1)).await.unwrap();
            store.upsert_page(&token, "Zig", "comptime", at(2)).await.unwrap();

            let spaced = store.list_pages(&token, Some(" ")).await.unwrap();
            assert_eq!(spaced, vec![Page::new("Go", "no OWNERSHIP", at(1))]);

            let all = store.list_pages(&token, None).await.unwrap();
            assert_eq!(all.len(), 2);
        });
    }
}
