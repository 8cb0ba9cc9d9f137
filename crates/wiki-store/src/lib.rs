//! wiki-store: Storage layer for Token Wiki
//!
//! This crate provides:
//! - The [`PageStore`] trait over the `(token, title) -> (content, updated_at)`
//!   mapping
//! - [`PgPageStore`], a PostgreSQL implementation using parameterized sqlx
//!   queries
//! - [`MemoryPageStore`], an in-process implementation for tests and
//!   database-less runs
//! - [`Repository`], which validates input, stamps timestamps and resolves
//!   keyword links into related pages
//! - Migration management
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use wiki_store::{PgPageStore, Repository, StoreConfig};
//!
//! let config = StoreConfig::from_env()?;
//! let store = PgPageStore::connect(config).await?;
//! let repo = Repository::new(Arc::new(store));
//!
//! let token = wiki_core::Token::generate();
//! repo.save(&token, "Rust", "see [Cargo]").await?;
//! let related = repo.related_pages(&token, "Rust").await?;
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod page_store;
pub mod repository;
pub mod schema;
pub mod store;

pub use error::{ErrorKind, StoreError, StoreResult};
pub use memory::MemoryPageStore;
pub use page_store::PageStore;
pub use repository::Repository;
pub use store::{PgPageStore, StoreConfig};

// Re-export wiki-core for downstream crates
pub use wiki_core;
