//! wiki-server: HTTP API server for Token Wiki
//!
//! This crate provides the thin request layer in front of
//! [`wiki_store::Repository`]:
//! - REST endpoints for save, get, most-recent, titles, page search,
//!   keyword search, related pages and archive export
//! - Token issuance for clients that have none yet
//! - Token extraction from the `X-Wiki-Token` header or `token` query
//!   parameter
//!
//! # Architecture
//!
//! The server is built on Axum with a middleware stack for:
//! - Request tracing and logging
//! - CORS handling
//! - Request ID generation
//! - JSON error responses
//!
//! # Usage
//!
//! ```rust,ignore
//! use wiki_server::{config::ServerConfig, routes, state::AppState};
//!
//! let config = ServerConfig::from_env()?;
//! let repo = wiki_store::Repository::new(std::sync::Arc::new(
//!     wiki_store::MemoryPageStore::new(),
//! ));
//! let app = routes::build_router(AppState::new(repo, config));
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-exports for convenience
pub use config::{Backend, ConfigError, LogFormat, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use extract::WikiToken;
pub use state::AppState;

// Re-export dependent crates
pub use wiki_core;
pub use wiki_store;
