//! Application state shared across handlers.

use std::sync::Arc;

use wiki_store::Repository;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
#[derive(Clone)]
pub struct AppState {
    /// Wiki operations over the configured page store.
    repo: Repository,
    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state.
    pub fn new(repo: Repository, config: ServerConfig) -> Self {
        Self {
            repo,
            config: Arc::new(config),
        }
    }

    /// Get a reference to the wiki repository.
    pub fn repo(&self) -> &Repository {
        &self.repo
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
