//! Health check endpoint.

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Configured page store backend.
    pub backend: &'static str,
}

/// GET /health - Health check endpoint.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        backend: state.config().backend.as_str(),
    })
}

/// Build health check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use wiki_store::{MemoryPageStore, Repository};

    use super::*;
    use crate::config::{Backend, ServerConfig};

    #[test]
    fn test_health_check_reports_backend() {
        let config = ServerConfig {
            backend: Backend::Memory,
            ..ServerConfig::default()
        };
        let state = AppState::new(Repository::new(Arc::new(MemoryPageStore::new())), config);

        let Json(response) = tokio_test::block_on(health_check(State(state)));
        assert_eq!(response.status, "ok");
        assert_eq!(response.backend, "memory");
    }
}
