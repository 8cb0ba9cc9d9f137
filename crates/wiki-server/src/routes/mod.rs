//! Route definitions for the HTTP API.

pub mod archive;
pub mod health;
pub mod pages;
pub mod search;
pub mod token;

use axum::{Router, http::Uri};

use crate::error::ApiError;
use crate::state::AppState;

/// Build the complete router with all routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(token::routes())
        .merge(pages::routes())
        .merge(search::routes())
        .merge(archive::routes())
        .fallback(not_found)
        .with_state(state)
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {}", uri.path()))
}
