//! Page routes for Token Wiki.
//!
//! This module implements the page-related HTTP endpoints:
//! - POST /pages - Create or overwrite a page named in the body
//! - PUT /pages/{title} - Create or overwrite a page
//! - GET /pages/{title} - Read a page
//! - GET /pages/{title}/related - Pages linked through `[keyword]` references
//! - GET /pages?q= - List pages, optionally filtered
//! - GET /recent - The most recently updated page

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::get,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wiki_core::Page;

use crate::error::ApiResult;
use crate::extract::WikiToken;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for PUT /pages/{title}.
#[derive(Debug, Deserialize)]
pub struct SavePageRequest {
    /// New page content. Must not be blank.
    pub content: String,
}

/// Request body for POST /pages.
///
/// The title travels in the body, so an empty title is reachable here even
/// though it cannot appear as a path segment.
#[derive(Debug, Deserialize)]
pub struct SaveNamedPageRequest {
    pub title: String,
    /// New page content. Must not be blank.
    pub content: String,
}

/// Response for page saves.
#[derive(Debug, Serialize)]
pub struct SavePageResponse {
    /// Always "success".
    pub status: &'static str,
    pub title: String,
    pub updated_at: DateTime<Utc>,
}

/// A page as returned by the API.
#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub title: String,
    pub content: String,
    pub updated_at: DateTime<Utc>,
}

impl From<Page> for PageResponse {
    fn from(page: Page) -> Self {
        Self {
            title: page.title,
            content: page.content,
            updated_at: page.updated_at,
        }
    }
}

/// Response carrying a list of pages, most recently updated first.
#[derive(Debug, Serialize)]
pub struct PagesResponse {
    pub pages: Vec<PageResponse>,
}

impl From<Vec<Page>> for PagesResponse {
    fn from(pages: Vec<Page>) -> Self {
        Self {
            pages: pages.into_iter().map(PageResponse::from).collect(),
        }
    }
}

/// Query parameters for GET /pages.
#[derive(Debug, Deserialize)]
pub struct ListPagesQuery {
    /// Case-insensitive substring of title or content.
    pub q: Option<String>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// PUT /pages/{title} - Create or overwrite a page.
///
/// # Response
///
/// - 200 OK: `{ "status": "success", "title": ..., "updated_at": ... }`
/// - 400 Bad Request: blank content or missing token
async fn save_page(
    State(state): State<AppState>,
    WikiToken(token): WikiToken,
    Path(title): Path<String>,
    Json(request): Json<SavePageRequest>,
) -> ApiResult<Json<SavePageResponse>> {
    let page = state.repo().save(&token, &title, &request.content).await?;

    Ok(Json(SavePageResponse {
        status: "success",
        title: page.title,
        updated_at: page.updated_at,
    }))
}

/// POST /pages - Create or overwrite the page named in the body.
async fn save_named_page(
    State(state): State<AppState>,
    WikiToken(token): WikiToken,
    Json(request): Json<SaveNamedPageRequest>,
) -> ApiResult<Json<SavePageResponse>> {
    let page = state
        .repo()
        .save(&token, &request.title, &request.content)
        .await?;

    Ok(Json(SavePageResponse {
        status: "success",
        title: page.title,
        updated_at: page.updated_at,
    }))
}

/// GET /pages/{title} - Read a page by exact title.
///
/// # Response
///
/// - 200 OK: `{ "title": ..., "content": ..., "updated_at": ... }`
/// - 404 Not Found: no such page for this token
async fn get_page(
    State(state): State<AppState>,
    WikiToken(token): WikiToken,
    Path(title): Path<String>,
) -> ApiResult<Json<PageResponse>> {
    let page = state.repo().get(&token, &title).await?;
    Ok(Json(page.into()))
}

/// GET /pages/{title}/related - Pages sharing a `[keyword]` with this page,
/// or titled after one of its keywords.
async fn related_pages(
    State(state): State<AppState>,
    WikiToken(token): WikiToken,
    Path(title): Path<String>,
) -> ApiResult<Json<PagesResponse>> {
    let pages = state.repo().related_pages(&token, &title).await?;
    Ok(Json(pages.into()))
}

/// GET /pages - List pages, optionally filtered by `q`.
async fn list_pages(
    State(state): State<AppState>,
    WikiToken(token): WikiToken,
    Query(query): Query<ListPagesQuery>,
) -> ApiResult<Json<PagesResponse>> {
    let pages = state.repo().list_pages(&token, query.q.as_deref()).await?;
    Ok(Json(pages.into()))
}

/// GET /recent - The most recently updated page.
///
/// # Response
///
/// - 404 Not Found: the token has no pages yet
async fn most_recent(
    State(state): State<AppState>,
    WikiToken(token): WikiToken,
) -> ApiResult<Json<PageResponse>> {
    let page = state.repo().most_recent(&token).await?;
    Ok(Json(page.into()))
}

/// Build page routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/pages", get(list_pages).post(save_named_page))
        .route("/pages/{title}", get(get_page).put(save_page))
        .route("/pages/{title}/related", get(related_pages))
        .route("/recent", get(most_recent))
}
