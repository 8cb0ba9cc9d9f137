//! Title listing and keyword search.
//!
//! - GET /titles - All titles, most recently updated first
//! - GET /keywords?keyword= - Titles of pages containing `[keyword]`

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::extract::WikiToken;
use crate::state::AppState;

/// Response carrying page titles.
#[derive(Debug, Serialize)]
pub struct TitlesResponse {
    pub titles: Vec<String>,
}

/// Query parameters for GET /keywords.
#[derive(Debug, Deserialize)]
pub struct KeywordQuery {
    /// Keyword without brackets, matched exactly.
    pub keyword: Option<String>,
}

/// GET /titles - List titles.
async fn list_titles(
    State(state): State<AppState>,
    WikiToken(token): WikiToken,
) -> ApiResult<Json<TitlesResponse>> {
    let titles = state.repo().list_titles(&token).await?;
    Ok(Json(TitlesResponse { titles }))
}

/// GET /keywords - Keyword search.
///
/// # Response
///
/// - 200 OK: `{ "titles": [...] }`
/// - 400 Bad Request: `keyword` parameter missing
async fn search_keywords(
    State(state): State<AppState>,
    WikiToken(token): WikiToken,
    Query(query): Query<KeywordQuery>,
) -> ApiResult<Json<TitlesResponse>> {
    let keyword = query
        .keyword
        .ok_or_else(|| ApiError::BadRequest("Missing keyword query parameter".to_string()))?;

    let titles = state.repo().keyword_search(&token, &keyword).await?;
    Ok(Json(TitlesResponse { titles }))
}

/// Build search routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/titles", get(list_titles))
        .route("/keywords", get(search_keywords))
}
