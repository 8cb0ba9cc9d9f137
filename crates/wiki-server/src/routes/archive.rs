//! Archive download.
//!
//! - GET /archive - Every page of the token as one plain-text attachment

use axum::{
    Router,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use wiki_core::ARCHIVE_FILENAME;

use crate::error::ApiResult;
use crate::extract::WikiToken;
use crate::state::AppState;

/// GET /archive - Download all pages as `# title` sections.
async fn download_archive(
    State(state): State<AppState>,
    WikiToken(token): WikiToken,
) -> ApiResult<Response> {
    let archive = state.repo().export_all(&token).await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", ARCHIVE_FILENAME),
            ),
        ],
        archive,
    )
        .into_response())
}

/// Build archive routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/archive", get(download_archive))
}
