//! Token issuance.
//!
//! - POST /token - Hand out a fresh random namespace token

use axum::{Json, Router, routing::post};
use serde::Serialize;
use wiki_core::Token;

use crate::state::AppState;

/// Response for POST /token.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: Token,
}

/// POST /token - Issue a new token.
///
/// Nothing is stored; the namespace comes into existence with its first
/// saved page.
async fn issue_token() -> Json<TokenResponse> {
    let token = Token::generate();
    tracing::debug!("Issued new wiki token");
    Json(TokenResponse { token })
}

/// Build token routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/token", post(issue_token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_issue_token() {
        let Json(first) = issue_token().await;
        let Json(second) = issue_token().await;
        assert_ne!(first.token, second.token);
        assert!(!first.token.as_str().is_empty());
    }
}
