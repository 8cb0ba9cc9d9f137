//! Wiki token extraction from the `X-Wiki-Token` header or `token` query
//! parameter.
//!
//! The token only selects a page namespace. It is not checked against
//! anything, so presenting a token is all it takes to read and write its
//! pages.

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use wiki_core::Token;

use crate::error::ApiError;

/// Header carrying the wiki token.
pub const TOKEN_HEADER: &str = "X-Wiki-Token";

/// The namespace token of the current request.
///
/// Priority:
/// 1. `X-Wiki-Token` header.
/// 2. `token` query parameter.
///
/// Missing or blank tokens are rejected with `400 Bad Request`.
#[derive(Debug, Clone)]
pub struct WikiToken(pub Token);

#[derive(Debug, Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

impl<S> FromRequestParts<S> for WikiToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(value) = parts.headers.get(TOKEN_HEADER) {
            let value = value.to_str().map_err(|_| {
                ApiError::BadRequest(format!(
                    "{} header contains invalid characters",
                    TOKEN_HEADER
                ))
            })?;
            return parse_token(value);
        }

        let query = Query::<TokenQuery>::try_from_uri(&parts.uri)
            .map_err(|e| ApiError::BadRequest(format!("Invalid query string: {}", e)))?;

        match query.0.token {
            Some(value) => parse_token(&value),
            None => Err(ApiError::BadRequest(format!(
                "Missing {} header or token query parameter",
                TOKEN_HEADER
            ))),
        }
    }
}

fn parse_token(value: &str) -> Result<WikiToken, ApiError> {
    Token::new(value)
        .map(WikiToken)
        .map_err(|e| ApiError::BadRequest(e.to_string()))
}
