//! Error types for the storage layer.

use thiserror::Error;
use wiki_core::ValidationError;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Input rejected before reaching the database.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// No page with this title exists for the token.
    #[error("page not found: {title}")]
    PageNotFound { title: String },

    /// The token has no pages at all.
    #[error("no pages saved for this token")]
    NoPages,

    /// Database connection or query error.
    #[error("database unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),

    /// Migration error.
    #[error("migration error: {0}")]
    MigrationError(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

/// Coarse classification callers use to tell failures apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    StoreUnavailable,
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::PageNotFound { .. } | Self::NoPages => ErrorKind::NotFound,
            Self::Unavailable(_) | Self::MigrationError(_) | Self::ConfigError(_) => {
                ErrorKind::StoreUnavailable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_distinguishable() {
        assert_eq!(
            StoreError::from(ValidationError::EmptyContent).kind(),
            ErrorKind::Validation
        );
        assert_eq!(
            StoreError::PageNotFound {
                title: "x".to_string()
            }
            .kind(),
            ErrorKind::NotFound
        );
        assert_eq!(StoreError::NoPages.kind(), ErrorKind::NotFound);
        assert_eq!(
            StoreError::from(sqlx::Error::PoolTimedOut).kind(),
            ErrorKind::StoreUnavailable
        );
    }
}
