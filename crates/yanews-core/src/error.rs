//! Error types for yanews

use crate::moderation::Rejection;
use crate::routes::Redirect;
use crate::types::{CommentId, NewsId};
use thiserror::Error;

/// Main error type for yanews
#[derive(Debug, Error)]
pub enum NewsError {
    /// News item not found
    #[error("News not found: {0}")]
    NewsNotFound(NewsId),

    /// Comment not found
    #[error("Comment not found: {0}")]
    CommentNotFound(CommentId),

    /// Authenticated, but not the owner of the comment
    #[error("Not allowed to modify comment {0}")]
    Forbidden(CommentId),

    /// Anonymous request; the caller must follow the login redirect
    #[error("Authentication required, redirect to {login}")]
    Unauthenticated { login: Redirect },

    /// Submitted text did not pass the content rules
    #[error("Comment rejected: {}", .0.reason)]
    Rejected(Rejection),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Unsupported schema version
    #[error("Unsupported schema version: {0}")]
    UnsupportedSchemaVersion(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<NewsError>,
    },
}

impl NewsError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        NewsError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Strip any context wrappers
    pub fn root(&self) -> &NewsError {
        match self {
            NewsError::WithContext { source, .. } => source.root(),
            other => other,
        }
    }

    /// Status code an HTTP-style interface layer answers with
    pub fn status(&self) -> u16 {
        match self.root() {
            NewsError::NewsNotFound(_) | NewsError::CommentNotFound(_) => 404,
            NewsError::Forbidden(_) => 403,
            NewsError::Unauthenticated { .. } => 302,
            // Rejected submissions are re-displayed in place
            NewsError::Rejected(_) => 200,
            NewsError::Validation(_) => 400,
            _ => 500,
        }
    }

    /// Location header for outcomes that redirect
    pub fn location(&self) -> Option<&str> {
        match self.root() {
            NewsError::Unauthenticated { login } => Some(login.location()),
            _ => None,
        }
    }

    /// Whether the error is an expected request outcome rather than a fault
    pub fn is_outcome(&self) -> bool {
        matches!(
            self.root(),
            NewsError::NewsNotFound(_)
                | NewsError::CommentNotFound(_)
                | NewsError::Forbidden(_)
                | NewsError::Unauthenticated { .. }
                | NewsError::Rejected(_)
        )
    }
}

/// Result type alias for yanews
pub type Result<T> = std::result::Result<T, NewsError>;
