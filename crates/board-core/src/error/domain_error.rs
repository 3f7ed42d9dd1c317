//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Post not found: {0}")]
    PostNotFound(Snowflake),

    #[error("Comment not found: {0}")]
    CommentNotFound(Snowflake),

    #[error("Interaction not found: {0}")]
    InteractionNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Invalid title: {0}")]
    InvalidTitle(String),

    #[error("Invalid content: {0}")]
    InvalidContent(String),

    #[error("Blank identifier: {0}")]
    BlankIdentifier(&'static str),

    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the post author")]
    NotPostAuthor,

    #[error("Not the comment author")]
    NotCommentAuthor,

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Failed to create interaction")]
    InteractionCreateFailed,

    #[error("Failed to save {0}")]
    FailedToSave(&'static str),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::PostNotFound(_) => "UNKNOWN_POST",
            Self::CommentNotFound(_) => "UNKNOWN_COMMENT",
            Self::InteractionNotFound(_) => "UNKNOWN_INTERACTION",
            Self::InvalidTitle(_) => "INVALID_TITLE",
            Self::InvalidContent(_) => "INVALID_CONTENT",
            Self::BlankIdentifier(_) => "BLANK_IDENTIFIER",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::NotPostAuthor => "NOT_POST_AUTHOR",
            Self::NotCommentAuthor => "NOT_COMMENT_AUTHOR",
            Self::InteractionCreateFailed => "INTERACTION_CREATE_FAILED",
            Self::FailedToSave(_) => "FAILED_TO_SAVE",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::PostNotFound(_) | Self::CommentNotFound(_) | Self::InteractionNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidTitle(_)
                | Self::InvalidContent(_)
                | Self::BlankIdentifier(_)
                | Self::ValidationError(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotPostAuthor | Self::NotCommentAuthor)
    }
}
