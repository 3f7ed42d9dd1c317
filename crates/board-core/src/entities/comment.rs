//! Comment entity

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Maximum comment length in characters
pub const MAX_COMMENT_LENGTH: usize = 2_000;

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: Snowflake,
    pub post_id: Snowflake,
    pub author_id: Snowflake,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment, validating the content
    pub fn new(
        id: Snowflake,
        post_id: Snowflake,
        author_id: Snowflake,
        content: String,
    ) -> Result<Self, DomainError> {
        if content.trim().is_empty() {
            return Err(DomainError::InvalidContent(
                "comment must not be blank".into(),
            ));
        }
        if content.chars().count() > MAX_COMMENT_LENGTH {
            return Err(DomainError::InvalidContent(format!(
                "comment exceeds {MAX_COMMENT_LENGTH} characters"
            )));
        }

        Ok(Self {
            id,
            post_id,
            author_id,
            content,
            created_at: Utc::now(),
        })
    }

    /// Check if the given user wrote this comment
    #[inline]
    pub fn is_author(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_creation() {
        let comment = Comment::new(
            Snowflake::new(1),
            Snowflake::new(10),
            Snowflake::new(100),
            "Nice post".to_string(),
        )
        .unwrap();
        assert_eq!(comment.post_id, Snowflake::new(10));
        assert!(comment.is_author(Snowflake::new(100)));
    }

    #[test]
    fn test_blank_comment_rejected() {
        let err = Comment::new(
            Snowflake::new(1),
            Snowflake::new(10),
            Snowflake::new(100),
            "  ".to_string(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidContent(_)));
    }

    #[test]
    fn test_oversized_comment_rejected() {
        let err = Comment::new(
            Snowflake::new(1),
            Snowflake::new(10),
            Snowflake::new(100),
            "x".repeat(MAX_COMMENT_LENGTH + 1),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidContent(_)));
    }
}
