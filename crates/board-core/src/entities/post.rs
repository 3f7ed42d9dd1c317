//! Post entity

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Maximum post title length in characters
pub const MAX_TITLE_LENGTH: usize = 200;

/// Maximum post body length in characters
pub const MAX_CONTENT_LENGTH: usize = 20_000;

/// Post entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Snowflake,
    pub author_id: Snowflake,
    pub title: String,
    pub content: String,
    pub is_public: bool,
    pub view_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new public post, validating title and content
    pub fn new(
        id: Snowflake,
        author_id: Snowflake,
        title: String,
        content: String,
    ) -> Result<Self, DomainError> {
        validate_title(&title)?;
        validate_content(&content)?;

        let now = Utc::now();
        Ok(Self {
            id,
            author_id,
            title,
            content,
            is_public: true,
            view_count: 0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Bump the view counter by one
    pub fn increase_view_count(self) -> Self {
        Self {
            view_count: self.view_count + 1,
            ..self
        }
    }

    /// Replace title and content, re-validating both
    pub fn edited(self, title: String, content: String) -> Result<Self, DomainError> {
        validate_title(&title)?;
        validate_content(&content)?;
        Ok(Self {
            title,
            content,
            updated_at: Utc::now(),
            ..self
        })
    }

    pub fn with_visibility(self, is_public: bool) -> Self {
        Self {
            is_public,
            updated_at: Utc::now(),
            ..self
        }
    }

    /// Check if the given user wrote this post
    #[inline]
    pub fn is_author(&self, user_id: Snowflake) -> bool {
        self.author_id == user_id
    }
}

fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::InvalidTitle("title must not be blank".into()));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(DomainError::InvalidTitle(format!(
            "title exceeds {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

fn validate_content(content: &str) -> Result<(), DomainError> {
    if content.trim().is_empty() {
        return Err(DomainError::InvalidContent(
            "content must not be blank".into(),
        ));
    }
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(DomainError::InvalidContent(format!(
            "content exceeds {MAX_CONTENT_LENGTH} characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post() -> Post {
        Post::new(
            Snowflake::new(1),
            Snowflake::new(100),
            "Hello".to_string(),
            "First post".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_post_defaults() {
        let post = post();
        assert!(post.is_public);
        assert_eq!(post.view_count, 0);
    }

    #[test]
    fn test_blank_title_rejected() {
        let err = Post::new(
            Snowflake::new(1),
            Snowflake::new(100),
            "   ".to_string(),
            "body".to_string(),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidTitle(_)));
    }

    #[test]
    fn test_oversized_content_rejected() {
        let err = Post::new(
            Snowflake::new(1),
            Snowflake::new(100),
            "title".to_string(),
            "x".repeat(MAX_CONTENT_LENGTH + 1),
        )
        .unwrap_err();
        assert!(matches!(err, DomainError::InvalidContent(_)));
    }

    #[test]
    fn test_increase_view_count() {
        let post = post().increase_view_count().increase_view_count();
        assert_eq!(post.view_count, 2);
    }

    #[test]
    fn test_edited_revalidates() {
        let post = post();
        assert!(post.clone().edited("new".into(), "body".into()).is_ok());
        assert!(post.edited(String::new(), "body".into()).is_err());
    }

    #[test]
    fn test_is_author() {
        let post = post();
        assert!(post.is_author(Snowflake::new(100)));
        assert!(!post.is_author(Snowflake::new(101)));
    }
}
