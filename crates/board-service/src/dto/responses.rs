//! Response DTOs
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs serialize as strings for JavaScript compatibility.

use board_core::{Comment, Interaction, Post};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Post response
#[derive(Debug, Clone, Serialize)]
pub struct PostResponse {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub content: String,
    pub is_public: bool,
    pub view_count: i64,
    /// Whether the requesting user has an ACTIVE bookmark on this post
    pub is_bookmarked: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PostResponse {
    pub fn with_bookmarked(mut self, bookmarked: bool) -> Self {
        self.is_bookmarked = bookmarked;
        self
    }
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.to_string(),
            author_id: post.author_id.to_string(),
            title: post.title.clone(),
            content: post.content.clone(),
            is_public: post.is_public,
            view_count: post.view_count,
            is_bookmarked: false,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Comment response
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    pub author_id: String,
    pub content: String,
    /// ACTIVE LIKE count, zero when the decoration data is unavailable
    pub like_count: usize,
    pub created_at: DateTime<Utc>,
}

impl CommentResponse {
    pub fn with_like_count(mut self, like_count: usize) -> Self {
        self.like_count = like_count;
        self
    }
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.to_string(),
            post_id: comment.post_id.to_string(),
            author_id: comment.author_id.to_string(),
            content: comment.content.clone(),
            like_count: 0,
            created_at: comment.created_at,
        }
    }
}

/// Interaction response, returned from a toggle
#[derive(Debug, Clone, Serialize)]
pub struct InteractionResponse {
    pub id: String,
    pub subject_id: String,
    pub user_id: String,
    pub content_type: String,
    pub interaction_type: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Interaction> for InteractionResponse {
    fn from(interaction: &Interaction) -> Self {
        Self {
            id: interaction.id.to_string(),
            subject_id: interaction.subject_id.to_string(),
            user_id: interaction.user_id.to_string(),
            content_type: interaction.content_type.as_str().to_string(),
            interaction_type: interaction.interaction_type.as_str().to_string(),
            status: interaction.status.as_str().to_string(),
            created_at: interaction.created_at,
            updated_at: interaction.updated_at,
        }
    }
}
