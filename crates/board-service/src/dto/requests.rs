//! Request DTOs
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use board_core::Snowflake;
use serde::Deserialize;
use validator::Validate;

use crate::services::{ServiceError, ServiceResult};

/// Bridge from `validator` failures into the service error type
pub trait ValidateExt: Validate {
    fn validate_into_service_error(&self) -> ServiceResult<()> {
        self.validate()
            .map_err(|e| ServiceError::validation(e.to_string()))
    }
}

impl<T: Validate> ValidateExt for T {}

/// Create post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 20000, message = "Content must be 1-20000 characters"))]
    pub content: String,
}

/// Update post request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 20000, message = "Content must be 1-20000 characters"))]
    pub content: String,

    /// Visibility change, left untouched when absent
    pub is_public: Option<bool>,
}

/// Create comment request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCommentRequest {
    /// Parent post ID (Snowflake as string)
    pub post_id: Snowflake,

    #[validate(length(min = 1, max = 2000, message = "Comment must be 1-2000 characters"))]
    pub content: String,
}
