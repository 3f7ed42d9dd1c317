//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use std::sync::atomic::{AtomicU64, Ordering};

use board_core::Snowflake;
use board_service::dto::{CreateCommentRequest, CreatePostRequest};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A user id no other fixture hands out
pub fn unique_user_id() -> Snowflake {
    Snowflake::new(1_000_000 + unique_suffix() as i64)
}

/// A post creation request with unique title and content
pub fn post_request() -> CreatePostRequest {
    let suffix = unique_suffix();
    CreatePostRequest {
        title: format!("Post {suffix}"),
        content: format!("Body of post {suffix}"),
    }
}

/// A comment creation request targeting the given post
pub fn comment_request(post_id: Snowflake) -> CreateCommentRequest {
    let suffix = unique_suffix();
    CreateCommentRequest {
        post_id,
        content: format!("Comment {suffix}"),
    }
}
