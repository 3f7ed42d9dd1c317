//! # board-service
//!
//! Application layer: use cases per bounded context (Post, Comment,
//! Interaction), the event consumers that answer cross-context requests,
//! and the DTOs surfaced to callers.

pub mod dto;
pub mod handlers;
pub mod services;

// Re-export commonly used types at crate root
pub use handlers::{BookmarkPostsRequestedHandler, InteractionDataRequestedHandler};
pub use services::{
    CommentService, InteractionService, PostService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult,
};
