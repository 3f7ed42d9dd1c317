//! Application services

mod comment;
mod context;
mod error;
mod interaction;
mod post;

pub use comment::CommentService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use interaction::InteractionService;
pub use post::PostService;
