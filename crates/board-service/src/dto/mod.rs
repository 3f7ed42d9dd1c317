//! Data transfer objects

mod requests;
mod responses;

pub use requests::{CreateCommentRequest, CreatePostRequest, UpdatePostRequest, ValidateExt};
pub use responses::{CommentResponse, InteractionResponse, PostResponse};
