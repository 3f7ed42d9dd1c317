//! Domain entities

mod comment;
mod interaction;
mod post;

pub use comment::Comment;
pub use interaction::Interaction;
pub use post::Post;
