//! Event consumers for the Interaction context
//!
//! These handlers answer cross-context request events by querying the
//! interaction repository and completing the matching correlation slot.

mod bookmark_posts;
mod interaction_data;

pub use bookmark_posts::BookmarkPostsRequestedHandler;
pub use interaction_data::InteractionDataRequestedHandler;
