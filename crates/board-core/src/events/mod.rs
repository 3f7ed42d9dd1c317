//! Domain events

mod domain_event;

pub use domain_event::{
    BookmarkPostsRequestedEvent, DomainEvent, InteractionDataRequestedEvent,
    InteractionToggledEvent, PostViewedEvent,
};
