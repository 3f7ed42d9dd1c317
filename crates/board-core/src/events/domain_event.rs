//! Domain events - events crossing bounded-context boundaries
//!
//! Two kinds of events travel over the in-process bus:
//! - request events (`*Requested`): carry a `request_id` and the filter
//!   fields the owning context needs; the publisher awaits the answer
//!   through the correlation store, never through the bus itself
//! - notification events: fire-and-forget facts, no correlation
//!
//! Events are immutable once published.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{ContentType, InteractionStatus, InteractionType, Snowflake};

/// All possible domain events
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DomainEvent {
    // =========================================================================
    // Cross-context request events (correlated)
    // =========================================================================
    BookmarkPostsRequested(BookmarkPostsRequestedEvent),
    InteractionDataRequested(InteractionDataRequestedEvent),

    // =========================================================================
    // Notification events
    // =========================================================================
    InteractionToggled(InteractionToggledEvent),
    PostViewed(PostViewedEvent),
}

impl DomainEvent {
    /// Get the event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::BookmarkPostsRequested(_) => "BOOKMARK_POSTS_REQUESTED",
            Self::InteractionDataRequested(_) => "INTERACTION_DATA_REQUESTED",
            Self::InteractionToggled(_) => "INTERACTION_TOGGLED",
            Self::PostViewed(_) => "POST_VIEWED",
        }
    }

    /// Get the timestamp of the event
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::BookmarkPostsRequested(e) => e.timestamp,
            Self::InteractionDataRequested(e) => e.timestamp,
            Self::InteractionToggled(e) => e.timestamp,
            Self::PostViewed(e) => e.timestamp,
        }
    }

    /// Correlation id, present only on request events
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::BookmarkPostsRequested(e) => Some(&e.request_id),
            Self::InteractionDataRequested(e) => Some(&e.request_id),
            Self::InteractionToggled(_) | Self::PostViewed(_) => None,
        }
    }
}

// ============================================================================
// Event Structs
// ============================================================================

/// A requesting context wants the ids of everything a user has bookmarked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmarkPostsRequestedEvent {
    pub request_id: String,
    pub user_id: Snowflake,
    pub content_type: ContentType,
    pub timestamp: DateTime<Utc>,
}

/// A requesting context wants the active interaction records for a set of subjects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionDataRequestedEvent {
    pub request_id: String,
    pub subject_ids: Vec<Snowflake>,
    pub content_type: ContentType,
    pub timestamp: DateTime<Utc>,
}

/// An interaction was created or flipped
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionToggledEvent {
    pub interaction_id: Snowflake,
    pub subject_id: Snowflake,
    pub user_id: Snowflake,
    pub interaction_type: InteractionType,
    pub content_type: ContentType,
    pub status: InteractionStatus,
    pub timestamp: DateTime<Utc>,
}

/// A post's view counter was bumped
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostViewedEvent {
    pub post_id: Snowflake,
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Event Creation Helpers
// ============================================================================

impl BookmarkPostsRequestedEvent {
    pub fn new(request_id: impl Into<String>, user_id: Snowflake, content_type: ContentType) -> Self {
        Self {
            request_id: request_id.into(),
            user_id,
            content_type,
            timestamp: Utc::now(),
        }
    }
}

impl InteractionDataRequestedEvent {
    pub fn new(
        request_id: impl Into<String>,
        subject_ids: Vec<Snowflake>,
        content_type: ContentType,
    ) -> Self {
        Self {
            request_id: request_id.into(),
            subject_ids,
            content_type,
            timestamp: Utc::now(),
        }
    }
}

impl PostViewedEvent {
    pub fn new(post_id: Snowflake) -> Self {
        Self {
            post_id,
            timestamp: Utc::now(),
        }
    }
}
