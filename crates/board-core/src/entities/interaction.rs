//! Interaction entity - a user's like or bookmark on a post or comment
//!
//! At most one record exists per (subject, user, type, content type) tuple.
//! Toggling flips the status flag instead of deleting the row, so the full
//! interaction history is preserved.

use chrono::{DateTime, Utc};

use crate::value_objects::{ContentType, InteractionStatus, InteractionType, Snowflake};

/// Interaction entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interaction {
    pub id: Snowflake,
    /// Post or comment the interaction targets, depending on `content_type`
    pub subject_id: Snowflake,
    pub user_id: Snowflake,
    pub content_type: ContentType,
    pub interaction_type: InteractionType,
    pub status: InteractionStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Interaction {
    /// Create a fresh ACTIVE interaction
    pub fn new(
        id: Snowflake,
        subject_id: Snowflake,
        user_id: Snowflake,
        content_type: ContentType,
        interaction_type: InteractionType,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            subject_id,
            user_id,
            content_type,
            interaction_type,
            status: InteractionStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Flip the status flag, keeping the record and its creation time
    pub fn toggle(self) -> Self {
        Self {
            status: self.status.toggled(),
            updated_at: Utc::now(),
            ..self
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Check whether this record is the unique one for the given tuple
    pub fn matches(
        &self,
        subject_id: Snowflake,
        user_id: Snowflake,
        interaction_type: InteractionType,
        content_type: ContentType,
    ) -> bool {
        self.subject_id == subject_id
            && self.user_id == user_id
            && self.interaction_type == interaction_type
            && self.content_type == content_type
    }
}
