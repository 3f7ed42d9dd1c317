//! Result payloads carried through the correlation store

use serde::{Deserialize, Serialize};

use board_core::{ContentType, Interaction, InteractionStatus, InteractionType, Snowflake};

/// Polymorphic result a consumer writes into a correlation slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventPayload {
    /// A plain id list (e.g. the posts a user has bookmarked)
    SubjectIds(Vec<Snowflake>),
    /// Full interaction records for a set of subjects
    Interactions(Vec<InteractionData>),
}

impl EventPayload {
    /// Unwrap an id list, empty for any other variant
    pub fn into_subject_ids(self) -> Vec<Snowflake> {
        match self {
            Self::SubjectIds(ids) => ids,
            Self::Interactions(_) => Vec::new(),
        }
    }

    /// Unwrap interaction records, empty for any other variant
    pub fn into_interactions(self) -> Vec<InteractionData> {
        match self {
            Self::Interactions(data) => data,
            Self::SubjectIds(_) => Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::SubjectIds(ids) => ids.is_empty(),
            Self::Interactions(data) => data.is_empty(),
        }
    }
}

/// Cross-context view of an interaction record
///
/// This is the shape the Interaction context hands to requesters; it is a
/// wire DTO, deliberately decoupled from the `Interaction` entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionData {
    pub id: Snowflake,
    pub subject_id: Snowflake,
    pub user_id: Snowflake,
    pub status: InteractionStatus,
    pub interaction_type: InteractionType,
    pub content_type: ContentType,
}

impl InteractionData {
    pub fn is_active_like(&self) -> bool {
        self.status.is_active() && self.interaction_type == InteractionType::Like
    }

    pub fn is_active_bookmark(&self) -> bool {
        self.status.is_active() && self.interaction_type == InteractionType::Bookmark
    }
}

impl From<&Interaction> for InteractionData {
    fn from(interaction: &Interaction) -> Self {
        Self {
            id: interaction.id,
            subject_id: interaction.subject_id,
            user_id: interaction.user_id,
            status: interaction.status,
            interaction_type: interaction.interaction_type,
            content_type: interaction.content_type,
        }
    }
}
