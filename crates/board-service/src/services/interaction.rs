//! Interaction service
//!
//! Owns likes and bookmarks for both posts and comments: the toggle state
//! machine and the local queries the event consumers run on behalf of other
//! contexts.

use board_core::events::InteractionToggledEvent;
use board_core::traits::InteractionQuery;
use board_core::{ContentType, DomainError, DomainEvent, Interaction, InteractionType, Snowflake};
use tracing::{info, instrument};

use crate::dto::InteractionResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Interaction service
pub struct InteractionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InteractionService<'a> {
    /// Create a new InteractionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Toggle a like or bookmark
    ///
    /// No prior record creates a fresh ACTIVE one; an existing record flips
    /// ACTIVE↔INACTIVE in place, preserving history. Concurrent duplicate
    /// toggles on the same tuple are not serialized (last write wins),
    /// matching the persistence contract which has no optimistic lock.
    #[instrument(skip(self))]
    pub async fn toggle_interaction(
        &self,
        user_id: Snowflake,
        subject_id: Snowflake,
        interaction_type: InteractionType,
        content_type: ContentType,
    ) -> ServiceResult<InteractionResponse> {
        if user_id.is_zero() {
            return Err(DomainError::BlankIdentifier("user_id").into());
        }
        if subject_id.is_zero() {
            return Err(DomainError::BlankIdentifier("subject_id").into());
        }

        let existing = self
            .ctx
            .interaction_repo()
            .find_unique(InteractionQuery {
                user_id,
                subject_id,
                interaction_type,
                content_type,
            })
            .await?;

        let interaction = match existing {
            Some(record) => record.toggle(),
            None => Interaction::new(
                self.ctx.generate_id(),
                subject_id,
                user_id,
                content_type,
                interaction_type,
            ),
        };

        self.ctx.interaction_repo().save(&interaction).await?;

        info!(
            interaction_id = %interaction.id,
            subject_id = %subject_id,
            user_id = %user_id,
            interaction_type = %interaction_type,
            status = %interaction.status,
            "Interaction toggled"
        );

        self.ctx
            .event_bus()
            .publish(DomainEvent::InteractionToggled(InteractionToggledEvent {
                interaction_id: interaction.id,
                subject_id,
                user_id,
                interaction_type,
                content_type,
                status: interaction.status,
                timestamp: chrono::Utc::now(),
            }));

        Ok(InteractionResponse::from(&interaction))
    }

    /// All ACTIVE interactions targeting the given subjects
    ///
    /// This is the local query the event consumers run when another context
    /// asks for interaction data.
    #[instrument(skip(self))]
    pub async fn get_active_interactions(
        &self,
        subject_ids: &[Snowflake],
        content_type: ContentType,
    ) -> ServiceResult<Vec<Interaction>> {
        Ok(self
            .ctx
            .interaction_repo()
            .find_active_by_subjects(subject_ids, content_type)
            .await?)
    }

    /// Number of ACTIVE LIKE records for one subject
    ///
    /// This is the like count reported for the subject; it counts records,
    /// so the at-most-one-ACTIVE-per-tuple invariant makes it a user count.
    #[instrument(skip(self))]
    pub async fn like_count(
        &self,
        subject_id: Snowflake,
        content_type: ContentType,
    ) -> ServiceResult<usize> {
        let interactions = self
            .ctx
            .interaction_repo()
            .find_active_by_subjects(&[subject_id], content_type)
            .await?;

        Ok(interactions
            .iter()
            .filter(|i| i.interaction_type == InteractionType::Like)
            .count())
    }
}
