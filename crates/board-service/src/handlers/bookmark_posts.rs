//! Answers bookmark-list requests from the Post context

use std::sync::Arc;

use async_trait::async_trait;
use board_core::traits::InteractionRepository;
use board_core::{DomainEvent, InteractionType, Snowflake};
use board_events::{CorrelationStore, EventHandler, EventPayload, HandlerError};
use tracing::{debug, warn};

/// Consumes `BookmarkPostsRequested` and completes the slot with the ids of
/// everything the user has an ACTIVE bookmark on
pub struct BookmarkPostsRequestedHandler {
    interaction_repo: Arc<dyn InteractionRepository>,
    correlation: Arc<CorrelationStore>,
}

impl BookmarkPostsRequestedHandler {
    pub fn new(
        interaction_repo: Arc<dyn InteractionRepository>,
        correlation: Arc<CorrelationStore>,
    ) -> Self {
        Self {
            interaction_repo,
            correlation,
        }
    }
}

#[async_trait]
impl EventHandler for BookmarkPostsRequestedHandler {
    fn name(&self) -> &'static str {
        "bookmark_posts_requested"
    }

    fn wants(&self, event: &DomainEvent) -> bool {
        matches!(event, DomainEvent::BookmarkPostsRequested(_))
    }

    async fn handle(&self, event: DomainEvent) -> Result<(), HandlerError> {
        let DomainEvent::BookmarkPostsRequested(request) = event else {
            return Ok(());
        };

        let subject_ids: Vec<Snowflake> = self
            .interaction_repo
            .find_active_by_user(request.user_id, InteractionType::Bookmark, request.content_type)
            .await?
            .iter()
            .map(|interaction| interaction.subject_id)
            .collect();

        debug!(
            request_id = %request.request_id,
            user_id = %request.user_id,
            count = subject_ids.len(),
            "Resolved bookmarked subject ids"
        );

        if !self
            .correlation
            .complete(&request.request_id, EventPayload::SubjectIds(subject_ids))
        {
            // Requester already timed out or the slot was never registered.
            warn!(request_id = %request.request_id, "No pending slot for bookmark response");
        }
        Ok(())
    }
}
