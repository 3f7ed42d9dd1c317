//! Answers interaction-data requests from the Comment context

use std::sync::Arc;

use async_trait::async_trait;
use board_core::traits::InteractionRepository;
use board_core::DomainEvent;
use board_events::{CorrelationStore, EventHandler, EventPayload, HandlerError, InteractionData};
use tracing::{debug, warn};

/// Consumes `InteractionDataRequested` and completes the slot with the
/// ACTIVE interaction records for the requested subjects
pub struct InteractionDataRequestedHandler {
    interaction_repo: Arc<dyn InteractionRepository>,
    correlation: Arc<CorrelationStore>,
}

impl InteractionDataRequestedHandler {
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
impl EventHandler for InteractionDataRequestedHandler {
    fn name(&self) -> &'static str {
        "interaction_data_requested"
    }

    fn wants(&self, event: &DomainEvent) -> bool {
        matches!(event, DomainEvent::InteractionDataRequested(_))
    }

    async fn handle(&self, event: DomainEvent) -> Result<(), HandlerError> {
        let DomainEvent::InteractionDataRequested(request) = event else {
            return Ok(());
        };

        let interactions: Vec<InteractionData> = self
            .interaction_repo
            .find_active_by_subjects(&request.subject_ids, request.content_type)
            .await?
            .iter()
            .map(InteractionData::from)
            .collect();

        debug!(
            request_id = %request.request_id,
            subjects = request.subject_ids.len(),
            records = interactions.len(),
            "Resolved interaction data"
        );

        if !self
            .correlation
            .complete(&request.request_id, EventPayload::Interactions(interactions))
        {
            warn!(request_id = %request.request_id, "No pending slot for interaction response");
        }
        Ok(())
    }
}
