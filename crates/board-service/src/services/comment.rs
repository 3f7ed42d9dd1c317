//! Comment service
//!
//! Comment CRUD plus the correlated fetch of interaction data from the
//! Interaction context, used to decorate comment lists with like counts.

use std::collections::HashMap;

use board_core::events::InteractionDataRequestedEvent;
use board_core::{Comment, ContentType, DomainEvent, Snowflake};
use board_events::{EventPayload, InteractionData};
use tracing::{debug, info, instrument};

use crate::dto::{CommentResponse, CreateCommentRequest, ValidateExt};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a comment on an existing post
    #[instrument(skip(self, request))]
    pub async fn create_comment(
        &self,
        author_id: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        request.validate_into_service_error()?;

        let post_id = request.post_id;
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        let comment = Comment::new(self.ctx.generate_id(), post_id, author_id, request.content)?;
        self.ctx.comment_repo().save(&comment).await?;

        info!(comment_id = %comment.id, post_id = %post_id, "Comment created");
        Ok(CommentResponse::from(&comment))
    }

    /// All comments under a post, decorated with like counts
    #[instrument(skip(self))]
    pub async fn get_comments(&self, post_id: Snowflake) -> ServiceResult<Vec<CommentResponse>> {
        let comments = self.ctx.comment_repo().find_by_post(post_id).await?;
        if comments.is_empty() {
            return Ok(Vec::new());
        }

        let comment_ids: Vec<Snowflake> = comments.iter().map(|c| c.id).collect();
        let counts = self.like_counts(&comment_ids).await;

        Ok(comments
            .iter()
            .map(|comment| {
                CommentResponse::from(comment)
                    .with_like_count(counts.get(&comment.id).copied().unwrap_or(0))
            })
            .collect())
    }

    /// Delete a comment; only the author may delete
    #[instrument(skip(self))]
    pub async fn delete_comment(
        &self,
        user_id: Snowflake,
        comment_id: Snowflake,
    ) -> ServiceResult<()> {
        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))?;

        if !comment.is_author(user_id) {
            return Err(board_core::DomainError::NotCommentAuthor.into());
        }

        self.ctx.comment_repo().delete_by_id(comment_id).await?;
        info!(comment_id = %comment_id, "Comment deleted");
        Ok(())
    }

    /// Fetch interaction records for a set of comments from the owning context
    ///
    /// Same correlated round trip as the bookmark fetch: register, publish
    /// `InteractionDataRequested`, wait with an empty-list default. The
    /// comment list renders without decorations rather than failing when the
    /// answer is late.
    #[instrument(skip(self))]
    pub async fn get_interaction_data(
        &self,
        comment_ids: &[Snowflake],
    ) -> Vec<InteractionData> {
        if comment_ids.is_empty() {
            return Vec::new();
        }

        let request_id = self.ctx.correlation().generate_request_id("interaction");
        debug!(request_id, count = comment_ids.len(), "Requesting interaction data");

        self.ctx.correlation().register_pending(&request_id);
        self.ctx
            .event_bus()
            .publish(DomainEvent::InteractionDataRequested(
                InteractionDataRequestedEvent::new(
                    request_id.clone(),
                    comment_ids.to_vec(),
                    ContentType::Comment,
                ),
            ));

        self.ctx
            .correlation()
            .wait_for(
                &request_id,
                self.ctx.event_timeout(),
                EventPayload::Interactions(Vec::new()),
            )
            .await
            .into_interactions()
    }

    /// ACTIVE LIKE counts per comment, derived from the correlated data
    #[instrument(skip(self))]
    pub async fn like_counts(
        &self,
        comment_ids: &[Snowflake],
    ) -> HashMap<Snowflake, usize> {
        let interactions = self.get_interaction_data(comment_ids).await;

        let mut counts: HashMap<Snowflake, usize> = HashMap::new();
        for interaction in interactions.iter().filter(|i| i.is_active_like()) {
            *counts.entry(interaction.subject_id).or_insert(0) += 1;
        }
        counts
    }
}
