//! Post service
//!
//! Post CRUD plus the two coordination-heavy operations: fetching a user's
//! bookmarked posts through the cross-context event bridge, and the locked
//! background view-count increment.

use board_core::events::{BookmarkPostsRequestedEvent, PostViewedEvent};
use board_core::{ContentType, DomainEvent, Post, Snowflake};
use board_events::EventPayload;
use tracing::{debug, info, instrument, warn};

use crate::dto::{CreatePostRequest, PostResponse, UpdatePostRequest, ValidateExt};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a post
    #[instrument(skip(self, request))]
    pub async fn create_post(
        &self,
        author_id: Snowflake,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        request.validate_into_service_error()?;

        let post = Post::new(
            self.ctx.generate_id(),
            author_id,
            request.title,
            request.content,
        )?;
        self.ctx.post_repo().save(&post).await?;

        info!(post_id = %post.id, author_id = %author_id, "Post created");
        Ok(PostResponse::from(&post))
    }

    /// Fetch a single post
    #[instrument(skip(self))]
    pub async fn get_post(&self, post_id: Snowflake) -> ServiceResult<PostResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;
        Ok(PostResponse::from(&post))
    }

    /// Update title/content/visibility; only the author may edit
    #[instrument(skip(self, request))]
    pub async fn update_post(
        &self,
        user_id: Snowflake,
        post_id: Snowflake,
        request: UpdatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        if !post.is_author(user_id) {
            return Err(board_core::DomainError::NotPostAuthor.into());
        }

        let mut updated = post.edited(request.title, request.content)?;
        if let Some(is_public) = request.is_public {
            updated = updated.with_visibility(is_public);
        }
        self.ctx.post_repo().save(&updated).await?;

        info!(post_id = %post_id, "Post updated");
        Ok(PostResponse::from(&updated))
    }

    /// Delete a post; only the author may delete
    #[instrument(skip(self))]
    pub async fn delete_post(&self, user_id: Snowflake, post_id: Snowflake) -> ServiceResult<()> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        if !post.is_author(user_id) {
            return Err(board_core::DomainError::NotPostAuthor.into());
        }

        self.ctx.post_repo().delete_by_id(post_id).await?;
        info!(post_id = %post_id, "Post deleted");
        Ok(())
    }

    /// Fetch every post the user has bookmarked
    ///
    /// Bookmark ownership lives in the Interaction context, so this runs the
    /// cross-context sequence: register a pending slot, publish
    /// `BookmarkPostsRequested`, wait up to the configured timeout, then
    /// batch-fetch the returned ids. A timeout and "no bookmarks" are
    /// indistinguishable here: both yield an empty list, never an error.
    #[instrument(skip(self))]
    pub async fn get_bookmarked_posts(
        &self,
        user_id: Snowflake,
        content_type: ContentType,
    ) -> ServiceResult<Vec<PostResponse>> {
        let request_id = self.ctx.correlation().generate_request_id("bookmark");
        debug!(user_id = %user_id, request_id, "Requesting bookmarked post ids");

        // The slot must exist before the event goes out, or a fast consumer
        // could answer into the void.
        self.ctx.correlation().register_pending(&request_id);
        self.ctx
            .event_bus()
            .publish(DomainEvent::BookmarkPostsRequested(
                BookmarkPostsRequestedEvent::new(request_id.clone(), user_id, content_type),
            ));

        let post_ids = self
            .ctx
            .correlation()
            .wait_for(
                &request_id,
                self.ctx.event_timeout(),
                EventPayload::SubjectIds(Vec::new()),
            )
            .await
            .into_subject_ids();

        debug!(
            user_id = %user_id,
            count = post_ids.len(),
            "Retrieved bookmarked post ids via event"
        );

        let posts = self.ctx.post_repo().find_by_ids(&post_ids).await?;
        Ok(posts
            .iter()
            .map(|post| PostResponse::from(post).with_bookmarked(true))
            .collect())
    }

    /// Bump a post's view counter under the per-post keyed lock
    ///
    /// Best effort: if the lock is busy the increment is skipped rather than
    /// retried, and lock expiry displaces a stuck holder.
    #[instrument(skip(self))]
    pub async fn increase_view_count(&self, post_id: Snowflake) -> ServiceResult<()> {
        let key = format!("view_post:{post_id}");
        if !self
            .ctx
            .keyed_lock()
            .acquire(&key, self.ctx.view_count_lock_ttl())
        {
            warn!(post_id = %post_id, "View-count lock busy, skipping increment");
            return Ok(());
        }

        let result = self.locked_increment(post_id).await;
        self.ctx.keyed_lock().release(&key);
        result
    }

    /// Fire-and-forget variant: offload the increment so the request path
    /// never waits on it
    pub fn increase_view_count_async(&self, post_id: Snowflake) {
        let ctx = self.ctx.clone();
        tokio::spawn(async move {
            if let Err(err) = PostService::new(&ctx).increase_view_count(post_id).await {
                warn!(post_id = %post_id, error = %err, "Background view-count increment failed");
            }
        });
    }

    async fn locked_increment(&self, post_id: Snowflake) -> ServiceResult<()> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))?;

        let updated = post.increase_view_count();
        self.ctx.post_repo().save(&updated).await?;

        self.ctx
            .event_bus()
            .publish(DomainEvent::PostViewed(PostViewedEvent::new(post_id)));

        debug!(post_id = %post_id, view_count = updated.view_count, "View count increased");
        Ok(())
    }
}
