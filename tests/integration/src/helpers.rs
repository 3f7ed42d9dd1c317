//! In-memory repository doubles and context wiring
//!
//! The repositories are DashMap-backed and behave like the real thing for
//! the queries the services run. `test_context` wires them into a
//! `ServiceContext` with both event consumers registered, so the correlated
//! flows run end to end inside one process.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;

use board_core::traits::{
    CommentRepository, InteractionQuery, InteractionRepository, PostRepository, RepoResult,
};
use board_core::{Comment, ContentType, Interaction, InteractionType, Post, Snowflake};
use board_events::EventBus;
use board_service::{
    BookmarkPostsRequestedHandler, InteractionDataRequestedHandler, ServiceContext,
    ServiceContextBuilder,
};

/// In-memory post repository
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: DashMap<Snowflake, Post>,
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        Ok(self.posts.get(&id).map(|entry| entry.clone()))
    }

    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<Post>> {
        Ok(ids
            .iter()
            .filter_map(|id| self.posts.get(id).map(|entry| entry.clone()))
            .collect())
    }

    async fn save(&self, post: &Post) -> RepoResult<()> {
        self.posts.insert(post.id, post.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: Snowflake) -> RepoResult<()> {
        self.posts.remove(&id);
        Ok(())
    }
}

/// In-memory comment repository
#[derive(Default)]
pub struct InMemoryCommentRepository {
    comments: DashMap<Snowflake, Comment>,
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        Ok(self.comments.get(&id).map(|entry| entry.clone()))
    }

    async fn find_by_post(&self, post_id: Snowflake) -> RepoResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .comments
            .iter()
            .filter(|entry| entry.post_id == post_id)
            .map(|entry| entry.clone())
            .collect();
        comments.sort_by_key(|c| c.id);
        Ok(comments)
    }

    async fn save(&self, comment: &Comment) -> RepoResult<()> {
        self.comments.insert(comment.id, comment.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: Snowflake) -> RepoResult<()> {
        self.comments.remove(&id);
        Ok(())
    }
}

/// In-memory interaction repository
#[derive(Default)]
pub struct InMemoryInteractionRepository {
    interactions: DashMap<Snowflake, Interaction>,
}

#[async_trait]
impl InteractionRepository for InMemoryInteractionRepository {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Interaction>> {
        Ok(self.interactions.get(&id).map(|entry| entry.clone()))
    }

    async fn find_unique(&self, query: InteractionQuery) -> RepoResult<Option<Interaction>> {
        Ok(self
            .interactions
            .iter()
            .find(|entry| {
                entry.matches(
                    query.subject_id,
                    query.user_id,
                    query.interaction_type,
                    query.content_type,
                )
            })
            .map(|entry| entry.clone()))
    }

    async fn find_active_by_subjects(
        &self,
        subject_ids: &[Snowflake],
        content_type: ContentType,
    ) -> RepoResult<Vec<Interaction>> {
        Ok(self
            .interactions
            .iter()
            .filter(|entry| {
                entry.status.is_active()
                    && entry.content_type == content_type
                    && subject_ids.contains(&entry.subject_id)
            })
            .map(|entry| entry.clone())
            .collect())
    }

    async fn find_active_by_user(
        &self,
        user_id: Snowflake,
        interaction_type: InteractionType,
        content_type: ContentType,
    ) -> RepoResult<Vec<Interaction>> {
        Ok(self
            .interactions
            .iter()
            .filter(|entry| {
                entry.status.is_active()
                    && entry.user_id == user_id
                    && entry.interaction_type == interaction_type
                    && entry.content_type == content_type
            })
            .map(|entry| entry.clone())
            .collect())
    }

    async fn save(&self, interaction: &Interaction) -> RepoResult<()> {
        self.interactions.insert(interaction.id, interaction.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: Snowflake) -> RepoResult<()> {
        self.interactions.remove(&id);
        Ok(())
    }
}

/// Wire a full context with both event consumers registered
pub fn test_context() -> ServiceContext {
    test_context_with_timeout(Duration::from_millis(2000))
}

/// Same wiring, custom requester timeout
pub fn test_context_with_timeout(event_timeout: Duration) -> ServiceContext {
    let ctx = bare_context(event_timeout);
    register_consumers(&ctx);
    ctx
}

/// Context with no consumers; every correlated request hits its timeout
pub fn bare_context(event_timeout: Duration) -> ServiceContext {
    ServiceContextBuilder::new()
        .post_repo(Arc::new(InMemoryPostRepository::default()))
        .comment_repo(Arc::new(InMemoryCommentRepository::default()))
        .interaction_repo(Arc::new(InMemoryInteractionRepository::default()))
        .event_bus(Arc::new(EventBus::new()))
        .event_timeout(event_timeout)
        .build()
        .expect("all repositories provided")
}

/// Register the Interaction context's consumers on the context's bus
pub fn register_consumers(ctx: &ServiceContext) {
    ctx.event_bus()
        .register(Arc::new(BookmarkPostsRequestedHandler::new(
            ctx.interaction_repo_arc(),
            ctx.correlation_arc(),
        )));
    ctx.event_bus()
        .register(Arc::new(InteractionDataRequestedHandler::new(
            ctx.interaction_repo_arc(),
            ctx.correlation_arc(),
        )));
}
