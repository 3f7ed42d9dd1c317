//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; persistence is an external
//! collaborator and no implementation lives in this workspace. Test doubles
//! back these traits in the integration test crate.

use async_trait::async_trait;

use crate::entities::{Comment, Interaction, Post};
use crate::error::DomainError;
use crate::value_objects::{ContentType, InteractionType, Snowflake};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>>;

    /// Batch lookup by ID list; missing ids are skipped, order unspecified
    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<Post>>;

    /// Insert or update a post
    async fn save(&self, post: &Post) -> RepoResult<()>;

    /// Delete a post
    async fn delete_by_id(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Comment Repository
// ============================================================================

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Find comment by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>>;

    /// List comments under a post, oldest first
    async fn find_by_post(&self, post_id: Snowflake) -> RepoResult<Vec<Comment>>;

    /// Insert or update a comment
    async fn save(&self, comment: &Comment) -> RepoResult<()>;

    /// Delete a comment
    async fn delete_by_id(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Interaction Repository
// ============================================================================

/// Filter for the unique-record lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionQuery {
    pub user_id: Snowflake,
    pub subject_id: Snowflake,
    pub interaction_type: InteractionType,
    pub content_type: ContentType,
}

#[async_trait]
pub trait InteractionRepository: Send + Sync {
    /// Find interaction by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Interaction>>;

    /// Find the unique record for a (subject, user, type, content type) tuple,
    /// regardless of status
    async fn find_unique(&self, query: InteractionQuery) -> RepoResult<Option<Interaction>>;

    /// All ACTIVE interactions targeting any of the given subjects
    async fn find_active_by_subjects(
        &self,
        subject_ids: &[Snowflake],
        content_type: ContentType,
    ) -> RepoResult<Vec<Interaction>>;

    /// All ACTIVE interactions of one type made by a user
    async fn find_active_by_user(
        &self,
        user_id: Snowflake,
        interaction_type: InteractionType,
        content_type: ContentType,
    ) -> RepoResult<Vec<Interaction>>;

    /// Insert or update an interaction
    async fn save(&self, interaction: &Interaction) -> RepoResult<()>;

    /// Delete an interaction
    async fn delete_by_id(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Cache Store
// ============================================================================

/// Key-value cache collaborator (e.g. backed by Redis in deployment)
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Fetch a raw value, `None` on miss or expiry
    async fn get(&self, key: &str) -> RepoResult<Option<Vec<u8>>>;

    /// Store a value with a TTL in seconds
    async fn set(&self, key: &str, value: Vec<u8>, ttl_seconds: u64) -> RepoResult<()>;
}
