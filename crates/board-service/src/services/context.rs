//! Service context - dependency container for services
//!
//! Holds repositories, the event bus, the correlation store, and the other
//! shared collaborators a service needs.

use std::sync::Arc;
use std::time::Duration;

use board_common::AppConfig;
use board_core::traits::{CommentRepository, InteractionRepository, PostRepository};
use board_core::{Snowflake, SnowflakeGenerator};
use board_events::{CorrelationStore, EventBus, KeyedLock};

/// Service context containing all dependencies
///
/// Passed (by reference) to every service. Cheap to clone: everything is
/// behind an `Arc`.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories (ports; implementations are external collaborators)
    post_repo: Arc<dyn PostRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    interaction_repo: Arc<dyn InteractionRepository>,

    // Cross-context coordination
    event_bus: Arc<EventBus>,
    correlation: Arc<CorrelationStore>,
    keyed_lock: Arc<KeyedLock>,

    // ID generation
    snowflake_generator: Arc<SnowflakeGenerator>,

    // Tunables
    event_timeout: Duration,
    view_count_lock_ttl: Duration,
}

impl ServiceContext {
    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the interaction repository
    pub fn interaction_repo(&self) -> &dyn InteractionRepository {
        self.interaction_repo.as_ref()
    }

    /// Get the domain event bus
    pub fn event_bus(&self) -> &EventBus {
        self.event_bus.as_ref()
    }

    /// Get the correlation store
    pub fn correlation(&self) -> &CorrelationStore {
        self.correlation.as_ref()
    }

    /// Shared handle to the correlation store (for handler wiring)
    pub fn correlation_arc(&self) -> Arc<CorrelationStore> {
        self.correlation.clone()
    }

    /// Shared handle to the interaction repository (for handler wiring)
    pub fn interaction_repo_arc(&self) -> Arc<dyn InteractionRepository> {
        self.interaction_repo.clone()
    }

    /// Get the keyed TTL lock
    pub fn keyed_lock(&self) -> &KeyedLock {
        self.keyed_lock.as_ref()
    }

    /// How long requesters wait on cross-context data
    pub fn event_timeout(&self) -> Duration {
        self.event_timeout
    }

    /// TTL for the per-post view-count lock
    pub fn view_count_lock_ttl(&self) -> Duration {
        self.view_count_lock_ttl
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("event_timeout", &self.event_timeout)
            .field("view_count_lock_ttl", &self.view_count_lock_ttl)
            .finish_non_exhaustive()
    }
}

/// Builder for creating a ServiceContext
pub struct ServiceContextBuilder {
    post_repo: Option<Arc<dyn PostRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    interaction_repo: Option<Arc<dyn InteractionRepository>>,
    event_bus: Option<Arc<EventBus>>,
    correlation: Option<Arc<CorrelationStore>>,
    keyed_lock: Option<Arc<KeyedLock>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    event_timeout: Duration,
    view_count_lock_ttl: Duration,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        let defaults = AppConfig::default();
        Self {
            post_repo: None,
            comment_repo: None,
            interaction_repo: None,
            event_bus: None,
            correlation: None,
            keyed_lock: None,
            snowflake_generator: None,
            event_timeout: defaults.events.request_timeout(),
            view_count_lock_ttl: defaults.lock.view_count_ttl(),
        }
    }

    /// Take timeouts and worker id from loaded configuration
    pub fn config(mut self, config: &AppConfig) -> Self {
        self.event_timeout = config.events.request_timeout();
        self.view_count_lock_ttl = config.lock.view_count_ttl();
        if self.snowflake_generator.is_none() {
            self.snowflake_generator =
                Some(Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id)));
        }
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    pub fn interaction_repo(mut self, repo: Arc<dyn InteractionRepository>) -> Self {
        self.interaction_repo = Some(repo);
        self
    }

    pub fn event_bus(mut self, bus: Arc<EventBus>) -> Self {
        self.event_bus = Some(bus);
        self
    }

    pub fn correlation(mut self, store: Arc<CorrelationStore>) -> Self {
        self.correlation = Some(store);
        self
    }

    pub fn keyed_lock(mut self, lock: Arc<KeyedLock>) -> Self {
        self.keyed_lock = Some(lock);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn event_timeout(mut self, timeout: Duration) -> Self {
        self.event_timeout = timeout;
        self
    }

    pub fn view_count_lock_ttl(mut self, ttl: Duration) -> Self {
        self.view_count_lock_ttl = ttl;
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if a repository is missing. The
    /// bus, correlation store, lock, and generator fall back to fresh
    /// defaults so tests can wire only what they care about.
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext {
            post_repo: self
                .post_repo
                .ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            comment_repo: self
                .comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            interaction_repo: self
                .interaction_repo
                .ok_or_else(|| ServiceError::validation("interaction_repo is required"))?,
            event_bus: self.event_bus.unwrap_or_else(|| Arc::new(EventBus::new())),
            correlation: self
                .correlation
                .unwrap_or_else(|| Arc::new(CorrelationStore::new())),
            keyed_lock: self.keyed_lock.unwrap_or_else(|| Arc::new(KeyedLock::new())),
            snowflake_generator: self
                .snowflake_generator
                .unwrap_or_else(|| Arc::new(SnowflakeGenerator::new(0))),
            event_timeout: self.event_timeout,
            view_count_lock_ttl: self.view_count_lock_ttl,
        })
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
