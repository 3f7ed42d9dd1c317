//! # board-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain events.
//! This crate has zero dependencies on infrastructure (database, event bus, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Comment, Interaction, Post};
pub use error::DomainError;
pub use events::DomainEvent;
pub use traits::{
    CacheStore, CommentRepository, InteractionQuery, InteractionRepository, PostRepository,
    RepoResult,
};
pub use value_objects::{
    ContentType, InteractionStatus, InteractionType, Snowflake, SnowflakeGenerator,
    SnowflakeParseError,
};
