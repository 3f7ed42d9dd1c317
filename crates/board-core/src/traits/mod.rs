//! Traits (ports) defined by the domain layer

mod repositories;

pub use repositories::{
    CacheStore, CommentRepository, InteractionQuery, InteractionRepository, PostRepository,
    RepoResult,
};
