//! # board-events
//!
//! The cross-context coordination layer: an in-process domain event bus, the
//! request-id-keyed correlation store that bridges asynchronous consumers
//! back to synchronous-style callers, and a best-effort keyed TTL lock.
//!
//! The integration contract other bounded contexts build against is:
//! `generate_request_id`, `register_pending`, `publish`, `complete`,
//! `wait_for`.

pub mod bus;
pub mod correlation;
pub mod lock;

// Re-export commonly used types at crate root
pub use bus::{EventBus, EventHandler, HandlerError};
pub use correlation::{CorrelationStore, EventPayload, InteractionData};
pub use lock::KeyedLock;
