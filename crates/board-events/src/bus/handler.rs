//! Event handler trait and boundary error type

use async_trait::async_trait;
use thiserror::Error;

use board_core::DomainEvent;

/// Error a handler may surface at the bus boundary
///
/// The bus logs and swallows these; they never reach the publisher. A
/// handler that fails simply leaves the correlation slot pending, so the
/// requester sees its timeout default.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Query failed: {0}")]
    Query(#[from] board_core::DomainError),

    #[error("Handler failed: {0}")]
    Other(String),
}

/// A consumer in some bounded context interested in a subset of events
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Handler name, used in dispatch logging
    fn name(&self) -> &'static str;

    /// Whether this handler consumes the given event
    fn wants(&self, event: &DomainEvent) -> bool;

    /// Process one event; errors are logged and swallowed by the bus
    async fn handle(&self, event: DomainEvent) -> Result<(), HandlerError>;
}
