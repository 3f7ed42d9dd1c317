//! Event bus - fire-and-forget delivery of domain events
//!
//! Handlers are registered once at startup; `publish` offloads each matching
//! handler onto its own task and returns immediately. The publisher never
//! awaits handler completion directly; when it needs a handler's output it
//! waits through the correlation store instead.

use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, error, trace};

use board_core::DomainEvent;

use super::handler::EventHandler;

/// In-process publish/subscribe bus for domain events
///
/// Publishing with zero registered (or zero matching) handlers is valid; a
/// correlated requester then simply times out to its default.
#[derive(Default)]
pub struct EventBus {
    handlers: RwLock<Vec<Arc<dyn EventHandler>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(Vec::new()),
        }
    }

    /// Register a handler; typically done once during wiring
    pub fn register(&self, handler: Arc<dyn EventHandler>) {
        debug!(handler = handler.name(), "Registered event handler");
        self.handlers.write().push(handler);
    }

    /// Number of registered handlers
    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Deliver `event` to every interested handler, without waiting
    ///
    /// Each matching handler runs on its own spawned task. Handler errors
    /// are logged and swallowed here so one failing consumer cannot corrupt
    /// the bus or the publisher.
    pub fn publish(&self, event: DomainEvent) {
        let matching: Vec<Arc<dyn EventHandler>> = self
            .handlers
            .read()
            .iter()
            .filter(|h| h.wants(&event))
            .cloned()
            .collect();

        trace!(
            event_type = event.event_type(),
            handlers = matching.len(),
            "Publishing domain event"
        );

        for handler in matching {
            let event = event.clone();
            tokio::spawn(async move {
                if let Err(err) = handler.handle(event).await {
                    error!(
                        handler = handler.name(),
                        error = %err,
                        "Event handler failed, swallowing at bus boundary"
                    );
                }
            });
        }
    }
}
