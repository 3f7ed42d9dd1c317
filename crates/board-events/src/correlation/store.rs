//! Request/response bridge between bounded contexts
//!
//! A requester registers a pending slot under a generated request id,
//! publishes an event, and blocks (with a timeout) until a consumer in the
//! owning context writes the result into the slot. Internally each slot is a
//! `oneshot` channel; the public contract is only
//! `register_pending` / `complete` / `wait_for`.
//!
//! Failure policy: `wait_for` never returns an error. Timeouts, missing
//! slots, and channel failures all resolve to the caller-supplied default so
//! the request pipeline is never blocked on foreign-context data.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use dashmap::DashMap;
use tokio::sync::oneshot;
use tracing::{debug, warn};

use super::payload::EventPayload;

/// A pending or in-flight correlation slot
struct Slot {
    /// Consumed by the first `complete` call
    tx: Option<oneshot::Sender<EventPayload>>,
    /// Consumed by the (single) waiter
    rx: Option<oneshot::Receiver<EventPayload>>,
}

/// Request-id-keyed store bridging asynchronous consumers back to
/// synchronous-style callers
///
/// Owned and injected (no global state); safe for concurrent registration,
/// completion, and waiting from any number of tasks.
#[derive(Default)]
pub struct CorrelationStore {
    slots: DashMap<String, Slot>,
}

impl CorrelationStore {
    pub fn new() -> Self {
        Self {
            slots: DashMap::new(),
        }
    }

    /// Produce a collision-resistant request id: `{prefix}_{millis}_{random}`
    pub fn generate_request_id(&self, prefix: &str) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let suffix: u32 = rand::random();
        format!("{prefix}_{millis}_{suffix:08x}")
    }

    /// Create a PENDING slot for `request_id`
    ///
    /// Must be called before the triggering event is published, otherwise a
    /// fast consumer could complete before the slot exists and the waiter
    /// would only ever see the timeout default. Re-registering an in-flight
    /// id replaces the old slot.
    pub fn register_pending(&self, request_id: &str) {
        let (tx, rx) = oneshot::channel();
        let replaced = self
            .slots
            .insert(
                request_id.to_string(),
                Slot {
                    tx: Some(tx),
                    rx: Some(rx),
                },
            )
            .is_some();

        if replaced {
            warn!(request_id, "Replaced an in-flight correlation slot");
        } else {
            debug!(request_id, "Registered pending correlation slot");
        }
    }

    /// Write the result for `request_id`; first caller wins
    ///
    /// Later calls for the same id, and calls for unknown or already-evicted
    /// ids, are no-ops. Returns whether the completion was delivered to a
    /// live waiter. Never blocks.
    pub fn complete(&self, request_id: &str, result: EventPayload) -> bool {
        let Some(tx) = self
            .slots
            .get_mut(request_id)
            .and_then(|mut slot| slot.tx.take())
        else {
            debug!(request_id, "No pending slot for completion, dropping result");
            return false;
        };

        match tx.send(result) {
            Ok(()) => {
                debug!(request_id, "Completed correlation slot");
                true
            }
            Err(_) => {
                // Waiter already timed out and dropped its receiver
                debug!(request_id, "Waiter gone, completion dropped");
                false
            }
        }
    }

    /// Await the result for `request_id`, up to `timeout`
    ///
    /// Returns `default` when the deadline passes, when the slot is unknown,
    /// or on any internal channel error; errors are never propagated. The
    /// slot is evicted when this returns, so a late `complete` becomes a
    /// logged no-op rather than a leak.
    pub async fn wait_for(
        &self,
        request_id: &str,
        timeout: Duration,
        default: EventPayload,
    ) -> EventPayload {
        // Take the receiver out before awaiting so no map lock is held
        // across the suspension point.
        let rx = self
            .slots
            .get_mut(request_id)
            .and_then(|mut slot| slot.rx.take());

        let Some(rx) = rx else {
            warn!(request_id, "wait_for on unknown or already-consumed slot");
            self.slots.remove(request_id);
            return default;
        };

        let result = match tokio::time::timeout(timeout, rx).await {
            Ok(Ok(payload)) => payload,
            Ok(Err(_)) => {
                warn!(request_id, "Correlation sender dropped without completing");
                default
            }
            Err(_) => {
                debug!(
                    request_id,
                    timeout_ms = timeout.as_millis() as u64,
                    "Cross-context request timed out, using default"
                );
                default
            }
        };

        self.slots.remove(request_id);
        result
    }

    /// Number of slots currently held (pending or in-flight)
    pub fn pending_len(&self) -> usize {
        self.slots.len()
    }
}
