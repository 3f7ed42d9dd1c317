//! Per-key single-writer lock with TTL fallback
//!
//! Serializes hot read-modify-write sections (view-count increments) per
//! content id. This is best-effort, not strict mutual exclusion: the TTL
//! lets a stuck holder be displaced instead of wedging the key forever.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use tracing::{debug, warn};

/// In-process keyed lock with expiry
#[derive(Default)]
pub struct KeyedLock {
    holders: DashMap<String, Instant>,
}

impl KeyedLock {
    pub fn new() -> Self {
        Self {
            holders: DashMap::new(),
        }
    }

    /// Try to take the lock for `key`
    ///
    /// Succeeds if the key is unheld or the previous holder's TTL has
    /// expired. Returns `false` without blocking otherwise.
    pub fn acquire(&self, key: &str, ttl: Duration) -> bool {
        let now = Instant::now();
        let mut acquired = false;

        let entry = self
            .holders
            .entry(key.to_string())
            .and_modify(|expires_at| {
                if now >= *expires_at {
                    warn!(key, "Displacing expired lock holder");
                    *expires_at = now + ttl;
                    acquired = true;
                }
            })
            .or_insert_with(|| {
                acquired = true;
                now + ttl
            });
        drop(entry);

        if acquired {
            debug!(key, ttl_ms = ttl.as_millis() as u64, "Lock acquired");
        } else {
            debug!(key, "Lock busy");
        }
        acquired
    }

    /// Release the lock for `key`; releasing an unheld key is a no-op
    pub fn release(&self, key: &str) {
        if self.holders.remove(key).is_some() {
            debug!(key, "Lock released");
        }
    }

    /// Whether `key` is currently held (and not expired)
    pub fn is_held(&self, key: &str) -> bool {
        self.holders
            .get(key)
            .is_some_and(|expires_at| Instant::now() < *expires_at)
    }
}
