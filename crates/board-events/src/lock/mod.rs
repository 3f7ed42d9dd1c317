//! Best-effort keyed locking

mod keyed_lock;

pub use keyed_lock::KeyedLock;
