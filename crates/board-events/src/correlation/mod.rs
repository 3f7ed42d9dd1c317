//! Correlation store - request-id-keyed result slots with bounded waits

mod payload;
mod store;

pub use payload::{EventPayload, InteractionData};
pub use store::CorrelationStore;
