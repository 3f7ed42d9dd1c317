//! In-process domain event bus

mod event_bus;
mod handler;

pub use event_bus::EventBus;
pub use handler::{EventHandler, HandlerError};
