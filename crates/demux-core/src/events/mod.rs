//! Event types, handler traits, and lifecycle telemetry records.
//!
//! Everything the dispatcher routes or emits lives here:
//!
//! - [`Event`] / [`EventType`]: the unit of work and its open-ended type tag
//! - [`Handler`]: the async capability bound to one event type
//! - [`LifecycleNotification`]: the start/end telemetry record
//! - [`HandlerError`] / [`DispatchError`]: failure taxonomy
//!
//! The type tag is deliberately a runtime value rather than an enum: new
//! event categories are introduced by registration alone, without touching
//! the dispatcher.

pub mod error;
pub mod event;
pub mod handler;
pub mod notification;

pub use error::{DispatchError, DispatchResult, HandlerError};
pub use event::{Event, EventType};
pub use handler::{Handler, HandlerResult, SharedHandler};
pub use notification::LifecycleNotification;
