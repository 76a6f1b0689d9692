//! Emission sinks for lifecycle telemetry.
//!
//! The dispatcher reports every start/end through a [`NotificationSink`].
//! The sink abstraction exists so transports can be swapped without
//! touching the dispatcher: an in-process capture for tests, a broadcast
//! channel feeding WebSocket clients, a log writer — all valid.

pub mod traits;

mod capture;
mod noop;

pub use capture::CaptureSink;
pub use noop::NoopSink;
pub use traits::{NotificationSink, SharedSink};
