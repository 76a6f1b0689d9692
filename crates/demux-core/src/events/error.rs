//! Failure taxonomy for handlers and dispatch.
//!
//! Two kinds only:
//!
//! - [`HandlerError`]: produced inside a handler; opaque to the core
//! - [`DispatchError`]: a handler failure wrapped with the event identity
//!
//! An unknown event type is NOT an error — dispatch returns an
//! [`Unhandled`](crate::reactor::DispatchOutcome::Unhandled) outcome and
//! emits nothing. Malformed events are unrepresentable by construction.

use super::event::EventType;
use thiserror::Error;

/// Error produced by a [`Handler`](super::handler::Handler).
///
/// Handlers are opaque to the core, so this is deliberately loose: a
/// message variant for domain failures plus a transparent wrapper for
/// anything structured. The dispatcher attaches event identity via
/// [`DispatchError`] and never retries.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Handler-level failure with a description.
    #[error("{0}")]
    Failed(String),

    /// Any other error the handler hit while doing its work.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl HandlerError {
    /// Create a handler failure with a message.
    pub fn failed(msg: impl Into<String>) -> Self {
        Self::Failed(msg.into())
    }
}

/// Error returned by [`Reactor::dispatch`](crate::reactor::Reactor::dispatch).
///
/// There is exactly one way dispatch can fail: the resolved handler
/// failed. The `start` notification emitted before the handler ran stays
/// unmatched by an `end` — observers must tolerate unmatched starts.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The handler for this event failed.
    #[error("handler for {event_type} failed on event {event_id}: {source}")]
    Handler {
        /// Id of the event whose handler failed.
        event_id: u64,
        /// Type tag the failing handler was registered for.
        event_type: EventType,
        /// The underlying handler failure.
        #[source]
        source: HandlerError,
    },
}

/// Specialized Result type for dispatch operations.
pub type DispatchResult<T> = Result<T, DispatchError>;
