//! The dispatcher: resolves, times, and runs handlers.

use crate::events::{
    DispatchError, DispatchResult, Event, EventType, LifecycleNotification, SharedHandler,
};
use crate::registry::HandlerRegistry;
use crate::sink::NotificationSink;
use std::time::{Duration, Instant};
use tracing::trace;

/// What a dispatch call accomplished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DispatchOutcome {
    /// The handler ran to completion; `duration` is what the `end`
    /// notification reported.
    Completed {
        /// Elapsed wall-clock time of the handled dispatch.
        duration: Duration,
    },

    /// No handler is registered for the event's type. Deliberate
    /// silent-drop policy: zero notifications were emitted and this is
    /// not a failure.
    Unhandled,
}

impl DispatchOutcome {
    /// Check if the handler ran to completion.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    /// Check if the event was silently dropped.
    pub fn is_unhandled(&self) -> bool {
        matches!(self, Self::Unhandled)
    }
}

/// Central event dispatcher.
///
/// Register handlers during setup, then share the reactor (typically via
/// `Arc`) and dispatch freely: `dispatch` borrows only the read-only
/// registry, so any number of calls can be in flight at once and none
/// blocks another.
///
/// # Lifecycle protocol
///
/// For an event whose type has a handler, `dispatch` emits `start` to the
/// sink *before* the handler can suspend, awaits the handler, and on
/// success emits `end` with the elapsed time. `start` notifications
/// therefore carry the dispatch call order; `end` notifications surface
/// in handler-completion order. On handler failure the error propagates
/// to the caller and the already-emitted `start` stays unmatched.
///
/// # What this is not
///
/// Not a task scheduler: no queueing, prioritization, cancellation,
/// retry, timeout, or backpressure. Dispatching the same event id twice
/// runs the handler twice and emits two independent start/end pairs —
/// deduplication is the caller's concern.
#[derive(Debug, Default)]
pub struct Reactor {
    registry: HandlerRegistry,
}

impl Reactor {
    /// Create a reactor with an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate a handler with an event type, overwriting any prior
    /// association for that type.
    ///
    /// Takes `&mut self`: registration belongs to the setup phase, before
    /// the reactor is shared. Registering while dispatches are active is
    /// unsupported.
    pub fn register(&mut self, event_type: impl Into<EventType>, handler: SharedHandler) {
        let event_type = event_type.into();
        trace!(%event_type, handler = handler.name(), "registering handler");
        if self.registry.register(event_type, handler).is_some() {
            trace!("displaced previously registered handler");
        }
    }

    /// Read access to the registry.
    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Dispatch one event, reporting its lifecycle to `sink`.
    ///
    /// Resolution, timing, and emission follow the lifecycle protocol in
    /// the type-level docs. Emission is fire-and-forget: the sink is
    /// never awaited. The handler, however, *is* awaited — with no
    /// timeout, so a handler that never completes parks this call
    /// forever.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Handler`] when the resolved handler
    /// fails; no `end` notification is emitted in that case. An
    /// unregistered event type is not an error (see
    /// [`DispatchOutcome::Unhandled`]).
    pub async fn dispatch(
        &self,
        event: Event,
        sink: &dyn NotificationSink,
    ) -> DispatchResult<DispatchOutcome> {
        let Some(handler) = self.registry.lookup(&event.event_type) else {
            trace!(event = %event, "no handler registered, dropping event");
            return Ok(DispatchOutcome::Unhandled);
        };

        // Timing starts before the start emission so the reported
        // duration covers the full observable lifecycle.
        let started = Instant::now();
        sink.accept(LifecycleNotification::start(event.clone()));

        handler
            .handle(&event)
            .await
            .map_err(|source| DispatchError::Handler {
                event_id: event.id,
                event_type: event.event_type.clone(),
                source,
            })?;

        let duration = started.elapsed();
        trace!(event = %event, ?duration, "handler completed");
        sink.accept(LifecycleNotification::end(event, duration));

        Ok(DispatchOutcome::Completed { duration })
    }
}
