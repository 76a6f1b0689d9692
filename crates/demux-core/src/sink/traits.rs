//! Trait for telemetry output destinations.

use crate::events::LifecycleNotification;
use std::sync::Arc;

/// Destination for lifecycle telemetry.
///
/// Emission is fire-and-forget: the dispatcher hands over one
/// notification at a time and never waits for acknowledgement, so
/// `accept` is deliberately synchronous — a sink that needs to do slow or
/// fallible work (network writes, disk flushes) should enqueue internally
/// and drain from its own task.
///
/// # Threading
///
/// Sinks must tolerate interleaved notifications from concurrently
/// resolving handlers; the dispatcher serializes nothing beyond its own
/// per-call start-before-end ordering.
pub trait NotificationSink: Send + Sync {
    /// Accept one lifecycle notification.
    ///
    /// Must not block for meaningful time; losing a notification is the
    /// sink's prerogative (the dispatcher never checks).
    fn accept(&self, notification: LifecycleNotification);

    /// Sink name for logging.
    fn name(&self) -> &'static str {
        "sink"
    }
}

/// A sink shared across dispatch tasks.
pub type SharedSink = Arc<dyn NotificationSink>;

impl<S: NotificationSink + ?Sized> NotificationSink for Arc<S> {
    fn accept(&self, notification: LifecycleNotification) {
        (**self).accept(notification)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
