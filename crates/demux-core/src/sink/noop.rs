//! Sink that discards all telemetry.

use super::traits::NotificationSink;
use crate::events::LifecycleNotification;

/// Discards every notification. For callers that only care about the
/// dispatch outcome.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl NotificationSink for NoopSink {
    fn accept(&self, _notification: LifecycleNotification) {}

    fn name(&self) -> &'static str {
        "noop"
    }
}
