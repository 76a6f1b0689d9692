//! In-memory capturing sink.

use super::traits::NotificationSink;
use crate::events::LifecycleNotification;
use std::sync::Mutex;

/// Captures every notification in arrival order.
///
/// The workhorse for tests and in-process observers: dispatch against it,
/// then inspect [`captured`](Self::captured). The mutex is held only for
/// the push, so concurrent dispatch tasks interleave without contention
/// worth measuring.
#[derive(Debug, Default)]
pub struct CaptureSink {
    captured: Mutex<Vec<LifecycleNotification>>,
}

impl CaptureSink {
    /// Create an empty capture sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything captured so far, in arrival order.
    pub fn captured(&self) -> Vec<LifecycleNotification> {
        self.captured.lock().expect("capture sink poisoned").clone()
    }

    /// Number of captured notifications.
    pub fn len(&self) -> usize {
        self.captured.lock().expect("capture sink poisoned").len()
    }

    /// Check if nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop everything captured so far.
    pub fn clear(&self) {
        self.captured.lock().expect("capture sink poisoned").clear();
    }
}

impl NotificationSink for CaptureSink {
    fn accept(&self, notification: LifecycleNotification) {
        self.captured
            .lock()
            .expect("capture sink poisoned")
            .push(notification);
    }

    fn name(&self) -> &'static str {
        "capture"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Event;

    #[test]
    fn test_capture_records_in_order() {
        let sink = CaptureSink::new();
        assert!(sink.is_empty());

        sink.accept(LifecycleNotification::start(Event::new(1, "READ")));
        sink.accept(LifecycleNotification::start(Event::new(2, "WRITE")));

        let captured = sink.captured();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].event().id, 1);
        assert_eq!(captured[1].event().id, 2);

        sink.clear();
        assert!(sink.is_empty());
    }
}
