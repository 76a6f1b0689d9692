//! Broadcast fan-out of lifecycle telemetry to WebSocket subscribers.

use demux_core::{LifecycleNotification, NotificationSink};
use tokio::sync::broadcast;
use tracing::trace;

/// Notifications buffered per subscriber before the oldest are dropped.
const DEFAULT_CAPACITY: usize = 256;

/// Fan-out channel between the dispatcher and any number of telemetry
/// subscribers (WebSocket connections, in-process observers).
///
/// Built on a tokio broadcast channel: every subscriber sees every
/// notification from its subscription point onward, and a subscriber that
/// falls behind loses the oldest buffered notifications rather than
/// slowing the dispatcher down.
#[derive(Debug, Clone)]
pub struct TelemetryChannel {
    tx: broadcast::Sender<LifecycleNotification>,
}

impl TelemetryChannel {
    /// Create a channel with the default per-subscriber buffer.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a channel buffering up to `capacity` notifications per
    /// subscriber.
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribe to all notifications from this point onward.
    pub fn subscribe(&self) -> broadcast::Receiver<LifecycleNotification> {
        self.tx.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// A sink handle the dispatcher can emit into.
    pub fn sink(&self) -> BroadcastSink {
        BroadcastSink {
            tx: self.tx.clone(),
        }
    }
}

impl Default for TelemetryChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// [`NotificationSink`] over a [`TelemetryChannel`].
///
/// Emission with no live subscribers drops the notification — the
/// fire-and-forget contract end to end.
#[derive(Debug, Clone)]
pub struct BroadcastSink {
    tx: broadcast::Sender<LifecycleNotification>,
}

impl NotificationSink for BroadcastSink {
    fn accept(&self, notification: LifecycleNotification) {
        if self.tx.send(notification).is_err() {
            trace!("no telemetry subscribers, notification dropped");
        }
    }

    fn name(&self) -> &'static str {
        "broadcast"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use demux_core::Event;

    #[tokio::test]
    async fn test_fan_out_to_multiple_subscribers() {
        let channel = TelemetryChannel::new();
        let mut rx_a = channel.subscribe();
        let mut rx_b = channel.subscribe();
        assert_eq!(channel.subscriber_count(), 2);

        let sink = channel.sink();
        sink.accept(LifecycleNotification::start(Event::new(1, "READ")));

        let a = rx_a.recv().await.unwrap();
        let b = rx_b.recv().await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.event().id, 1);
    }

    #[test]
    fn test_no_subscribers_is_silent() {
        let channel = TelemetryChannel::new();
        let sink = channel.sink();
        // Must not panic or error with nobody listening.
        sink.accept(LifecycleNotification::start(Event::new(1, "READ")));
    }
}
