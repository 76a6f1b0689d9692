//! Lifecycle telemetry records emitted by the dispatcher.

use super::event::Event;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The only artifact the dispatcher produces: a start/end record for one
/// handled event.
///
/// For every dispatch whose type has a registered handler, exactly one
/// `Start` is emitted; if and only if the handler completes without
/// failing, exactly one matching `End` follows, carrying the same event
/// identity. A `Start` with no matching `End` signals a failed or
/// still-hung handler — observers must tolerate the asymmetry.
///
/// Wire shape (tagged with `kind`):
///
/// ```json
/// {"kind":"start","event":{"id":1,"type":"READ"}}
/// {"kind":"end","event":{"id":1,"type":"READ"},"duration":50.3}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LifecycleNotification {
    /// Emitted synchronously before the handler runs.
    Start {
        /// The event being handled.
        event: Event,
    },

    /// Emitted after the handler completes successfully.
    End {
        /// The event that was handled.
        event: Event,
        /// Elapsed wall-clock time in fractional milliseconds, measured
        /// from immediately before `Start` emission to immediately after
        /// handler completion.
        duration: f64,
    },
}

impl LifecycleNotification {
    /// Create a start notification.
    pub fn start(event: Event) -> Self {
        Self::Start { event }
    }

    /// Create an end notification from a measured elapsed time.
    pub fn end(event: Event, elapsed: Duration) -> Self {
        Self::End {
            event,
            duration: elapsed.as_nanos() as f64 / 1_000_000.0,
        }
    }

    /// The event this notification describes.
    pub fn event(&self) -> &Event {
        match self {
            Self::Start { event } | Self::End { event, .. } => event,
        }
    }

    /// The reported duration, if this is an end notification.
    pub fn duration(&self) -> Option<f64> {
        match self {
            Self::Start { .. } => None,
            Self::End { duration, .. } => Some(*duration),
        }
    }

    /// The `kind` tag as a string, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Start { .. } => "start",
            Self::End { .. } => "end",
        }
    }

    /// Check if this is a start notification.
    pub fn is_start(&self) -> bool {
        matches!(self, Self::Start { .. })
    }

    /// Check if this is an end notification.
    pub fn is_end(&self) -> bool {
        matches!(self, Self::End { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_wire_shape() {
        let note = LifecycleNotification::start(Event::new(1, "READ"));
        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(json, r#"{"kind":"start","event":{"id":1,"type":"READ"}}"#);
    }

    #[test]
    fn test_end_wire_shape() {
        let note = LifecycleNotification::end(Event::new(1, "READ"), Duration::from_millis(50));
        let json = serde_json::to_string(&note).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"end","event":{"id":1,"type":"READ"},"duration":50.0}"#
        );
    }

    #[test]
    fn test_roundtrip() {
        let note = LifecycleNotification::end(Event::new(9, "CPU"), Duration::from_micros(1500));
        let json = serde_json::to_string(&note).unwrap();
        let back: LifecycleNotification = serde_json::from_str(&json).unwrap();
        assert_eq!(back, note);
        assert_eq!(back.duration(), Some(1.5));
    }

    #[test]
    fn test_accessors() {
        let start = LifecycleNotification::start(Event::new(3, "WRITE"));
        assert!(start.is_start());
        assert!(!start.is_end());
        assert_eq!(start.kind(), "start");
        assert_eq!(start.event().id, 3);
        assert_eq!(start.duration(), None);
    }
}
