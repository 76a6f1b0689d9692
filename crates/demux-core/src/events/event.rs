//! The event value and its open-ended type tag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Open-ended event category tag.
///
/// The tag set is extensible at registration time rather than fixed at
/// compile time: registering a handler for a new tag is all it takes to
/// introduce a new category. Tags are compared case-sensitively.
///
/// Serializes as a bare string (`"READ"`, `"WRITE"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventType(String);

impl EventType {
    /// Create a new event type tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EventType {
    fn from(tag: &str) -> Self {
        Self(tag.to_string())
    }
}

impl From<String> for EventType {
    fn from(tag: String) -> Self {
        Self(tag)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable, typed, identified unit of work submitted to the dispatcher.
///
/// `id` is process-unique and assigned by the event source; it is
/// monotonically increasing but not required to be contiguous. The core
/// never stores events — each one lives for the duration of its dispatch
/// call and the notifications that carry it.
///
/// Wire shape: `{"id": 1, "type": "READ"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Process-unique identifier assigned by the event source.
    pub id: u64,

    /// Category tag used for handler resolution.
    #[serde(rename = "type")]
    pub event_type: EventType,
}

impl Event {
    /// Create a new event.
    pub fn new(id: u64, event_type: impl Into<EventType>) -> Self {
        Self {
            id,
            event_type: event_type.into(),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.event_type, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_from_str() {
        let t: EventType = "READ".into();
        assert_eq!(t.as_str(), "READ");
        assert_eq!(t, EventType::new("READ"));
        assert_ne!(t, EventType::new("read"));
    }

    #[test]
    fn test_event_display() {
        let event = Event::new(42, "TIMER");
        assert_eq!(event.to_string(), "TIMER#42");
    }

    #[test]
    fn test_event_wire_shape() {
        let event = Event::new(1, "READ");
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"id":1,"type":"READ"}"#);

        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
