//! Setup-time mapping from event type to handler.

use crate::events::{EventType, SharedHandler};
use std::collections::HashMap;

/// The handler registry: one handler per event type.
///
/// Populated once during a setup phase, read-only thereafter. The
/// registry itself carries no synchronization — registering concurrently
/// with active dispatch is unsupported and undefined. This is a usage
/// precondition, not a runtime guarantee; in the intended flow the
/// [`Reactor`](crate::reactor::Reactor) is fully registered before it is
/// shared.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<EventType, SharedHandler>,
}

impl HandlerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `handler` with `event_type`, overwriting any prior
    /// association for that type. Returns the displaced handler, if any.
    pub fn register(
        &mut self,
        event_type: impl Into<EventType>,
        handler: SharedHandler,
    ) -> Option<SharedHandler> {
        self.handlers.insert(event_type.into(), handler)
    }

    /// Look up the handler for an event type.
    pub fn lookup(&self, event_type: &EventType) -> Option<&SharedHandler> {
        self.handlers.get(event_type)
    }

    /// Check whether a handler is registered for this type.
    pub fn contains(&self, event_type: &EventType) -> bool {
        self.handlers.contains_key(event_type)
    }

    /// The registered event types, in no particular order.
    pub fn event_types(&self) -> impl Iterator<Item = &EventType> {
        self.handlers.keys()
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("types", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Event, Handler, HandlerResult};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct Nop;

    #[async_trait]
    impl Handler for Nop {
        async fn handle(&self, _event: &Event) -> HandlerResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut registry = HandlerRegistry::new();
        assert!(registry.is_empty());

        registry.register("READ", Arc::new(Nop));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(&"READ".into()));
        assert!(registry.lookup(&"READ".into()).is_some());
        assert!(registry.lookup(&"WRITE".into()).is_none());
    }

    #[test]
    fn test_register_overwrites() {
        let mut registry = HandlerRegistry::new();
        assert!(registry.register("READ", Arc::new(Nop)).is_none());

        // Second registration for the same type displaces the first.
        let displaced = registry.register("READ", Arc::new(Nop));
        assert!(displaced.is_some());
        assert_eq!(registry.len(), 1);
    }
}
