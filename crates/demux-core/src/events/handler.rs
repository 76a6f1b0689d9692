//! The handler trait: the capability bound to one event type.

use super::error::HandlerError;
use super::event::Event;
use async_trait::async_trait;
use std::sync::Arc;

/// Specialized Result type for handler work.
pub type HandlerResult<T> = Result<T, HandlerError>;

/// A unit of (possibly suspending) work bound to exactly one event type
/// at registration time.
///
/// Handlers are opaque to the dispatcher: any internal state is the
/// handler's own concern, and the dispatcher imposes no timeout — a
/// handler that never completes leaves its dispatch call unresolved and
/// its `start` notification unmatched.
///
/// # Threading
///
/// Handlers are shared behind an `Arc` and may be invoked concurrently
/// for distinct events of the same type, so implementations must be
/// `Send + Sync` and must not rely on exclusive access.
///
/// # Errors
///
/// A failure propagates to the dispatch caller as a
/// [`DispatchError`](super::error::DispatchError); the dispatcher attaches
/// the event identity, does not retry, and emits no `end` notification.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Perform the work for one event.
    async fn handle(&self, event: &Event) -> HandlerResult<()>;

    /// Handler name for logging.
    fn name(&self) -> &'static str {
        "handler"
    }
}

/// A handler shared across registrations and dispatch calls.
pub type SharedHandler = Arc<dyn Handler>;

#[cfg(test)]
mod tests {
    use super::*;

    struct RejectZero;

    #[async_trait]
    impl Handler for RejectZero {
        async fn handle(&self, event: &Event) -> HandlerResult<()> {
            if event.id == 0 {
                Err(HandlerError::failed("zero id"))
            } else {
                Ok(())
            }
        }

        fn name(&self) -> &'static str {
            "reject_zero"
        }
    }

    #[tokio::test]
    async fn test_handler_success_and_failure() {
        let handler = RejectZero;
        assert!(handler.handle(&Event::new(1, "READ")).await.is_ok());
        assert!(handler.handle(&Event::new(0, "READ")).await.is_err());
        assert_eq!(handler.name(), "reject_zero");
    }
}
