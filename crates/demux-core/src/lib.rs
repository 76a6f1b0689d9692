//! Core event dispatch engine for demux.
//!
//! This crate implements the [Reactor pattern](https://en.wikipedia.org/wiki/Reactor_pattern):
//! a central dispatcher demultiplexes incoming events to type-specific
//! handlers while allowing many handlers' suspensions to overlap in time.
//!
//! # Architecture
//!
//! ```text
//! event source ──▶ Reactor ──▶ HandlerRegistry ──▶ Handler (async work)
//!                     │
//!                     └──▶ NotificationSink (start / end telemetry)
//! ```
//!
//! # Key Components
//!
//! - [`Event`] / [`EventType`]: typed, identified units of work
//! - [`Handler`]: async trait bound to one event type per registration
//! - [`HandlerRegistry`]: setup-time mapping from event type to handler
//! - [`Reactor`]: the dispatcher — resolves, times, and runs handlers
//! - [`NotificationSink`]: fire-and-forget destination for lifecycle telemetry
//! - [`LifecycleNotification`]: the start/end records the dispatcher emits
//!
//! # Example
//!
//! ```rust,ignore
//! use demux_core::{Event, Handler, HandlerResult, Reactor, CaptureSink};
//! use async_trait::async_trait;
//! use std::sync::Arc;
//!
//! struct ReadHandler;
//!
//! #[async_trait]
//! impl Handler for ReadHandler {
//!     async fn handle(&self, _event: &Event) -> HandlerResult<()> {
//!         tokio::time::sleep(std::time::Duration::from_millis(50)).await;
//!         Ok(())
//!     }
//! }
//!
//! let mut reactor = Reactor::new();
//! reactor.register("READ", Arc::new(ReadHandler));
//!
//! let sink = CaptureSink::new();
//! let outcome = reactor.dispatch(Event::new(1, "READ"), &sink).await?;
//! ```
//!
//! # Concurrency model
//!
//! `dispatch` borrows only the read-only registry, so concurrent dispatch
//! calls are fully independent: wrap the populated [`Reactor`] in an `Arc`
//! and spawn one task per event. `start` notifications are emitted before
//! the handler first suspends, so their order follows dispatch call order;
//! `end` notifications surface whenever the corresponding handler resolves.

pub mod events;
pub mod reactor;
pub mod registry;
pub mod sink;

pub use events::{
    DispatchError, DispatchResult, Event, EventType, Handler, HandlerError, HandlerResult,
    LifecycleNotification, SharedHandler,
};
pub use reactor::{DispatchOutcome, Reactor};
pub use registry::HandlerRegistry;
pub use sink::{CaptureSink, NoopSink, NotificationSink, SharedSink};
