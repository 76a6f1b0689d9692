//! Synthetic event source: a timed generator of random demo events.

use demux_core::{Event, EventType, Reactor, SharedSink};
use rand::RngExt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

/// Manufactures one random event per tick and dispatches it.
///
/// Each tick picks a uniformly random type from the reactor's registered
/// set, assigns the next id from an atomic counter (monotonically
/// increasing from 0), and spawns the dispatch as its own task — a slow
/// handler therefore never delays the tick cadence, and any number of
/// generated events can be in flight at once.
///
/// Dispatch failures are logged at error level and otherwise ignored;
/// the telemetry stream's unmatched `start` is the observable signal.
pub struct EventGenerator {
    reactor: Arc<Reactor>,
    sink: SharedSink,
    tick_interval: Duration,
    counter: AtomicU64,
}

impl EventGenerator {
    /// Create a generator over a fully registered reactor.
    pub fn new(reactor: Arc<Reactor>, sink: SharedSink, tick_interval: Duration) -> Self {
        Self {
            reactor,
            sink,
            tick_interval,
            counter: AtomicU64::new(0),
        }
    }

    /// Id the next generated event will receive.
    pub fn next_id(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }

    /// Run the generation loop on a background task.
    ///
    /// Runs until the handle is aborted or the runtime shuts down. If the
    /// reactor has no registered types there is nothing to generate and
    /// the task exits immediately.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    async fn run(self) {
        let types: Vec<EventType> = self.reactor.registry().event_types().cloned().collect();
        if types.is_empty() {
            warn!("no handlers registered, event generator exiting");
            return;
        }
        debug!(?types, interval = ?self.tick_interval, "event generator started");

        let mut ticker = tokio::time::interval(self.tick_interval);
        // First tick fires immediately; skip it so the first event lands
        // one full interval after startup.
        ticker.tick().await;

        loop {
            ticker.tick().await;

            let event_type = types[rand::rng().random_range(0..types.len())].clone();
            let id = self.counter.fetch_add(1, Ordering::Relaxed);
            let event = Event::new(id, event_type);

            let reactor = Arc::clone(&self.reactor);
            let sink = Arc::clone(&self.sink);
            tokio::spawn(async move {
                if let Err(e) = reactor.dispatch(event, sink.as_ref()).await {
                    error!("dispatch failed: {e}");
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::register_demo_handlers;
    use demux_core::CaptureSink;

    fn demo_reactor() -> Arc<Reactor> {
        let mut reactor = Reactor::new();
        register_demo_handlers(&mut reactor);
        Arc::new(reactor)
    }

    #[tokio::test]
    async fn test_generates_on_cadence_with_monotonic_ids() {
        let sink = Arc::new(CaptureSink::new());
        let generator = EventGenerator::new(
            demo_reactor(),
            sink.clone(),
            Duration::from_millis(10),
        );
        let handle = generator.spawn();

        tokio::time::sleep(Duration::from_millis(100)).await;
        handle.abort();

        // Demo handlers are slow, so only starts will have landed; the
        // cadence should have produced several of them.
        let starts: Vec<u64> = sink
            .captured()
            .iter()
            .filter(|n| n.is_start())
            .map(|n| n.event().id)
            .collect();
        assert!(starts.len() >= 3, "only {} events generated", starts.len());

        // Ids are assigned in generation order, starting at 0.
        for (expected, id) in starts.iter().enumerate() {
            assert_eq!(*id, expected as u64);
        }
    }

    #[tokio::test]
    async fn test_empty_reactor_exits_cleanly() {
        let sink = Arc::new(CaptureSink::new());
        let generator = EventGenerator::new(
            Arc::new(Reactor::new()),
            sink.clone(),
            Duration::from_millis(1),
        );

        // The task should finish on its own rather than spin.
        generator.spawn().await.unwrap();
        assert!(sink.is_empty());
    }
}
