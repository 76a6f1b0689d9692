//! Demo handler set: simulated workloads with fixed latencies.

use async_trait::async_trait;
use demux_core::{Event, Handler, HandlerResult, Reactor};
use std::sync::Arc;
use std::time::Duration;

/// The demo workload: (event type, simulated latency in milliseconds).
const DEMO_LATENCIES: &[(&str, u64)] = &[
    ("READ", 800),
    ("CPU", 2000),
    ("WRITE", 1500),
    ("TIMER", 400),
];

/// Suspends for a fixed delay, then succeeds.
///
/// Stands in for real I/O or computation so the telemetry stream shows
/// overlapping lifecycles with believable spreads.
#[derive(Debug, Clone, Copy)]
pub struct SleepHandler {
    delay: Duration,
}

impl SleepHandler {
    /// Create a handler that suspends for `delay` per event.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Handler for SleepHandler {
    async fn handle(&self, _event: &Event) -> HandlerResult<()> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "sleep"
    }
}

/// Register the demo handler set on a reactor:
/// READ 800ms, CPU 2000ms, WRITE 1500ms, TIMER 400ms.
pub fn register_demo_handlers(reactor: &mut Reactor) {
    for &(event_type, latency_ms) in DEMO_LATENCIES {
        reactor.register(
            event_type,
            Arc::new(SleepHandler::new(Duration::from_millis(latency_ms))),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use demux_core::CaptureSink;

    #[test]
    fn test_demo_set_registered() {
        let mut reactor = Reactor::new();
        register_demo_handlers(&mut reactor);

        assert_eq!(reactor.registry().len(), 4);
        for event_type in ["READ", "WRITE", "TIMER", "CPU"] {
            assert!(reactor.registry().contains(&event_type.into()));
        }
    }

    #[tokio::test]
    async fn test_sleep_handler_reports_its_latency() {
        let mut reactor = Reactor::new();
        reactor.register(
            "TIMER",
            Arc::new(SleepHandler::new(Duration::from_millis(20))),
        );

        let sink = CaptureSink::new();
        let outcome = reactor
            .dispatch(Event::new(1, "TIMER"), &sink)
            .await
            .unwrap();

        assert!(outcome.is_completed());
        assert!(sink.captured()[1].duration().unwrap() >= 20.0);
    }
}
