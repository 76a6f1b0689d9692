//! Telemetry web server around the demux reactor.
//!
//! Everything the dispatch engine treats as an external collaborator
//! lives here: the demo handler set, the timed synthetic event generator,
//! and the WebSocket transport that ships lifecycle notifications to a
//! remote display. The core itself is in `demux-core`.

pub mod config;
pub mod generator;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod telemetry;

mod error;

pub use config::ServerConfig;
pub use error::{Result, WebError};
pub use generator::EventGenerator;
pub use server::start_server;
pub use telemetry::{BroadcastSink, TelemetryChannel};
