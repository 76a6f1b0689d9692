//! Server assembly: reactor, generator, telemetry channel, HTTP routes.

use crate::config::ServerConfig;
use crate::generator::EventGenerator;
use crate::handlers::register_demo_handlers;
use crate::routes::{health_routes, ws_routes};
use crate::telemetry::TelemetryChannel;
use crate::{Result, WebError};
use axum::http::Method;
use axum::Router;
use demux_core::Reactor;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Build the reactor, start the synthetic event generator, and serve the
/// telemetry endpoints until process exit.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let mut reactor = Reactor::new();
    register_demo_handlers(&mut reactor);
    let reactor = Arc::new(reactor);

    let telemetry = Arc::new(TelemetryChannel::new());

    // One process-wide generator feeding every subscriber, detached for
    // the life of the server.
    let generator = EventGenerator::new(
        Arc::clone(&reactor),
        Arc::new(telemetry.sink()),
        config.tick_interval(),
    );
    let _generator_task = generator.spawn();

    // The browser UI is served from another origin during development.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    let app = Router::new()
        .merge(ws_routes(telemetry))
        .merge(health_routes())
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| WebError::Config(format!("Invalid address: {e}")))?;

    tracing::info!("Starting telemetry server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(WebError::Io)?;

    axum::serve(listener, app).await.map_err(WebError::Io)?;

    Ok(())
}
