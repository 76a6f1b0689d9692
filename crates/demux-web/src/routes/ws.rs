//! WebSocket telemetry feed.
//!
//! Each connection subscribes to the telemetry channel and receives every
//! lifecycle notification as one JSON text frame, e.g.
//! `{"kind":"start","event":{"id":1,"type":"READ"}}`. The feed is
//! one-way; inbound frames are ignored.

use crate::telemetry::TelemetryChannel;
use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    extract::State,
    response::Response,
    routing::get,
    Router,
};
use std::sync::Arc;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;
use tracing::{debug, error, warn};

/// Shared state for the telemetry feed.
pub type TelemetryState = Arc<TelemetryChannel>;

pub fn ws_routes(state: TelemetryState) -> Router {
    Router::new().route("/ws", get(ws_handler)).with_state(state)
}

async fn ws_handler(State(telemetry): State<TelemetryState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| forward_telemetry(socket, telemetry))
}

/// Pump notifications from the broadcast channel into one socket until
/// the client disconnects.
async fn forward_telemetry(mut socket: WebSocket, telemetry: TelemetryState) {
    debug!("telemetry client connected");
    let mut stream = BroadcastStream::new(telemetry.subscribe());

    while let Some(item) = stream.next().await {
        match item {
            Ok(notification) => {
                let payload = match serde_json::to_string(&notification) {
                    Ok(payload) => payload,
                    Err(e) => {
                        error!("failed to serialize notification: {e}");
                        continue;
                    }
                };
                if socket.send(Message::Text(payload.into())).await.is_err() {
                    // Client went away; the subscription drops with us.
                    break;
                }
            }
            Err(BroadcastStreamRecvError::Lagged(skipped)) => {
                warn!(skipped, "telemetry subscriber lagging, notifications dropped");
            }
        }
    }

    debug!("telemetry client disconnected");
}
