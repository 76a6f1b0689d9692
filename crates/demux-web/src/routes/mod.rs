mod health;
mod ws;

pub use health::health_routes;
pub use ws::{ws_routes, TelemetryState};
