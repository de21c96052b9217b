//! salesplay-rp library - sales roleplay persona service
//!
//! Thin HTTP transport around the scoring engine in salesplay-common:
//! streams persona replies, reports end-of-session feedback, and holds an
//! inert audio WebSocket.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::Router;
use salesplay_common::config::ServerConfig;
use salesplay_common::{Engine, Error, Result};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod streamer;

use streamer::TokenStreamer;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Scoring engine for the scripted persona
    pub engine: Engine,
    /// Reply pacing for /chat
    pub streamer: TokenStreamer,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state
    pub fn new(engine: Engine, config: ServerConfig) -> Self {
        Self {
            engine,
            streamer: TokenStreamer::new(Duration::from_millis(config.token_delay_ms)),
            config: Arc::new(config),
        }
    }
}

/// CORS for the single configured browser origin, credentials allowed
///
/// Requests from any other origin get no `Access-Control-Allow-Origin`.
pub fn cors_layer(client_origin: &str) -> Result<CorsLayer> {
    let origin = HeaderValue::from_str(client_origin)
        .map_err(|e| Error::Config(format!("Invalid client origin {:?}: {}", client_origin, e)))?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Build application router
pub fn build_router(state: AppState) -> Result<Router> {
    use axum::routing::{get, post};

    let cors = cors_layer(&state.config.client_origin)?;
    let body_limit = state.config.body_limit_bytes;

    Ok(Router::new()
        .route("/chat", post(api::chat))
        .route("/feedback", post(api::feedback))
        .route("/audio", get(api::audio_socket))
        .merge(api::health_routes())
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}
