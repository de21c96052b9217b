//! Audio WebSocket placeholder
//!
//! Accepts the upgrade and discards whatever the client sends until it
//! closes. No audio is processed.

use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    response::Response,
};
use tracing::{debug, info};

/// GET /audio
pub async fn audio_socket(ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(drain_socket)
}

async fn drain_socket(mut socket: WebSocket) {
    info!("Audio socket connected");

    while let Some(message) = socket.recv().await {
        match message {
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                debug!("Audio socket error: {}", e);
                break;
            }
        }
    }

    info!("Audio socket closed");
}
