//! Roleplay chat endpoint
//!
//! Selects the persona reply for the transcript so far and streams it back
//! as Server-Sent Events, one character per `data:` frame, closing with a
//! `{"done":true}` frame.

use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    response::sse::{Event, Sse},
};
use futures::stream::{Stream, StreamExt};
use tracing::{debug, info};

use super::request::SessionRequest;
use crate::error::ApiResult;
use crate::AppState;

/// POST /chat
pub async fn chat(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Sse<impl Stream<Item = Result<Event, axum::Error>>>> {
    let transcript = SessionRequest::from_parts(&headers, &body)?.into_transcript();

    let reply = state.engine.reply(&transcript);
    debug!(turns = transcript.len(), signals = ?reply.signals, "Chat transcript analyzed");
    info!(outcome = reply.outcome.as_str(), "Streaming persona reply");

    let stream = state
        .streamer
        .stream(reply.text.to_string())
        .map(|frame| Event::default().json_data(frame));

    Ok(Sse::new(stream))
}
