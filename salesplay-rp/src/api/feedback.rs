//! End-of-session feedback endpoint

use axum::{body::Bytes, extract::State, http::HeaderMap, Json};
use salesplay_common::FeedbackRecord;
use tracing::info;

use super::request::SessionRequest;
use crate::error::ApiResult;
use crate::AppState;

/// POST /feedback
pub async fn feedback(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<FeedbackRecord>> {
    let transcript = SessionRequest::from_parts(&headers, &body)?.into_transcript();

    let record = state.engine.compute_feedback(&transcript);
    info!(
        turns = transcript.len(),
        suggestions = record.suggestions.len(),
        "Feedback generated"
    );

    Ok(Json(record))
}
