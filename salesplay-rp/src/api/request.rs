//! Session request body
//!
//! Both `/chat` and `/feedback` take `{"transcript": [...]}`. Parsing is
//! forgiving about absence: a body not sent as `application/json`, an empty
//! body, a non-object body, or a missing or `null` transcript all mean
//! "no turns yet". Only unparseable JSON and a transcript that is not an
//! array are rejected.

use axum::http::{header, HeaderMap};
use salesplay_common::Transcript;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

#[derive(Debug, Default, Deserialize)]
pub struct SessionRequest {
    #[serde(default)]
    pub transcript: Option<Transcript>,
}

impl SessionRequest {
    /// Parse a request, ignoring bodies that are not declared as JSON
    pub fn from_parts(headers: &HeaderMap, body: &[u8]) -> ApiResult<Self> {
        if !is_json_content_type(headers) {
            return Ok(Self::default());
        }
        Self::from_body(body)
    }

    /// Parse a body already known to be JSON
    pub fn from_body(body: &[u8]) -> ApiResult<Self> {
        if body.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| ApiError::BadRequest(format!("Invalid JSON: {}", e)))?;

        if !value.is_object() {
            return Ok(Self::default());
        }

        serde_json::from_value(value)
            .map_err(|e| ApiError::BadRequest(format!("Invalid transcript: {}", e)))
    }

    pub fn into_transcript(self) -> Transcript {
        self.transcript.unwrap_or_default()
    }
}

/// `application/json`, with or without parameters such as `charset`
fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}
