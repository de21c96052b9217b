//! Incremental reply delivery
//!
//! The engine hands back a finished reply string. [`TokenStreamer`] turns it
//! into a paced sequence of [`ChatFrame`]s: one frame per character, then a
//! terminating `done` frame. Dropping the stream (client disconnect) stops
//! delivery at the next await point.

use futures::stream::Stream;
use serde::Serialize;
use std::time::Duration;

/// One frame of a streamed reply
///
/// Serializes as `{"token": "Y"}` or `{"done": true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChatFrame {
    Token { token: String },
    Done { done: bool },
}

impl ChatFrame {
    pub fn token(ch: char) -> Self {
        ChatFrame::Token {
            token: ch.to_string(),
        }
    }

    pub fn done() -> Self {
        ChatFrame::Done { done: true }
    }
}

/// Paces reply tokens with a fixed delay
#[derive(Debug, Clone, Copy)]
pub struct TokenStreamer {
    delay: Duration,
}

impl TokenStreamer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Paced frame stream for `reply`
    pub fn stream(&self, reply: String) -> impl Stream<Item = ChatFrame> + Send + 'static {
        let delay = self.delay;

        async_stream::stream! {
            for ch in reply.chars() {
                yield ChatFrame::token(ch);
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
            }
            yield ChatFrame::done();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    /// Expected frames for `reply`, unpaced
    fn frames(reply: &str) -> Vec<ChatFrame> {
        reply
            .chars()
            .map(ChatFrame::token)
            .chain(std::iter::once(ChatFrame::done()))
            .collect()
    }

    #[test]
    fn test_frames_serialize_like_wire_format() {
        assert_eq!(
            serde_json::to_string(&ChatFrame::token('Y')).unwrap(),
            r#"{"token":"Y"}"#
        );
        assert_eq!(serde_json::to_string(&ChatFrame::done()).unwrap(), r#"{"done":true}"#);
    }

    #[test]
    fn test_one_frame_per_char_plus_done() {
        let frames = frames("I’ll");
        assert_eq!(frames.len(), 5);
        assert_eq!(frames[1], ChatFrame::token('’'));
        assert_eq!(frames.last(), Some(&ChatFrame::done()));
    }

    #[tokio::test]
    async fn test_stream_matches_frames() {
        let streamer = TokenStreamer::new(Duration::ZERO);
        let streamed: Vec<ChatFrame> = streamer.stream("Yes.".to_string()).collect().await;
        assert_eq!(streamed, frames("Yes."));
    }

    #[tokio::test]
    async fn test_stream_is_paced() {
        let streamer = TokenStreamer::new(Duration::from_millis(5));
        let start = tokio::time::Instant::now();
        let streamed: Vec<ChatFrame> = streamer.stream("abc".to_string()).collect().await;
        assert_eq!(streamed.len(), 4);
        assert!(start.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn test_empty_reply_is_just_done() {
        assert_eq!(frames(""), vec![ChatFrame::done()]);
    }
}
