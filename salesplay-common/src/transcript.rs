//! Transcript model
//!
//! A transcript is the ordered list of utterances exchanged so far. Speaker
//! roles are not modeled; every turn contributes its text to the analysis.
//!
//! Deserialization is lenient: a turn that is not an object, has no `text`
//! field, or has a `null` text reads as an empty utterance instead of
//! failing the request. Non-string texts are rendered the way a browser
//! client's `String(value)` would render them, so `["how", "why"]` reads as
//! `"how,why"`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Separator placed between turn texts when the transcript is flattened
pub const TURN_SEPARATOR: &str = " \n ";

/// One utterance in the conversation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Turn {
    pub text: String,
}

impl Turn {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Build a turn from an arbitrary JSON value
    ///
    /// A missing or `null` text, or a turn that is not an object, is empty.
    pub fn from_value(value: &Value) -> Self {
        let text = value.get("text").map(render_text).unwrap_or_default();
        Self { text }
    }
}

/// Render a JSON value as script string conversion does
///
/// Arrays join their elements with `,` (null elements vanish), objects become
/// `[object Object]`.
fn render_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items.iter().map(render_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

impl<'de> Deserialize<'de> for Turn {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Turn::from_value(&value))
    }
}

/// Ordered sequence of turns
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Transcript(Vec<Turn>);

impl Transcript {
    pub fn turns(&self) -> &[Turn] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All turn texts joined with [`TURN_SEPARATOR`], original casing
    pub fn joined_text(&self) -> String {
        self.0
            .iter()
            .map(|turn| turn.text.as_str())
            .collect::<Vec<_>>()
            .join(TURN_SEPARATOR)
    }
}

impl<S: Into<String>> FromIterator<S> for Transcript {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Turn::new).collect())
    }
}
