//! Pulling the assistant's reply out of a text-generation response.
//!
//! Hosted text-generation models return the prompt followed by the
//! continuation, e.g. `[{"generated_text": "...assistant: Hello!"}]`.

use serde_json::Value;

use crate::error::ChatError;

/// Marker the primary prompt ends with.
pub const PRIMARY_MARKER: &str = "assistant:";

/// Marker the secondary prompt ends with.
pub const SECONDARY_MARKER: &str = "Assistant:";

/// Read `generated_text` from the first element of the response array.
///
/// A missing `generated_text` field reads as an empty string. A JSON object
/// carrying `error` (e.g. a model that is still loading) is an error.
pub fn generated_text(body: &Value) -> Result<String, ChatError> {
    match body {
        Value::Array(items) => {
            let first = items
                .first()
                .ok_or_else(|| ChatError::ResponseParse("empty response array".to_string()))?;
            Ok(first
                .get("generated_text")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string())
        }
        Value::Object(map) => match map.get("error") {
            Some(error) => Err(ChatError::Remote(
                error.as_str().map_or_else(|| error.to_string(), str::to_string),
            )),
            None => Err(ChatError::ResponseParse(
                "expected an array of generations".to_string(),
            )),
        },
        other => Err(ChatError::ResponseParse(format!(
            "unexpected response: {other}"
        ))),
    }
}

/// Text after the last occurrence of `marker`, trimmed.
pub fn after_last_marker<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    text.rfind(marker)
        .map(|at| text[at + marker.len()..].trim())
}

/// Reply from the primary stage: after the last `assistant:`, else the
/// whole text.
pub fn primary_reply(generated: &str) -> String {
    after_last_marker(generated, PRIMARY_MARKER)
        .unwrap_or_else(|| generated.trim())
        .to_string()
}

/// Reply from the secondary stage: after the last `Assistant:`, else the
/// text with the echoed prompt removed.
pub fn secondary_reply(generated: &str, prompt: &str) -> String {
    match after_last_marker(generated, SECONDARY_MARKER) {
        Some(reply) => reply.to_string(),
        None => generated.replace(prompt, "").trim().to_string(),
    }
}
