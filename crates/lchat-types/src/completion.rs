//! Wire types for the text-completion endpoint.
//!
//! These mirror the OpenAI-style `/v1/completions` body: a single `prompt`
//! string in, a list of `choices` out. Servers report failures either as
//! `{"error": "..."}` or `{"error": {"message": "..."}}`; both are accepted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body sent to the completion endpoint.
///
/// Built fresh for every turn and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f64,
    /// Number of completions to generate. Always 1.
    pub n: u32,
    pub stop: Vec<String>,
}

/// Response body returned by the completion endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

/// A single generated completion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletionChoice {
    #[serde(default)]
    pub text: Option<String>,
}

impl CompletionResponse {
    /// The endpoint-reported error message, if any.
    ///
    /// `null`, a missing field, or a blank string count as "no error".
    pub fn error_message(&self) -> Option<String> {
        let message = match self.error.as_ref()? {
            Value::Null => return None,
            Value::String(s) => s.clone(),
            Value::Object(obj) => match obj.get("message") {
                Some(Value::String(s)) => s.clone(),
                _ => Value::Object(obj.clone()).to_string(),
            },
            other => other.to_string(),
        };

        if message.trim().is_empty() {
            None
        } else {
            Some(message)
        }
    }

    /// Text of the first choice, untrimmed. `None` if there are no choices
    /// or the text is `null`.
    pub fn first_text(&self) -> Option<&str> {
        self.choices.first().and_then(|c| c.text.as_deref())
    }
}
