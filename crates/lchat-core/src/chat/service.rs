//! Chat service running one request/response turn.
//!
//! A turn appends the user's message to the history, builds the prompt,
//! asks the provider for a completion and, only if a usable reply came
//! back, appends the assistant's answer. Failed turns leave the user line
//! in place but never add an assistant line.

use lchat_types::chat::Role;
use lchat_types::completion::{CompletionRequest, CompletionResponse};
use lchat_types::config::ChatConfig;
use lchat_types::error::CompletionError;
use tracing::debug;

use crate::history::HistoryBuffer;
use crate::llm::provider::CompletionProvider;
use crate::prompt::PromptBuilder;

/// Some servers serialize a missing completion as the string "null".
const NULL_TEXT: &str = "null";

/// Runs chat turns against a completion provider.
///
/// Generic over `CompletionProvider` so lchat-core never depends on
/// lchat-infra.
pub struct ChatService<P: CompletionProvider> {
    provider: P,
    config: ChatConfig,
}

impl<P: CompletionProvider> ChatService<P> {
    pub fn new(provider: P, config: ChatConfig) -> Self {
        Self { provider, config }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// Build the request body for the current history.
    pub fn build_request(&self, history: &HistoryBuffer) -> CompletionRequest {
        CompletionRequest {
            model: self.config.model.clone(),
            prompt: PromptBuilder::build(history),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            n: 1,
            stop: self.config.stop_tokens.clone(),
        }
    }

    /// Run one turn and return the assistant's trimmed reply.
    pub async fn send_turn(
        &self,
        history: &mut HistoryBuffer,
        user_text: &str,
    ) -> Result<String, CompletionError> {
        history.append(Role::User, user_text);

        let request = self.build_request(history);
        debug!(
            provider = self.provider.name(),
            history_len = history.len(),
            prompt_chars = request.prompt.len(),
            "sending completion request"
        );

        let response = self.provider.complete(&request).await.inspect_err(|e| {
            debug!(error = %e, "completion request failed");
        })?;

        let reply = extract_reply(&response).inspect_err(|e| {
            debug!(error = %e, "completion response rejected");
        })?;

        history.append(Role::Assistant, reply.clone());
        Ok(reply)
    }
}

/// Interpret a parsed response body.
///
/// - a non-blank `error` field wins over any choices
/// - the first choice's text is trimmed
/// - missing, empty or `"null"` text is [`CompletionError::EmptyResponse`]
pub fn extract_reply(response: &CompletionResponse) -> Result<String, CompletionError> {
    if let Some(message) = response.error_message() {
        return Err(CompletionError::Endpoint(message));
    }

    let text = response.first_text().map(str::trim).unwrap_or_default();
    if text.is_empty() || text == NULL_TEXT {
        return Err(CompletionError::EmptyResponse);
    }

    Ok(text.to_string())
}
