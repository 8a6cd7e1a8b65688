//! HttpCompletionProvider -- concrete [`CompletionProvider`] for plain HTTP
//! text-completion endpoints.
//!
//! Sends one JSON `POST` per turn and parses the body into a
//! [`CompletionResponse`]. Works with anything that speaks the OpenAI
//! `/v1/completions` shape: Ollama, llama.cpp server, vLLM.
//!
//! Transport failures are split into connection, timeout, and other errors
//! so the user can tell "server not running" apart from "server too slow".

use std::error::Error as StdError;
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use tracing::{Instrument, debug, info_span};

use lchat_core::llm::provider::CompletionProvider;
use lchat_observe::genai_attrs::{OP_TEXT_COMPLETION, PROVIDER_HTTP};
use lchat_types::completion::{CompletionRequest, CompletionResponse};
use lchat_types::config::ChatConfig;
use lchat_types::error::CompletionError;

/// Longest slice of a non-JSON error body echoed back to the user.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// HTTP text-completion provider.
pub struct HttpCompletionProvider {
    client: reqwest::Client,
    endpoint: String,
    timeout: Option<Duration>,
}

impl HttpCompletionProvider {
    /// Create a provider for `endpoint`.
    ///
    /// With `timeout: None` a request waits as long as the server takes.
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, CompletionError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            CompletionError::Transport(format!("failed to create HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    /// Create a provider from the endpoint and timeout in `config`.
    pub fn from_config(config: &ChatConfig) -> Result<Self, CompletionError> {
        Self::new(
            config.endpoint.clone(),
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Classify a reqwest failure.
    fn transport_error(&self, err: reqwest::Error) -> CompletionError {
        if err.is_timeout() {
            CompletionError::Timeout {
                secs: self.timeout.map(|t| t.as_secs()).unwrap_or_default(),
            }
        } else if err.is_connect() {
            CompletionError::Connection {
                endpoint: self.endpoint.clone(),
                message: root_cause(&err),
            }
        } else {
            CompletionError::Transport(root_cause(&err))
        }
    }
}

impl CompletionProvider for HttpCompletionProvider {
    fn name(&self) -> &str {
        PROVIDER_HTTP
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        let span = info_span!(
            "text_completion",
            gen_ai.operation.name = OP_TEXT_COMPLETION,
            gen_ai.provider.name = PROVIDER_HTTP,
            gen_ai.request.model = %request.model,
            gen_ai.request.max_tokens = request.max_tokens,
            gen_ai.request.temperature = request.temperature,
        );

        async {
            let response = self
                .client
                .post(&self.endpoint)
                .header(CONTENT_TYPE, "application/json")
                .json(request)
                .send()
                .await
                .map_err(|e| self.transport_error(e))?;

            let status = response.status();
            let body = response.text().await.map_err(|e| self.transport_error(e))?;
            debug!(
                status = status.as_u16(),
                body_len = body.len(),
                "completion response received"
            );

            parse_response_body(status, &body)
        }
        .instrument(span)
        .await
    }
}

/// Turn a status code and raw body into a [`CompletionResponse`].
///
/// A non-success status is still `Ok` when the body carries an `error`
/// field, so the caller reports the server's own message.
pub(crate) fn parse_response_body(
    status: StatusCode,
    body: &str,
) -> Result<CompletionResponse, CompletionError> {
    let parsed = serde_json::from_str::<CompletionResponse>(body);

    if status.is_success() {
        return parsed
            .map_err(|e| CompletionError::Malformed(format!("failed to parse response: {e}")));
    }

    match parsed {
        Ok(response) if response.error_message().is_some() => Ok(response),
        _ => {
            let snippet: String = body.trim().chars().take(MAX_ERROR_BODY_CHARS).collect();
            Err(CompletionError::Endpoint(if snippet.is_empty() {
                format!("HTTP {status}")
            } else {
                format!("HTTP {status}: {snippet}")
            }))
        }
    }
}

/// Innermost error message, e.g. "Connection refused (os error 111)".
fn root_cause(err: &(dyn StdError + 'static)) -> String {
    let mut current = err;
    while let Some(source) = current.source() {
        current = source;
    }
    current.to_string()
}
