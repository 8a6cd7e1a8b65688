//! CompletionProvider trait definition.
//!
//! The port between the chat logic and whatever actually answers the
//! prompt. The HTTP implementation lives in lchat-infra; tests use an
//! in-memory fake.

use lchat_types::completion::{CompletionRequest, CompletionResponse};
use lchat_types::error::CompletionError;

/// Trait for text-completion backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
///
/// Implementations return `Ok` for any response body they could parse,
/// including bodies that carry an `error` field. Interpreting the body
/// (error field, empty text) is the caller's job so that every backend
/// gets identical semantics.
pub trait CompletionProvider: Send + Sync {
    /// Human-readable provider name (e.g., "http").
    fn name(&self) -> &str;

    /// Send a completion request and wait for the parsed response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, CompletionError>> + Send;
}
