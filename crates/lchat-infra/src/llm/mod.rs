//! Completion provider implementations.
//!
//! Contains the concrete implementation of the [`CompletionProvider`]
//! trait defined in `lchat-core`: a plain HTTP client for OpenAI-style
//! `/v1/completions` endpoints.
//!
//! [`CompletionProvider`]: lchat_core::llm::provider::CompletionProvider

pub mod http;

pub use http::HttpCompletionProvider;
