//! OpenTelemetry GenAI Semantic Convention attribute values.
//!
//! Only values live here. `tracing` span macros take field names as
//! literal tokens, so the completion span in `lchat-infra` spells out
//! `gen_ai.operation.name`, `gen_ai.provider.name`, `gen_ai.request.model`,
//! `gen_ai.request.max_tokens` and `gen_ai.request.temperature` inline.

// --- Operation name values ---

/// Legacy single-prompt text completion.
pub const OP_TEXT_COMPLETION: &str = "text_completion";

// --- Provider name values ---

/// Plain HTTP completion endpoint (Ollama, llama.cpp server, vLLM).
pub const PROVIDER_HTTP: &str = "http";
