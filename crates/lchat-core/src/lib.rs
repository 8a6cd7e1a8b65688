//! Business logic for lchat.
//!
//! This crate owns the conversation history, the prompt format, the chat
//! session state machine, and the `CompletionProvider` port that the
//! infrastructure layer implements. It depends only on `lchat-types` --
//! never on `lchat-infra` or any HTTP crate.

pub mod chat;
pub mod history;
pub mod llm;
pub mod prompt;
