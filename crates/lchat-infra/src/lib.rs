//! Infrastructure layer for lchat.
//!
//! Contains the HTTP implementation of the `CompletionProvider` port defined
//! in `lchat-core`, plus configuration loading from the data directory and
//! the environment.

pub mod config;
pub mod llm;
