//! Shared domain types for lchat.
//!
//! This crate contains the types used across the lchat workspace: exchange
//! lines, completion request/response shapes, configuration, and errors.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod chat;
pub mod completion;
pub mod config;
pub mod error;
