//! Chat turn orchestration and session lifecycle.

pub mod service;
pub mod session;
