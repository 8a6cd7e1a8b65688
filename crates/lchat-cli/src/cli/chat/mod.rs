//! Interactive terminal chat.
//!
//! This module implements the chat loop: multi-line input, a thinking
//! spinner while the request is in flight, and styled replies and errors.
//! Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod input;
pub mod loop_runner;
pub mod renderer;
