//! Session manager for an interactive chat.
//!
//! Tracks where the chat loop is in its turn cycle and counts completed and
//! failed turns for the farewell summary.
//!
//! ```text
//! Prompting --submit--> AwaitingResponse --receive--> Rendering
//!     ^                                                  |
//!     +------------------finish_render-------------------+
//! Prompting --terminate--> Terminated
//! ```

use std::fmt;

use lchat_types::error::SessionError;

/// Where the chat loop is in its turn cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Prompting,
    AwaitingResponse,
    Rendering,
    Terminated,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Prompting => write!(f, "prompting"),
            SessionState::AwaitingResponse => write!(f, "awaiting a response"),
            SessionState::Rendering => write!(f, "rendering"),
            SessionState::Terminated => write!(f, "terminated"),
        }
    }
}

/// Manages the lifecycle of a single chat session.
#[derive(Debug)]
pub struct SessionManager {
    state: SessionState,
    /// Turns that reached the endpoint and came back, successful or not.
    turn_count: u32,
    failed_turns: u32,
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionManager {
    /// A fresh session, waiting for the first message.
    pub fn new() -> Self {
        Self {
            state: SessionState::Prompting,
            turn_count: 0,
            failed_turns: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn failed_turns(&self) -> u32 {
        self.failed_turns
    }

    pub fn is_terminated(&self) -> bool {
        self.state == SessionState::Terminated
    }

    /// A non-exit message was submitted.
    pub fn submit(&mut self) -> Result<(), SessionError> {
        self.transition(
            SessionState::Prompting,
            SessionState::AwaitingResponse,
            "submit a message",
        )
    }

    /// The request finished, with or without a usable reply.
    pub fn receive(&mut self, succeeded: bool) -> Result<(), SessionError> {
        self.transition(
            SessionState::AwaitingResponse,
            SessionState::Rendering,
            "receive a response",
        )?;
        self.turn_count += 1;
        if !succeeded {
            self.failed_turns += 1;
        }
        Ok(())
    }

    /// Output for the turn has been printed.
    pub fn finish_render(&mut self) -> Result<(), SessionError> {
        self.transition(
            SessionState::Rendering,
            SessionState::Prompting,
            "finish rendering",
        )
    }

    /// Exit keyword or end of input.
    pub fn terminate(&mut self) -> Result<(), SessionError> {
        self.transition(SessionState::Prompting, SessionState::Terminated, "terminate")
    }

    fn transition(
        &mut self,
        from: SessionState,
        to: SessionState,
        action: &str,
    ) -> Result<(), SessionError> {
        if self.state != from {
            return Err(SessionError::InvalidTransition {
                state: self.state.to_string(),
                action: action.to_string(),
            });
        }
        tracing::trace!(from = %from, to = %to, "session transition");
        self.state = to;
        Ok(())
    }
}
