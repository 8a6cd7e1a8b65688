//! Prompt builder for the completion endpoint.
//!
//! The endpoint sees the whole conversation as one text blob:
//!
//! ```text
//! User: hi
//! Assistant: hello
//! User: how are you?
//! Assistant:
//! ```
//!
//! The trailing `Assistant:` cue asks the model to continue as the
//! assistant; the default stop tokens cut it off before it starts writing
//! the next `User:` line itself.

use crate::history::HistoryBuffer;

/// Cue appended after the history.
pub const ASSISTANT_CUE: &str = "\nAssistant:";

/// Builds the completion prompt from conversation history.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Serialize `history` as `"<Role>: <text>"` lines joined by `\n`,
    /// followed by [`ASSISTANT_CUE`].
    pub fn build(history: &HistoryBuffer) -> String {
        let mut prompt = history
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        prompt.push_str(ASSISTANT_CUE);
        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lchat_types::chat::Role;

    #[test]
    fn test_single_user_line() {
        let mut history = HistoryBuffer::new(5);
        history.append(Role::User, "hi");
        assert_eq!(PromptBuilder::build(&history), "User: hi\nAssistant:");
    }

    #[test]
    fn test_multiple_lines() {
        let mut history = HistoryBuffer::new(5);
        history.append(Role::User, "hi");
        history.append(Role::Assistant, "hello");
        history.append(Role::User, "line one\nline two");

        assert_eq!(
            PromptBuilder::build(&history),
            "User: hi\nAssistant: hello\nUser: line one\nline two\nAssistant:"
        );
    }

    #[test]
    fn test_empty_history() {
        let history = HistoryBuffer::new(5);
        assert_eq!(PromptBuilder::build(&history), "\nAssistant:");
    }

    #[test]
    fn test_build_is_pure() {
        let mut history = HistoryBuffer::new(5);
        history.append(Role::User, "hi");
        let first = PromptBuilder::build(&history);
        let second = PromptBuilder::build(&history);
        assert_eq!(first, second);
        assert_eq!(history.len(), 1);
    }
}
