//! Multi-line input handling for the chat loop.
//!
//! A message is every line typed up to the first empty line. `exit` or
//! `quit` (any case) as the whole message ends the session.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Events produced by the input handler.
#[derive(Debug, PartialEq)]
pub enum InputEvent {
    /// User submitted a message. May be empty.
    Message(String),
    /// User typed an exit keyword.
    Exit,
    /// End of input (Ctrl+D or closed stdin) with nothing pending.
    Eof,
}

/// Whether `message` is an exit keyword.
pub fn is_exit_command(message: &str) -> bool {
    let trimmed = message.trim();
    trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit")
}

/// Reads messages from any async line source (stdin in production).
pub struct ChatInput<R> {
    reader: R,
}

impl<R: AsyncBufRead + Unpin> ChatInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Read one message.
    ///
    /// Lines are joined with `\n`. Lines still pending when input ends are
    /// submitted; the following call then returns `Eof`.
    pub async fn read_message(&mut self) -> std::io::Result<InputEvent> {
        let mut lines: Vec<String> = Vec::new();

        loop {
            let mut buf = Vec::new();
            if self.reader.read_until(b'\n', &mut buf).await? == 0 {
                if lines.is_empty() {
                    return Ok(InputEvent::Eof);
                }
                break;
            }

            // Bytes that are not UTF-8 become U+FFFD rather than ending the session.
            let decoded = String::from_utf8_lossy(&buf);
            let line = decoded.trim_end_matches(|c: char| c == '\n' || c == '\r');
            if line.is_empty() {
                break;
            }
            lines.push(line.to_string());
        }

        let message = lines.join("\n");
        if is_exit_command(&message) {
            Ok(InputEvent::Exit)
        } else {
            Ok(InputEvent::Message(message))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::BufReader;

    fn input(text: &'static str) -> ChatInput<BufReader<&'static [u8]>> {
        ChatInput::new(BufReader::new(text.as_bytes()))
    }

    #[test]
    fn test_exit_keywords_any_case() {
        assert!(is_exit_command("exit"));
        assert!(is_exit_command("EXIT"));
        assert!(is_exit_command("Quit"));
        assert!(!is_exit_command("exit now"));
        assert!(!is_exit_command("exit\nplease"));
        assert!(!is_exit_command(""));
    }

    #[tokio::test]
    async fn test_single_line_message() {
        let mut chat = input("hello\n\n");
        assert_eq!(
            chat.read_message().await.unwrap(),
            InputEvent::Message("hello".to_string())
        );
    }

    #[tokio::test]
    async fn test_multi_line_message_joined_without_trailing_newline() {
        let mut chat = input("first\nsecond\r\nthird\n\nnext\n\n");
        assert_eq!(
            chat.read_message().await.unwrap(),
            InputEvent::Message("first\nsecond\nthird".to_string())
        );
        assert_eq!(
            chat.read_message().await.unwrap(),
            InputEvent::Message("next".to_string())
        );
    }

    #[tokio::test]
    async fn test_exit_and_quit() {
        let mut chat = input("EXIT\n\nquit\n\n");
        assert_eq!(chat.read_message().await.unwrap(), InputEvent::Exit);
        assert_eq!(chat.read_message().await.unwrap(), InputEvent::Exit);
    }

    #[tokio::test]
    async fn test_blank_first_line_is_empty_message() {
        let mut chat = input("\n");
        assert_eq!(
            chat.read_message().await.unwrap(),
            InputEvent::Message(String::new())
        );
    }

    #[tokio::test]
    async fn test_eof_submits_pending_lines_then_reports_eof() {
        let mut chat = input("no blank line");
        assert_eq!(
            chat.read_message().await.unwrap(),
            InputEvent::Message("no blank line".to_string())
        );
        assert_eq!(chat.read_message().await.unwrap(), InputEvent::Eof);
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_replaced_and_reading_continues() {
        let bytes: &'static [u8] = b"caf\xe9\n\nhello\n\n";
        let mut chat = ChatInput::new(BufReader::new(bytes));
        assert_eq!(
            chat.read_message().await.unwrap(),
            InputEvent::Message("caf\u{fffd}".to_string())
        );
        assert_eq!(
            chat.read_message().await.unwrap(),
            InputEvent::Message("hello".to_string())
        );
    }

    #[tokio::test]
    async fn test_empty_input_is_eof() {
        let mut chat = input("");
        assert_eq!(chat.read_message().await.unwrap(), InputEvent::Eof);
    }
}
