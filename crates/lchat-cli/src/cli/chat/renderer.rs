//! Terminal output for the chat loop.
//!
//! Rendering functions return strings so the loop decides where they go;
//! [`ThinkingSpinner`] draws on stderr while a request is outstanding.

use std::time::Duration;

use console::{StyledObject, Term, style};
use indicatif::{ProgressBar, ProgressStyle};
use lchat_types::error::CompletionError;

/// Spinner glyphs; the last one is shown when finished.
const SPINNER_FRAMES: &str = "|/-\\ ";

/// Label shown before the user's input.
pub fn render_user_prompt() -> String {
    format!("  {} ", style("You >").green().bold())
}

/// Render `text` behind an optional label, indenting continuation lines.
///
/// Example: `  Assistant > Hello there`
pub fn render_message(label: Option<StyledObject<&str>>, text: &str) -> String {
    let body = text.replace('\n', "\n  ");
    match label {
        Some(label) => format!("  {label} {body}"),
        None => format!("  {body}"),
    }
}

/// Render an assistant reply.
pub fn render_reply(reply: &str) -> String {
    render_message(Some(style("Assistant >").cyan().bold()), reply)
}

/// Render a failed turn.
///
/// Connection failures get a hint, since "server not running" is the
/// usual cause with a local endpoint.
pub fn render_error(err: &CompletionError) -> String {
    match err {
        CompletionError::EmptyResponse => {
            render_message(Some(style("!").yellow().bold()), &err.to_string())
        }
        CompletionError::Connection { .. } => render_message(
            Some(style("!").red().bold()),
            &format!("{err}\n{}", style("Is the completion server running?").dim()),
        ),
        _ => render_message(Some(style("!").red().bold()), &format!("Error: {err}")),
    }
}

/// Footer after a reply: `  | 1.2s · llama3`
pub fn render_stats_footer(elapsed: Duration, model: &str) -> String {
    format!(
        "  {} {} {} {}",
        style("|").dim(),
        style(format!("{:.1}s", elapsed.as_secs_f64())).dim(),
        style("\u{00b7}").dim(),
        style(model).dim(),
    )
}

/// Farewell line: `  Session ended. 3 turns, 1 failed.`
pub fn render_farewell(turns: u32, failed: u32) -> String {
    let summary = if turns == 0 {
        "Goodbye!".to_string()
    } else {
        format!(
            "Session ended. {turns} turn{}, {failed} failed.",
            if turns == 1 { "" } else { "s" }
        )
    };
    format!("  {}", style(summary).dim())
}

/// Spinner shown while waiting for the endpoint.
///
/// Ticks on indicatif's own thread, so the request future runs undisturbed
/// on the caller's task.
pub struct ThinkingSpinner {
    bar: ProgressBar,
    term: Term,
}

impl ThinkingSpinner {
    /// Start spinning immediately, advancing one frame per `interval`.
    pub fn start(interval: Duration) -> Self {
        let term = Term::stderr();
        if term.is_term() {
            let _ = term.hide_cursor();
        }

        let bar = ProgressBar::new_spinner();
        match ProgressStyle::with_template("  {spinner:.cyan} {msg}") {
            Ok(spinner_style) => bar.set_style(spinner_style.tick_chars(SPINNER_FRAMES)),
            Err(e) => tracing::debug!(error = %e, "invalid spinner template, using default"),
        }
        bar.set_message("thinking...");
        bar.enable_steady_tick(interval);

        Self { bar, term }
    }

    /// Clear the spinner line and restore the cursor.
    pub fn finish(self) {
        self.bar.finish_and_clear();
        if self.term.is_term() {
            let _ = self.term.show_cursor();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_reply_contains_text() {
        let line = render_reply("Hello there");
        assert!(line.contains("Assistant >"));
        assert!(line.ends_with("Hello there"));
    }

    #[test]
    fn render_message_indents_continuation_lines() {
        let line = render_message(None, "one\ntwo");
        assert_eq!(line, "  one\n  two");
    }

    #[test]
    fn render_error_empty_response() {
        let line = render_error(&CompletionError::EmptyResponse);
        assert!(line.contains("Assistant did not provide a response"));
        assert!(!line.contains("Error:"));
    }

    #[test]
    fn render_error_endpoint_message() {
        let line = render_error(&CompletionError::Endpoint("bad model".to_string()));
        assert!(line.contains("Error: endpoint error: bad model"));
    }

    #[test]
    fn render_error_connection_has_hint() {
        let line = render_error(&CompletionError::Connection {
            endpoint: "http://localhost:11434/v1/completions".to_string(),
            message: "Connection refused".to_string(),
        });
        assert!(line.contains("localhost:11434"));
        assert!(line.contains("Is the completion server running?"));
    }

    #[test]
    fn render_stats_footer_contains_time_and_model() {
        let footer = render_stats_footer(Duration::from_millis(1_250), "llama3");
        assert!(footer.contains("1.2s") || footer.contains("1.3s"));
        assert!(footer.contains("llama3"));
    }

    #[test]
    fn render_farewell_counts() {
        assert!(render_farewell(0, 0).contains("Goodbye!"));
        assert!(render_farewell(1, 0).contains("1 turn, 0 failed"));
        assert!(render_farewell(3, 1).contains("3 turns, 1 failed"));
    }

    #[test]
    fn spinner_starts_and_finishes() {
        let spinner = ThinkingSpinner::start(Duration::from_millis(10));
        spinner.finish();
    }
}
