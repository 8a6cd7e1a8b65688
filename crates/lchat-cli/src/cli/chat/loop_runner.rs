//! Main chat loop orchestration.
//!
//! Reads a message, runs one turn against the completion service with a
//! spinner on screen, prints the reply or the error, and repeats until the
//! user exits. Failed turns are reported and the loop carries on.

use std::io::Write;
use std::time::{Duration, Instant};

use tokio::io::AsyncBufRead;
use tracing::{debug, info};

use lchat_core::chat::service::ChatService;
use lchat_core::chat::session::SessionManager;
use lchat_core::history::HistoryBuffer;
use lchat_core::llm::provider::CompletionProvider;

use super::input::{ChatInput, InputEvent};
use super::renderer::{
    ThinkingSpinner, render_error, render_farewell, render_reply, render_stats_footer,
    render_user_prompt,
};

/// Run the interactive chat loop until the user exits.
///
/// Returns the finished session so the caller can inspect turn counts.
pub async fn run_chat_loop<P, R>(
    service: &ChatService<P>,
    input: &mut ChatInput<R>,
) -> anyhow::Result<SessionManager>
where
    P: CompletionProvider,
    R: AsyncBufRead + Unpin,
{
    let config = service.config();
    let spinner_interval = Duration::from_millis(config.spinner_interval_ms);
    let mut history = HistoryBuffer::new(config.max_history_pairs);
    let mut session = SessionManager::new();
    debug!(capacity = history.capacity(), "chat session started");

    loop {
        print!("{}", render_user_prompt());
        std::io::stdout().flush()?;

        let text = match input.read_message().await? {
            InputEvent::Exit | InputEvent::Eof => {
                session.terminate()?;
                let farewell = render_farewell(session.turn_count(), session.failed_turns());
                println!("\n{farewell}");
                break;
            }
            InputEvent::Message(text) => text,
        };

        session.submit()?;
        let spinner = ThinkingSpinner::start(spinner_interval);
        let start_time = Instant::now();
        let result = service.send_turn(&mut history, &text).await;
        let elapsed = start_time.elapsed();
        spinner.finish();
        session.receive(result.is_ok())?;

        match result {
            Ok(reply) => {
                println!("\n{}", render_reply(&reply));
                println!("{}", render_stats_footer(elapsed, &config.model));
            }
            Err(err) => {
                println!("\n{}", render_error(&err));
            }
        }
        println!();
        session.finish_render()?;
    }

    info!(
        turns = session.turn_count(),
        failed = session.failed_turns(),
        "chat session ended"
    );
    Ok(session)
}
