//! lchat entry point.
//!
//! Binary name: `lchat`
//!
//! Parses flags, sets up logging, merges configuration, then runs the
//! interactive chat loop on stdin/stdout.

mod cli;

use clap::Parser;
use tokio::io::BufReader;

use lchat_core::chat::service::ChatService;
use lchat_infra::config::load_chat_config;
use lchat_infra::llm::HttpCompletionProvider;
use lchat_observe::tracing_setup::{default_filter, init_tracing};

use cli::Cli;
use cli::chat::banner::print_welcome_banner;
use cli::chat::input::ChatInput;
use cli::chat::loop_runner::run_chat_loop;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(default_filter(cli.verbose, cli.quiet))
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    let mut config = load_chat_config(cli.config.as_deref()).await?;
    cli.apply_overrides(&mut config);
    config.validate()?;
    tracing::debug!(?config, "configuration loaded");

    let provider = HttpCompletionProvider::from_config(&config)?;
    tracing::info!(
        endpoint = provider.endpoint(),
        model = %config.model,
        "completion provider ready"
    );
    let service = ChatService::new(provider, config);

    print_welcome_banner(service.config());

    let mut input = ChatInput::new(BufReader::new(tokio::io::stdin()));
    run_chat_loop(&service, &mut input).await?;

    Ok(())
}
