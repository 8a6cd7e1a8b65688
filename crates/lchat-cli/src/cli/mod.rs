//! Command-line flags for the `lchat` binary.
//!
//! Every flag is optional: plain `lchat` starts a chat with the configured
//! (or default) endpoint.

pub mod chat;

use std::path::PathBuf;

use clap::Parser;
use lchat_types::config::ChatConfig;

/// Chat with a local text-completion endpoint.
#[derive(Parser, Debug)]
#[command(name = "lchat", version, about, long_about = None)]
pub struct Cli {
    /// Detailed logs on stderr (-v for debug, -vv for trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all logs except errors.
    #[arg(long)]
    pub quiet: bool,

    /// Read configuration from this file instead of ~/.lchat/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Completion endpoint URL for this session.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Model name for this session.
    #[arg(long)]
    pub model: Option<String>,
}

impl Cli {
    /// Flags win over file and environment settings.
    pub fn apply_overrides(&self, config: &mut ChatConfig) {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = endpoint.clone();
        }
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
    }
}
