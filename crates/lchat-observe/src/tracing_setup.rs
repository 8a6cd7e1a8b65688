//! Tracing subscriber initialization.
//!
//! Logs go to stderr so they never interleave with the chat transcript on
//! stdout.
//!
//! # Usage
//!
//! ```no_run
//! let filter = lchat_observe::tracing_setup::default_filter(1, false);
//! lchat_observe::tracing_setup::init_tracing(filter).unwrap();
//! ```

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter directive for the CLI verbosity flags.
///
/// - `--quiet`: errors only
/// - default: warnings
/// - `-v`: info, debug for lchat crates
/// - `-vv` and up: everything
pub fn default_filter(verbose: u8, quiet: bool) -> &'static str {
    match verbose {
        0 if quiet => "error",
        0 => "warn",
        1 => "info,lchat=debug,lchat_core=debug,lchat_infra=debug",
        _ => "trace",
    }
}

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `fallback_filter` when set.
///
/// # Errors
///
/// Returns an error if the global subscriber has already been set.
pub fn init_tracing(fallback_filter: &str) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_filter));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
