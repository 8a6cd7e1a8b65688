//! Welcome banner display for chat sessions.

use console::style;
use lchat_types::config::ChatConfig;

/// Print the welcome banner at the start of a chat session.
///
/// Shows the model and endpoint, and explains how to send a message and
/// how to leave.
pub fn print_welcome_banner(config: &ChatConfig) {
    println!();
    println!("  {}", style("lchat").cyan().bold());
    println!();
    println!("  {}     {}", style("Model:").bold(), style(&config.model).dim());
    println!("  {}  {}", style("Endpoint:").bold(), style(&config.endpoint).dim());
    println!(
        "  {}   {}",
        style("History:").bold(),
        style(format!("last {} exchanges", config.max_history_pairs)).dim()
    );
    println!();
    println!(
        "  {}",
        style("End a message with an empty line. Type exit or quit to leave.").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}
