//! Welcome banner for chat sessions.

use console::style;

use chatwidget_types::topic::Topic;

/// Print the banner shown when a chat session starts.
///
/// `backend` is the remote endpoint when one is enabled.
pub fn print_welcome_banner(backend: Option<&str>) {
    println!();
    println!("  * {}", style("Restaurant chat").cyan().bold());
    println!(
        "  {}",
        style("Ask about hours, the menu, directions, vegetarian options or calling us.").dim()
    );
    println!();
    println!(
        "  {}  {}",
        style("Replies:").bold(),
        style(backend.unwrap_or("local")).dim()
    );
    println!(
        "  {}  {}",
        style("Quick:").bold(),
        style(topic_list()).dim()
    );
    println!();
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}

/// Quick-reply keys joined for display.
pub fn topic_list() -> String {
    Topic::ALL
        .iter()
        .map(Topic::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
