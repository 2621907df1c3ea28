//! Slash command parsing for the chat loop.
//!
//! Commands start with `/`. `/quick <topic>` plays the widget's quick-reply
//! buttons; the rest are terminal conveniences.

use console::style;

use chatwidget_types::topic::Topic;

#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    Help,
    Clear,
    Exit,
    /// Show the conversation buffer.
    History,
    /// List quick-reply topics.
    Topics,
    /// Send a quick-reply topic.
    Quick(Topic),
    /// Unknown command or bad argument, with the text to show.
    Unknown(String),
}

/// Parse user input as a slash command.
///
/// Returns `None` if the input doesn't start with `/`.
pub fn parse(input: &str) -> Option<ChatCommand> {
    let trimmed = input.trim();
    if !trimmed.starts_with('/') {
        return None;
    }

    let mut parts = trimmed.splitn(2, ' ');
    let cmd = parts.next().unwrap_or_default().to_lowercase();
    let arg = parts.next().map(str::trim).filter(|a| !a.is_empty());

    let command = match cmd.as_str() {
        "/help" | "/h" | "/?" => ChatCommand::Help,
        "/clear" | "/cls" => ChatCommand::Clear,
        "/exit" | "/quit" | "/q" => ChatCommand::Exit,
        "/history" => ChatCommand::History,
        "/topics" => ChatCommand::Topics,
        "/quick" => match arg.map(str::parse::<Topic>) {
            Some(Ok(topic)) => ChatCommand::Quick(topic),
            Some(Err(e)) => ChatCommand::Unknown(e),
            None => ChatCommand::Unknown("/quick requires a topic".to_string()),
        },
        other => ChatCommand::Unknown(format!("unknown command: {other}")),
    };
    Some(command)
}

pub fn print_help() {
    println!();
    println!("  {}", style("Available commands:").bold());
    println!();
    println!("  {}           {}", style("/help").cyan(), "Show this help message");
    println!("  {}  {}", style("/quick <topic>").cyan(), "Send a quick reply");
    println!("  {}         {}", style("/topics").cyan(), "List quick-reply topics");
    println!("  {}        {}", style("/history").cyan(), "Show the conversation so far");
    println!("  {}          {}", style("/clear").cyan(), "Clear the screen");
    println!("  {}           {}", style("/quit").cyan(), "End the chat session");
    println!();
    println!("  {}", style("Ctrl+D to exit").dim());
    println!();
}
