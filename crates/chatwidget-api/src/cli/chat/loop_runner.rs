//! Main chat loop.
//!
//! Banner, then read-dispatch-print until `/quit` or Ctrl+D. Every reply
//! goes through the resolver so the conversation buffer stays the single
//! record of the session.

use std::future::Future;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use chatwidget_core::chat::ReplyResolver;
use chatwidget_types::chat::Role;

use crate::cli::ask::role_tag;

use super::banner::{print_welcome_banner, topic_list};
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};

/// Run the interactive chat loop until the user exits.
pub async fn run_chat_loop(
    mut resolver: ReplyResolver,
    backend: Option<&str>,
) -> anyhow::Result<()> {
    print_welcome_banner(backend);

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) =
        ChatInput::new(prompt).map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let text = match chat_input.read_line().await {
            InputEvent::Eof => break,
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Message(text) => text,
        };

        if text.trim().is_empty() {
            continue;
        }

        if let Some(cmd) = commands::parse(&text) {
            match cmd {
                ChatCommand::Help => commands::print_help(),
                ChatCommand::Clear => chat_input.clear(),
                ChatCommand::Exit => break,
                ChatCommand::Topics => {
                    println!("\n  {} {}\n", style("Quick topics:").bold(), topic_list());
                }
                ChatCommand::History => print_history(&resolver),
                ChatCommand::Quick(topic) => {
                    println!("  {} {}", role_tag(Role::User), topic);
                    let reply = with_spinner(resolver.respond_quick(topic)).await;
                    print_assistant(&reply);
                }
                ChatCommand::Unknown(message) => {
                    println!(
                        "\n  {} {}. Type /help for available commands.\n",
                        style("?").yellow().bold(),
                        style(message).dim()
                    );
                }
            }
            continue;
        }

        if let Some(reply) = with_spinner(resolver.respond(&text)).await {
            print_assistant(&reply);
        }
    }

    println!("\n  {}", style("Session ended.").dim());
    Ok(())
}

/// Await `fut` behind a "thinking..." spinner.
async fn with_spinner<F: Future>(fut: F) -> F::Output {
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message("thinking...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let output = fut.await;
    spinner.finish_and_clear();
    output
}

fn print_assistant(reply: &str) {
    println!("  {} {}", role_tag(Role::Assistant), reply);
    println!();
}

fn print_history(resolver: &ReplyResolver) {
    println!();
    if resolver.buffer().is_empty() {
        println!("  {}", style("No messages yet.").dim());
    }
    for turn in resolver.buffer().turns() {
        println!("  {} {}", role_tag(turn.role()), turn.content());
    }
    println!();
}
