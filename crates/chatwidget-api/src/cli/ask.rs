//! One-shot commands: `chatwidget ask` and `chatwidget quick`.

use console::style;

use chatwidget_core::chat::ReplyResolver;
use chatwidget_types::chat::{Role, Turn};
use chatwidget_types::topic::Topic;

/// Answer a single free-text question.
pub async fn ask(mut resolver: ReplyResolver, text: &str, json: bool) -> anyhow::Result<()> {
    match resolver.respond(text).await {
        Some(reply) => print_reply(&reply, json),
        None => anyhow::bail!("nothing to ask: the question is empty"),
    }
}

/// Answer a single quick-reply topic.
pub async fn quick(mut resolver: ReplyResolver, topic: Topic, json: bool) -> anyhow::Result<()> {
    let reply = resolver.respond_quick(topic).await;
    print_reply(&reply, json)
}

fn print_reply(reply: &str, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&Turn::assistant(reply))?);
    } else {
        println!("{} {}", role_tag(Role::Assistant), reply);
    }
    Ok(())
}

/// Styled `[user]` / `[assistant]` prefix for terminal output.
pub fn role_tag(role: Role) -> String {
    let tag = format!("[{role}]");
    match role {
        Role::User => style(tag).cyan().bold().to_string(),
        Role::Assistant => style(tag).green().bold().to_string(),
    }
}
