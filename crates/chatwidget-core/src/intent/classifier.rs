//! Keyword intent classifier.
//!
//! Rules are tested in declaration order against the trimmed, lowercased
//! input; the first rule with any keyword contained in the text wins.
//! Keywords match as substrings, so stems like `locat` cover "location"
//! and "located". There is no scoring: "open menu" is an hours question.

use chatwidget_types::knowledge::KnowledgeBase;
use chatwidget_types::topic::Topic;

/// Ordered classification rules. Order is significant.
const INTENT_RULES: &[(Topic, &[&str])] = &[
    (Topic::Hours, &["hour", "open", "close", "time"]),
    (Topic::Menu, &["menu", "dish", "food", "eat", "special"]),
    (
        Topic::Directions,
        &["direction", "where", "address", "locat", "map"],
    ),
    (Topic::Vegetarian, &["veg", "vegetarian", "vegan"]),
    (Topic::Call, &["call", "phone", "number", "contact"]),
];

/// Map free text to the first matching topic, or `None`.
pub fn classify(text: &str) -> Option<Topic> {
    let normalized = text.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    INTENT_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| normalized.contains(kw)))
        .map(|(topic, _)| *topic)
}

/// Answer from the knowledge base alone: the topic's canned reply, or the
/// help message when nothing matches.
pub fn local_reply(knowledge: &KnowledgeBase, text: &str) -> String {
    match classify(text) {
        Some(topic) => {
            tracing::debug!(%topic, "classified input locally");
            knowledge.lookup(topic).to_string()
        }
        None => {
            tracing::debug!("no topic matched, replying with help");
            knowledge.help().to_string()
        }
    }
}
