//! Canned replies for each topic.
//!
//! The knowledge base is plain configuration data. A deployment swaps the
//! restaurant identity by replacing entries in the `[knowledge]` table of the
//! widget config; the defaults below describe the house restaurant.

use serde::{Deserialize, Serialize};

use crate::topic::Topic;

/// Topic → reply mapping plus the generic help message.
///
/// Missing entries in a config table fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeBase {
    pub hours: String,
    pub menu: String,
    pub directions: String,
    pub vegetarian: String,
    pub call: String,
    /// Shown when no topic matches. Should mention every supported topic.
    pub help: String,
}

impl KnowledgeBase {
    /// The canned reply for a topic.
    pub fn lookup(&self, topic: Topic) -> &str {
        match topic {
            Topic::Hours => &self.hours,
            Topic::Menu => &self.menu,
            Topic::Directions => &self.directions,
            Topic::Vegetarian => &self.vegetarian,
            Topic::Call => &self.call,
        }
    }

    /// The generic help message used for unclassifiable input.
    pub fn help(&self) -> &str {
        &self.help
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self {
            hours: "We're open Monday to Wednesday 11am-9pm, Thursday 11am-10pm, \
                    Friday 11am-11pm, Saturday 10am-11pm and Sunday 10am-9pm."
                .to_string(),
            menu: "Our menu features family-style classics, fresh pasta, grilled favourites \
                   and daily specials. Ask us about today's picks!"
                .to_string(),
            directions: "You'll find us at 1420 Dundas Street West. Free parking is available \
                         behind the building."
                .to_string(),
            vegetarian: "Yes! We have plenty of vegetarian dishes, and most of them can be made \
                         vegan on request."
                .to_string(),
            call: "You can reach us by phone at (416) 555-0142.".to_string(),
            help: "I can help with our hours, menu, directions, vegetarian options, or how to \
                   call us. What would you like to know?"
                .to_string(),
        }
    }
}
