//! The fixed set of intents the widget can answer locally.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fixed intent the local classifier can resolve to.
///
/// The string keys double as the quick-reply intent keys sent by the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Hours,
    Menu,
    Directions,
    Vegetarian,
    Call,
}

impl Topic {
    /// Every topic, in classification order.
    pub const ALL: [Topic; 5] = [
        Topic::Hours,
        Topic::Menu,
        Topic::Directions,
        Topic::Vegetarian,
        Topic::Call,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Hours => "hours",
            Topic::Menu => "menu",
            Topic::Directions => "directions",
            Topic::Vegetarian => "vegetarian",
            Topic::Call => "call",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hours" => Ok(Topic::Hours),
            "menu" => Ok(Topic::Menu),
            "directions" => Ok(Topic::Directions),
            "vegetarian" => Ok(Topic::Vegetarian),
            "call" => Ok(Topic::Call),
            other => Err(format!("unknown topic: '{other}'")),
        }
    }
}
