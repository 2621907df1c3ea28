//! Restaurant profile loaded by the reply service.
//!
//! Mirrors `restaurant.yml`. Every field is optional; the canned responder
//! and the system prompt degrade gracefully when data is missing.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Everything the reply service knows about the restaurant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RestaurantProfile {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub menu_url: Option<String>,

    /// Day → opening hours, in the order written in the profile.
    #[serde(default)]
    pub hours: IndexMap<String, String>,

    #[serde(default)]
    pub dietary: DietaryOptions,

    #[serde(default)]
    pub seating: SeatingOptions,

    /// `true`, `false`, or a free-text policy.
    #[serde(default)]
    pub reservations: Option<Flag>,

    #[serde(default)]
    pub notes: Option<String>,
}

/// A yes/no setting that may instead carry a short note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Flag {
    Enabled(bool),
    Note(String),
}

impl Flag {
    /// False for `false` and for an empty note.
    pub fn is_set(&self) -> bool {
        match self {
            Flag::Enabled(enabled) => *enabled,
            Flag::Note(note) => !note.is_empty(),
        }
    }
}

/// Dietary accommodations. The three common ones default to available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietaryOptions {
    #[serde(default = "default_true")]
    pub gluten_free: bool,

    #[serde(default = "default_true")]
    pub nut_free: bool,

    #[serde(default = "default_true")]
    pub vegetarian: bool,

    /// `true` for a vegan menu, a note for "on request", absent for none.
    #[serde(default)]
    pub vegan: Option<Flag>,
}

fn default_true() -> bool {
    true
}

impl Default for DietaryOptions {
    fn default() -> Self {
        Self {
            gluten_free: true,
            nut_free: true,
            vegetarian: true,
            vegan: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingOptions {
    #[serde(default)]
    pub outdoor: Option<bool>,

    #[serde(default)]
    pub booths: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_from_yaml_keeps_hour_order() {
        let yaml = r#"
name: Dlanos Family Restaurant
phone: "(416) 555-0142"
hours:
  monday: "11am - 9pm"
  tuesday: "11am - 9pm"
  sunday: "10am - 8pm"
dietary:
  vegan: "upon request"
reservations: true
"#;
        let profile: RestaurantProfile = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(profile.name.as_deref(), Some("Dlanos Family Restaurant"));
        let days: Vec<&str> = profile.hours.keys().map(String::as_str).collect();
        assert_eq!(days, vec!["monday", "tuesday", "sunday"]);
        assert!(profile.dietary.gluten_free);
        assert_eq!(
            profile.dietary.vegan,
            Some(Flag::Note("upon request".to_string()))
        );
        assert_eq!(profile.reservations, Some(Flag::Enabled(true)));
        assert_eq!(profile.seating, SeatingOptions::default());
    }

    #[test]
    fn test_empty_yaml_document_is_default_profile() {
        let profile: RestaurantProfile = serde_yaml_ng::from_str("{}").unwrap();
        assert_eq!(profile, RestaurantProfile::default());
    }

    #[test]
    fn test_flag_is_set() {
        assert!(Flag::Enabled(true).is_set());
        assert!(!Flag::Enabled(false).is_set());
        assert!(Flag::Note("call ahead".to_string()).is_set());
        assert!(!Flag::Note(String::new()).is_set());
    }
}
