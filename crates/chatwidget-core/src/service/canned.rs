//! Canned replies answered from the restaurant profile.
//!
//! Unlike the widget's substring classifier, these rules use word-boundary
//! regexes so "seat" does not trigger the menu rule through "eat". Rules are
//! tried in order and the first match decides, even when the matching rule
//! has no data to answer with.

use std::sync::LazyLock;

use regex::Regex;

use chatwidget_types::profile::{Flag, RestaurantProfile};

static HOURS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(hours?|open|closing?|time|today)\b").expect("valid hours pattern")
});

static MENU_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(menu|dishes?|food|foods|specials?)\b").expect("valid menu pattern")
});

static ADDRESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(address|where|location|directions?|map)\b").expect("valid address pattern")
});

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(phone|call|number|contact)\b").expect("valid phone pattern")
});

static DIETARY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(gluten[- ]?free|nut[- ]?free|allergen|vegan|vegetarian)\b")
        .expect("valid dietary pattern")
});

static SEATING_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(seat|seating|group|party|booths?|booth|outdoor|patio)\b")
        .expect("valid seating pattern")
});

static RESERVE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(reserve|reservation|book(ing)?|table)\b").expect("valid reservation pattern")
});

/// Profile-backed intents, in matching order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CannedIntent {
    Hours,
    Menu,
    Address,
    Phone,
    Dietary,
    Seating,
}

/// First matching intent for already-normalized text.
pub fn detect_intent(normalized: &str) -> Option<CannedIntent> {
    if HOURS_PATTERN.is_match(normalized) {
        Some(CannedIntent::Hours)
    } else if MENU_PATTERN.is_match(normalized) {
        Some(CannedIntent::Menu)
    } else if ADDRESS_PATTERN.is_match(normalized) {
        Some(CannedIntent::Address)
    } else if PHONE_PATTERN.is_match(normalized) {
        Some(CannedIntent::Phone)
    } else if DIETARY_PATTERN.is_match(normalized) {
        Some(CannedIntent::Dietary)
    } else if SEATING_PATTERN.is_match(normalized) || RESERVE_PATTERN.is_match(normalized) {
        Some(CannedIntent::Seating)
    } else {
        None
    }
}

/// A canned reply for common questions, or `None` to defer to the provider.
pub fn canned_reply(user_text: &str, profile: &RestaurantProfile) -> Option<String> {
    let normalized = user_text.trim().to_lowercase();

    match detect_intent(&normalized)? {
        CannedIntent::Hours => Some(hours_reply(profile)),
        CannedIntent::Menu => Some(match &profile.menu_url {
            Some(url) if !url.is_empty() => format!("You can view our menu here: {url}"),
            _ => "We offer family-style classics and daily specials. Ask us about today's picks!"
                .to_string(),
        }),
        CannedIntent::Address => non_empty(&profile.address)
            .map(|addr| format!("We're located at: {addr}. Parking is available nearby.")),
        CannedIntent::Phone => {
            non_empty(&profile.phone).map(|phone| format!("You can reach us at {phone}."))
        }
        CannedIntent::Dietary => Some(dietary_reply(profile)),
        CannedIntent::Seating => Some(seating_reply(profile)),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn hours_reply(profile: &RestaurantProfile) -> String {
    if profile.hours.is_empty() {
        return "We're open daily; please check our website for the latest hours.".to_string();
    }

    let mut lines = vec!["Our hours:".to_string()];
    lines.extend(
        profile
            .hours
            .iter()
            .map(|(day, value)| format!("- {}: {value}", capitalize(day))),
    );
    lines.join("\n")
}

fn dietary_reply(profile: &RestaurantProfile) -> String {
    let diet = &profile.dietary;
    let mut parts: Vec<&str> = Vec::new();
    if diet.gluten_free {
        parts.push("gluten-free");
    }
    if diet.nut_free {
        parts.push("nut-free");
    }
    if diet.vegetarian {
        parts.push("vegetarian");
    }
    match &diet.vegan {
        Some(Flag::Enabled(true)) => parts.push("vegan options"),
        Some(flag) if flag.is_set() => parts.push("vegan upon request"),
        _ => {}
    }

    let joined = if parts.is_empty() {
        "several dietary".to_string()
    } else {
        parts.join(", ")
    };
    format!(
        "Yes, we offer {joined} options. Please let your server know about any allergies \
         so we can guide you."
    )
}

fn seating_reply(profile: &RestaurantProfile) -> String {
    let mut bits: Vec<String> = Vec::new();

    match &profile.reservations {
        Some(Flag::Enabled(true)) => bits.push("We accept reservations.".to_string()),
        Some(Flag::Enabled(false)) => {
            bits.push("We don’t take reservations; walk-ins are welcome.".to_string())
        }
        Some(Flag::Note(note)) if !note.is_empty() => bits.push(note.clone()),
        _ => {}
    }

    if profile.seating.outdoor == Some(true) {
        bits.push("We have outdoor seating.".to_string());
    }
    if profile.seating.booths == Some(true) {
        bits.push("Booths are available.".to_string());
    }
    if bits.is_empty() {
        bits.push("Seating availability varies by time and party size.".to_string());
    }

    let follow = match non_empty(&profile.phone) {
        Some(phone) => format!(" For large groups, please call {phone}."),
        None => " For large groups, please call ahead.".to_string(),
    };
    format!("{}{follow}", bits.join(" "))
}

/// First character uppercased, the rest lowercased.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
