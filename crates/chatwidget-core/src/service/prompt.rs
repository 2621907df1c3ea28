//! System prompt assembly for the completion provider.

use chatwidget_types::profile::{Flag, RestaurantProfile};

/// Build the system prompt describing the restaurant.
///
/// Dietary and seating details are embedded as compact JSON so the model
/// sees the same fields the profile declares.
pub fn build_system_prompt(profile: &RestaurantProfile) -> String {
    let name = profile.name.as_deref().unwrap_or("the restaurant");
    let address = profile.address.as_deref().unwrap_or_default();
    let phone = profile.phone.as_deref().unwrap_or_default();
    let notes = profile.notes.as_deref().unwrap_or_default();
    let dietary = serde_json::to_string(&profile.dietary).unwrap_or_default();
    let seating = serde_json::to_string(&profile.seating).unwrap_or_default();
    let reservations = match &profile.reservations {
        Some(Flag::Enabled(enabled)) => enabled.to_string(),
        Some(Flag::Note(note)) => note.clone(),
        None => String::new(),
    };

    format!(
        "You are a helpful, concise assistant for a restaurant website. \
         Use the restaurant profile truthfully and keep answers short (1–2 sentences). \
         Restaurant: {name}. Address: {address}. Phone: {phone}. \
         Dietary: {dietary}. Seating: {seating}. Reservations: {reservations}. \
         Notes: {notes}"
    )
}
