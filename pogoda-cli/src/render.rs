//! Plain-text rendering of weather lookups.

use chrono::Local;
use pogoda_core::CurrentConditions;

/// Multi-line weather card for one city.
pub fn weather_card(conditions: &CurrentConditions) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "{} {}, {}",
        conditions.condition().glyph(),
        conditions.city,
        conditions.country
    ));
    lines.push(format!(
        "  {:<12} {}°C",
        "Температура",
        conditions.temperature_rounded()
    ));
    lines.push(format!("  {:<12} {}%", "Влажность", conditions.humidity_pct));
    lines.push(format!("  {}", capitalized(&conditions.description)));
    lines.push(format!(
        "  Мин: {}°C · Макс: {}°C",
        conditions.temp_min_rounded(),
        conditions.temp_max_rounded()
    ));
    lines.push(format!(
        "  Обновлено: {}",
        conditions.observed_at.with_timezone(&Local).format("%H:%M")
    ));

    lines.join("\n")
}

/// First letter upper-cased, the rest untouched.
fn capitalized(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
