//! Pure casing helpers for raw vehicle API fields.

/// Country codes rendered as acronyms rather than title case.
const ACRONYM_COUNTRIES: [&str; 2] = ["usa", "ussr"];

/// Normalize a raw country code (`usa` -> `USA`, `germany` -> `Germany`).
pub fn normalize_country(raw: &str) -> String {
    if ACRONYM_COUNTRIES.contains(&raw) {
        raw.to_uppercase()
    } else {
        capitalize_first(raw)
    }
}

/// Normalize an underscore-delimited vehicle type (`heavy_tank` -> `Heavy Tank`).
pub fn normalize_vehicle_type(raw: &str) -> String {
    raw.split('_')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Upper-case the first character and leave the rest untouched.
pub fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
