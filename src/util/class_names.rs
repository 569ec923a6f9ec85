//! Class attribute composition.

#[cfg(test)]
#[path = "class_names_test.rs"]
mod class_names_test;

/// Join class fragments into one attribute value.
///
/// Fragments may hold several whitespace-separated classes or be empty.
/// Empty fragments are skipped and repeated classes keep their first
/// position.
pub fn cn(parts: &[&str]) -> String {
    let mut seen: Vec<&str> = Vec::new();
    for token in parts.iter().flat_map(|part| part.split_whitespace()) {
        if !seen.contains(&token) {
            seen.push(token);
        }
    }
    seen.join(" ")
}

/// Return `class` when `enabled`, otherwise an empty fragment.
pub fn when(enabled: bool, class: &str) -> &str {
    if enabled { class } else { "" }
}
