//! Small string helpers shared by the display side of a form.

/// Uppercase the first character and lowercase the rest.
///
/// `"mARY"` becomes `"Mary"`; the empty string stays empty.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Cut `text` to at most `max_chars` characters, trim the cut, and append
/// `...`. Text that already fits is returned unchanged.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim())
}

/// First character of `s` as given, uppercased. Empty for an empty string.
pub(crate) fn initial(s: &str) -> String {
    s.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
