//! Small string helpers used by messages and view models.

/// Cut `text` to at most `limit` characters, appending an ellipsis when it was shortened.
/// Trailing whitespace before the ellipsis is dropped.
#[must_use]
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit).collect();
    format!("{}…", cut.trim_end())
}

/// Upper-case the first character, leaving the rest untouched.
#[must_use]
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[must_use]
pub const fn plural_suffix(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
