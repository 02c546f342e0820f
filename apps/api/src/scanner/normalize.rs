/// Lowercases `text` and replaces every character that is not an ASCII letter,
/// ASCII digit, or whitespace with a single space. Whitespace runs are kept as-is.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Whitespace-delimited word count, as the length rubric sees it.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
