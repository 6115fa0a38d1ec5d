//! Table previews of long text

/// Characters kept in the manage table before the ellipsis
pub const PREVIEW_CHARS: usize = 50;

const ELLIPSIS: &str = "...";

/// Cut `text` to `max_chars` characters and append `...` when it was longer.
///
/// Counts characters, not bytes, so multi-byte text is never split.
///
/// # Example
/// ```
/// use quotectl_server::models::preview;
///
/// assert_eq!(preview("short", 50), "short");
/// assert_eq!(preview("abcdef", 3), "abc...");
/// ```
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_owned(),
    }
}
