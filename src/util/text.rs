//! Character-oriented text slicing.
//!
//! Prompt excerpts and bilingual chunks are bounded in *characters*, not
//! bytes, so slicing must land on char boundaries.

/// Bounded prefix of `text`, at most `max_chars` characters.
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Slice `len_chars` characters starting at character offset `start_chars`.
///
/// Ranges past the end of the text yield the empty string.
pub fn char_range(text: &str, start_chars: usize, len_chars: usize) -> &str {
    let start = match text.char_indices().nth(start_chars) {
        Some((byte_idx, _)) => byte_idx,
        None => return "",
    };
    excerpt(&text[start..], len_chars)
}

/// Number of characters in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}
