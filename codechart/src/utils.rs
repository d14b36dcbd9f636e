//! Small text helpers shared by the builders.

/// Renders a code fragment as a node label: at most 30 characters, with an
/// ellipsis suffix when the text had to be cut.
pub(crate) fn truncate_label(text: &str) -> String {
    const MAX_CHARS: usize = 30;
    const KEPT_CHARS: usize = 27;

    if text.chars().count() > MAX_CHARS {
        let kept: String = text.chars().take(KEPT_CHARS).collect();
        format!("{kept}...")
    } else {
        text.to_owned()
    }
}

/// Joins a code fragment onto a single line: runs of whitespace (including
/// newlines inside a parenthesized expression) become one space, and leading
/// and trailing whitespace is dropped.
pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns the first `max_chars` characters of `text`, without a suffix.
/// Char-based so multi-byte input never splits a code point.
pub(crate) fn clip(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_label_short_text_unchanged() {
        assert_eq!(truncate_label("x = 1"), "x = 1");
        // Exactly 30 chars stays as-is.
        let exact = "a".repeat(30);
        assert_eq!(truncate_label(&exact), exact);
    }

    #[test]
    fn test_truncate_label_long_text_gets_ellipsis() {
        let long = "a".repeat(40);
        let label = truncate_label(&long);
        assert_eq!(label.chars().count(), 30);
        assert!(label.ends_with("..."));
    }

    #[test]
    fn test_collapse_whitespace_joins_lines() {
        assert_eq!(
            collapse_whitespace("x > 0\n        and y > 0"),
            "x > 0 and y > 0"
        );
        assert_eq!(collapse_whitespace("  x = 1  "), "x = 1");
    }

    #[test]
    fn test_clip_is_char_safe() {
        assert_eq!(clip("héllo wörld", 5), "héllo");
        assert_eq!(clip("short", 30), "short");
    }
}
