//! Text utilities shared by the fragment renderers: HTML escaping and
//! paragraph-count truncation.

/// Escapes `&`, `<`, and `>` for safe insertion into HTML text. The ampersand
/// is replaced first so the entities introduced by the other replacements are
/// not escaped a second time.
pub fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Truncates markup after `max` paragraphs, using `</p>` as the paragraph
/// delimiter, and appends `more` (typically a "read more" link) to the result.
/// Texts that split into fewer than `max` segments are returned unchanged.
///
/// The comparison is against the segment count of the split, not the
/// paragraph count: a text ending in `</p>` splits into one more segment than
/// it has paragraphs, so a text with exactly `max` terminated paragraphs is
/// truncated rather than returned as-is.
pub fn truncate_paragraphs(text: &str, max: usize, more: &str) -> String {
    const DELIMITER: &str = "</p>";
    let segments: Vec<&str> = text.split(DELIMITER).collect();
    if segments.len() < max {
        text.to_owned()
    } else {
        let mut out = segments[..max].join(DELIMITER);
        out.push_str(DELIMITER);
        out.push_str(more);
        out
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_escape_ordering() {
        assert_eq!(escape("&<>"), "&amp;&lt;&gt;");
    }

    #[test]
    fn test_escape_empty() {
        assert_eq!(escape(""), "");
        assert_eq!(escape(escape("").as_str()), "");
    }

    #[test]
    fn test_escape_mixed() {
        assert_eq!(
            escape("<p>Fish & chips</p>"),
            "&lt;p&gt;Fish &amp; chips&lt;/p&gt;"
        );
    }

    #[test]
    fn test_truncate_shorter_than_max_unchanged() {
        // Two unterminated-final-paragraph segments, max 3: untouched.
        let text = "<p>a</p><p>b";
        assert_eq!(truncate_paragraphs(text, 3, "…"), text);
    }

    #[test]
    fn test_truncate_exact_count_is_truncated() {
        // Exactly `max` paragraphs still take the truncation branch.
        assert_eq!(
            truncate_paragraphs("<p>a</p><p>b", 2, "<a>more</a>"),
            "<p>a</p><p>b</p><a>more</a>"
        );
    }

    #[test]
    fn test_truncate_drops_excess_paragraphs() {
        assert_eq!(
            truncate_paragraphs("<p>a</p><p>b</p><p>c</p><p>d", 2, "!"),
            "<p>a</p><p>b</p>!"
        );
    }

    #[test]
    fn test_truncate_trailing_delimiter_inflates_count() {
        // A trailing `</p>` yields an empty final segment, so a text with
        // `max - 1` terminated paragraphs still splits into `max` segments
        // and gets a stray close tag appended. Pinned on purpose.
        assert_eq!(
            truncate_paragraphs("<p>a</p><p>b</p>", 3, "…"),
            "<p>a</p><p>b</p></p>…"
        );
    }
}
