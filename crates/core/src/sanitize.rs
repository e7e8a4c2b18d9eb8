//! Free-text input cleanup.
//!
//! Imported and user-entered text (names, notes) is displayed back in the
//! organiser and marshal UIs, so markup is removed before storage.

/// Strip HTML tags from a string and decode common entities.
///
/// `&amp;` is decoded last so `&amp;lt;` becomes the literal text `&lt;`.
#[must_use]
pub fn strip_html(raw: &str) -> String {
    decode_entities(&strip_tags(raw))
}

/// Remove `<...>` tags, leaving entities encoded.
#[must_use]
pub fn strip_tags(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut in_tag = false;

    for c in raw.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Decode the common HTML entities in one pass. `&amp;` is decoded last.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Clean a free-text value for storage.
///
/// Strips markup, collapses runs of whitespace to single spaces, trims, and
/// truncates to at most `max_len` characters.
#[must_use]
pub fn sanitize(raw: &str, max_len: usize) -> String {
    sanitize_plain(&strip_html(raw), max_len)
}

/// [`sanitize`] for text whose markup has already been removed.
///
/// Angle brackets and `&` are kept as literal characters.
#[must_use]
pub fn sanitize_plain(text: &str, max_len: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_len {
        return collapsed;
    }
    let truncated: String = collapsed.chars().take(max_len).collect();
    truncated.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_removes_tags() {
        assert_eq!(strip_html("<b>Kelly</b> Temple"), "Kelly Temple");
        assert_eq!(
            strip_html("<script>alert(1)</script>Sam"),
            "alert(1)Sam"
        );
    }

    #[test]
    fn test_strip_html_decodes_entities() {
        assert_eq!(strip_html("Tom &amp; Jerry"), "Tom & Jerry");
        assert_eq!(strip_html("O&#39;Brien"), "O'Brien");
        assert_eq!(strip_html("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_sanitize_trims_and_collapses() {
        assert_eq!(sanitize("  Killian \t  Murphy \n", 100), "Killian Murphy");
        assert_eq!(sanitize("   ", 100), "");
    }

    #[test]
    fn test_sanitize_truncates_on_char_boundary() {
        assert_eq!(sanitize("Zoë Ågren", 3), "Zoë");
        assert_eq!(sanitize("Ann Lee", 4), "Ann");
    }

    #[test]
    fn test_strip_tags_keeps_entities() {
        assert_eq!(strip_tags("<i>Pat</i> &lt;3"), "Pat &lt;3");
    }

    #[test]
    fn test_sanitize_plain_keeps_literal_brackets() {
        assert_eq!(sanitize_plain("  Pat  <3 Kane ", 100), "Pat <3 Kane");
        assert_eq!(sanitize_plain("Ann &lt;b&gt; Lee", 100), "Ann &lt;b&gt; Lee");
    }
}
