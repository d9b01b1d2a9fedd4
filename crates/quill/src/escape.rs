//! HTML escaping shared by the markdown and highlighting pipelines.

/// Escape the five HTML-special characters in markdown text.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape code for richtext display.
///
/// Single quotes stay as-is so [`escaped_len`] describes this function
/// exactly; the highlighter relies on that when remapping span offsets.
pub fn escape_code(code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    for ch in code.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Byte length of a character once escaped by [`escape_code`].
pub fn escaped_len(ch: char) -> usize {
    match ch {
        '&' => 5,
        '<' | '>' => 4,
        '"' => 6,
        _ => ch.len_utf8(),
    }
}

/// Translate a byte offset in raw code to the corresponding offset in the
/// [`escape_code`] rendering of it.
pub fn escaped_index(raw: &str, raw_idx: usize) -> usize {
    let mut escaped = 0;
    for (i, ch) in raw.char_indices() {
        if i >= raw_idx {
            break;
        }
        escaped += escaped_len(ch);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text_all_entities() {
        assert_eq!(escape_text("&<>\"'"), "&amp;&lt;&gt;&quot;&#039;");
    }

    #[test]
    fn test_escape_code_leaves_single_quotes() {
        assert_eq!(escape_code("'a' < 'b'"), "'a' &lt; 'b'");
    }

    #[test]
    fn test_escaped_index_expansion() {
        // "a&b<c" escapes to "a&amp;b&lt;c"
        let raw = "a&b<c";
        assert_eq!(escaped_index(raw, 0), 0);
        assert_eq!(escaped_index(raw, 1), 1);
        assert_eq!(escaped_index(raw, 2), 6); // past "&amp;"
        assert_eq!(escaped_index(raw, 3), 7);
        assert_eq!(escaped_index(raw, 4), 11); // past "&lt;"
        assert_eq!(escaped_index(raw, 5), 12);
    }

    #[test]
    fn test_escaped_index_multibyte() {
        let raw = "é<";
        assert_eq!(escaped_index(raw, 2), 2); // é is two bytes, unescaped
        assert_eq!(escaped_index(raw, 3), 6);
    }
}
