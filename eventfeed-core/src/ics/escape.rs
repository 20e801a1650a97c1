//! TEXT value escaping (RFC 5545 §3.3.11).

/// Escape free text for a TEXT property value.
///
/// Backslash, semicolon and comma get a backslash prefix; CRLF, LF and CR each become the
/// two-character sequence `\n`. `None` escapes to the empty string.
pub fn escape(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let mut result = String::with_capacity(text.len() + 8);
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => result.push_str("\\\\"),
            ';' => result.push_str("\\;"),
            ',' => result.push_str("\\,"),
            '\r' => {
                // CRLF is a single line break
                chars.next_if_eq(&'\n');
                result.push_str("\\n");
            }
            '\n' => result.push_str("\\n"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reverse of `escape`, with line breaks normalized to LF.
    fn unescape(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                match chars.next() {
                    Some('n') => out.push('\n'),
                    Some(other) => out.push(other),
                    None => out.push('\\'),
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn escape_none_is_empty() {
        assert_eq!(escape(None), "");
    }

    #[test]
    fn escape_special_characters() {
        assert_eq!(escape(Some("hello, world")), "hello\\, world");
        assert_eq!(escape(Some("semi;colon")), "semi\\;colon");
        assert_eq!(escape(Some("back\\slash")), "back\\\\slash");
    }

    #[test]
    fn escape_all_line_terminators() {
        assert_eq!(escape(Some("a\r\nb")), "a\\nb");
        assert_eq!(escape(Some("a\nb")), "a\\nb");
        assert_eq!(escape(Some("a\rb")), "a\\nb");
        assert_eq!(escape(Some("a\n\r\nb")), "a\\n\\nb");
    }

    #[test]
    fn backslash_escaped_before_others() {
        // An existing backslash must not merge with the escape for the comma
        assert_eq!(escape(Some("\\,")), "\\\\\\,");
    }

    #[test]
    fn other_text_untouched() {
        let text = "Riverwood NSW 2210: Club Rivers — 7:30pm";
        assert_eq!(escape(Some(text)), text);
    }

    #[test]
    fn escaped_text_has_no_raw_specials_and_unescapes() {
        let inputs = [
            "plain",
            "Cheese, wine; and \\ more",
            "line one\nline two\nline three",
            ";;,,\\\\\n",
            "Shiraz, Merlot;\nNotes: bring \\ glasses",
        ];
        for input in inputs {
            let escaped = escape(Some(input));
            assert!(!escaped.contains('\n'), "raw newline in {escaped:?}");

            // Every special character is preceded by an escaping backslash
            let mut prev_backslash = false;
            for c in escaped.chars() {
                if matches!(c, ',' | ';') {
                    assert!(prev_backslash, "unescaped {c:?} in {escaped:?}");
                }
                prev_backslash = c == '\\' && !prev_backslash;
            }

            assert_eq!(unescape(&escaped), input);
        }
    }
}
