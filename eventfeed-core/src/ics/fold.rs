//! Content line folding (RFC 5545 §3.1).

/// Maximum octets per physical line, continuation space included.
pub const FOLD_WIDTH: usize = 74;

/// Fold a logical content line into CRLF-joined physical lines.
///
/// The first physical line carries up to 74 octets; every continuation line starts with a
/// single space followed by up to 73 octets. Cuts never land inside a UTF-8 sequence, and
/// each chunk carries at least one character. The result has no trailing CRLF.
pub fn fold(line: &str) -> String {
    if line.len() <= FOLD_WIDTH {
        return line.to_string();
    }

    let mut result = String::with_capacity(line.len() + (line.len() / FOLD_WIDTH + 1) * 3);
    let mut rest = line;
    let mut first = true;

    loop {
        let budget = if first { FOLD_WIDTH } else { FOLD_WIDTH - 1 };
        if !first {
            result.push_str("\r\n ");
        }

        if rest.len() <= budget {
            result.push_str(rest);
            break;
        }

        let cut = chunk_end(rest, budget);
        result.push_str(&rest[..cut]);
        rest = &rest[cut..];
        first = false;
    }

    result
}

/// Largest char boundary in `s` at or below `budget`, but never zero.
fn chunk_end(s: &str, budget: usize) -> usize {
    let mut end = budget;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }

    if end == 0 {
        // Only reachable when budget is smaller than one character
        end = s.chars().next().map_or(s.len(), char::len_utf8);
    }
    end
}
