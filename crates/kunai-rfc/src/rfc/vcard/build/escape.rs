//! vCard text escaping.

/// Escapes a text value for vCard serialization.
///
/// Backslash, comma, semicolon, LF and CR are escaped. Backslashes are
/// handled in the same pass, so escapes introduced here are never escaped
/// again.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ',' => result.push_str("\\,"),
            ';' => result.push_str("\\;"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            _ => result.push(c),
        }
    }

    result
}

/// Reverses [`escape_text`].
///
/// Also maps `\t` to a tab and `\N` to LF. Unknown escapes and a trailing
/// lone backslash are kept as-is.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }

        match chars.next() {
            Some('\\') => result.push('\\'),
            Some(',') => result.push(','),
            Some(';') => result.push(';'),
            Some('n' | 'N') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    result
}
