//! vCard text escaping.

/// Escapes a text value for vCard serialization.
///
/// Escapes backslash, semicolon, comma, and newline (as the two characters
/// `\n`). A single pass over the input means an escape is never escaped
/// again. Everything else, including CR, passes through untouched.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());

    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ';' => result.push_str("\\;"),
            ',' => result.push_str("\\,"),
            '\n' => result.push_str("\\n"),
            _ => result.push(c),
        }
    }

    result
}

/// Escapes an optional value; an absent value is empty text.
#[must_use]
pub fn escape_optional(s: Option<&str>) -> String {
    s.map(escape_text).unwrap_or_default()
}
