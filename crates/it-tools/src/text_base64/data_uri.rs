//! Data-URI prefix removal (`data:<mime>;base64,`).

const SCHEME: &str = "data:";
const MARKER: &str = ";base64,";

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

fn strip_once(input: &str) -> Option<&str> {
    let rest = input.strip_prefix(SCHEME)?;
    // The MIME segment ends at the first marker and may not span lines.
    let end = rest.find(MARKER)?;
    if rest[..end].contains(is_line_terminator) {
        return None;
    }
    Some(&rest[end + MARKER.len()..])
}

/// Removes a leading `data:<mime>;base64,` segment, returning the input
/// unchanged when there is none.
///
/// The MIME segment stops at the first `;base64,`. Stacked prefixes are all
/// removed, so applying this twice gives the same result as applying it once.
///
/// # Example
///
/// ```
/// use it_tools::text_base64::strip_data_prefix;
///
/// assert_eq!(strip_data_prefix("data:text/plain;base64,aGVsbG8="), "aGVsbG8=");
/// assert_eq!(strip_data_prefix("aGVsbG8="), "aGVsbG8=");
/// ```
pub fn strip_data_prefix(input: &str) -> &str {
    let mut rest = input;
    while let Some(stripped) = strip_once(rest) {
        rest = stripped;
    }
    rest
}
