//! Inbound text handling.

use crate::relay::RelayError;

/// Decode the raw request body as UTF-8.
pub fn decode(bytes: &[u8]) -> Result<&str, RelayError> {
    Ok(std::str::from_utf8(bytes)?)
}

/// Drop every carriage return, then trim surrounding whitespace.
///
/// The order matters: a `\r` wedged between whitespace and text must not
/// shield that whitespace from trimming.
pub fn normalize(text: &str) -> String {
    text.replace('\r', "").trim_matches(is_trimmable).to_string()
}

/// Unicode whitespace plus the ASCII file/group/record/unit separators,
/// which clients treat as blank too.
fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
