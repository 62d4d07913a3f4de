//! HTML-escaping of raw text.
//!
//! Escaping runs before tokenization, so the scanner only ever sees
//! HTML-safe text and matched lexemes can be written into markup verbatim.

/// Escapes `&`, `<`, and `>` for safe embedding in HTML element content.
///
/// Each character is escaped exactly once; `&` takes effect first, so the
/// entities introduced for `<` and `>` are never re-escaped. Quotes are left
/// alone because the output lands in element content, not in attributes.
///
/// # Arguments
///
/// * `text` - The raw text to escape
///
/// # Returns
///
/// The escaped text.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
