//! Single-pass token scanner and span writer.
//!
//! The scanner walks HTML-escaped JSON text with one regex whose alternation
//! recognizes, in priority order: quoted strings (with an optional trailing
//! colon that turns them into keys), the bare literals `true`/`false`/`null`,
//! and numbers. Each match is wrapped in a `<span>` carrying the class for
//! its category; everything between matches (punctuation, whitespace) passes
//! through untouched.

use regex::{Captures, Regex};
use serde_json::Value;
use std::sync::LazyLock;

use super::escape::escape_html;
use super::stats::TokenStats;
use super::token::TokenKind;
use crate::config::DEFAULT_CLASS_PREFIX;

// Token pattern, one alternation per category family. The string branch
// accepts \uXXXX escapes, any other backslash escape, and plain characters,
// then an optional trailing colon that marks a key. Strings are tried before
// literals and numbers, so quoted content is never re-matched. Word
// boundaries and digits are deliberately ASCII: a non-ASCII letter ends a
// word, and digits outside 0-9 are never part of a number.
const TOKEN_PATTERN: &str = r#""(?:\\u[a-zA-Z0-9]{4}|\\[^u]|[^\\"])*"(?:\s*:)?|(?-u:\b)(?:true|false|null)(?-u:\b)|-?[0-9]+(?:\.[0-9]*)?(?:[eE][+-]?[0-9]+)?"#;

static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(TOKEN_PATTERN).expect("Failed to compile token pattern - this is a bug")
});

/// Options controlling how tokens are wrapped.
#[derive(Debug, Clone)]
pub struct HighlightOptions {
    /// Prefix prepended to each category's CSS class suffix.
    ///
    /// The default `json-` produces `json-key`, `json-string`, and so on.
    pub class_prefix: String,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
        }
    }
}

/// Highlights JSON text into HTML markup.
///
/// Escapes the text for HTML first, then wraps each recognized token in a
/// `<span class="{prefix}{category}">`. The output is an HTML fragment safe
/// for element content; characters between tokens are preserved exactly, so
/// the text content of the fragment equals the escaped input.
///
/// The input does not have to be valid JSON. Anything the scanner recognizes
/// is wrapped and the rest passes through, which keeps the function total:
/// malformed input degrades to partially highlighted text instead of an error.
///
/// # Arguments
///
/// * `json` - The JSON text to highlight (commonly pretty-printed)
/// * `options` - Wrapping options such as the CSS class prefix
/// * `stats` - Token statistics tracker, incremented once per wrapped token
///
/// # Returns
///
/// The highlighted HTML fragment.
pub fn highlight_text_with(json: &str, options: &HighlightOptions, stats: &TokenStats) -> String {
    let escaped = escape_html(json);
    TOKEN_REGEX
        .replace_all(&escaped, |caps: &Captures| {
            let lexeme = &caps[0];
            let kind = TokenKind::classify(lexeme);
            stats.increment(kind);
            format!(
                "<span class=\"{}{}\">{}</span>",
                options.class_prefix,
                kind.as_str(),
                lexeme
            )
        })
        .into_owned()
}

/// Highlights JSON text with default options, discarding statistics.
pub fn highlight_text(json: &str) -> String {
    highlight_text_with(json, &HighlightOptions::default(), &TokenStats::new())
}

/// Pretty-prints a parsed JSON value and highlights the result.
///
/// Serialization uses two-space indentation, which is the layout the token
/// scanner is normally fed. Object keys keep their document order.
///
/// # Arguments
///
/// * `value` - The parsed JSON value to render
/// * `options` - Wrapping options such as the CSS class prefix
/// * `stats` - Token statistics tracker, incremented once per wrapped token
///
/// # Returns
///
/// The highlighted HTML fragment.
pub fn highlight_value_with(
    value: &Value,
    options: &HighlightOptions,
    stats: &TokenStats,
) -> String {
    let pretty = serde_json::to_string_pretty(value)
        .expect("Failed to serialize a serde_json::Value - this is a bug");
    highlight_text_with(&pretty, options, stats)
}

/// Pretty-prints and highlights a parsed JSON value with default options.
pub fn highlight_value(value: &Value) -> String {
    highlight_value_with(value, &HighlightOptions::default(), &TokenStats::new())
}
