//! Token category definitions.
//!
//! This module defines the categories a highlighted token can fall into and
//! the rule for deciding which category a matched lexeme belongs to.

use strum_macros::EnumIter as EnumIterMacro;

/// Categories of JSON tokens recognized by the highlighter.
///
/// Each category maps to one CSS class suffix, so with the default prefix a
/// token lands in `json-key`, `json-string`, `json-number`, `json-boolean`,
/// or `json-null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum TokenKind {
    /// Object key: a quoted string with a trailing colon.
    Key,
    /// String value: a quoted string without a trailing colon.
    String,
    /// Numeric literal, including negative, fractional, and exponent forms.
    Number,
    /// The bare literals `true` and `false`.
    Boolean,
    /// The bare literal `null`.
    Null,
}

impl TokenKind {
    /// Classifies a lexeme matched by the token scanner.
    ///
    /// The decision looks only at the lexeme's shape, checked in this order:
    /// a quoted lexeme is a key when it ends with a colon and a string
    /// otherwise; bare `true`/`false` is a boolean; bare `null` is null;
    /// anything else the scanner matched is a number.
    ///
    /// Quoting wins over the literal words, so the string `"true"` stays a
    /// string and only bare `true` becomes a boolean.
    pub fn classify(lexeme: &str) -> TokenKind {
        if lexeme.starts_with('"') {
            if lexeme.ends_with(':') {
                TokenKind::Key
            } else {
                TokenKind::String
            }
        } else if lexeme == "true" || lexeme == "false" {
            TokenKind::Boolean
        } else if lexeme == "null" {
            TokenKind::Null
        } else {
            TokenKind::Number
        }
    }

    /// Returns the CSS class suffix for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Key => "key",
            TokenKind::String => "string",
            TokenKind::Number => "number",
            TokenKind::Boolean => "boolean",
            TokenKind::Null => "null",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
