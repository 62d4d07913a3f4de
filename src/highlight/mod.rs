//! JSON syntax highlighting.
//!
//! This module provides the two-stage highlighting pipeline:
//! - HTML-escape the raw text (`&`, `<`, `>`)
//! - Scan the escaped text in a single regex pass, wrapping each recognized
//!   token in a `<span>` classed by category
//!
//! Token categories are key, string, number, boolean, and null. Text between
//! tokens (punctuation, whitespace) passes through unchanged, so the
//! fragment's text content always equals the escaped input.

mod escape;
mod formatter;
mod stats;
mod token;

// Re-export public API
pub use escape::escape_html;
pub use formatter::{
    highlight_text, highlight_text_with, highlight_value, highlight_value_with, HighlightOptions,
};
pub use stats::TokenStats;
pub use token::TokenKind;

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_token_stats_initialization() {
        let stats = TokenStats::new();
        // All categories should be initialized to 0
        for kind in TokenKind::iter() {
            assert_eq!(stats.get_count(kind), 0);
        }
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_token_stats_increment() {
        let stats = TokenStats::new();
        stats.increment(TokenKind::Key);
        assert_eq!(stats.get_count(TokenKind::Key), 1);

        stats.increment(TokenKind::Null);
        assert_eq!(stats.get_count(TokenKind::Null), 1);
    }

    #[test]
    fn test_token_stats_multiple_increments() {
        let stats = TokenStats::new();
        stats.increment(TokenKind::Number);
        stats.increment(TokenKind::Number);
        stats.increment(TokenKind::Number);
        assert_eq!(stats.get_count(TokenKind::Number), 3);
    }

    #[test]
    fn test_token_stats_total() {
        let stats = TokenStats::new();
        stats.increment(TokenKind::Key);
        stats.increment(TokenKind::String);
        stats.increment(TokenKind::Boolean);
        assert_eq!(stats.total(), 3);
    }

    #[test]
    fn test_token_stats_shared_across_threads() {
        use std::sync::Arc;

        let stats = Arc::new(TokenStats::new());
        let mut handles = Vec::new();
        for _ in 0..4 {
            let stats = Arc::clone(&stats);
            handles.push(std::thread::spawn(move || {
                for _ in 0..100 {
                    stats.increment(TokenKind::String);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(stats.get_count(TokenKind::String), 400);
    }
}
