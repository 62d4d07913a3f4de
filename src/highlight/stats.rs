//! Token statistics tracking.
//!
//! This module provides thread-safe counters for how many tokens of each
//! category a highlighting pass produced.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::token::TokenKind;

/// Thread-safe token counters, one per [`TokenKind`].
///
/// The highlighter increments counters as it classifies tokens, so totals and
/// per-category breakdowns are available without a second scan. All categories
/// are initialized to zero on creation.
///
/// # Thread Safety
///
/// This struct is thread-safe and can be shared across multiple tasks using `Arc`.
pub struct TokenStats {
    counts: HashMap<TokenKind, AtomicUsize>,
}

impl TokenStats {
    /// Creates a new instance with all category counters at zero.
    pub fn new() -> Self {
        let mut counts = HashMap::new();
        for kind in TokenKind::iter() {
            counts.insert(kind, AtomicUsize::new(0));
        }
        TokenStats { counts }
    }

    /// Increment the counter for a token category.
    ///
    /// # Safety
    /// This should never panic if `TokenStats` is properly initialized via `new()`.
    /// All categories are initialized in the constructor. A missing entry indicates
    /// a bug in initialization or a missing enum variant.
    pub fn increment(&self, kind: TokenKind) {
        if let Some(counter) = self.counts.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment token counter for {:?} which is not in the map. \
                 This indicates a bug in TokenStats initialization.",
                kind
            );
            // Don't panic - log and continue to avoid crashing the application
        }
    }

    /// Get the count for a token category.
    ///
    /// Returns 0 if the category is not in the map (should never happen if properly initialized).
    pub fn get_count(&self, kind: TokenKind) -> usize {
        self.counts
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or_else(|| {
                log::warn!(
                    "Token kind {:?} not found in stats map, returning 0. \
                     This indicates a bug in TokenStats initialization.",
                    kind
                );
                0
            })
    }

    /// Get the total token count across all categories.
    pub fn total(&self) -> usize {
        TokenKind::iter().map(|k| self.get_count(k)).sum()
    }
}
