//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::highlight::{TokenKind, TokenStats};

/// Prints per-category token counts to the log.
///
/// Categories with zero tokens are skipped to keep the output short.
/// Works with both plain and JSON log formats (log::info! handles formatting).
pub fn print_token_statistics(stats: &TokenStats) {
    let total = stats.total();
    if total == 0 {
        info!("No tokens highlighted");
        return;
    }

    info!("Token Counts ({} total):", total);
    for kind in TokenKind::iter() {
        let count = stats.get_count(kind);
        if count > 0 {
            info!("   {}: {}", kind.as_str(), count);
        }
    }
}
