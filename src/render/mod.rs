//! HTML output assembly.
//!
//! This module turns highlighted fragments into deliverable output:
//! - Color themes and generated stylesheets
//! - Standalone HTML pages with the stylesheet embedded

mod page;
mod theme;

// Re-export public API
pub use page::render_page;
pub use theme::{Theme, ThemeName};
