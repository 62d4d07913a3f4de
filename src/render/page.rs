//! Standalone HTML page assembly.
//!
//! Wraps a highlighted fragment in a complete document with an embedded
//! stylesheet, so the output file renders correctly without any external
//! assets.

use crate::highlight::escape_html;

use super::theme::Theme;

/// Wraps a highlighted fragment in a complete HTML document.
///
/// The document embeds the theme's stylesheet in a `<style>` element and
/// places the fragment inside `<pre><code>`, preserving the pretty-printed
/// layout. The title is HTML-escaped; the fragment is trusted markup and is
/// embedded as-is.
///
/// # Arguments
///
/// * `fragment` - Highlighted HTML produced by the token scanner
/// * `title` - Page title (escaped before embedding)
/// * `theme` - Palette for the embedded stylesheet
/// * `class_prefix` - The CSS class prefix used when highlighting
///
/// # Returns
///
/// The complete HTML document.
pub fn render_page(fragment: &str, title: &str, theme: &Theme, class_prefix: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <style>\n{stylesheet}</style>\n\
         </head>\n\
         <body>\n\
         <pre><code>{fragment}</code></pre>\n\
         </body>\n\
         </html>\n",
        title = escape_html(title),
        stylesheet = theme.stylesheet(class_prefix),
        fragment = fragment,
    )
}
