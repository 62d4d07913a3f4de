//! Color themes and stylesheet generation.
//!
//! A theme assigns one color per token category plus page background and
//! foreground. The stylesheet is generated from the palette so the CSS class
//! names always agree with the prefix the highlighter actually used.

use clap::ValueEnum;
use strum::IntoEnumIterator;

use crate::highlight::TokenKind;

/// Named color themes selectable from the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeName {
    /// Dark text on a white page.
    Light,
    /// Light text on a near-black page.
    Dark,
}

impl ThemeName {
    /// Returns the palette for this theme.
    pub fn theme(self) -> &'static Theme {
        match self {
            ThemeName::Light => &LIGHT,
            ThemeName::Dark => &DARK,
        }
    }

    /// Returns the theme's CLI name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A color palette for rendered pages.
///
/// All values are CSS colors. The token colors are keyed by [`TokenKind`]
/// through [`Theme::color_for`].
#[derive(Debug)]
pub struct Theme {
    /// Page background color.
    pub background: &'static str,
    /// Default text color (punctuation between tokens).
    pub foreground: &'static str,
    /// Object key color.
    pub key: &'static str,
    /// String value color.
    pub string: &'static str,
    /// Number color.
    pub number: &'static str,
    /// Boolean color.
    pub boolean: &'static str,
    /// Null color.
    pub null: &'static str,
}

static LIGHT: Theme = Theme {
    background: "#ffffff",
    foreground: "#1f2328",
    key: "#d73a49",
    string: "#22863a",
    number: "#e36209",
    boolean: "#005cc5",
    null: "#6f42c1",
};

static DARK: Theme = Theme {
    background: "#0d1117",
    foreground: "#c9d1d9",
    key: "#ff7b72",
    string: "#7ee787",
    number: "#ffa657",
    boolean: "#79c0ff",
    null: "#d2a8ff",
};

impl Theme {
    /// Returns the color assigned to a token category.
    pub fn color_for(&self, kind: TokenKind) -> &'static str {
        match kind {
            TokenKind::Key => self.key,
            TokenKind::String => self.string,
            TokenKind::Number => self.number,
            TokenKind::Boolean => self.boolean,
            TokenKind::Null => self.null,
        }
    }

    /// Generates the stylesheet for this theme.
    ///
    /// Emits page-level rules followed by one rule per token category, using
    /// `class_prefix` so the selectors match the spans the highlighter wrote.
    ///
    /// # Arguments
    ///
    /// * `class_prefix` - The CSS class prefix used when highlighting
    ///
    /// # Returns
    ///
    /// The stylesheet text.
    pub fn stylesheet(&self, class_prefix: &str) -> String {
        let mut css = format!(
            "body {{\n  \
               background-color: {};\n  \
               color: {};\n  \
               font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace;\n\
             }}\n\n\
             pre {{\n  \
               margin: 0;\n  \
               padding: 1em;\n  \
               white-space: pre-wrap;\n  \
               word-break: break-word;\n\
             }}\n",
            self.background, self.foreground
        );
        for kind in TokenKind::iter() {
            css.push_str(&format!(
                "\n.{}{} {{ color: {}; }}\n",
                class_prefix,
                kind.as_str(),
                self.color_for(kind)
            ));
        }
        css
    }
}
