//! Best-effort syntax highlighting for fenced code blocks.
//!
//! Wraps [syntect](https://docs.rs/syntect) with its bundled default syntax
//! and theme sets. The contract is deliberately lossy: anything the
//! highlighter cannot handle — an unknown language token, an internal
//! highlighting error — yields `None`, and the caller renders the code block
//! with its own default escaping instead. Highlighting can never fail a build.

use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

/// Dark theme to match the page background.
const THEME: &str = "base16-ocean.dark";

pub struct Highlighter {
    syntaxes: SyntaxSet,
    theme: Theme,
}

impl Highlighter {
    pub fn new() -> Self {
        let syntaxes = SyntaxSet::load_defaults_newlines();
        // Missing theme degrades to Theme::default() rather than panicking;
        // highlight output is still valid HTML, just unstyled.
        let theme = ThemeSet::load_defaults()
            .themes
            .remove(THEME)
            .unwrap_or_default();
        Self { syntaxes, theme }
    }

    /// Highlight `code` as `lang`, or `None` if the language is unknown or
    /// highlighting fails. `lang` is matched against syntax names and file
    /// extensions (`rust`, `rs`, `py`, ...).
    pub fn highlight(&self, code: &str, lang: &str) -> Option<String> {
        let syntax = self.syntaxes.find_syntax_by_token(lang)?;
        highlighted_html_for_string(code, &self.syntaxes, syntax, &self.theme).ok()
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_language_produces_markup() {
        let hl = Highlighter::new();
        let out = hl.highlight("fn main() {}\n", "rust").unwrap();
        assert!(out.starts_with("<pre"));
        assert!(out.contains("<span"));
    }

    #[test]
    fn extension_token_is_accepted() {
        let hl = Highlighter::new();
        assert!(hl.highlight("x = 1\n", "py").is_some());
    }

    #[test]
    fn unknown_language_is_none() {
        let hl = Highlighter::new();
        assert!(hl.highlight("whatever\n", "notalanguage").is_none());
    }
}
