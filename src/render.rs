//! Markdown rendering.
//!
//! Thin event-level wrapper around [pulldown-cmark](https://docs.rs/pulldown-cmark)
//! configured for doc pages:
//!
//! - **Raw inline HTML passes through** untouched (pulldown-cmark's default),
//!   so pages — and the generated index — can embed styled anchors.
//! - **Smart punctuation**: straight quotes and dashes become their
//!   typographic forms.
//! - **Single newlines become `<br>`**: soft breaks are rewritten to hard
//!   breaks in the event stream, matching how people write plain notes.
//! - **Fenced code blocks** are intercepted and offered to the
//!   [`Highlighter`](crate::highlight::Highlighter); when it declines, the
//!   original events are forwarded so the parser's own escaping applies.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html};

use crate::highlight::Highlighter;

pub struct Renderer {
    options: Options,
    highlighter: Highlighter,
}

impl Renderer {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_SMART_PUNCTUATION);
        options.insert(Options::ENABLE_TABLES);
        Self {
            options,
            highlighter: Highlighter::new(),
        }
    }

    /// Render a markdown source string to an HTML fragment.
    pub fn render(&self, source: &str) -> String {
        let mut events: Vec<Event> = Vec::new();
        // Code block currently being collected: (kind, accumulated text)
        let mut block: Option<(CodeBlockKind, String)> = None;

        for event in Parser::new_ext(source, self.options) {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => block = Some((kind, String::new())),
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((kind, code)) = block.take() {
                        events.extend(self.code_block(kind, code));
                    }
                }
                Event::Text(text) => match &mut block {
                    Some((_, code)) => code.push_str(&text),
                    None => events.push(Event::Text(text)),
                },
                // Single newline becomes a line break
                Event::SoftBreak => events.push(Event::HardBreak),
                other => events.push(other),
            }
        }

        let mut out = String::new();
        html::push_html(&mut out, events.into_iter());
        out
    }

    /// Replace a collected code block with highlighted HTML, or replay the
    /// original events so pulldown-cmark's default escaping applies.
    fn code_block<'a>(&self, kind: CodeBlockKind<'a>, code: String) -> Vec<Event<'a>> {
        let token = match &kind {
            // Info strings may carry trailing words ("rust,ignore extra");
            // only the first token names the language
            CodeBlockKind::Fenced(info) => info.split_whitespace().next(),
            CodeBlockKind::Indented => None,
        };

        if let Some(highlighted) = token.and_then(|lang| self.highlighter.highlight(&code, lang)) {
            return vec![Event::Html(highlighted.into())];
        }

        vec![
            Event::Start(Tag::CodeBlock(kind)),
            Event::Text(code.into()),
            Event::End(TagEnd::CodeBlock),
        ]
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_and_lists_render() {
        let html = Renderer::new().render("# Title\n\n- one\n- two\n");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn raw_inline_html_passes_through() {
        let html = Renderer::new().render("before <a style=\"color: #fff\" href=\"x\">link</a> after\n");
        assert!(html.contains("<a style=\"color: #fff\" href=\"x\">link</a>"));
    }

    #[test]
    fn smart_punctuation_curls_quotes() {
        let html = Renderer::new().render("\"hello\"\n");
        assert!(html.contains("\u{201C}hello\u{201D}"));
    }

    #[test]
    fn single_newline_becomes_line_break() {
        let html = Renderer::new().render("line one\nline two\n");
        assert!(html.contains("<br"));
    }

    #[test]
    fn recognized_language_is_highlighted() {
        let html = Renderer::new().render("```rust\nfn main() {}\n```\n");
        assert!(html.contains("<pre style="));
        assert!(html.contains("<span"));
    }

    #[test]
    fn unknown_language_falls_back_to_escaped_code() {
        let html = Renderer::new().render("```notalanguage\na < b\n```\n");
        assert!(html.contains("<code class=\"language-notalanguage\">"));
        assert!(html.contains("a &lt; b"));
        assert!(!html.contains("<span"));
    }

    #[test]
    fn untagged_block_falls_back_to_escaped_code() {
        let html = Renderer::new().render("```\na < b\n```\n");
        assert!(html.contains("<pre><code>"));
        assert!(html.contains("a &lt; b"));
    }

    #[test]
    fn code_content_is_not_smart_quoted() {
        let html = Renderer::new().render("```notalanguage\n\"raw\"\n```\n");
        assert!(html.contains("&quot;raw&quot;"));
    }
}
