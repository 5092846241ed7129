//! Markdown rendering with syntax-highlighted code blocks.
//!
//! Uses pulldown-cmark for markdown → HTML conversion. Fenced code
//! blocks are intercepted from the event stream and replaced with
//! syntect-highlighted HTML; everything else (including CommonMark
//! `<...>` autolinks) passes through `push_html` untouched.

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html::push_html};
use syntect::{
    highlighting::{Theme, ThemeSet},
    html::highlighted_html_for_string,
    parsing::SyntaxSet,
};

/// Markdown → HTML renderer, one instance per build.
///
/// Holds the loaded syntect syntax and theme sets; loading them once
/// keeps per-page rendering cheap.
pub struct MarkdownRenderer {
    syntaxes: SyntaxSet,
    theme: Theme,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        let syntaxes = SyntaxSet::load_defaults_newlines();
        let theme = ThemeSet::load_defaults()
            .themes
            .remove("base16-ocean.light")
            .expect("default theme set should include \"base16-ocean.light\"");

        Self { syntaxes, theme }
    }

    /// Render a markdown body to HTML.
    pub fn render(&self, content: &str) -> String {
        let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
        let parser = Parser::new_ext(content, options);

        let events = self.highlight_code_blocks(parser);

        let mut html = String::with_capacity(content.len() * 2);
        push_html(&mut html, events.into_iter());
        html
    }

    /// Walk the event stream, replacing fenced code blocks with
    /// highlighted HTML events.
    fn highlight_code_blocks<'a>(&self, parser: Parser<'a>) -> Vec<Event<'a>> {
        let mut events: Vec<Event<'a>> = Vec::new();
        let mut code_lang: Option<String> = None;
        let mut code_text = String::new();

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(lang))) => {
                    code_lang = Some(lang.to_string());
                    code_text.clear();
                }
                Event::Text(text) if code_lang.is_some() => {
                    code_text.push_str(&text);
                }
                Event::End(TagEnd::CodeBlock) if code_lang.is_some() => {
                    let lang = code_lang.take().unwrap_or_default();
                    events.push(Event::Html(self.highlight(&code_text, &lang).into()));
                }
                _ => events.push(event),
            }
        }

        events
    }

    /// Highlight a code span, falling back to plain text for unknown
    /// languages and to an escaped `<pre>` block if syntect fails.
    fn highlight(&self, code: &str, lang: &str) -> String {
        let syntax = self
            .syntaxes
            .find_syntax_by_token(lang)
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text());

        highlighted_html_for_string(code, &self.syntaxes, syntax, &self.theme)
            .unwrap_or_else(|_| format!("<pre><code>{}</code></pre>", escape(code)))
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal HTML escape for the highlight fallback path.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
