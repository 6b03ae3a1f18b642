//! Markdown to HTML rendering.
//!
//! Thin wrapper over pulldown-cmark. Fenced code blocks are routed through
//! an event adapter: `mermaid` blocks become `<div class="mermaid">` for the
//! client-side diagram renderer, every other block keeps its language as a
//! `language-*` class for the client-side highlighter.

use pulldown_cmark::{html, CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

/// Render markdown to HTML.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);

    let parser = CodeBlockRouter::new(Parser::new_ext(markdown, options));

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Iterator adapter that buffers fenced code blocks and emits them as a
/// single HTML event.
struct CodeBlockRouter<I> {
    inner: I,
    in_code_block: bool,
    lang: Option<String>,
    buffer: String,
}

impl<I> CodeBlockRouter<I> {
    fn new(inner: I) -> Self {
        Self {
            inner,
            in_code_block: false,
            lang: None,
            buffer: String::new(),
        }
    }

    fn emit_block(&self) -> String {
        match self.lang.as_deref() {
            Some("mermaid") => format!(
                "<div class=\"mermaid\">{}</div>",
                html_escape(self.buffer.trim_end_matches('\n'))
            ),
            Some(lang) => format!(
                "<pre><code class=\"language-{lang}\">{}</code></pre>",
                html_escape(&self.buffer)
            ),
            None => format!("<pre><code>{}</code></pre>", html_escape(&self.buffer)),
        }
    }
}

impl<'a, I> Iterator for CodeBlockRouter<I>
where
    I: Iterator<Item = Event<'a>>,
{
    type Item = Event<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let event = self.inner.next()?;
            match &event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    self.in_code_block = true;
                    self.buffer.clear();
                    self.lang = match kind {
                        CodeBlockKind::Fenced(lang) if !lang.is_empty() => {
                            Some(lang.to_string())
                        }
                        _ => None,
                    };
                }
                Event::End(TagEnd::CodeBlock) => {
                    self.in_code_block = false;
                    return Some(Event::Html(self.emit_block().into()));
                }
                Event::Text(text) if self.in_code_block => {
                    self.buffer.push_str(text);
                }
                _ => return Some(event),
            }
        }
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
