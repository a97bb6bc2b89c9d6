//! Markdown renderer backed by `pulldown-cmark`.
//!
//! Raw HTML in card source is escaped, except for the inline container the
//! cloze parser emits around revealed text. Relative link and image
//! destinations are resolved against the directory of the source document.

use crate::error::Result;
use crate::parser::CLOZE_REVEAL_CLASS;
use crate::render::{MarkdownRenderer, RenderContext};
use async_trait::async_trait;
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

/// Sanitizing CommonMark renderer.
#[derive(Debug, Clone, Copy)]
pub struct PulldownRenderer {
    options: Options,
}

impl Default for PulldownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PulldownRenderer {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        Self { options }
    }

    /// Render synchronously.
    pub fn render_str(&self, source: &str, context: &RenderContext) -> String {
        let base = context.base_dir();
        let parser = Parser::new_ext(source, self.options).map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) if !is_reveal_tag(&raw) => Event::Text(raw),
            Event::Start(Tag::Link {
                link_type,
                dest_url,
                title,
                id,
            }) => Event::Start(Tag::Link {
                link_type,
                dest_url: resolve(base, dest_url),
                title,
                id,
            }),
            Event::Start(Tag::Image {
                link_type,
                dest_url,
                title,
                id,
            }) => Event::Start(Tag::Image {
                link_type,
                dest_url: resolve(base, dest_url),
                title,
                id,
            }),
            other => other,
        });

        let mut html_output = String::with_capacity(source.len() * 3 / 2);
        html::push_html(&mut html_output, parser);
        html_output
    }
}

#[async_trait(?Send)]
impl MarkdownRenderer for PulldownRenderer {
    async fn render(&self, source: &str, context: &RenderContext) -> Result<String> {
        Ok(self.render_str(source, context))
    }
}

/// Whether a raw HTML fragment is the cloze reveal container's open or close tag.
fn is_reveal_tag(raw: &str) -> bool {
    let tag = raw.trim();
    tag == "</span>"
        || tag == format!("<span class=\"{CLOZE_REVEAL_CLASS}\">")
        || tag == format!("<span class='{CLOZE_REVEAL_CLASS}'>")
}

fn is_relative(dest: &str) -> bool {
    !(dest.is_empty() || dest.starts_with('/') || dest.starts_with('#') || dest.contains(':'))
}

fn resolve<'a>(base: Option<&str>, dest: CowStr<'a>) -> CowStr<'a> {
    match base {
        Some(base) if is_relative(&dest) => {
            let dest = dest.strip_prefix("./").unwrap_or(&dest);
            CowStr::from(format!("{base}/{dest}"))
        }
        _ => dest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_with, ParseOptions, Placeholder};
    use pretty_assertions::assert_eq;

    fn render(source: &str) -> String {
        PulldownRenderer::new().render_str(source, &RenderContext::default())
    }

    #[test]
    fn renders_paragraph() {
        assert_eq!(render("**bold** text"), "<p><strong>bold</strong> text</p>\n");
    }

    #[test]
    fn forced_line_breaks_between_answer_lines() {
        assert_eq!(render("four  \nit's basic math"), "<p>four<br />\nit's basic math</p>\n");
    }

    #[test]
    fn keeps_cloze_reveal_container() {
        let html = render("The sky is <span class=\"cloze-reveal\">blue</span>.");
        assert_eq!(html, "<p>The sky is <span class=\"cloze-reveal\">blue</span>.</p>\n");
    }

    #[test]
    fn escapes_other_html() {
        let html = render("hi <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn escaped_placeholder_is_not_a_rule() {
        let options = ParseOptions {
            placeholder: Placeholder::Escaped,
        };
        let card = parse_with("{{abc}}", &options);
        assert_eq!(render(&card.front), "<p>___</p>\n");
    }

    #[test]
    fn resolves_relative_links() {
        let renderer = PulldownRenderer::new();
        let context = RenderContext::new("notes/rust/intro.md");

        let html = renderer.render_str("[next](./next.md) [abs](https://x.dev/a)", &context);
        assert!(html.contains("href=\"notes/rust/next.md\""));
        assert!(html.contains("href=\"https://x.dev/a\""));

        let html = renderer.render_str("![img](pic.png)", &context);
        assert!(html.contains("src=\"notes/rust/pic.png\""));
    }

    #[test]
    fn render_trait_never_fails() {
        let html = futures::executor::block_on(
            PulldownRenderer::default().render("", &RenderContext::default()),
        )
        .unwrap();
        assert_eq!(html, "");
    }
}
