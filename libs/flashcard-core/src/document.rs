//! Flashcard blocks embedded in markdown documents.
//!
//! # Format
//! ````markdown
//! Some notes.
//!
//! ```flashcard
//! Q: What is Rust?
//! A: A systems programming language.
//! ```
//! ````

use crate::error::RenderError;
use crate::render::{render_card, MarkdownRenderer, RenderContext, RenderedCard};
use crate::surface::Element;
use crate::types::RevealMode;
use pulldown_cmark::{CodeBlockKind, Event, Parser, Tag, TagEnd};
use std::ops::Range;

/// Info string marking a fenced block as a flashcard.
pub const FLASHCARD_LANGUAGE: &str = "flashcard";

/// Raw source of one flashcard block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBlock {
    pub source: String,
    /// 1-based line of the opening fence.
    pub line: usize,
    /// Byte range of the whole fenced block in the document.
    pub range: Range<usize>,
}

/// Find every `flashcard` fenced block in document order.
pub fn extract_blocks(markdown: &str) -> Vec<SourceBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<SourceBlock> = None;

    for (event, range) in Parser::new(markdown).into_offset_iter() {
        match event {
            Event::Start(Tag::CodeBlock(CodeBlockKind::Fenced(info)))
                if is_flashcard_info(&info) =>
            {
                current = Some(SourceBlock {
                    source: String::new(),
                    line: line_of(markdown, range.start),
                    range,
                });
            }
            Event::Text(text) => {
                if let Some(block) = current.as_mut() {
                    block.source.push_str(&text);
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                if let Some(block) = current.take() {
                    blocks.push(block);
                }
            }
            _ => {}
        }
    }

    blocks
}

fn is_flashcard_info(info: &str) -> bool {
    info.split_whitespace().next() == Some(FLASHCARD_LANGUAGE)
}

fn line_of(markdown: &str, offset: usize) -> usize {
    markdown[..offset].matches('\n').count() + 1
}

/// A rendered card with its position in the document.
#[derive(Debug, Clone)]
pub struct DocumentCard<E> {
    /// Position among the document's flashcard blocks.
    pub index: usize,
    pub line: usize,
    pub card: RenderedCard<E>,
}

/// A card that failed to render.
#[derive(Debug, Clone)]
pub struct CardFailure {
    /// Position among the document's flashcard blocks.
    pub index: usize,
    pub line: usize,
    pub error: RenderError,
}

/// Outcome of rendering every card in a document.
#[derive(Debug, Clone)]
pub struct DocumentReport<E> {
    pub cards: Vec<DocumentCard<E>>,
    pub failures: Vec<CardFailure>,
}

impl<E> DocumentReport<E> {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Render all flashcard blocks of a document under `target`.
///
/// Each block gets its own host element. A card whose rendering fails is
/// logged and reported; its siblings still render.
pub async fn render_document<E, R>(
    markdown: &str,
    target: &E,
    context: &RenderContext,
    mode: RevealMode,
    renderer: &R,
) -> DocumentReport<E>
where
    E: Element,
    R: MarkdownRenderer + ?Sized,
{
    let mut report = DocumentReport {
        cards: Vec::new(),
        failures: Vec::new(),
    };

    for (index, block) in extract_blocks(markdown).into_iter().enumerate() {
        let host = target.create_child("div", &["block-language-flashcard"]);
        match render_card(&block.source, &host, context, mode, renderer).await {
            Ok(card) => report.cards.push(DocumentCard {
                index,
                line: block.line,
                card,
            }),
            Err(error) => {
                tracing::warn!(
                    line = block.line,
                    source_path = context.source_path.as_deref().unwrap_or("-"),
                    "failed to render flashcard: {}",
                    error
                );
                report.failures.push(CardFailure {
                    index,
                    line: block.line,
                    error,
                });
            }
        }
    }

    tracing::debug!(
        rendered = report.cards.len(),
        failed = report.failures.len(),
        "rendered document flashcards"
    );
    report
}
