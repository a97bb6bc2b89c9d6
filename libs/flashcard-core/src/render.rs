//! Card rendering pipeline.
//!
//! Parses a block, renders both faces through a [`MarkdownRenderer`], places
//! the markup on the surface and only then attaches the reveal controller.

use crate::error::{Face, Result};
use crate::parser::{parse_with, ParseOptions, Placeholder};
use crate::reveal::{attach, CardElements, RevealHandle};
use crate::surface::Element;
use crate::types::{ParsedCard, RevealMode};
use async_trait::async_trait;

/// Per-document information passed through to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// Path of the document the block came from, used to resolve relative links.
    pub source_path: Option<String>,
}

impl RenderContext {
    pub fn new(source_path: impl Into<String>) -> Self {
        Self {
            source_path: Some(source_path.into()),
        }
    }

    /// Directory portion of the source path, if any.
    pub fn base_dir(&self) -> Option<&str> {
        let path = self.source_path.as_deref()?;
        path.rfind('/').map(|idx| &path[..idx])
    }
}

/// Turns markdown source into safe markup.
///
/// Rendering happens on the single UI thread, so implementations need not be
/// `Send`.
#[async_trait(?Send)]
pub trait MarkdownRenderer {
    async fn render(&self, source: &str, context: &RenderContext) -> Result<String>;
}

/// A card placed on the surface with its controller attached.
#[derive(Debug, Clone)]
pub struct RenderedCard<E> {
    pub parsed: ParsedCard,
    pub elements: CardElements<E>,
    pub reveal: RevealHandle,
}

/// Render one flashcard block under `target`.
///
/// Both faces are rendered concurrently. If either fails, the failing face is
/// left empty, no interaction is wired and the error is returned.
pub async fn render_card<E, R>(
    source: &str,
    target: &E,
    context: &RenderContext,
    mode: RevealMode,
    renderer: &R,
) -> Result<RenderedCard<E>>
where
    E: Element,
    R: MarkdownRenderer + ?Sized,
{
    let parsed = parse_with(
        source,
        &ParseOptions {
            placeholder: Placeholder::Escaped,
        },
    );
    let elements = CardElements::build(target, mode);

    let (front, back) = futures::join!(
        renderer.render(&parsed.front, context),
        renderer.render(&parsed.back, context)
    );
    let front = front.map_err(|e| e.on_face(Face::Front));
    let back = back.map_err(|e| e.on_face(Face::Back));

    if let Ok(markup) = &front {
        elements.front.set_markup(markup);
    }
    if let Ok(markup) = &back {
        elements.back.set_markup(markup);
    }
    front?;
    back?;

    let reveal = attach(mode, &elements);
    tracing::trace!(kind = ?parsed.kind, "rendered flashcard");

    Ok(RenderedCard {
        parsed,
        elements,
        reveal,
    })
}
