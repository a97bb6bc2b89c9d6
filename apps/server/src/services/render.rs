//! Document rendering on the headless surface.
//!
//! The card tree is single-threaded, so callers run this on a blocking
//! worker and only move the serialized result across threads.

use flashcard_core::{
    render_document, HtmlElement, PulldownRenderer, RenderContext, RevealMode,
};
use futures::executor::block_on;

use crate::models::{CardFailureResponse, RenderResponse, RenderedCardResponse};

/// Render every flashcard block in `document` to HTML.
pub fn render_cards(document: &str, context: &RenderContext, mode: RevealMode) -> RenderResponse {
    let root = HtmlElement::new("div");
    let renderer = PulldownRenderer::new();
    let report = block_on(render_document(document, &root, context, mode, &renderer));

    let cards = report
        .cards
        .iter()
        .map(|entry| RenderedCardResponse {
            index: entry.index,
            line: entry.line,
            kind: entry.card.parsed.kind,
            html: entry.card.elements.container.to_html(),
        })
        .collect();

    let failures = report
        .failures
        .iter()
        .map(|failure| CardFailureResponse {
            index: failure.index,
            line: failure.line,
            message: failure.error.to_string(),
        })
        .collect();

    RenderResponse {
        reveal_mode: mode,
        cards,
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flashcard_core::CardKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_cards_with_positions() {
        let document = "intro\n\n```flashcard\nQ: 2+2=?\nA: four\n```\n";
        let response = render_cards(document, &RenderContext::default(), RevealMode::ButtonClick);

        assert_eq!(response.cards.len(), 1);
        assert!(response.failures.is_empty());

        let card = &response.cards[0];
        assert_eq!(card.line, 3);
        assert_eq!(card.kind, CardKind::Qa);
        assert!(card.html.starts_with(
            "<div class=\"flashcard-container\" data-reveal-mode=\"button-click\">"
        ));
        assert!(card.html.contains("<button class=\"flashcard-button\">Reveal answer</button>"));
        assert!(card.html.contains("<button class=\"flashcard-button\">Hide answer</button>"));
    }

    #[test]
    fn document_without_cards() {
        let response = render_cards("# nothing here", &RenderContext::default(), RevealMode::Hover);
        assert!(response.cards.is_empty());
        assert!(response.failures.is_empty());
    }
}
