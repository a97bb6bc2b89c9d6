//! Test fixtures and factory functions for request bodies.

use serde_json::json;

/// Markdown document with one Q/A card and one cloze card.
pub const SAMPLE_DOCUMENT: &str = "# Geography\n\n```flashcard\nQ: capital of France?\nA: Paris\n```\n\nSome prose.\n\n```flashcard\nThe sky is {{blue}}.\n```\n";

/// Generate a document with `num_cards` Q/A flashcard blocks.
pub fn sample_document(num_cards: usize) -> String {
    (0..num_cards)
        .map(|i| format!("```flashcard\nQ: Question {}?\nA: Answer {}.\n```\n", i + 1, i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build a PUT /api/settings body.
pub fn update_settings_request(reveal_mode: Option<&str>) -> serde_json::Value {
    let mut body = json!({});
    if let Some(mode) = reveal_mode {
        body["reveal_mode"] = json!(mode);
    }
    body
}

/// Build a POST /api/render body.
pub fn render_request(document: &str, reveal_mode: Option<&str>) -> serde_json::Value {
    let mut body = json!({ "document": document });
    if let Some(mode) = reveal_mode {
        body["reveal_mode"] = json!(mode);
    }
    body
}
