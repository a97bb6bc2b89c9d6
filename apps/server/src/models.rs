//! API request and response types

use flashcard_core::{CardKind, RevealMode, Settings};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// Parse a mode name sent by a client.
pub fn parse_mode(value: &str) -> Result<RevealMode> {
    value
        .parse()
        .map_err(|e: flashcard_core::ModeError| ApiError::BadRequest(e.to_string()))
}

/// PUT /api/settings body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSettingsRequest {
    #[serde(default)]
    pub reveal_mode: Option<String>,
}

/// GET/PUT /api/settings response
pub type SettingsResponse = Settings;

/// POST /api/parse body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseRequest {
    pub source: String,
}

/// POST /api/render body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderRequest {
    pub document: String,
    #[serde(default)]
    pub source_path: Option<String>,
    /// Overrides the stored reveal mode for this request.
    #[serde(default)]
    pub reveal_mode: Option<String>,
}

/// One successfully rendered card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderedCardResponse {
    pub index: usize,
    pub line: usize,
    pub kind: CardKind,
    pub html: String,
}

/// One card that failed to render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardFailureResponse {
    pub index: usize,
    pub line: usize,
    pub message: String,
}

/// POST /api/render response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResponse {
    pub reveal_mode: RevealMode,
    pub cards: Vec<RenderedCardResponse>,
    pub failures: Vec<CardFailureResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_mode() {
        assert_eq!(parse_mode("button-click").unwrap(), RevealMode::ButtonClick);
    }

    #[test]
    fn reject_unknown_mode() {
        let err = parse_mode("shake").unwrap_err();
        assert_eq!(err.to_string(), "Bad request: unknown reveal mode: shake");
    }
}
