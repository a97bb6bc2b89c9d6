//! Error types for flashcard-core.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type alias using RenderError.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Which side of a card an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Face {
    Front,
    Back,
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Front => f.write_str("front"),
            Self::Back => f.write_str("back"),
        }
    }
}

/// Errors raised while turning a card face into markup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("markdown renderer failed: {0}")]
    Markdown(String),

    #[error("failed to render {face} face: {message}")]
    Face { face: Face, message: String },
}

impl RenderError {
    /// Attach the failing face to a renderer error.
    pub fn on_face(self, face: Face) -> Self {
        match self {
            Self::Markdown(message) => Self::Face { face, message },
            Self::Face { message, .. } => Self::Face { face, message },
        }
    }
}

/// Errors parsing a reveal mode name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModeError {
    #[error("unknown reveal mode: {0}")]
    Unknown(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_error_display() {
        let err = RenderError::Markdown("boom".to_string()).on_face(Face::Back);
        assert_eq!(err.to_string(), "failed to render back face: boom");
    }
}
