//! Core types for flashcard rendering.

use crate::error::ModeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Card format, decided once per block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    Qa,
    Cloze,
}

/// Front/back markdown source produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCard {
    pub front: String,
    pub back: String,
    pub kind: CardKind,
}

impl ParsedCard {
    /// Card with both faces empty.
    pub fn empty(kind: CardKind) -> Self {
        Self {
            front: String::new(),
            back: String::new(),
            kind,
        }
    }
}

/// How a card's answer is revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RevealMode {
    Hover,
    #[default]
    SurfaceClick,
    ButtonClick,
}

impl RevealMode {
    /// Get the mode name as stored in settings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hover => "hover",
            Self::SurfaceClick => "surface-click",
            Self::ButtonClick => "button-click",
        }
    }
}

impl fmt::Display for RevealMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RevealMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hover" => Ok(Self::Hover),
            "surface-click" => Ok(Self::SurfaceClick),
            "button-click" => Ok(Self::ButtonClick),
            other => Err(ModeError::Unknown(other.to_string())),
        }
    }
}

/// Visibility of a rendered card's back face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

impl RevealState {
    pub fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Hidden => Self::Revealed,
            Self::Revealed => Self::Hidden,
        }
    }
}

/// Persisted plugin settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub reveal_mode: RevealMode,
}
