//! Core flashcard library shared by host applications.
//!
//! Provides:
//! - Parser turning a flashcard block into front/back markdown (Q/A and cloze)
//! - Reveal controller state machine wired to a presentation surface
//! - Rendering pipeline for single cards and whole documents
//! - A `pulldown-cmark` markdown renderer and a headless HTML surface

pub mod document;
pub mod error;
pub mod html;
pub mod markdown;
pub mod parser;
pub mod render;
pub mod reveal;
pub mod surface;
pub mod types;

pub use document::{extract_blocks, render_document, CardFailure, DocumentCard, DocumentReport, SourceBlock};
pub use error::{Face, ModeError, RenderError, Result};
pub use html::HtmlElement;
pub use markdown::PulldownRenderer;
pub use parser::{parse, parse_with, ParseOptions, Placeholder};
pub use render::{render_card, MarkdownRenderer, RenderContext, RenderedCard};
pub use reveal::{attach, CardElements, RevealController, RevealHandle, Trigger};
pub use surface::{Element, Event, EventKind, Handler};
pub use types::{CardKind, ParsedCard, RevealMode, RevealState, Settings};
