//! Parser for a single flashcard block.
//!
//! # Formats
//! ```text
//! Q: What is the capital of France?
//! A: Paris
//! It sits on the Seine.
//! ```
//!
//! ```text
//! The sky is {{blue}}.
//! ```
//!
//! A block is a cloze card as soon as any line holds a `{{...}}` span,
//! otherwise it is read as question/answer.

use crate::types::{CardKind, ParsedCard};
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Forced markdown line break used between answer lines.
pub const LINE_BREAK: &str = "  \n";

/// Class of the inline container wrapping revealed cloze text.
pub const CLOZE_REVEAL_CLASS: &str = "cloze-reveal";

static CLOZE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn cloze_pattern() -> &'static Regex {
    CLOZE_PATTERN.get_or_init(|| {
        Regex::new(r"\{\{(.*?)\}\}").expect("static cloze pattern is valid")
    })
}

/// How hidden cloze text is blanked on the front face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placeholder {
    /// One raw `_` per hidden character.
    #[default]
    Underscore,
    /// One markdown-escaped `\_` per hidden character, so the renderer never
    /// reads the run as emphasis or a thematic break.
    Escaped,
}

impl Placeholder {
    fn glyph(self) -> &'static str {
        match self {
            Self::Underscore => "_",
            Self::Escaped => "\\_",
        }
    }
}

/// Parser options.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    pub placeholder: Placeholder,
}

/// Parse a flashcard block into front and back markdown source.
pub fn parse(content: &str) -> ParsedCard {
    parse_with(content, &ParseOptions::default())
}

/// Parse a flashcard block with explicit options.
pub fn parse_with(content: &str, options: &ParseOptions) -> ParsedCard {
    let lines = retained_lines(content);
    if lines.is_empty() {
        return ParsedCard::empty(CardKind::Qa);
    }

    match card_kind(&lines) {
        CardKind::Cloze => parse_cloze(&lines, options.placeholder),
        CardKind::Qa => parse_qa(&lines),
    }
}

/// Split into lines, dropping only the fully empty ones.
pub fn retained_lines(content: &str) -> Vec<&str> {
    content.lines().filter(|line| !line.is_empty()).collect()
}

/// Whether any line holds a complete `{{...}}` span.
pub fn is_cloze(lines: &[&str]) -> bool {
    lines.iter().any(|line| cloze_pattern().is_match(line))
}

/// Classify a block.
pub fn card_kind(lines: &[&str]) -> CardKind {
    if is_cloze(lines) {
        CardKind::Cloze
    } else {
        CardKind::Qa
    }
}

enum LineType<'a> {
    Question(&'a str),
    Answer(&'a str),
    Text(&'a str),
}

impl<'a> LineType<'a> {
    fn of(line: &'a str) -> Self {
        if let Some(rest) = line.strip_prefix("Q:") {
            LineType::Question(rest.trim())
        } else if let Some(rest) = line.strip_prefix("A:") {
            LineType::Answer(rest.trim())
        } else {
            LineType::Text(line)
        }
    }
}

#[derive(Default)]
struct QaBuilder<'a> {
    question: Vec<&'a str>,
    answer: Vec<&'a str>,
    in_answer: bool,
}

impl<'a> QaBuilder<'a> {
    fn process_line(&mut self, line: &'a str) {
        match LineType::of(line) {
            LineType::Question(text) => {
                self.question.push(text);
                self.in_answer = false;
            }
            LineType::Answer(text) => {
                self.answer.push(text);
                self.in_answer = true;
            }
            LineType::Text(text) if self.in_answer => self.answer.push(text.trim()),
            // Unprefixed lines before any answer belong to the question as-is.
            LineType::Text(text) => self.question.push(text),
        }
    }

    fn build(self) -> ParsedCard {
        ParsedCard {
            front: self.question.join(" "),
            back: self.answer.join(LINE_BREAK),
            kind: CardKind::Qa,
        }
    }
}

fn parse_qa(lines: &[&str]) -> ParsedCard {
    let mut builder = QaBuilder::default();
    for line in lines {
        builder.process_line(line);
    }
    builder.build()
}

// Spans are replaced after joining, so a span broken across lines is still masked.
fn parse_cloze(lines: &[&str], placeholder: Placeholder) -> ParsedCard {
    let joined = lines.join(" ");

    ParsedCard {
        front: cloze_front(&joined, placeholder),
        back: cloze_back(&joined),
        kind: CardKind::Cloze,
    }
}

/// Replace every cloze span with a placeholder run of the same length.
pub fn cloze_front(text: &str, placeholder: Placeholder) -> String {
    cloze_pattern()
        .replace_all(text, |caps: &Captures<'_>| {
            let hidden = caps.get(1).map_or("", |m| m.as_str());
            placeholder.glyph().repeat(hidden.chars().count())
        })
        .into_owned()
}

/// Replace every cloze span with its text wrapped in the reveal container.
pub fn cloze_back(text: &str) -> String {
    cloze_pattern()
        .replace_all(text, |caps: &Captures<'_>| {
            let hidden = caps.get(1).map_or("", |m| m.as_str());
            format!("<span class=\"{CLOZE_REVEAL_CLASS}\">{hidden}</span>")
        })
        .into_owned()
}
