//! Reveal controller: hidden/revealed state machine and trigger wiring.

use crate::surface::{Element, Event, EventKind};
use crate::types::{RevealMode, RevealState};
use std::cell::RefCell;
use std::rc::Rc;

/// Class set on the card element while the back face is shown.
pub const FLIPPED_CLASS: &str = "is-flipped";
/// Class marking a card that toggles on surface clicks.
pub const CLICKABLE_CLASS: &str = "clickable";
/// Class of the reveal and hide buttons.
pub const BUTTON_CLASS: &str = "flashcard-button";

pub const REVEAL_BUTTON_TEXT: &str = "Reveal answer";
pub const HIDE_BUTTON_TEXT: &str = "Hide answer";

/// Interaction that may move a card between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    PointerEnter,
    PointerLeave,
    SurfaceClick { on_image: bool },
    RevealButton,
    HideButton,
}

/// Pure reveal state machine for one card.
#[derive(Debug, Clone)]
pub struct RevealController {
    mode: RevealMode,
    state: RevealState,
}

impl RevealController {
    pub fn new(mode: RevealMode) -> Self {
        Self {
            mode,
            state: RevealState::Hidden,
        }
    }

    pub fn mode(&self) -> RevealMode {
        self.mode
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    /// Apply a trigger. Returns the new state when it changed.
    ///
    /// Triggers that do not belong to the configured mode are ignored, as are
    /// surface clicks that land on an embedded image.
    pub fn handle(&mut self, trigger: Trigger) -> Option<RevealState> {
        let next = match (self.mode, trigger) {
            (RevealMode::Hover, Trigger::PointerEnter) => RevealState::Revealed,
            (RevealMode::Hover, Trigger::PointerLeave) => RevealState::Hidden,
            (RevealMode::SurfaceClick, Trigger::SurfaceClick { on_image: false }) => {
                self.state.toggled()
            }
            (RevealMode::ButtonClick, Trigger::RevealButton) => RevealState::Revealed,
            (RevealMode::ButtonClick, Trigger::HideButton) => RevealState::Hidden,
            _ => return None,
        };

        if next == self.state {
            return None;
        }
        self.state = next;
        Some(next)
    }
}

/// The element tree of one rendered card.
#[derive(Debug, Clone)]
pub struct CardElements<E> {
    /// Outer element receiving pointer events.
    pub container: E,
    /// Element carrying the flipped flag.
    pub card: E,
    pub front: E,
    pub back: E,
}

impl<E: Element> CardElements<E> {
    /// Create the container, card and both faces under `target`.
    pub fn build(target: &E, mode: RevealMode) -> Self {
        let container = target.create_child("div", &["flashcard-container"]);
        container.set_attribute("data-reveal-mode", mode.as_str());
        let card = container.create_child("div", &["flashcard"]);
        let front = card.create_child("div", &["flashcard-face", "flashcard-face--front"]);
        let back = card.create_child("div", &["flashcard-face", "flashcard-face--back"]);

        Self {
            container,
            card,
            front,
            back,
        }
    }
}

/// Shared view of an attached controller.
#[derive(Debug, Clone)]
pub struct RevealHandle {
    controller: Rc<RefCell<RevealController>>,
}

impl RevealHandle {
    pub fn state(&self) -> RevealState {
        self.controller.borrow().state()
    }

    pub fn mode(&self) -> RevealMode {
        self.controller.borrow().mode()
    }
}

/// Wire the mode's triggers onto a card's elements.
pub fn attach<E: Element>(mode: RevealMode, elements: &CardElements<E>) -> RevealHandle {
    let controller = Rc::new(RefCell::new(RevealController::new(mode)));

    match mode {
        RevealMode::Hover => {
            on_trigger(&elements.container, EventKind::PointerEnter, &controller, &elements.card, |_| {
                Trigger::PointerEnter
            });
            on_trigger(&elements.container, EventKind::PointerLeave, &controller, &elements.card, |_| {
                Trigger::PointerLeave
            });
        }
        RevealMode::SurfaceClick => {
            elements.card.add_class(CLICKABLE_CLASS);
            on_trigger(&elements.container, EventKind::Click, &controller, &elements.card, |event| {
                Trigger::SurfaceClick {
                    on_image: event.target.closest("img").is_some(),
                }
            });
        }
        RevealMode::ButtonClick => {
            let reveal = elements.front.create_child("button", &[BUTTON_CLASS]);
            reveal.set_text(REVEAL_BUTTON_TEXT);
            on_trigger(&reveal, EventKind::Click, &controller, &elements.card, |_| {
                Trigger::RevealButton
            });

            let hide = elements.back.create_child("button", &[BUTTON_CLASS]);
            hide.set_text(HIDE_BUTTON_TEXT);
            on_trigger(&hide, EventKind::Click, &controller, &elements.card, |_| {
                Trigger::HideButton
            });
        }
    }

    tracing::debug!(mode = %mode, "attached reveal controller");
    RevealHandle { controller }
}

fn on_trigger<E, F>(
    source: &E,
    kind: EventKind,
    controller: &Rc<RefCell<RevealController>>,
    card: &E,
    to_trigger: F,
) where
    E: Element,
    F: Fn(&Event<E>) -> Trigger + 'static,
{
    let controller = Rc::clone(controller);
    let card = card.clone();
    source.on(
        kind,
        Box::new(move |event: &Event<E>| {
            let transition = controller.borrow_mut().handle(to_trigger(event));
            if let Some(state) = transition {
                card.toggle_class(FLIPPED_CLASS, state.is_revealed());
            }
        }),
    );
}
