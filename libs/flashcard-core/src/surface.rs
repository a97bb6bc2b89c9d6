//! Presentation surface abstraction.
//!
//! Cards are built and wired against [`Element`], a DOM-like handle. Handles
//! are cheap to clone and refer to the same underlying node.

use serde::{Deserialize, Serialize};

/// Interaction events the reveal controller listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    PointerEnter,
    PointerLeave,
    Click,
}

/// An event delivered to a handler.
#[derive(Debug, Clone)]
pub struct Event<E> {
    pub kind: EventKind,
    /// Element the event originated from.
    pub target: E,
}

/// Boxed event handler.
pub type Handler<E> = Box<dyn FnMut(&Event<E>)>;

/// A node on the presentation surface.
pub trait Element: Clone + 'static {
    /// Append a child element and return its handle.
    fn create_child(&self, tag: &str, classes: &[&str]) -> Self;

    fn set_text(&self, text: &str);

    /// Replace the element's content with already-rendered markup.
    fn set_markup(&self, markup: &str);

    fn set_attribute(&self, name: &str, value: &str);

    fn add_class(&self, class: &str);

    fn remove_class(&self, class: &str);

    fn has_class(&self, class: &str) -> bool;

    fn toggle_class(&self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    /// Lowercase tag name.
    fn tag(&self) -> String;

    fn parent(&self) -> Option<Self>;

    /// Nearest inclusive ancestor with the given tag.
    fn closest(&self, tag: &str) -> Option<Self> {
        let mut current = Some(self.clone());
        while let Some(element) = current {
            if element.tag().eq_ignore_ascii_case(tag) {
                return Some(element);
            }
            current = element.parent();
        }
        None
    }

    /// Register an event handler.
    fn on(&self, kind: EventKind, handler: Handler<Self>);
}
