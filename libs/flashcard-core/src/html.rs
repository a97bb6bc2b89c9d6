//! Headless element tree implementing [`Element`].
//!
//! Builds cards without a browser: the tree serializes to HTML and can
//! dispatch synthetic pointer events to registered handlers.

use crate::surface::{Element, Event, EventKind, Handler};
use pulldown_cmark_escape::escape_html;
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

const VOID_TAGS: &[&str] = &["br", "hr", "img", "input"];

enum Content {
    Element(HtmlElement),
    Text(String),
    Markup(String),
}

struct Node {
    tag: String,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    content: Vec<Content>,
    parent: Weak<RefCell<Node>>,
    handlers: Vec<(EventKind, Handler<HtmlElement>)>,
}

/// Shared handle to a node in the tree.
#[derive(Clone)]
pub struct HtmlElement(Rc<RefCell<Node>>);

impl HtmlElement {
    /// Create a detached root element.
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(Node {
            tag: tag.to_ascii_lowercase(),
            classes: Vec::new(),
            attributes: Vec::new(),
            content: Vec::new(),
            parent: Weak::new(),
            handlers: Vec::new(),
        })))
    }

    /// Child elements in document order.
    pub fn children(&self) -> Vec<HtmlElement> {
        self.0
            .borrow()
            .content
            .iter()
            .filter_map(|c| match c {
                Content::Element(e) => Some(e.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.0
            .borrow()
            .attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.clone())
    }

    /// First descendant (depth-first, self included) carrying `class`.
    pub fn find_by_class(&self, class: &str) -> Option<HtmlElement> {
        if self.has_class(class) {
            return Some(self.clone());
        }
        self.children()
            .iter()
            .find_map(|child| child.find_by_class(class))
    }

    /// Number of handlers registered for `kind` on this node.
    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.0
            .borrow()
            .handlers
            .iter()
            .filter(|(k, _)| *k == kind)
            .count()
    }

    /// Dispatch an event targeting this element.
    ///
    /// Clicks bubble up through ancestors; pointer enter and leave fire on
    /// this element only.
    pub fn dispatch(&self, kind: EventKind) {
        let event = Event {
            kind,
            target: self.clone(),
        };
        let mut current = Some(self.clone());
        while let Some(element) = current {
            element.fire(&event);
            if kind != EventKind::Click {
                break;
            }
            current = element.parent();
        }
    }

    fn fire(&self, event: &Event<HtmlElement>) {
        // Handlers run with the node unborrowed so they may touch it.
        let mut handlers = std::mem::take(&mut self.0.borrow_mut().handlers);
        for (kind, handler) in handlers.iter_mut() {
            if *kind == event.kind {
                handler(event);
            }
        }
        let mut node = self.0.borrow_mut();
        handlers.append(&mut node.handlers);
        node.handlers = handlers;
    }

    /// Serialize the element and its subtree.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Serialize only the element's content.
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        self.write_content(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let node = self.0.borrow();
        out.push('<');
        out.push_str(&node.tag);
        if !node.classes.is_empty() {
            out.push_str(" class=\"");
            push_escaped(out, &node.classes.join(" "));
            out.push('"');
        }
        for (name, value) in &node.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            push_escaped(out, value);
            out.push('"');
        }
        out.push('>');
        if VOID_TAGS.contains(&node.tag.as_str()) {
            return;
        }
        drop(node);
        self.write_content(out);
        out.push_str("</");
        out.push_str(&self.tag());
        out.push('>');
    }

    fn write_content(&self, out: &mut String) {
        for content in &self.0.borrow().content {
            match content {
                Content::Element(child) => child.write_html(out),
                Content::Text(text) => push_escaped(out, text),
                Content::Markup(markup) => out.push_str(markup),
            }
        }
    }
}

impl Element for HtmlElement {
    fn create_child(&self, tag: &str, classes: &[&str]) -> Self {
        let child = HtmlElement::new(tag);
        {
            let mut node = child.0.borrow_mut();
            node.parent = Rc::downgrade(&self.0);
            for class in classes {
                // Accept "a b" style class strings as well.
                node.classes
                    .extend(class.split_whitespace().map(str::to_string));
            }
        }
        self.0
            .borrow_mut()
            .content
            .push(Content::Element(child.clone()));
        child
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().content = vec![Content::Text(text.to_string())];
    }

    fn set_markup(&self, markup: &str) {
        self.0.borrow_mut().content = vec![Content::Markup(markup.to_string())];
    }

    fn set_attribute(&self, name: &str, value: &str) {
        let mut node = self.0.borrow_mut();
        match node.attributes.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => node.attributes.push((name.to_string(), value.to_string())),
        }
    }

    fn add_class(&self, class: &str) {
        let mut node = self.0.borrow_mut();
        if !node.classes.iter().any(|c| c == class) {
            node.classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    fn parent(&self) -> Option<Self> {
        self.0.borrow().parent.upgrade().map(HtmlElement)
    }

    fn on(&self, kind: EventKind, handler: Handler<Self>) {
        self.0.borrow_mut().handlers.push((kind, handler));
    }
}

impl fmt::Debug for HtmlElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.0.borrow();
        f.debug_struct("HtmlElement")
            .field("tag", &node.tag)
            .field("classes", &node.classes)
            .finish()
    }
}

fn push_escaped(out: &mut String, text: &str) {
    escape_html(out, text).unwrap_or_else(|_: std::fmt::Error| unreachable!("writing to a String cannot fail"));
}
