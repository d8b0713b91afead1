//! The document tree the manager renders into.
//!
//! [`Document`] is the capability a host implements over its real tree
//! (a browser DOM, a GUI scene, a test double). [`MemoryDocument`] is the
//! bundled arena-backed implementation.

mod memory;

pub use memory::MemoryDocument;

use serde::{Deserialize, Serialize};

use crate::theme::{AccentColor, ThemeMode};

/// Handle to a node in a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Kinds of interaction a node can be registered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
}

/// Notification dispatched on the document after a preference changes.
///
/// Serializes the way a custom DOM event reads, e.g.
/// `{"type":"themeChange","detail":{"theme":"dark"}}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail", rename_all = "camelCase")]
pub enum ChangeEvent {
    ThemeChange { theme: ThemeMode },
    ColorChange { color: AccentColor },
}

impl ChangeEvent {
    /// Event name as seen by listeners.
    pub fn name(&self) -> &'static str {
        match self {
            ChangeEvent::ThemeChange { .. } => "themeChange",
            ChangeEvent::ColorChange { .. } => "colorChange",
        }
    }

    /// Event payload as JSON.
    pub fn detail(&self) -> serde_json::Value {
        match self {
            ChangeEvent::ThemeChange { theme } => serde_json::json!({ "theme": theme }),
            ChangeEvent::ColorChange { color } => serde_json::json!({ "color": color }),
        }
    }
}

/// A mutable element tree with a root element and a body.
pub trait Document {
    /// The root element (`<html>`), which carries the mode and color attributes.
    fn root(&self) -> NodeId;

    fn body(&self) -> NodeId;

    fn create_element(&mut self, tag: &str) -> NodeId;

    fn append_child(&mut self, parent: NodeId, child: NodeId);

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str);

    fn attribute(&self, node: NodeId, name: &str) -> Option<String>;

    /// Replaces the node's inner markup.
    fn set_inner_html(&mut self, node: NodeId, html: &str);

    fn add_class(&mut self, node: NodeId, class: &str);

    fn remove_class(&mut self, node: NodeId, class: &str);

    fn has_class(&self, node: NodeId, class: &str) -> bool;

    /// Adds or removes `class` so that its presence equals `on`.
    fn set_class(&mut self, node: NodeId, class: &str, on: bool) {
        if on {
            self.add_class(node, class);
        } else {
            self.remove_class(node, class);
        }
    }

    /// Flips `class` and returns whether it is now present.
    fn toggle_class(&mut self, node: NodeId, class: &str) -> bool {
        let on = !self.has_class(node, class);
        self.set_class(node, class, on);
        on
    }

    /// True when `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool;

    /// Registers `node` as a target the host should report `kind` events for.
    fn add_listener(&mut self, node: NodeId, kind: EventKind);

    /// Delivers a change notification to external listeners.
    fn dispatch(&mut self, event: &ChangeEvent);
}
