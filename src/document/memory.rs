use std::collections::BTreeMap;

use super::{ChangeEvent, Document, EventKind, NodeId};

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attributes: BTreeMap<String, String>,
    classes: Vec<String>,
    inner_html: String,
}

impl Node {
    fn new(tag: &str, parent: Option<NodeId>) -> Self {
        Self {
            tag: tag.to_string(),
            parent,
            children: Vec::new(),
            attributes: BTreeMap::new(),
            classes: Vec::new(),
            inner_html: String::new(),
        }
    }
}

/// An in-memory document with `<html>` as root and a `<body>` child.
///
/// Records listener registrations and dispatched events so hosts and tests
/// can inspect them. Operations on unknown node ids are no-ops.
#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    listeners: Vec<(NodeId, EventKind)>,
    dispatched: Vec<ChangeEvent>,
}

const ROOT: NodeId = NodeId(0);
const BODY: NodeId = NodeId(1);

impl MemoryDocument {
    pub fn new() -> Self {
        let mut root = Node::new("html", None);
        root.children.push(BODY);
        Self {
            nodes: vec![root, Node::new("body", Some(ROOT))],
            listeners: Vec::new(),
            dispatched: Vec::new(),
        }
    }

    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0).map(|n| n.tag.as_str())
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn classes(&self, node: NodeId) -> &[String] {
        self.nodes
            .get(node.0)
            .map(|n| n.classes.as_slice())
            .unwrap_or(&[])
    }

    pub fn inner_html(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0).map(|n| n.inner_html.as_str())
    }

    /// All nodes carrying `class`, in creation order.
    pub fn find_by_class(&self, class: &str) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.classes.iter().any(|c| c == class))
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    pub fn listeners(&self) -> &[(NodeId, EventKind)] {
        &self.listeners
    }

    pub fn has_listener(&self, node: NodeId, kind: EventKind) -> bool {
        self.listeners.contains(&(node, kind))
    }

    pub fn dispatched(&self) -> &[ChangeEvent] {
        &self.dispatched
    }

    /// Drains the recorded events.
    pub fn take_dispatched(&mut self) -> Vec<ChangeEvent> {
        std::mem::take(&mut self.dispatched)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for MemoryDocument {
    fn root(&self) -> NodeId {
        ROOT
    }

    fn body(&self) -> NodeId {
        BODY
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(tag, None));
        id
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child || parent.0 >= self.nodes.len() || child.0 >= self.nodes.len() {
            return;
        }
        // Appending an ancestor under its own descendant would make a cycle.
        if self.contains(child, parent) {
            return;
        }
        if let Some(old_parent) = self.nodes[child.0].parent {
            self.nodes[old_parent.0].children.retain(|c| *c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.attributes.insert(name.to_string(), value.to_string());
        }
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.nodes
            .get(node.0)
            .and_then(|n| n.attributes.get(name).cloned())
    }

    fn set_inner_html(&mut self, node: NodeId, html: &str) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.inner_html = html.to_string();
        }
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            if !n.classes.iter().any(|c| c == class) {
                n.classes.push(class.to_string());
            }
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(n) = self.nodes.get_mut(node.0) {
            n.classes.retain(|c| c != class);
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes
            .get(node.0)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    fn add_listener(&mut self, node: NodeId, kind: EventKind) {
        self.listeners.push((node, kind));
    }

    fn dispatch(&mut self, event: &ChangeEvent) {
        self.dispatched.push(*event);
    }
}
