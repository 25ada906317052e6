//! Render tree for the paylabel components.
//!
//! Every component returns its output as a [`RenderTree`]: an arena of
//! fragment, element and text nodes rooted at a [`NodeType::Fragment`].
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all relationships,
//! providing O(1) access and traversal without borrow checker issues. Trees are
//! plain values: two renders of the same input compare equal with `==`.

/// HTML serialization and debug dumps.
pub mod serialize;

pub use serialize::{NodeSnapshot, print_tree};

use std::collections::BTreeMap;

use serde::Serialize;

/// Map of attribute names to values for an element.
///
/// Ordered so that serialization is deterministic.
pub type AttributesMap = BTreeMap<String, String>;

/// A type-safe index into the render tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root fragment node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// A node with its parent, child and sibling links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// What this node is.
    pub node_type: NodeType,

    /// The parent node, `None` for the root and for detached nodes.
    pub parent: Option<NodeId>,

    /// Child nodes in document order.
    pub children: Vec<NodeId>,

    /// The node immediately following this one in its parent's children.
    pub next_sibling: Option<NodeId>,

    /// The node immediately preceding this one in its parent's children.
    pub prev_sibling: Option<NodeId>,
}

/// The kind of a render tree node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NodeType {
    /// A grouping node with no markup of its own.
    Fragment,
    /// An element with a tag name and attributes.
    Element(ElementData),
    /// A run of text.
    Text(String),
}

/// Element-specific data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementData {
    /// The element's tag name.
    pub tag_name: String,
    /// The element's attributes.
    pub attrs: AttributesMap,
}

impl ElementData {
    /// Create element data from a tag name and attribute pairs.
    #[must_use]
    pub fn new(tag_name: &str, attrs: &[(&str, &str)]) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            attrs: attrs
                .iter()
                .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
                .collect(),
        }
    }

    /// Returns the value of the named attribute if present.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Returns the class names from the class attribute, in order.
    #[must_use]
    pub fn classes(&self) -> Vec<&str> {
        self.attrs
            .get("class")
            .map(|list| list.split_whitespace().collect())
            .unwrap_or_default()
    }

    /// Whether the class attribute contains `class_name`.
    #[must_use]
    pub fn has_class(&self, class_name: &str) -> bool {
        self.classes().contains(&class_name)
    }
}

/// Arena-based render tree with O(1) node access and traversal.
///
/// The root is always a [`NodeType::Fragment`] at [`NodeId::ROOT`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderTree {
    /// All nodes in the tree, indexed by `NodeId`.
    nodes: Vec<Node>,
}

impl RenderTree {
    /// Create a new tree holding only the root fragment.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                node_type: NodeType::Fragment,
                parent: None,
                children: Vec::new(),
                next_sibling: None,
                prev_sibling: None,
            }],
        }
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get the number of nodes in the tree, including the root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the root has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children(NodeId::ROOT).is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            node_type,
            parent: None,
            children: Vec::new(),
            next_sibling: None,
            prev_sibling: None,
        });
        id
    }

    /// Appends `child` as the last child of `parent`, updating all relationships.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let prev_last_child = self.nodes[parent.0].children.last().copied();

        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);

        if let Some(prev_id) = prev_last_child {
            self.nodes[prev_id.0].next_sibling = Some(child);
            self.nodes[child.0].prev_sibling = Some(prev_id);
        }
    }

    /// Allocate an element, append it to `parent` and return its ID.
    pub fn append_element(&mut self, parent: NodeId, tag_name: &str, attrs: &[(&str, &str)]) -> NodeId {
        let id = self.alloc(NodeType::Element(ElementData::new(tag_name, attrs)));
        self.append_child(parent, id);
        id
    }

    /// Allocate a text node and append it to `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: &str) {
        let id = self.alloc(NodeType::Text(text.to_string()));
        self.append_child(parent, id);
    }

    /// Copy the children of `other`'s root under `parent`, preserving order.
    pub fn graft(&mut self, parent: NodeId, other: &Self) {
        for &child in other.children(NodeId::ROOT) {
            self.graft_node(parent, other, child);
        }
    }

    fn graft_node(&mut self, parent: NodeId, other: &Self, source: NodeId) {
        let Some(node) = other.get(source) else { return };
        let id = self.alloc(node.node_type.clone());
        self.append_child(parent, id);
        for &child in &node.children {
            self.graft_node(id, other, child);
        }
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Get the first child of a node.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.first().copied())
    }

    /// Get the last child of a node.
    #[must_use]
    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.children.last().copied())
    }

    /// Get the next sibling of a node.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling)
    }

    /// Get the previous sibling of a node.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling)
    }

    /// Iterate over all ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// All descendants of `id` in document (pre-)order, excluding `id` itself.
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Get text content if this node is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// Concatenated text of `id` and all its descendants.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut text = self.as_text(id).unwrap_or_default().to_string();
        for node in self.descendants(id) {
            if let Some(s) = self.as_text(node) {
                text.push_str(s);
            }
        }
        text
    }

    /// Elements carrying `class_name`, in document order.
    #[must_use]
    pub fn find_by_class(&self, class_name: &str) -> Vec<NodeId> {
        self.descendants(NodeId::ROOT)
            .into_iter()
            .filter(|&id| self.as_element(id).is_some_and(|e| e.has_class(class_name)))
            .collect()
    }

    /// Elements with the given tag name, in document order.
    #[must_use]
    pub fn find_by_tag(&self, tag_name: &str) -> Vec<NodeId> {
        self.descendants(NodeId::ROOT)
            .into_iter()
            .filter(|&id| {
                self.as_element(id)
                    .is_some_and(|e| e.tag_name.eq_ignore_ascii_case(tag_name))
            })
            .collect()
    }
}

impl Default for RenderTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a RenderTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}
