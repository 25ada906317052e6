//! HTML serialization and debug dumps for [`RenderTree`].

use std::fmt::Write as _;

use serde::Serialize;

use crate::{NodeId, NodeType, RenderTree};

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "img", "meta", "link", "source"];

/// Elements whose text content is emitted without escaping.
const RAW_TEXT_ELEMENTS: &[&str] = &["style", "script"];

/// A nested, serializable view of a subtree.
///
/// The arena form is awkward to read as JSON; this mirrors the markup instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NodeSnapshot {
    /// A fragment and its children.
    Fragment {
        /// Child snapshots.
        children: Vec<NodeSnapshot>,
    },
    /// An element and its children.
    Element {
        /// Tag name.
        tag: String,
        /// Attributes, sorted by name.
        attrs: crate::AttributesMap,
        /// Child snapshots.
        children: Vec<NodeSnapshot>,
    },
    /// A text run.
    Text {
        /// The text.
        content: String,
    },
}

impl RenderTree {
    /// Serialize the whole tree to HTML.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for &child in self.children(NodeId::ROOT) {
            self.write_html(child, false, &mut out);
        }
        out
    }

    /// Serialize one subtree to HTML.
    #[must_use]
    pub fn node_to_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(id, false, &mut out);
        out
    }

    fn write_html(&self, id: NodeId, raw_text: bool, out: &mut String) {
        let Some(node) = self.get(id) else { return };

        match &node.node_type {
            NodeType::Fragment => {
                for &child in &node.children {
                    self.write_html(child, raw_text, out);
                }
            }
            NodeType::Text(text) => {
                if raw_text {
                    out.push_str(text);
                } else {
                    out.push_str(&escape_text(text));
                }
            }
            NodeType::Element(data) => {
                let tag = data.tag_name.as_str();
                out.push('<');
                out.push_str(tag);
                for (name, value) in &data.attrs {
                    let _ = write!(out, " {name}=\"{}\"", escape_attr(value));
                }
                out.push('>');

                if VOID_ELEMENTS.contains(&tag) {
                    return;
                }

                let raw = RAW_TEXT_ELEMENTS.contains(&tag);
                for &child in &node.children {
                    self.write_html(child, raw, out);
                }
                let _ = write!(out, "</{tag}>");
            }
        }
    }

    /// Build a nested serializable view of the subtree rooted at `id`.
    #[must_use]
    pub fn snapshot(&self, id: NodeId) -> Option<NodeSnapshot> {
        let node = self.get(id)?;
        let children = || -> Vec<NodeSnapshot> {
            node.children
                .iter()
                .filter_map(|&child| self.snapshot(child))
                .collect()
        };

        Some(match &node.node_type {
            NodeType::Fragment => NodeSnapshot::Fragment {
                children: children(),
            },
            NodeType::Element(data) => NodeSnapshot::Element {
                tag: data.tag_name.clone(),
                attrs: data.attrs.clone(),
                children: children(),
            },
            NodeType::Text(text) => NodeSnapshot::Text {
                content: text.clone(),
            },
        })
    }

    /// Indented, human-readable dump of the subtree rooted at `id`.
    #[must_use]
    pub fn dump(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.dump_into(id, 0, &mut out);
        out
    }

    fn dump_into(&self, id: NodeId, indent: usize, out: &mut String) {
        let prefix = "  ".repeat(indent);
        let Some(node) = self.get(id) else { return };

        match &node.node_type {
            NodeType::Fragment => {
                let _ = writeln!(out, "{prefix}#fragment");
            }
            NodeType::Element(data) => {
                if data.attrs.is_empty() {
                    let _ = writeln!(out, "{prefix}<{}>", data.tag_name);
                } else {
                    let attrs: Vec<String> = data
                        .attrs
                        .iter()
                        .map(|(k, v)| {
                            if v.is_empty() {
                                k.clone()
                            } else {
                                format!("{k}=\"{v}\"")
                            }
                        })
                        .collect();
                    let _ = writeln!(out, "{prefix}<{} {}>", data.tag_name, attrs.join(" "));
                }
            }
            NodeType::Text(data) => {
                let display = data.replace('\n', "\\n").replace(' ', "\u{00B7}");
                let _ = writeln!(out, "{prefix}\"{display}\"");
            }
        }
        for &child_id in &node.children {
            self.dump_into(child_id, indent + 1, out);
        }
    }
}

/// Print the subtree rooted at `id` to stdout.
pub fn print_tree(tree: &RenderTree, id: NodeId) {
    print!("{}", tree.dump(id));
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_attr_quotes() {
        assert_eq!(escape_attr(r#"a"b<c"#), "a&quot;b&lt;c");
    }

    #[test]
    fn test_escape_text_ampersand_first() {
        assert_eq!(escape_text("&lt;"), "&amp;lt;");
    }
}
