//! The arena document tree.
//!
//! A [`Doctree`] owns every node in one `Vec`; nodes refer to each other by
//! [`NodeId`]. Structure is held as parent / first-child / next-sibling
//! links, so child order is explicit and parents never own their children.
//! The builder methods attach each node to at most one parent, which is the
//! invariant the writer's traversal relies on.
//!
//! Trees serialize as nested objects: elements as
//! `{"tag": ..., "attrs": {...}, "children": [...]}` (empty attrs and
//! children omitted) and text leaves as `{"text": ...}`.
//!
//! ## Examples
//!
//! ```rust
//! use doctree_rst::Doctree;
//!
//! let mut tree = Doctree::new();
//! let section = tree.add_element(tree.root(), "section");
//! let title = tree.add_element(section, "title");
//! tree.add_text(title, "Intro");
//!
//! assert_eq!(tree.children(section).count(), 1);
//! assert_eq!(tree.text_of(section), "Intro");
//! ```

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::attrs::{AttrValue, Attributes};
use crate::tag::Tag;

/// Unique identifier for a node within a [`Doctree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node id (always 0).
    pub const ROOT: NodeId = NodeId(0);

    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Payload of one node: a tagged element or a text leaf.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// An element with a tag and an attribute map.
    Element { tag: Tag, attrs: Attributes },
    /// Literal text content.
    Text(String),
}

/// A node in the document tree.
#[derive(Debug, Clone)]
pub struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    first_child: Option<NodeId>,
    last_child: Option<NodeId>,
    next_sibling: Option<NodeId>,
}

impl Node {
    fn new(kind: NodeKind) -> Self {
        Node {
            kind,
            parent: None,
            first_child: None,
            last_child: None,
            next_sibling: None,
        }
    }

    #[must_use]
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// The parent node, `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[must_use]
    pub fn first_child(&self) -> Option<NodeId> {
        self.first_child
    }

    #[must_use]
    pub fn next_sibling(&self) -> Option<NodeId> {
        self.next_sibling
    }
}

/// An arena-owned document tree.
///
/// A new tree starts with a `document` root. Elements and text leaves are
/// added under an existing parent and keep their insertion order as sibling
/// order.
///
/// # Examples
///
/// ```rust
/// use doctree_rst::{Doctree, Tag};
///
/// let mut tree = Doctree::new();
/// let para = tree.add_element(tree.root(), "paragraph");
/// tree.add_text(para, "Hello.");
///
/// assert_eq!(tree.tag(para), Some(&Tag::Paragraph));
/// assert_eq!(tree.node_count(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Doctree {
    nodes: Vec<Node>,
}

impl Default for Doctree {
    fn default() -> Self {
        Self::new()
    }
}

impl Doctree {
    /// Creates a tree holding a single `document` root.
    #[must_use]
    pub fn new() -> Self {
        Self::with_root("document")
    }

    /// Creates a tree whose root element carries the given tag name.
    #[must_use]
    pub fn with_root(tag: &str) -> Self {
        Doctree {
            nodes: vec![Node::new(NodeKind::Element {
                tag: Tag::from_name(tag),
                attrs: Attributes::new(),
            })],
        }
    }

    /// The root node id.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Looks up a node by id.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Allocates a detached element node.
    pub fn new_element(&mut self, tag: &str) -> NodeId {
        self.alloc(Node::new(NodeKind::Element {
            tag: Tag::from_name(tag),
            attrs: Attributes::new(),
        }))
    }

    /// Allocates a detached text leaf.
    pub fn new_text(&mut self, text: impl Into<String>) -> NodeId {
        self.alloc(Node::new(NodeKind::Text(text.into())))
    }

    /// Attaches a detached node as the last child of `parent`.
    ///
    /// A node can be attached once; a call naming the root, an
    /// already-attached child, or an unknown id changes nothing.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if parent == child
            || child == NodeId::ROOT
            || parent.index() >= self.nodes.len()
            || child.index() >= self.nodes.len()
            || self.nodes[child.index()].parent.is_some()
        {
            return;
        }
        self.nodes[child.index()].parent = Some(parent);
        match self.nodes[parent.index()].last_child {
            Some(last) => self.nodes[last.index()].next_sibling = Some(child),
            None => self.nodes[parent.index()].first_child = Some(child),
        }
        self.nodes[parent.index()].last_child = Some(child);
    }

    /// Adds an element under `parent` and returns its id.
    pub fn add_element(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = self.new_element(tag);
        self.append_child(parent, id);
        id
    }

    /// Adds a text leaf under `parent` and returns its id.
    pub fn add_text(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        let id = self.new_text(text);
        self.append_child(parent, id);
        id
    }

    /// Sets an attribute on an element node. Text leaves carry none.
    pub fn set_attr(&mut self, id: NodeId, key: &str, value: impl Into<AttrValue>) {
        if let Some(node) = self.nodes.get_mut(id.index()) {
            if let NodeKind::Element { attrs, .. } = &mut node.kind {
                attrs.insert(key, value);
            }
        }
    }

    /// The tag of an element node; `None` for text leaves and unknown ids.
    #[must_use]
    pub fn tag(&self, id: NodeId) -> Option<&Tag> {
        match self.node(id)?.kind() {
            NodeKind::Element { tag, .. } => Some(tag),
            NodeKind::Text(_) => None,
        }
    }

    /// The attributes of an element node.
    #[must_use]
    pub fn attrs(&self, id: NodeId) -> Option<&Attributes> {
        match self.node(id)?.kind() {
            NodeKind::Element { attrs, .. } => Some(attrs),
            NodeKind::Text(_) => None,
        }
    }

    /// The content of a text leaf.
    #[must_use]
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match self.node(id)?.kind() {
            NodeKind::Text(text) => Some(text),
            NodeKind::Element { .. } => None,
        }
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.parent
    }

    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id)?.first_child
    }

    /// Iterates over the children of a node in sibling order.
    pub fn children(&self, id: NodeId) -> Children<'_> {
        Children {
            tree: self,
            next: self.node(id).and_then(Node::first_child),
        }
    }

    /// Concatenated text of every leaf in the subtree, in document order.
    #[must_use]
    pub fn text_of(&self, id: NodeId) -> String {
        let mut out = String::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            match self.node(current).map(Node::kind) {
                Some(NodeKind::Text(text)) => out.push_str(text),
                Some(NodeKind::Element { .. }) => {
                    let mut children: Vec<NodeId> = self.children(current).collect();
                    children.reverse();
                    stack.extend(children);
                }
                None => {}
            }
        }
        out
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    fn to_repr(&self, id: NodeId) -> NodeRepr {
        match self.node(id).map(Node::kind) {
            Some(NodeKind::Text(text)) => NodeRepr::Text { text: text.clone() },
            Some(NodeKind::Element { tag, attrs }) => NodeRepr::Element {
                tag: tag.as_str().to_string(),
                attrs: attrs.clone(),
                children: self.children(id).map(|child| self.to_repr(child)).collect(),
            },
            None => NodeRepr::Text {
                text: String::new(),
            },
        }
    }

    fn build_repr(&mut self, parent: NodeId, repr: NodeRepr) {
        match repr {
            NodeRepr::Text { text } => {
                self.add_text(parent, text);
            }
            NodeRepr::Element {
                tag,
                attrs,
                children,
            } => {
                let id = self.add_element(parent, &tag);
                for (key, value) in attrs {
                    self.set_attr(id, &key, value);
                }
                for child in children {
                    self.build_repr(id, child);
                }
            }
        }
    }
}

/// Iterator over the children of a node.
pub struct Children<'a> {
    tree: &'a Doctree,
    next: Option<NodeId>,
}

impl<'a> Iterator for Children<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.node(current).and_then(Node::next_sibling);
        Some(current)
    }
}

/// Serialized shape of one node.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum NodeRepr {
    Text {
        text: String,
    },
    Element {
        tag: String,
        #[serde(default, skip_serializing_if = "Attributes::is_empty")]
        attrs: Attributes,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        children: Vec<NodeRepr>,
    },
}

impl Serialize for Doctree {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_repr(self.root()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Doctree {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match NodeRepr::deserialize(deserializer)? {
            NodeRepr::Element {
                tag,
                attrs,
                children,
            } => {
                let mut tree = Doctree::with_root(&tag);
                let root = tree.root();
                for (key, value) in attrs {
                    tree.set_attr(root, &key, value);
                }
                for child in children {
                    tree.build_repr(root, child);
                }
                Ok(tree)
            }
            NodeRepr::Text { .. } => Err(D::Error::custom("document root must be an element")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tree_has_a_document_root() {
        let tree = Doctree::new();
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.tag(tree.root()), Some(&Tag::Document));
        assert!(tree.parent(tree.root()).is_none());
    }

    #[test]
    fn children_keep_insertion_order() {
        let mut tree = Doctree::new();
        let root = tree.root();
        let a = tree.add_element(root, "paragraph");
        let b = tree.add_element(root, "paragraph");
        let c = tree.add_element(root, "transition");
        assert_eq!(tree.children(root).collect::<Vec<_>>(), vec![a, b, c]);
        assert_eq!(tree.parent(b), Some(root));
        assert_eq!(tree.node(a).and_then(Node::next_sibling), Some(b));
    }

    #[test]
    fn a_node_attaches_to_at_most_one_parent() {
        let mut tree = Doctree::new();
        let root = tree.root();
        let para = tree.add_element(root, "paragraph");
        let other = tree.add_element(root, "section");
        tree.append_child(other, para);
        assert_eq!(tree.parent(para), Some(root));
        assert_eq!(tree.children(other).count(), 0);
    }

    #[test]
    fn the_root_never_reattaches() {
        let mut tree = Doctree::new();
        let para = tree.add_element(tree.root(), "paragraph");
        tree.append_child(para, tree.root());
        assert_eq!(tree.parent(tree.root()), None);
        assert_eq!(tree.children(para).count(), 0);
    }

    #[test]
    fn text_of_concatenates_leaves_in_document_order() {
        let mut tree = Doctree::new();
        let para = tree.add_element(tree.root(), "paragraph");
        tree.add_text(para, "See ");
        let strong = tree.add_element(para, "strong");
        tree.add_text(strong, "this");
        tree.add_text(para, " now");
        assert_eq!(tree.text_of(para), "See this now");
    }

    #[test]
    fn attributes_attach_to_elements_only() {
        let mut tree = Doctree::new();
        let list = tree.add_element(tree.root(), "bullet_list");
        tree.set_attr(list, "bullet", "*");
        let text = tree.add_text(list, "stray");
        tree.set_attr(text, "bullet", "*");
        assert_eq!(tree.attrs(list).and_then(|a| a.bullet()), Some("*"));
        assert!(tree.attrs(text).is_none());
    }

    #[test]
    fn serializes_as_nested_objects() {
        let mut tree = Doctree::new();
        let para = tree.add_element(tree.root(), "paragraph");
        tree.add_text(para, "Hello.");
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "tag": "document",
                "children": [
                    { "tag": "paragraph", "children": [ { "text": "Hello." } ] }
                ]
            })
        );
    }

    #[test]
    fn deserializes_nested_objects_with_attributes() {
        let json = r#"{
            "tag": "document",
            "children": [
                {
                    "tag": "bullet_list",
                    "attrs": { "bullet": "-", "classes": ["compact"] },
                    "children": [
                        { "tag": "list_item", "children": [ { "text": "one" } ] }
                    ]
                }
            ]
        }"#;
        let tree: Doctree = serde_json::from_str(json).unwrap();
        let list = tree.children(tree.root()).next().unwrap();
        assert_eq!(tree.tag(list), Some(&Tag::BulletList));
        let attrs = tree.attrs(list).unwrap();
        assert_eq!(attrs.bullet(), Some("-"));
        assert!(attrs.has_class("compact"));
    }

    #[test]
    fn a_text_root_is_rejected() {
        let err = serde_json::from_str::<Doctree>(r#"{ "text": "loose" }"#).unwrap_err();
        assert!(err.to_string().contains("root must be an element"));
    }

    #[test]
    fn round_trips_through_json() {
        let mut tree = Doctree::new();
        let section = tree.add_element(tree.root(), "section");
        let title = tree.add_element(section, "title");
        tree.add_text(title, "Intro");
        tree.set_attr(section, "ids", AttrValue::List(vec!["intro".to_string()]));

        let json = serde_json::to_string(&tree).unwrap();
        let back: Doctree = serde_json::from_str(&json).unwrap();
        assert_eq!(back.node_count(), tree.node_count());
        assert_eq!(back.text_of(back.root()), "Intro");
    }
}
