//! YAML node with source location tracking.

use crate::SourceInfo;
use crate::scalar::{parse_bool, parse_float, parse_int};
use serde::{Deserialize, Serialize};

/// The resolved kind of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    Mapping,
    Sequence,
    String,
    Integer,
    Float,
    Boolean,
    Null,
}

impl NodeKind {
    /// Human readable name, used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Mapping => "mapping",
            NodeKind::Sequence => "sequence",
            NodeKind::String => "string",
            NodeKind::Integer => "integer",
            NodeKind::Float => "float",
            NodeKind::Boolean => "boolean",
            NodeKind::Null => "null",
        }
    }
}

/// A YAML node with source location information.
///
/// Owns its children, so a parsed document is a single self-contained tree
/// that model objects can borrow from for as long as the caller keeps it.
///
/// ## Example
///
/// ```rust
/// use openapi_yaml::{parse, NodeKind};
///
/// let root = parse("scopes:\n  read: read access\n").unwrap();
/// let scopes = root.get("scopes").unwrap();
/// assert_eq!(scopes.kind(), NodeKind::Mapping);
/// assert_eq!(scopes.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Node {
    /// Source location for this node.
    pub source_info: SourceInfo,

    /// Explicit tag, rendered as handle followed by suffix (e.g. `!!str`).
    pub tag: Option<String>,

    content: Content,
}

#[derive(Debug, Clone)]
enum Content {
    Scalar { kind: NodeKind, text: String },
    Sequence(Vec<Node>),
    Mapping(Vec<NodeEntry>),
}

/// A key-value pair in a YAML mapping with source tracking.
#[derive(Debug, Clone)]
pub struct NodeEntry {
    /// The key with source tracking
    pub key: Node,

    /// The value with source tracking
    pub value: Node,

    /// Source location of the entire entry (key + value)
    pub entry_span: SourceInfo,
}

impl Node {
    /// Create a scalar node. `kind` must not be `Mapping` or `Sequence`.
    pub fn new_scalar(kind: NodeKind, text: impl Into<String>, source_info: SourceInfo) -> Self {
        debug_assert!(!matches!(kind, NodeKind::Mapping | NodeKind::Sequence));
        Self {
            source_info,
            tag: None,
            content: Content::Scalar {
                kind,
                text: text.into(),
            },
        }
    }

    /// Create a sequence node.
    pub fn new_sequence(items: Vec<Node>, source_info: SourceInfo) -> Self {
        Self {
            source_info,
            tag: None,
            content: Content::Sequence(items),
        }
    }

    /// Create a mapping node.
    pub fn new_mapping(entries: Vec<NodeEntry>, source_info: SourceInfo) -> Self {
        Self {
            source_info,
            tag: None,
            content: Content::Mapping(entries),
        }
    }

    /// Attach an explicit tag.
    pub fn with_tag(mut self, tag: Option<String>) -> Self {
        self.tag = tag;
        self
    }

    pub fn kind(&self) -> NodeKind {
        match &self.content {
            Content::Scalar { kind, .. } => *kind,
            Content::Sequence(_) => NodeKind::Sequence,
            Content::Mapping(_) => NodeKind::Mapping,
        }
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self.content, Content::Scalar { .. })
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self.content, Content::Sequence(_))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self.content, Content::Mapping(_))
    }

    /// The text of any scalar as written, whatever its kind.
    pub fn scalar_text(&self) -> Option<&str> {
        match &self.content {
            Content::Scalar { text, .. } => Some(text),
            _ => None,
        }
    }

    /// The text of a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match &self.content {
            Content::Scalar {
                kind: NodeKind::String,
                text,
            } => Some(text),
            _ => None,
        }
    }

    /// Decode an integer scalar. Returns `None` for other kinds and for
    /// integer-tagged text that does not parse.
    pub fn as_i64(&self) -> Option<i64> {
        match &self.content {
            Content::Scalar {
                kind: NodeKind::Integer,
                text,
            } => parse_int(text),
            _ => None,
        }
    }

    /// Decode a float or integer scalar as `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match &self.content {
            Content::Scalar {
                kind: NodeKind::Float,
                text,
            } => parse_float(text),
            Content::Scalar {
                kind: NodeKind::Integer,
                text,
            } => parse_int(text).map(|i| i as f64),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match &self.content {
            Content::Scalar {
                kind: NodeKind::Boolean,
                text,
            } => parse_bool(text),
            _ => None,
        }
    }

    /// Get sequence children if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[Node]> {
        match &self.content {
            Content::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Get mapping entries, in source order, if this is a mapping.
    pub fn as_mapping(&self) -> Option<&[NodeEntry]> {
        match &self.content {
            Content::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up the entry for `key` in a mapping, comparing key text.
    ///
    /// Returns `None` if this is not a mapping or the key is not present. When
    /// a key appears more than once, the last occurrence is returned.
    pub fn get_entry(&self, key: &str) -> Option<&NodeEntry> {
        self.as_mapping()?
            .iter()
            .rev()
            .find(|entry| entry.key.scalar_text() == Some(key))
    }

    /// Look up the value for `key` in a mapping.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.get_entry(key).map(|entry| &entry.value)
    }

    /// Get a sequence element by index.
    pub fn get_index(&self, index: usize) -> Option<&Node> {
        self.as_sequence()?.get(index)
    }

    /// Number of children (sequence length or mapping entry count).
    pub fn len(&self) -> usize {
        match &self.content {
            Content::Scalar { .. } => 0,
            Content::Sequence(items) => items.len(),
            Content::Mapping(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Deep comparison of decoded values, ignoring positions, tags and
    /// formatting.
    ///
    /// Numbers compare numerically, mappings compare regardless of key order,
    /// sequences compare in order. A string equals any other scalar with the
    /// same text, since a string field decodes both to the same value, and an
    /// empty string equals null. Other values of different kinds are never
    /// equal, except integers and floats.
    pub fn semantic_eq(&self, other: &Node) -> bool {
        match (&self.content, &other.content) {
            (Content::Scalar { .. }, Content::Scalar { .. }) => scalar_eq(self, other),
            (Content::Sequence(left), Content::Sequence(right)) => {
                left.len() == right.len()
                    && left.iter().zip(right).all(|(l, r)| l.semantic_eq(r))
            }
            (Content::Mapping(left), Content::Mapping(right)) => {
                left.len() == right.len()
                    && left.iter().all(|entry| {
                        entry
                            .key
                            .scalar_text()
                            .and_then(|key| other.get(key))
                            .is_some_and(|value| entry.value.semantic_eq(value))
                    })
            }
            _ => false,
        }
    }
}

fn scalar_eq(left: &Node, right: &Node) -> bool {
    match (left.kind(), right.kind()) {
        (NodeKind::Integer, NodeKind::Integer) => match (left.as_i64(), right.as_i64()) {
            (Some(l), Some(r)) => l == r,
            _ => left.scalar_text() == right.scalar_text(),
        },
        (NodeKind::Integer | NodeKind::Float, NodeKind::Integer | NodeKind::Float) => {
            match (left.as_f64(), right.as_f64()) {
                (Some(l), Some(r)) => l == r,
                _ => left.scalar_text() == right.scalar_text(),
            }
        }
        (NodeKind::Boolean, NodeKind::Boolean) => match (left.as_bool(), right.as_bool()) {
            (Some(l), Some(r)) => l == r,
            _ => left.scalar_text() == right.scalar_text(),
        },
        (NodeKind::Null, NodeKind::Null) => true,
        (NodeKind::String, NodeKind::Null) | (NodeKind::Null, NodeKind::String) => {
            left.as_str().or(right.as_str()) == Some("")
        }
        (NodeKind::String, _) | (_, NodeKind::String) => left.scalar_text() == right.scalar_text(),
        _ => false,
    }
}

impl NodeEntry {
    pub fn new(key: Node, value: Node, entry_span: SourceInfo) -> Self {
        Self {
            key,
            value,
            entry_span,
        }
    }
}
