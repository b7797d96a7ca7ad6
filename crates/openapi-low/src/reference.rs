//! Carrier types pairing decoded values with the nodes they were read from.
//!
//! Every wrapper compares and hashes by its decoded value only. Two models
//! built from differently formatted (or differently positioned) sources are
//! therefore equal whenever their content is, which is what the diff engine's
//! equality short-circuit relies on.

use indexmap::IndexMap;
use openapi_yaml::{Node, SourceInfo};
use std::borrow::Borrow;
use std::hash::{Hash, Hasher};

/// A decoded mapping key and the key node it came from.
#[derive(Debug, Clone)]
pub struct KeyReference<'a, T> {
    pub value: T,
    pub key_node: &'a Node,
}

/// A decoded value and the value node it came from.
#[derive(Debug, Clone)]
pub struct ValueReference<'a, T> {
    pub value: T,
    pub value_node: &'a Node,
}

/// A value found under a label: the decoded value plus both the label's key
/// node and its value node.
#[derive(Debug, Clone)]
pub struct NodeReference<'a, T> {
    pub value: T,
    pub key_node: &'a Node,
    pub value_node: &'a Node,
}

/// A mapping of named values, in source order.
pub type FlatMap<'a, T> = IndexMap<KeyReference<'a, String>, ValueReference<'a, T>>;

/// A flat map wrapped one level deeper, keyed by the label it was found under.
pub type NestedMap<'a, T> = IndexMap<KeyReference<'a, String>, FlatMap<'a, T>>;

impl<'a, T> KeyReference<'a, T> {
    pub fn new(value: T, key_node: &'a Node) -> Self {
        Self { value, key_node }
    }

    pub fn location(&self) -> &'a SourceInfo {
        &self.key_node.source_info
    }
}

impl<T: PartialEq> PartialEq for KeyReference<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for KeyReference<'_, T> {}

impl<T: Hash> Hash for KeyReference<'_, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

// Hash and Eq above delegate to the String, so str lookups are consistent.
impl Borrow<str> for KeyReference<'_, String> {
    fn borrow(&self) -> &str {
        &self.value
    }
}

impl<'a, T> ValueReference<'a, T> {
    pub fn new(value: T, value_node: &'a Node) -> Self {
        Self { value, value_node }
    }

    pub fn location(&self) -> &'a SourceInfo {
        &self.value_node.source_info
    }
}

impl<T: PartialEq> PartialEq for ValueReference<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<'a, T> NodeReference<'a, T> {
    pub fn new(value: T, key_node: &'a Node, value_node: &'a Node) -> Self {
        Self {
            value,
            key_node,
            value_node,
        }
    }

    pub fn location(&self) -> &'a SourceInfo {
        &self.value_node.source_info
    }
}

impl<T: PartialEq> PartialEq for NodeReference<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
