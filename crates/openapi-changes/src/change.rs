//! Leaf changes and the totals every change-set exposes.

use indexmap::IndexMap;
use openapi_low::NodeReference;
use openapi_yaml::{Node, SourceInfo};
use serde::Serialize;
use std::fmt;

/// What happened to a property between the left and right models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Added,
    Removed,
    Modified,
}

impl ChangeType {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeType::Added => "added",
            ChangeType::Removed => "removed",
            ChangeType::Modified => "modified",
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single classified difference.
///
/// `left_node` is absent for additions and `right_node` for removals.
/// `original` and `new` hold the scalar text of those nodes, or nothing when
/// the node is an object or sequence.
#[derive(Debug, Clone)]
pub struct Change<'a> {
    pub change_type: ChangeType,
    /// Label of the property that changed, e.g. `tokenUrl` or `scopes`.
    pub property: String,
    /// Entry name when the property is a keyed collection.
    pub key: Option<String>,
    pub original: Option<String>,
    pub new: Option<String>,
    pub breaking: bool,
    pub left_node: Option<&'a Node>,
    pub right_node: Option<&'a Node>,
}

impl<'a> Change<'a> {
    pub fn new(
        change_type: ChangeType,
        property: impl Into<String>,
        left_node: Option<&'a Node>,
        right_node: Option<&'a Node>,
        breaking: bool,
    ) -> Self {
        Self {
            change_type,
            property: property.into(),
            key: None,
            original: left_node.and_then(Node::scalar_text).map(str::to_string),
            new: right_node.and_then(Node::scalar_text).map(str::to_string),
            breaking,
            left_node,
            right_node,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn original_location(&self) -> Option<&'a SourceInfo> {
        self.left_node.map(|node| &node.source_info)
    }

    pub fn new_location(&self) -> Option<&'a SourceInfo> {
        self.right_node.map(|node| &node.source_info)
    }
}

impl fmt::Display for Change<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.change_type, self.property)?;
        if let Some(key) = &self.key {
            write!(f, "[{key}]")?;
        }
        match (self.change_type, &self.original, &self.new) {
            (ChangeType::Modified, Some(original), Some(new)) => {
                write!(f, ": {original:?} -> {new:?}")?
            }
            (ChangeType::Removed, Some(original), _) => write!(f, ": {original:?}")?,
            (ChangeType::Added, _, Some(new)) => write!(f, ": {new:?}")?,
            _ => {}
        }
        let location = match self.change_type {
            ChangeType::Removed => self.original_location(),
            _ => self.new_location(),
        };
        if let Some(location) = location {
            write!(f, " (line {}, column {})", location.line, location.col)?;
        }
        if self.breaking {
            f.write_str(" [breaking]")?;
        }
        Ok(())
    }
}

/// Totals and a flattened view over a change-set and everything nested in it.
pub trait Changes<'a> {
    /// Every leaf change, nested and extension changes included.
    fn total_changes(&self) -> usize;

    /// Breaking leaf changes. Extension changes never count.
    fn total_breaking_changes(&self) -> usize;

    fn all_changes(&self) -> Vec<&Change<'a>>;
}

/// The leaf changes found directly on one object.
#[derive(Debug, Clone, Default)]
pub struct PropertyChanges<'a> {
    pub changes: Vec<Change<'a>>,
}

impl<'a> PropertyChanges<'a> {
    pub fn new(changes: Vec<Change<'a>>) -> Self {
        Self { changes }
    }
}

impl<'a> Changes<'a> for PropertyChanges<'a> {
    fn total_changes(&self) -> usize {
        self.changes.len()
    }

    fn total_breaking_changes(&self) -> usize {
        self.changes.iter().filter(|change| change.breaking).count()
    }

    fn all_changes(&self) -> Vec<&Change<'a>> {
        self.changes.iter().collect()
    }
}

impl<'a, C: Changes<'a>> Changes<'a> for Option<C> {
    fn total_changes(&self) -> usize {
        self.as_ref().map_or(0, C::total_changes)
    }

    fn total_breaking_changes(&self) -> usize {
        self.as_ref().map_or(0, C::total_breaking_changes)
    }

    fn all_changes(&self) -> Vec<&Change<'a>> {
        self.as_ref().map(C::all_changes).unwrap_or_default()
    }
}

/// Nested change-sets keyed by the collection entry they describe.
impl<'a, C: Changes<'a>> Changes<'a> for IndexMap<String, C> {
    fn total_changes(&self) -> usize {
        self.values().map(C::total_changes).sum()
    }

    fn total_breaking_changes(&self) -> usize {
        self.values().map(C::total_breaking_changes).sum()
    }

    fn all_changes(&self) -> Vec<&Change<'a>> {
        self.values().flat_map(C::all_changes).collect()
    }
}

/// One scalar property to compare, with its fixed breaking policy.
#[derive(Debug, Clone, Copy)]
pub struct PropertyCheck<'a> {
    pub left: Option<&'a Node>,
    pub right: Option<&'a Node>,
    pub label: &'static str,
    pub breaking: bool,
}

impl<'a> PropertyCheck<'a> {
    /// A check over the value nodes of an optional field on both sides.
    pub fn new<T>(
        label: &'static str,
        left: &Option<NodeReference<'a, T>>,
        right: &Option<NodeReference<'a, T>>,
        breaking: bool,
    ) -> Self {
        Self {
            left: left.as_ref().map(|r| r.value_node),
            right: right.as_ref().map(|r| r.value_node),
            label,
            breaking,
        }
    }
}

/// Run every check, appending a change for each property that differs.
///
/// Values are compared semantically, so `1.0` and `1` or a quoted and a plain
/// spelling of the same string are not changes.
pub fn check_properties<'a>(checks: &[PropertyCheck<'a>], changes: &mut Vec<Change<'a>>) {
    for check in checks {
        match (check.left, check.right) {
            (Some(left), Some(right)) if !left.semantic_eq(right) => create_change(
                changes,
                ChangeType::Modified,
                check.label,
                Some(left),
                Some(right),
                check.breaking,
            ),
            (Some(left), None) => create_change(
                changes,
                ChangeType::Removed,
                check.label,
                Some(left),
                None,
                check.breaking,
            ),
            (None, Some(right)) => create_change(
                changes,
                ChangeType::Added,
                check.label,
                None,
                Some(right),
                check.breaking,
            ),
            _ => {}
        }
    }
}

pub fn create_change<'a>(
    changes: &mut Vec<Change<'a>>,
    change_type: ChangeType,
    property: &str,
    left: Option<&'a Node>,
    right: Option<&'a Node>,
    breaking: bool,
) {
    tracing::trace!(%change_type, property, breaking, "change");
    changes.push(Change::new(change_type, property, left, right, breaking));
}

/// Keep a change-set only if its walk found something.
pub(crate) fn non_empty<'a, C: Changes<'a>>(changes: C) -> Option<C> {
    (changes.total_changes() > 0).then_some(changes)
}

/// Implements [`Changes`] for a change-set with `property_changes`,
/// `extension_changes` and the listed nested change-set fields.
macro_rules! impl_changes {
    ($ty:ident { $($nested:ident),* $(,)? }) => {
        impl<'a> $crate::change::Changes<'a> for $ty<'a> {
            fn total_changes(&self) -> usize {
                $crate::change::Changes::total_changes(&self.property_changes)
                    $(+ $crate::change::Changes::total_changes(&self.$nested))*
                    + $crate::change::Changes::total_changes(&self.extension_changes)
            }

            fn total_breaking_changes(&self) -> usize {
                $crate::change::Changes::total_breaking_changes(&self.property_changes)
                    $(+ $crate::change::Changes::total_breaking_changes(&self.$nested))*
            }

            fn all_changes(&self) -> Vec<&$crate::change::Change<'a>> {
                let mut all = $crate::change::Changes::all_changes(&self.property_changes);
                $(all.extend($crate::change::Changes::all_changes(&self.$nested));)*
                all.extend($crate::change::Changes::all_changes(&self.extension_changes));
                all
            }
        }
    };
}

pub(crate) use impl_changes;

#[cfg(test)]
mod tests {
    use super::*;
    use openapi_yaml::parse;
    use std::collections::HashSet;

    #[test]
    fn test_display_modified() {
        let left = parse("tokenUrl: https://a/token").unwrap();
        let right = parse("tokenUrl: https://b/token").unwrap();
        let change = Change::new(
            ChangeType::Modified,
            "tokenUrl",
            left.get("tokenUrl"),
            right.get("tokenUrl"),
            true,
        );

        insta::assert_snapshot!(
            change.to_string(),
            @r#"modified tokenUrl: "https://a/token" -> "https://b/token" (line 1, column 11) [breaking]"#
        );
    }

    #[test]
    fn test_display_keyed_addition() {
        let right = parse("write: write access").unwrap();
        let change = Change::new(ChangeType::Added, "scopes", None, right.get("write"), false)
            .with_key("write");

        insta::assert_snapshot!(
            change.to_string(),
            @r#"added scopes[write]: "write access" (line 1, column 8)"#
        );
        assert!(change.original_location().is_none());
        assert_eq!(change.new_location().unwrap().col, 8);
    }

    #[test]
    fn test_display_object_removal() {
        let left = parse("implicit:\n  authorizationUrl: https://a/auth\n").unwrap();
        let change = Change::new(ChangeType::Removed, "implicit", left.get("implicit"), None, true);

        assert_eq!(change.original, None);
        insta::assert_snapshot!(change.to_string(), @"removed implicit (line 2, column 3) [breaking]");
    }

    #[test]
    fn test_check_properties_semantic_comparison() {
        let left = parse("a: 1\nb: '1.0'\nc: old\nd: gone\nf: ''\n").unwrap();
        let right = parse("a: 1.0\nb: 1.0\nc: new\ne: fresh\nf: ~\n").unwrap();
        let check = |label: &'static str, breaking| PropertyCheck {
            left: left.get(label),
            right: right.get(label),
            label,
            breaking,
        };

        let mut changes = Vec::new();
        check_properties(
            &[
                check("a", true),
                check("b", true),
                check("c", true),
                check("d", true),
                check("e", false),
                check("f", true),
            ],
            &mut changes,
        );

        let summary: HashSet<_> = changes
            .iter()
            .map(|c| (c.change_type, c.property.as_str(), c.breaking))
            .collect();
        assert_eq!(
            summary,
            HashSet::from([
                (ChangeType::Modified, "c", true),
                (ChangeType::Removed, "d", true),
                (ChangeType::Added, "e", false),
            ])
        );
        let modified = changes.iter().find(|c| c.property == "c").unwrap();
        assert_eq!(modified.original.as_deref(), Some("old"));
        assert_eq!(modified.new.as_deref(), Some("new"));
    }

    #[test]
    fn test_totals() {
        let root = parse("a: 1").unwrap();
        let node = root.get("a");
        let changes = PropertyChanges::new(vec![
            Change::new(ChangeType::Added, "a", None, node, false),
            Change::new(ChangeType::Removed, "a", node, None, true),
        ]);
        assert_eq!(changes.total_changes(), 2);
        assert_eq!(changes.total_breaking_changes(), 1);

        let absent: Option<PropertyChanges<'_>> = None;
        assert_eq!(absent.total_changes(), 0);
        assert!(absent.all_changes().is_empty());
        assert!(non_empty(PropertyChanges::default()).is_none());
    }

    #[test]
    fn test_change_type_serializes_lowercase() {
        let json = serde_json::to_string(&[ChangeType::Added, ChangeType::Modified]).unwrap();
        assert_eq!(json, r#"["added","modified"]"#);
    }
}
