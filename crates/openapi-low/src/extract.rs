//! Generic extraction of model objects from node-tree fragments.
//!
//! Every function here looks a label up under a parent mapping, builds the
//! value it finds with [`Buildable`], and wraps the result with the nodes it
//! came from. A missing label is never an error: it yields `None` or an empty
//! collection. Only a present value of the wrong shape fails.

use crate::build::{BuildContext, BuildOptions, Buildable};
use crate::error::{BuildResult, ModelError};
use crate::extensions::is_extension_key;
use crate::reference::{FlatMap, KeyReference, NestedMap, NodeReference, ValueReference};
use openapi_yaml::{Node, NodeKind};

/// Build a model from a root node with default options.
pub fn build_model<'a, T: Buildable<'a>>(root: &'a Node) -> BuildResult<T> {
    build_model_with_options(root, &BuildOptions::default())
}

/// Build a model from a root node with custom options.
pub fn build_model_with_options<'a, T: Buildable<'a>>(
    root: &'a Node,
    options: &BuildOptions,
) -> BuildResult<T> {
    build_from_node(root, &BuildContext::new(options))
}

/// Build a single object directly from `node`, one level below `ctx`.
///
/// Used when the node is already known, e.g. a nested object under a parent
/// field the caller has located itself.
pub fn build_from_node<'a, T: Buildable<'a>>(node: &'a Node, ctx: &BuildContext) -> BuildResult<T> {
    let ctx = ctx.descend(node)?;
    T::build(node, &ctx)
}

/// Build the value under `label` in `root`.
///
/// ```rust
/// use openapi_low::{extract_object, BuildContext};
///
/// let root = openapi_yaml::parse("tokenUrl: https://pb33f.io/token").unwrap();
/// let ctx = BuildContext::default();
///
/// let token = extract_object::<String>("tokenUrl", &root, &ctx).unwrap().unwrap();
/// assert_eq!(token.value, "https://pb33f.io/token");
/// assert!(extract_object::<String>("refreshUrl", &root, &ctx).unwrap().is_none());
/// ```
pub fn extract_object<'a, T: Buildable<'a>>(
    label: &str,
    root: &'a Node,
    ctx: &BuildContext,
) -> BuildResult<Option<NodeReference<'a, T>>> {
    let Some(entry) = root.get_entry(label) else {
        return Ok(None);
    };
    let value = build_from_node(&entry.value, ctx).map_err(|e| e.in_label(label))?;
    Ok(Some(NodeReference::new(value, &entry.key, &entry.value)))
}

/// Build every item of the sequence under `label`, in order.
///
/// Each item's reference carries the label's key node and the item's own
/// node. The label's key and value nodes are returned alongside; all three
/// are empty when the label is absent.
pub fn extract_array<'a, T: Buildable<'a>>(
    label: &str,
    root: &'a Node,
    ctx: &BuildContext,
) -> BuildResult<(Vec<NodeReference<'a, T>>, Option<&'a Node>, Option<&'a Node>)> {
    let Some(entry) = root.get_entry(label) else {
        return Ok((Vec::new(), None, None));
    };
    let items = match entry.value.kind() {
        NodeKind::Sequence => entry.value.as_sequence().unwrap_or_default(),
        NodeKind::Null => &[],
        other => {
            return Err(ModelError::construction(
                format!("expected a sequence, found {}", other.name()),
                &entry.value,
            )
            .in_label(label));
        }
    };

    let ctx = ctx.descend(&entry.value)?;
    let mut built = Vec::with_capacity(items.len());
    for item in items {
        let value = build_from_node(item, &ctx).map_err(|e| e.in_label(label))?;
        built.push(NodeReference::new(value, &entry.key, item));
    }
    tracing::trace!(label, items = built.len(), "extracted sequence");
    Ok((built, Some(&entry.key), Some(&entry.value)))
}

/// Build the mapping under `label` into a flat map of named values.
///
/// Vendor-extension keys are skipped; collect them with
/// [`crate::extract_extensions`] instead.
pub fn extract_map_flat<'a, T: Buildable<'a>>(
    label: &str,
    root: &'a Node,
    ctx: &BuildContext,
) -> BuildResult<Option<NodeReference<'a, FlatMap<'a, T>>>> {
    let Some(entry) = root.get_entry(label) else {
        return Ok(None);
    };
    let map = build_map_flat(&entry.value, ctx).map_err(|e| e.in_label(label))?;
    Ok(Some(NodeReference::new(map, &entry.key, &entry.value)))
}

/// Build the mapping under `label` into a flat map, wrapped in an outer map
/// keyed by the label itself so the label's provenance is kept too.
pub fn extract_map<'a, T: Buildable<'a>>(
    label: &str,
    root: &'a Node,
    ctx: &BuildContext,
) -> BuildResult<Option<NestedMap<'a, T>>> {
    let Some(entry) = root.get_entry(label) else {
        return Ok(None);
    };
    let inner = build_map_flat(&entry.value, ctx).map_err(|e| e.in_label(label))?;
    let mut outer = NestedMap::with_capacity(1);
    outer.insert(KeyReference::new(label.to_string(), &entry.key), inner);
    Ok(Some(outer))
}

/// Build every non-extension entry of the mapping `node`, in source order.
///
/// A key appearing more than once keeps its last occurrence, key node
/// included.
pub fn build_map_flat<'a, T: Buildable<'a>>(
    node: &'a Node,
    ctx: &BuildContext,
) -> BuildResult<FlatMap<'a, T>> {
    let entries = match node.kind() {
        NodeKind::Mapping => node.as_mapping().unwrap_or_default(),
        NodeKind::Null => &[],
        other => {
            return Err(ModelError::construction(
                format!("expected a mapping, found {}", other.name()),
                node,
            ));
        }
    };

    let ctx = ctx.descend(node)?;
    let mut map = FlatMap::with_capacity(entries.len());
    for entry in entries {
        let Some(key) = entry.key.scalar_text() else {
            return Err(ModelError::construction(
                "mapping keys must be scalars",
                &entry.key,
            ));
        };
        if is_extension_key(key) {
            tracing::trace!(key, "skipping extension key");
            continue;
        }
        let value = build_from_node(&entry.value, &ctx).map_err(|e| e.in_label(key))?;
        if map.shift_remove(key).is_some() {
            tracing::debug!(key, line = entry.key.source_info.line, "duplicate key, keeping last");
        }
        map.insert(
            KeyReference::new(key.to_string(), &entry.key),
            ValueReference::new(value, &entry.value),
        );
    }
    Ok(map)
}

/// Find a value in a flat map by its key.
pub fn find_item_in_map<'m, 'a, T>(
    item: &str,
    collection: &'m FlatMap<'a, T>,
) -> Option<&'m ValueReference<'a, T>> {
    collection.get(item)
}

/// Find a value by its key in any of the inner maps of a nested map.
pub fn find_item_in_collection<'m, 'a, T>(
    item: &str,
    collection: &'m NestedMap<'a, T>,
) -> Option<&'m ValueReference<'a, T>> {
    collection.values().find_map(|inner| inner.get(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use openapi_yaml::parse;

    #[test]
    fn test_extract_object_keeps_both_nodes() {
        let root = parse("url: https://pb33f.io").unwrap();
        let url = extract_object::<String>("url", &root, &BuildContext::default())
            .unwrap()
            .unwrap();

        assert_eq!(url.value, "https://pb33f.io");
        assert_eq!(url.key_node.scalar_text(), Some("url"));
        assert_eq!(url.value_node.scalar_text(), Some("https://pb33f.io"));
    }

    #[test]
    fn test_extract_object_shape_error_names_label() {
        let root = parse("url:\n  nested: value").unwrap();
        let err = extract_object::<String>("url", &root, &BuildContext::default()).unwrap_err();
        match err {
            ModelError::Construction { label, .. } => assert_eq!(label, "url"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_extract_array_preserves_order() {
        let root = parse("enum: [https, http, wss]").unwrap();
        let (items, key, value) =
            extract_array::<String>("enum", &root, &BuildContext::default()).unwrap();

        let values: Vec<_> = items.iter().map(|i| i.value.as_str()).collect();
        assert_eq!(values, vec!["https", "http", "wss"]);
        assert_eq!(key.unwrap().scalar_text(), Some("enum"));
        assert!(value.unwrap().is_sequence());
        assert!(std::ptr::eq(items[0].key_node, key.unwrap()));
    }

    #[test]
    fn test_extract_array_absent_or_wrong_shape() {
        let root = parse("enum: https").unwrap();
        let ctx = BuildContext::default();

        let (items, key, value) = extract_array::<String>("missing", &root, &ctx).unwrap();
        assert!(items.is_empty() && key.is_none() && value.is_none());
        assert!(extract_array::<String>("enum", &root, &ctx).is_err());
    }

    #[test]
    fn test_flat_map_skips_extensions() {
        let root = parse(
            r#"
variables:
  x-skip:
    default: nope
  kept:
    default: yes
"#,
        )
        .unwrap();
        let map = extract_map_flat::<String>("variables", &root, &BuildContext::default());
        // values are mappings, so a String map must fail on "kept" only
        assert!(matches!(map, Err(ModelError::Construction { ref label, .. }) if label == "kept"));

        let root = parse("scopes:\n  x-skip: {a: b}\n  kept: read access\n").unwrap();
        let map = extract_map_flat::<String>("scopes", &root, &BuildContext::default())
            .unwrap()
            .unwrap();
        let keys: Vec<_> = map.value.keys().map(|k| k.value.as_str()).collect();
        assert_eq!(keys, vec!["kept"]);
        assert_eq!(map.key_node.scalar_text(), Some("scopes"));
    }

    #[test]
    fn test_flat_map_absent_label() {
        let root = parse("other: 1").unwrap();
        let map = extract_map_flat::<String>("scopes", &root, &BuildContext::default()).unwrap();
        assert!(map.is_none());
    }

    #[test]
    fn test_flat_map_duplicate_key_last_wins() {
        let root = parse("scopes:\n  read: first\n  write: w\n  read: second\n").unwrap();
        let map = extract_map_flat::<String>("scopes", &root, &BuildContext::default())
            .unwrap()
            .unwrap()
            .value;

        assert_eq!(map.len(), 2);
        assert_eq!(map["read"].value, "second");
        let (key, _) = map.get_key_value("read").unwrap();
        assert_eq!(key.key_node.source_info.line, map["read"].value_node.source_info.line);
    }

    #[test]
    fn test_nested_map_keyed_by_label() {
        let root = parse("securitySchemes:\n  oauth: a\n  apiKey: b\n").unwrap();
        let nested = extract_map::<String>("securitySchemes", &root, &BuildContext::default())
            .unwrap()
            .unwrap();

        assert_eq!(nested.len(), 1);
        let (outer, inner) = nested.get_index(0).unwrap();
        assert_eq!(outer.value, "securitySchemes");
        assert_eq!(outer.key_node.scalar_text(), Some("securitySchemes"));
        assert_eq!(inner.len(), 2);
        assert_eq!(find_item_in_collection("apiKey", &nested).unwrap().value, "b");
        assert!(find_item_in_collection("basic", &nested).is_none());
        assert_eq!(find_item_in_map("oauth", inner).unwrap().value, "a");
    }

    #[test]
    fn test_nesting_ceiling() {
        let root = parse("a: {b: {c: d}}").unwrap();
        let options = BuildOptions { max_depth: 1 };
        let ctx = BuildContext::new(&options);
        let result = extract_map_flat::<String>("a", &root, &ctx);
        assert!(matches!(result, Err(ModelError::NestingTooDeep { max_depth: 1, .. })));
    }
}
