//! Vendor extensions: `x-` prefixed keys outside the fixed schema.
//!
//! Extensions never fail a build. Whatever is found under an extension key is
//! decoded into an [`ExtensionValue`] on a best-effort basis, and typed
//! extraction skips those keys entirely.

use crate::build::BuildContext;
use crate::reference::{KeyReference, ValueReference};
use indexmap::IndexMap;
use openapi_yaml::{Node, NodeKind};
use serde::Serialize;

/// Keys starting with this prefix (case-insensitively) are vendor extensions.
pub const EXTENSION_PREFIX: &str = "x-";

/// Extensions captured from one mapping, in source order.
pub type Extensions<'a> = IndexMap<KeyReference<'a, String>, ValueReference<'a, ExtensionValue>>;

/// A dynamically typed extension value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExtensionValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Sequence(Vec<ExtensionValue>),
    Object(IndexMap<String, ExtensionValue>),
    Null,
}

impl ExtensionValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ExtensionValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ExtensionValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ExtensionValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ExtensionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[ExtensionValue]> {
        match self {
            ExtensionValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, ExtensionValue>> {
        match self {
            ExtensionValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Name of the variant, for reports.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ExtensionValue::String(_) => "string",
            ExtensionValue::Integer(_) => "integer",
            ExtensionValue::Float(_) => "float",
            ExtensionValue::Bool(_) => "boolean",
            ExtensionValue::Sequence(_) => "sequence",
            ExtensionValue::Object(_) => "object",
            ExtensionValue::Null => "null",
        }
    }
}

/// Check whether a mapping key names a vendor extension.
pub fn is_extension_key(key: &str) -> bool {
    key.get(..EXTENSION_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(EXTENSION_PREFIX))
}

/// Collect every vendor extension directly under `node`.
///
/// Returns an empty map when `node` is not a mapping. A key repeated within
/// the mapping keeps its last occurrence.
pub fn extract_extensions<'a>(node: &'a Node, ctx: &BuildContext) -> Extensions<'a> {
    let mut extensions = Extensions::new();
    let Some(entries) = node.as_mapping() else {
        return extensions;
    };

    for entry in entries {
        let Some(key) = entry.key.scalar_text() else {
            continue;
        };
        if !is_extension_key(key) {
            continue;
        }
        let value = decode_extension(&entry.value, ctx);
        extensions.shift_remove(key);
        extensions.insert(
            KeyReference::new(key.to_string(), &entry.key),
            ValueReference::new(value, &entry.value),
        );
    }
    extensions
}

/// Decode a node into an extension value.
///
/// Kinds are probed in the order mapping, string, float, integer, boolean,
/// sequence. Malformed numbers and booleans decode as zero values, and values
/// nested past the depth ceiling are truncated to null.
fn decode_extension(node: &Node, ctx: &BuildContext) -> ExtensionValue {
    let Ok(ctx) = ctx.descend(node) else {
        tracing::warn!(
            line = node.source_info.line,
            max_depth = ctx.max_depth(),
            "extension value nested too deep, truncating"
        );
        return ExtensionValue::Null;
    };

    match node.kind() {
        NodeKind::Mapping => {
            let entries = node.as_mapping().unwrap_or_default();
            let object = entries
                .iter()
                .filter_map(|entry| {
                    let key = entry.key.scalar_text()?;
                    Some((key.to_string(), decode_extension(&entry.value, &ctx)))
                })
                .collect();
            ExtensionValue::Object(object)
        }
        NodeKind::String => ExtensionValue::String(node.scalar_text().unwrap_or_default().into()),
        NodeKind::Float => ExtensionValue::Float(node.as_f64().unwrap_or_default()),
        NodeKind::Integer => ExtensionValue::Integer(node.as_i64().unwrap_or_default()),
        NodeKind::Boolean => ExtensionValue::Bool(node.as_bool().unwrap_or_default()),
        NodeKind::Sequence => {
            let items = node.as_sequence().unwrap_or_default();
            ExtensionValue::Sequence(
                items
                    .iter()
                    .map(|item| decode_extension(item, &ctx))
                    .collect(),
            )
        }
        NodeKind::Null => ExtensionValue::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::BuildOptions;
    use openapi_yaml::parse;

    #[test]
    fn test_extension_key_detection() {
        assert!(is_extension_key("x-internal"));
        assert!(is_extension_key("X-Rate-Limit"));
        assert!(!is_extension_key("x"));
        assert!(!is_extension_key("tokenUrl"));
        assert!(!is_extension_key("ax-b"));
    }

    #[test]
    fn test_scalar_kinds() {
        let root = parse("x-str: a\nx-int: 1\nx-float: 1.5\nx-bool: true\nname: kept").unwrap();
        let ext = extract_extensions(&root, &BuildContext::default());

        assert_eq!(ext.len(), 4);
        assert_eq!(ext["x-str"].value, ExtensionValue::String("a".into()));
        assert_eq!(ext["x-int"].value, ExtensionValue::Integer(1));
        assert_eq!(ext["x-float"].value, ExtensionValue::Float(1.5));
        assert_eq!(ext["x-bool"].value, ExtensionValue::Bool(true));
        assert!(!ext.contains_key("name"));
    }

    #[test]
    fn test_malformed_scalars_decode_as_zero() {
        let root =
            parse("x-int: !!int abc\nx-float: !!float nope\nx-bool: !!bool maybe").unwrap();
        let ext = extract_extensions(&root, &BuildContext::default());

        assert_eq!(ext["x-int"].value, ExtensionValue::Integer(0));
        assert_eq!(ext["x-float"].value, ExtensionValue::Float(0.0));
        assert_eq!(ext["x-bool"].value, ExtensionValue::Bool(false));
    }

    #[test]
    fn test_nested_values() {
        let root = parse(
            r#"
x-internal-arr: [one, two]
x-something-else:
  ok:
    - what: now?
"#,
        )
        .unwrap();
        let ext = extract_extensions(&root, &BuildContext::default());

        let arr = ext["x-internal-arr"].value.as_sequence().unwrap();
        assert_eq!(arr[0].as_str(), Some("one"));

        let what = ext["x-something-else"].value.as_object().unwrap()["ok"]
            .as_sequence()
            .unwrap()[0]
            .as_object()
            .unwrap()["what"]
            .as_str();
        assert_eq!(what, Some("now?"));
    }

    #[test]
    fn test_deep_values_are_truncated() {
        let root = parse("x-deep: {a: {b: {c: 1}}}").unwrap();
        let ctx = BuildContext::new(&BuildOptions { max_depth: 2 });
        let ext = extract_extensions(&root, &ctx);

        let a = ext["x-deep"].value.as_object().unwrap()["a"].as_object().unwrap();
        assert_eq!(a["b"], ExtensionValue::Null);
    }

    #[test]
    fn test_provenance_and_serialization() {
        let root = parse("x-limits: {rate: 10, burst: [1, 2.5]}").unwrap();
        let ext = extract_extensions(&root, &BuildContext::default());

        let limits = &ext["x-limits"];
        assert!(limits.value_node.is_mapping());
        let json = serde_json::to_string(&limits.value).unwrap();
        assert_eq!(json, r#"{"rate":10,"burst":[1,2.5]}"#);
    }
}
