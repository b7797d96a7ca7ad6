//! Scalar resolution following the YAML 1.2 core schema.

use crate::NodeKind;
use yaml_rust2::parser::Tag;
use yaml_rust2::scanner::TScalarStyle;

const CORE_TAG_PREFIX: &str = "tag:yaml.org,2002:";

/// Resolve the kind of a scalar from its text, presentation style and tag.
///
/// Explicit core tags win even when the text does not parse; quoted and
/// block scalars are always strings.
pub(crate) fn resolve_kind(text: &str, style: TScalarStyle, tag: Option<&Tag>) -> NodeKind {
    if let Some(kind) = tag.and_then(core_tag_kind) {
        return kind;
    }
    if style != TScalarStyle::Plain {
        return NodeKind::String;
    }
    if parse_int(text).is_some() {
        NodeKind::Integer
    } else if parse_float(text).is_some() {
        NodeKind::Float
    } else if parse_bool(text).is_some() {
        NodeKind::Boolean
    } else if is_null(text) {
        NodeKind::Null
    } else {
        NodeKind::String
    }
}

fn core_tag_kind(tag: &Tag) -> Option<NodeKind> {
    if tag.handle != "!!" && tag.handle != CORE_TAG_PREFIX {
        return None;
    }
    match tag.suffix.as_str() {
        "str" => Some(NodeKind::String),
        "int" => Some(NodeKind::Integer),
        "float" => Some(NodeKind::Float),
        "bool" => Some(NodeKind::Boolean),
        "null" => Some(NodeKind::Null),
        _ => None,
    }
}

pub(crate) fn parse_int(text: &str) -> Option<i64> {
    if let Some(hex) = text.strip_prefix("0x") {
        return i64::from_str_radix(hex, 16).ok();
    }
    if let Some(octal) = text.strip_prefix("0o") {
        return i64::from_str_radix(octal, 8).ok();
    }
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<i64>().ok()
}

pub(crate) fn parse_float(text: &str) -> Option<f64> {
    let unsigned = text.strip_prefix(['-', '+']).unwrap_or(text);
    match unsigned {
        ".inf" | ".Inf" | ".INF" => {
            return Some(if text.starts_with('-') {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            });
        }
        ".nan" | ".NaN" | ".NAN" if unsigned.len() == text.len() => return Some(f64::NAN),
        _ => {}
    }
    // Rust's parser also accepts "inf" and "NaN", which YAML treats as strings.
    let numeric = unsigned
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'-' | b'+'));
    if !numeric || !unsigned.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<f64>().ok()
}

pub(crate) fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "true" | "True" | "TRUE" => Some(true),
        "false" | "False" | "FALSE" => Some(false),
        _ => None,
    }
}

fn is_null(text: &str) -> bool {
    matches!(text, "" | "~" | "null" | "Null" | "NULL")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(text: &str) -> NodeKind {
        resolve_kind(text, TScalarStyle::Plain, None)
    }

    #[test]
    fn test_plain_resolution() {
        assert_eq!(plain("42"), NodeKind::Integer);
        assert_eq!(plain("-7"), NodeKind::Integer);
        assert_eq!(plain("0x1F"), NodeKind::Integer);
        assert_eq!(plain("1.5"), NodeKind::Float);
        assert_eq!(plain("1e3"), NodeKind::Float);
        assert_eq!(plain("-.inf"), NodeKind::Float);
        assert_eq!(plain("true"), NodeKind::Boolean);
        assert_eq!(plain("FALSE"), NodeKind::Boolean);
        assert_eq!(plain("~"), NodeKind::Null);
        assert_eq!(plain(""), NodeKind::Null);
        assert_eq!(plain("3.0.1"), NodeKind::String);
        assert_eq!(plain("inf"), NodeKind::String);
        assert_eq!(plain("yes"), NodeKind::String);
        assert_eq!(plain("https://pb33f.io"), NodeKind::String);
    }

    #[test]
    fn test_quoted_scalars_are_strings() {
        assert_eq!(
            resolve_kind("1", TScalarStyle::DoubleQuoted, None),
            NodeKind::String
        );
        assert_eq!(
            resolve_kind("true", TScalarStyle::SingleQuoted, None),
            NodeKind::String
        );
    }

    #[test]
    fn test_core_tags_force_kind() {
        let tag = Tag {
            handle: "!!".into(),
            suffix: "int".into(),
        };
        assert_eq!(
            resolve_kind("not-a-number", TScalarStyle::Plain, Some(&tag)),
            NodeKind::Integer
        );

        let tag = Tag {
            handle: CORE_TAG_PREFIX.into(),
            suffix: "str".into(),
        };
        assert_eq!(resolve_kind("12", TScalarStyle::Plain, Some(&tag)), NodeKind::String);
    }

    #[test]
    fn test_numeric_parsing() {
        assert_eq!(parse_int("0o17"), Some(15));
        assert_eq!(parse_int("+3"), Some(3));
        assert_eq!(parse_int("1.0"), None);
        assert_eq!(parse_float("2.5"), Some(2.5));
        assert!(parse_float(".nan").is_some_and(f64::is_nan));
        assert_eq!(parse_float("abc"), None);
        assert_eq!(parse_float("-"), None);
    }
}
