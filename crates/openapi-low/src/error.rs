//! Errors raised while building model objects.

use openapi_yaml::{Node, SourceInfo};
use thiserror::Error;

/// Result type for model building operations.
pub type BuildResult<T> = Result<T, ModelError>;

/// Errors that can occur while populating a model object from a node.
///
/// Absence of an optional label is never an error; these are raised only when
/// something *present* cannot be decoded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A present label's value cannot be decoded into the required shape.
    #[error("Cannot build{}: {reason} (line {}, column {})", describe_label(label), location.line, location.col)]
    Construction {
        /// Label whose value failed; empty until an enclosing extraction names it
        label: String,
        reason: String,
        location: SourceInfo,
    },

    /// The document nests deeper than the configured ceiling.
    #[error("Document nesting too deep (max depth: {max_depth}) at line {}, column {}", location.line, location.col)]
    NestingTooDeep {
        max_depth: usize,
        location: SourceInfo,
    },
}

fn describe_label(label: &str) -> String {
    if label.is_empty() {
        String::new()
    } else {
        format!(" '{}'", label)
    }
}

impl ModelError {
    /// A construction error for `node`, not yet attributed to a label.
    pub fn construction(reason: impl Into<String>, node: &Node) -> Self {
        ModelError::Construction {
            label: String::new(),
            reason: reason.into(),
            location: node.source_info.clone(),
        }
    }

    /// Attribute the error to `label` unless a deeper label already claimed it.
    pub fn in_label(self, label: &str) -> Self {
        match self {
            ModelError::Construction {
                label: existing,
                reason,
                location,
            } if existing.is_empty() => ModelError::Construction {
                label: label.to_string(),
                reason,
                location,
            },
            other => other,
        }
    }

    /// Where in the source the error was detected.
    pub fn location(&self) -> &SourceInfo {
        match self {
            ModelError::Construction { location, .. } => location,
            ModelError::NestingTooDeep { location, .. } => location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openapi_yaml::NodeKind;

    #[test]
    fn test_innermost_label_is_kept() {
        let node = Node::new_scalar(NodeKind::String, "oops", SourceInfo::new(None, 0, 3, 7, 4));
        let err = ModelError::construction("expected a mapping, found string", &node)
            .in_label("implicit")
            .in_label("flows");

        match &err {
            ModelError::Construction { label, .. } => assert_eq!(label, "implicit"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "Cannot build 'implicit': expected a mapping, found string (line 3, column 7)"
        );
        assert_eq!(err.location().line, 3);
    }
}
