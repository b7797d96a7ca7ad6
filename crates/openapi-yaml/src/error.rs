//! Error types for YAML parsing with source locations.

use crate::SourceInfo;
use thiserror::Error;

/// Result type alias for openapi-yaml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a node tree.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// YAML syntax error reported by the scanner.
    #[error("Parse error: {message}{}", describe(location))]
    ParseError {
        message: String,
        location: Option<SourceInfo>,
    },

    /// The event stream did not describe a well-formed tree.
    #[error("Invalid YAML structure: {message}{}", describe(location))]
    InvalidStructure {
        message: String,
        location: Option<SourceInfo>,
    },
}

fn describe(location: &Option<SourceInfo>) -> String {
    match location {
        Some(info) => format!(" (line {}, column {})", info.line, info.col),
        None => String::new(),
    }
}

impl From<yaml_rust2::ScanError> for Error {
    fn from(err: yaml_rust2::ScanError) -> Self {
        let marker = err.marker();
        Error::ParseError {
            message: err.info().to_string(),
            location: Some(SourceInfo::from_marker(marker, 0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_location() {
        let err = Error::InvalidStructure {
            message: "mapping entry without value".into(),
            location: Some(SourceInfo::new(None, 4, 2, 3, 1)),
        };
        assert_eq!(
            err.to_string(),
            "Invalid YAML structure: mapping entry without value (line 2, column 3)"
        );
    }

    #[test]
    fn test_display_without_location() {
        let err = Error::ParseError {
            message: "No YAML document found".into(),
            location: None,
        };
        assert_eq!(err.to_string(), "Parse error: No YAML document found");
    }
}
