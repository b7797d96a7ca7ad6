//! Source location information for YAML nodes.

use serde::{Deserialize, Serialize};

/// Source location information for a YAML node.
///
/// Tracks the position of a node in the original source text so that
/// extracted values and reported changes can point back to where they came
/// from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Optional filename or source identifier
    pub file: Option<String>,

    /// Byte offset from start of source (0-based)
    pub offset: usize,

    /// Line number (1-based)
    pub line: usize,

    /// Column number (1-based, in characters not bytes)
    pub col: usize,

    /// Length in bytes
    pub len: usize,
}

impl SourceInfo {
    /// Create a new SourceInfo with all fields specified.
    pub fn new(file: Option<String>, offset: usize, line: usize, col: usize, len: usize) -> Self {
        Self {
            file,
            offset,
            line,
            col,
            len,
        }
    }

    /// Create a SourceInfo from a yaml-rust2 marker.
    ///
    /// The marker provides the starting position. Length must be computed
    /// separately based on the content.
    pub fn from_marker(marker: &yaml_rust2::scanner::Marker, len: usize) -> Self {
        Self {
            file: None,
            offset: marker.index(),
            // yaml-rust2 lines are already 1-based, columns are 0-based
            line: marker.line(),
            col: marker.col() + 1,
            len,
        }
    }

    /// Set the filename for this source location.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Get the end offset (exclusive) of this location.
    pub fn end_offset(&self) -> usize {
        self.offset + self.len
    }
}

impl Default for SourceInfo {
    fn default() -> Self {
        Self {
            file: None,
            offset: 0,
            line: 1,
            col: 1,
            len: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_info_creation() {
        let info = SourceInfo::new(Some("petstore.yaml".into()), 10, 2, 5, 8);
        assert_eq!(info.file, Some("petstore.yaml".into()));
        assert_eq!(info.offset, 10);
        assert_eq!(info.line, 2);
        assert_eq!(info.col, 5);
        assert_eq!(info.len, 8);
        assert_eq!(info.end_offset(), 18);
    }

    #[test]
    fn test_default_and_with_file() {
        let info = SourceInfo::default();
        assert_eq!(info.file, None);
        assert_eq!((info.line, info.col), (1, 1));

        let named = info.with_file("burgershop.openapi.yaml");
        assert_eq!(named.file.as_deref(), Some("burgershop.openapi.yaml"));
    }

    #[test]
    fn test_serialization() {
        let info = SourceInfo::new(None, 3, 1, 4, 5);
        let json = serde_json::to_string(&info).unwrap();
        let back: SourceInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(info, back);
    }
}
