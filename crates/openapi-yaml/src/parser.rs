//! YAML parser that builds source-tracked node trees.

use crate::scalar::resolve_kind;
use crate::{Error, Node, NodeEntry, Result, SourceInfo};
use std::collections::HashMap;
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser, Tag};
use yaml_rust2::scanner::{Marker, TScalarStyle};

/// Parse YAML (or JSON) from a string, producing a [`Node`] tree.
///
/// This parses a single YAML document. If the input contains multiple documents,
/// only the first one will be parsed.
///
/// # Example
///
/// ```rust
/// use openapi_yaml::parse;
///
/// let root = parse("openapi: 3.0.1").unwrap();
/// assert!(root.is_mapping());
/// ```
///
/// # Errors
///
/// Returns an error if the YAML is invalid or the input holds no document.
pub fn parse(content: &str) -> Result<Node> {
    parse_impl(content, None)
}

/// Parse YAML from a string with an associated filename.
///
/// The filename is recorded in every node's source info.
///
/// ```rust
/// use openapi_yaml::parse_file;
///
/// let root = parse_file("openapi: 3.0.1", "burgershop.yaml").unwrap();
/// assert_eq!(root.source_info.file, Some("burgershop.yaml".into()));
/// ```
///
/// # Errors
///
/// Returns an error if the YAML is invalid or the input holds no document.
pub fn parse_file(content: &str, filename: &str) -> Result<Node> {
    parse_impl(content, Some(filename))
}

fn parse_impl(content: &str, filename: Option<&str>) -> Result<Node> {
    let mut parser = Parser::new_from_str(content);
    let mut builder = NodeBuilder::new(filename);

    parser
        .load(&mut builder, false) // false = single document only
        .map_err(Error::from)?;

    builder.result()
}

/// Receives parser events and assembles the node tree with an explicit stack,
/// so document depth never grows the call stack.
struct NodeBuilder {
    filename: Option<String>,

    /// Collections still being filled
    stack: Vec<BuildNode>,

    /// Completed anchored nodes, by anchor id
    anchors: HashMap<usize, Node>,

    root: Option<Node>,

    /// First structural problem seen; events after it are ignored
    error: Option<Error>,
}

enum BuildNode {
    Sequence {
        start_marker: Marker,
        anchor_id: usize,
        tag: Option<String>,
        items: Vec<Node>,
    },
    Mapping {
        start_marker: Marker,
        anchor_id: usize,
        tag: Option<String>,
        entries: Vec<(Node, Option<Node>)>,
    },
}

impl NodeBuilder {
    fn new(filename: Option<&str>) -> Self {
        Self {
            filename: filename.map(|s| s.to_string()),
            stack: Vec::new(),
            anchors: HashMap::new(),
            root: None,
            error: None,
        }
    }

    fn result(self) -> Result<Node> {
        if let Some(err) = self.error {
            return Err(err);
        }
        if !self.stack.is_empty() {
            return Err(Error::InvalidStructure {
                message: "unterminated collection".into(),
                location: None,
            });
        }
        self.root.ok_or_else(|| Error::ParseError {
            message: "No YAML document found".into(),
            location: None,
        })
    }

    fn fail(&mut self, message: &str, marker: &Marker) {
        if self.error.is_none() {
            self.error = Some(Error::InvalidStructure {
                message: message.into(),
                location: Some(self.make_source_info(marker, 0)),
            });
        }
    }

    fn push_complete(&mut self, node: Node, anchor_id: usize) {
        if anchor_id > 0 {
            self.anchors.insert(anchor_id, node.clone());
        }

        match self.stack.last_mut() {
            None => {
                // Only the first document is kept
                if self.root.is_none() {
                    self.root = Some(node);
                }
            }
            Some(BuildNode::Sequence { items, .. }) => items.push(node),
            Some(BuildNode::Mapping { entries, .. }) => match entries.last_mut() {
                Some((_, value @ None)) => *value = Some(node),
                _ => entries.push((node, None)),
            },
        }
    }

    fn make_source_info(&self, marker: &Marker, len: usize) -> SourceInfo {
        let info = SourceInfo::from_marker(marker, len);
        match &self.filename {
            Some(filename) => info.with_file(filename.clone()),
            None => info,
        }
    }

    fn finish_mapping(
        &self,
        start_marker: &Marker,
        end_marker: &Marker,
        entries: Vec<(Node, Option<Node>)>,
    ) -> std::result::Result<Node, &'static str> {
        let mut node_entries = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            let value = value.ok_or("mapping entry without value")?;

            // Entry span from key start to value end
            let entry_start = key.source_info.offset;
            let entry_len = value.source_info.end_offset().saturating_sub(entry_start);
            let entry_span = SourceInfo::new(
                self.filename.clone(),
                entry_start,
                key.source_info.line,
                key.source_info.col,
                entry_len,
            );
            node_entries.push(NodeEntry::new(key, value, entry_span));
        }

        let len = end_marker.index().saturating_sub(start_marker.index());
        Ok(Node::new_mapping(
            node_entries,
            self.make_source_info(start_marker, len),
        ))
    }
}

fn render_tag(tag: Option<&Tag>) -> Option<String> {
    tag.map(|tag| format!("{}{}", tag.handle, tag.suffix))
}

/// Source length of a scalar; quoted scalars include their quotes.
fn scalar_len(value: &str, style: TScalarStyle) -> usize {
    match style {
        TScalarStyle::SingleQuoted | TScalarStyle::DoubleQuoted => value.len() + 2,
        _ => value.len(),
    }
}

impl MarkedEventReceiver for NodeBuilder {
    fn on_event(&mut self, ev: Event, marker: Marker) {
        if self.error.is_some() {
            return;
        }

        match ev {
            Event::Nothing
            | Event::StreamStart
            | Event::StreamEnd
            | Event::DocumentStart
            | Event::DocumentEnd => {}

            Event::Scalar(value, style, anchor_id, tag) => {
                let source_info = self.make_source_info(&marker, scalar_len(&value, style));
                let kind = resolve_kind(&value, style, tag.as_ref());
                let node =
                    Node::new_scalar(kind, value, source_info).with_tag(render_tag(tag.as_ref()));
                self.push_complete(node, anchor_id);
            }

            Event::SequenceStart(anchor_id, tag) => {
                self.stack.push(BuildNode::Sequence {
                    start_marker: marker,
                    anchor_id,
                    tag: render_tag(tag.as_ref()),
                    items: Vec::new(),
                });
            }

            Event::SequenceEnd => match self.stack.pop() {
                Some(BuildNode::Sequence {
                    start_marker,
                    anchor_id,
                    tag,
                    items,
                }) => {
                    let len = marker.index().saturating_sub(start_marker.index());
                    let source_info = self.make_source_info(&start_marker, len);
                    let node = Node::new_sequence(items, source_info).with_tag(tag);
                    self.push_complete(node, anchor_id);
                }
                _ => self.fail("sequence end without matching start", &marker),
            },

            Event::MappingStart(anchor_id, tag) => {
                self.stack.push(BuildNode::Mapping {
                    start_marker: marker,
                    anchor_id,
                    tag: render_tag(tag.as_ref()),
                    entries: Vec::new(),
                });
            }

            Event::MappingEnd => match self.stack.pop() {
                Some(BuildNode::Mapping {
                    start_marker,
                    anchor_id,
                    tag,
                    entries,
                }) => match self.finish_mapping(&start_marker, &marker, entries) {
                    Ok(node) => self.push_complete(node.with_tag(tag), anchor_id),
                    Err(message) => self.fail(message, &marker),
                },
                _ => self.fail("mapping end without matching start", &marker),
            },

            Event::Alias(anchor_id) => {
                let node = match self.anchors.get(&anchor_id) {
                    Some(anchored) => anchored.clone(),
                    None => {
                        tracing::warn!(anchor_id, "alias to unknown anchor, using null");
                        Node::new_scalar(
                            crate::NodeKind::Null,
                            "",
                            self.make_source_info(&marker, 0),
                        )
                    }
                };
                self.push_complete(node, 0);
            }
        }
    }
}
