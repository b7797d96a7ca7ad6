//! The buildable capability and the context threaded through a build.

use crate::error::{BuildResult, ModelError};
use openapi_yaml::{Node, NodeKind};

/// Options for building a model.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Maximum nesting depth (default: 256).
    ///
    /// Building fails with `ModelError::NestingTooDeep` if the document nests
    /// model objects, maps or sequences deeper than this.
    pub max_depth: usize,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

/// Tracks how deep a build has descended.
#[derive(Debug, Clone, Copy)]
pub struct BuildContext {
    depth: usize,
    max_depth: usize,
}

impl BuildContext {
    pub fn new(options: &BuildOptions) -> Self {
        Self {
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// The context for building `node` one level below this one.
    pub fn descend(&self, node: &Node) -> BuildResult<BuildContext> {
        if self.depth >= self.max_depth {
            return Err(ModelError::NestingTooDeep {
                max_depth: self.max_depth,
                location: node.source_info.clone(),
            });
        }
        Ok(BuildContext {
            depth: self.depth + 1,
            max_depth: self.max_depth,
        })
    }
}

impl Default for BuildContext {
    fn default() -> Self {
        Self::new(&BuildOptions::default())
    }
}

/// A type that can populate itself from a node.
///
/// Implemented by every model object and by the scalar leaf types, so the
/// extraction functions in [`crate::extract`] handle scalar fields, maps of
/// scalars and nested objects alike. `ctx` is already positioned at `node`;
/// implementations pass it unchanged to the extraction functions, which
/// descend on their own.
pub trait Buildable<'a>: Sized {
    fn build(node: &'a Node, ctx: &BuildContext) -> BuildResult<Self>;
}

/// Check that `node` can hold an object's fields.
///
/// A null value (`contact:` with nothing after it) builds an object with
/// every field absent.
pub fn require_mapping(node: &Node) -> BuildResult<()> {
    match node.kind() {
        NodeKind::Mapping | NodeKind::Null => Ok(()),
        other => Err(ModelError::construction(
            format!("expected a mapping, found {}", other.name()),
            node,
        )),
    }
}

fn expected(what: &str, node: &Node) -> ModelError {
    ModelError::construction(format!("expected {what}, found {}", node.kind().name()), node)
}

impl<'a> Buildable<'a> for String {
    fn build(node: &'a Node, _ctx: &BuildContext) -> BuildResult<Self> {
        match node.kind() {
            NodeKind::Null => Ok(String::new()),
            _ => node
                .scalar_text()
                .map(str::to_string)
                .ok_or_else(|| expected("a scalar", node)),
        }
    }
}

impl<'a> Buildable<'a> for i64 {
    fn build(node: &'a Node, _ctx: &BuildContext) -> BuildResult<Self> {
        node.as_i64().ok_or_else(|| expected("an integer", node))
    }
}

impl<'a> Buildable<'a> for f64 {
    fn build(node: &'a Node, _ctx: &BuildContext) -> BuildResult<Self> {
        node.as_f64().ok_or_else(|| expected("a number", node))
    }
}

impl<'a> Buildable<'a> for bool {
    fn build(node: &'a Node, _ctx: &BuildContext) -> BuildResult<Self> {
        node.as_bool().ok_or_else(|| expected("a boolean", node))
    }
}
