//! The document root and its entry points.

use super::{
    COMPONENTS_LABEL, Components, INFO_LABEL, Info, OPENAPI_LABEL, SERVERS_LABEL, Server,
    TAGS_LABEL, Tag,
};
use crate::build::{BuildContext, BuildOptions, Buildable, require_mapping};
use crate::error::BuildResult;
use crate::extensions::{Extensions, extract_extensions};
use crate::extract::{build_model_with_options, extract_array, extract_object};
use crate::reference::NodeReference;
use openapi_yaml::Node;

/// The root of an OpenAPI 3 document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document<'a> {
    /// The `openapi` field, e.g. `3.0.1`.
    pub version: Option<NodeReference<'a, String>>,
    pub info: Option<NodeReference<'a, Info<'a>>>,
    pub servers: Vec<NodeReference<'a, Server<'a>>>,
    pub tags: Vec<NodeReference<'a, Tag<'a>>>,
    pub components: Option<NodeReference<'a, Components<'a>>>,
    pub extensions: Extensions<'a>,
}

impl<'a> Document<'a> {
    pub fn find_tag(&self, name: &str) -> Option<&NodeReference<'a, Tag<'a>>> {
        self.tags.iter().find(|tag| {
            tag.value
                .name
                .as_ref()
                .is_some_and(|n| n.value == name)
        })
    }

    pub fn find_server(&self, url: &str) -> Option<&NodeReference<'a, Server<'a>>> {
        self.servers.iter().find(|server| {
            server
                .value
                .url
                .as_ref()
                .is_some_and(|u| u.value == url)
        })
    }
}

impl<'a> Buildable<'a> for Document<'a> {
    fn build(node: &'a Node, ctx: &BuildContext) -> BuildResult<Self> {
        require_mapping(node)?;
        let (servers, _, _) = extract_array(SERVERS_LABEL, node, ctx)?;
        let (tags, _, _) = extract_array(TAGS_LABEL, node, ctx)?;
        Ok(Self {
            version: extract_object(OPENAPI_LABEL, node, ctx)?,
            info: extract_object(INFO_LABEL, node, ctx)?,
            servers,
            tags,
            components: extract_object(COMPONENTS_LABEL, node, ctx)?,
            extensions: extract_extensions(node, ctx),
        })
    }
}

/// Build a document from the root node of a parsed OpenAPI 3 source.
pub fn create_document(root: &Node) -> BuildResult<Document<'_>> {
    create_document_with_options(root, &BuildOptions::default())
}

pub fn create_document_with_options<'a>(
    root: &'a Node,
    options: &BuildOptions,
) -> BuildResult<Document<'a>> {
    let document: Document<'a> = build_model_with_options(root, options)?;
    tracing::debug!(
        version = document.version.as_ref().map(|v| v.value.as_str()),
        servers = document.servers.len(),
        tags = document.tags.len(),
        "built document"
    );
    Ok(document)
}
