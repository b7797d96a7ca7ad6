//! Tag and external documentation objects.

use super::{DESCRIPTION_LABEL, EXTERNAL_DOCS_LABEL, NAME_LABEL, URL_LABEL};
use crate::build::{BuildContext, Buildable, require_mapping};
use crate::error::BuildResult;
use crate::extensions::{Extensions, extract_extensions};
use crate::extract::extract_object;
use crate::reference::NodeReference;
use openapi_yaml::Node;

/// A tag grouping operations, with optional external documentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag<'a> {
    pub name: Option<NodeReference<'a, String>>,
    pub description: Option<NodeReference<'a, String>>,
    pub external_docs: Option<NodeReference<'a, ExternalDoc<'a>>>,
    pub extensions: Extensions<'a>,
}

impl<'a> Buildable<'a> for Tag<'a> {
    fn build(node: &'a Node, ctx: &BuildContext) -> BuildResult<Self> {
        require_mapping(node)?;
        Ok(Self {
            name: extract_object(NAME_LABEL, node, ctx)?,
            description: extract_object(DESCRIPTION_LABEL, node, ctx)?,
            external_docs: extract_object(EXTERNAL_DOCS_LABEL, node, ctx)?,
            extensions: extract_extensions(node, ctx),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExternalDoc<'a> {
    pub description: Option<NodeReference<'a, String>>,
    pub url: Option<NodeReference<'a, String>>,
    pub extensions: Extensions<'a>,
}

impl<'a> Buildable<'a> for ExternalDoc<'a> {
    fn build(node: &'a Node, ctx: &BuildContext) -> BuildResult<Self> {
        require_mapping(node)?;
        Ok(Self {
            description: extract_object(DESCRIPTION_LABEL, node, ctx)?,
            url: extract_object(URL_LABEL, node, ctx)?,
            extensions: extract_extensions(node, ctx),
        })
    }
}
