//! Server objects and server variables.

use super::{DEFAULT_LABEL, DESCRIPTION_LABEL, ENUM_LABEL, URL_LABEL, VARIABLES_LABEL};
use crate::build::{BuildContext, Buildable, require_mapping};
use crate::error::BuildResult;
use crate::extensions::{Extensions, extract_extensions};
use crate::extract::{extract_array, extract_map_flat, extract_object, find_item_in_map};
use crate::reference::{FlatMap, NodeReference, ValueReference};
use openapi_yaml::Node;

/// A server hosting the API; `url` may contain `{variable}` placeholders.
#[derive(Debug, Clone, PartialEq)]
pub struct Server<'a> {
    pub url: Option<NodeReference<'a, String>>,
    pub description: Option<NodeReference<'a, String>>,
    pub variables: Option<NodeReference<'a, FlatMap<'a, ServerVariable<'a>>>>,
    pub extensions: Extensions<'a>,
}

impl<'a> Server<'a> {
    pub fn find_variable(&self, name: &str) -> Option<&ValueReference<'a, ServerVariable<'a>>> {
        self.variables
            .as_ref()
            .and_then(|variables| find_item_in_map(name, &variables.value))
    }
}

impl<'a> Buildable<'a> for Server<'a> {
    fn build(node: &'a Node, ctx: &BuildContext) -> BuildResult<Self> {
        require_mapping(node)?;
        Ok(Self {
            url: extract_object(URL_LABEL, node, ctx)?,
            description: extract_object(DESCRIPTION_LABEL, node, ctx)?,
            variables: extract_map_flat(VARIABLES_LABEL, node, ctx)?,
            extensions: extract_extensions(node, ctx),
        })
    }
}

/// A substitution variable for a server URL template.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerVariable<'a> {
    pub r#enum: Vec<NodeReference<'a, String>>,
    pub default: Option<NodeReference<'a, String>>,
    pub description: Option<NodeReference<'a, String>>,
    pub extensions: Extensions<'a>,
}

impl<'a> ServerVariable<'a> {
    /// Whether `value` is one of the allowed values.
    pub fn allows(&self, value: &str) -> bool {
        self.r#enum.iter().any(|allowed| allowed.value == value)
    }
}

impl<'a> Buildable<'a> for ServerVariable<'a> {
    fn build(node: &'a Node, ctx: &BuildContext) -> BuildResult<Self> {
        require_mapping(node)?;
        let (r#enum, _, _) = extract_array(ENUM_LABEL, node, ctx)?;
        Ok(Self {
            r#enum,
            default: extract_object(DEFAULT_LABEL, node, ctx)?,
            description: extract_object(DESCRIPTION_LABEL, node, ctx)?,
            extensions: extract_extensions(node, ctx),
        })
    }
}
