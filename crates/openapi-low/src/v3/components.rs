//! The components section.

use super::{SECURITY_SCHEMES_LABEL, SecurityScheme};
use crate::build::{BuildContext, Buildable, require_mapping};
use crate::error::BuildResult;
use crate::extensions::{Extensions, extract_extensions};
use crate::extract::{extract_map, find_item_in_collection};
use crate::reference::{NestedMap, ValueReference};
use openapi_yaml::Node;

/// Reusable objects referenced from elsewhere in the document.
///
/// Only security schemes are modelled; other component kinds are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Components<'a> {
    pub security_schemes: Option<NestedMap<'a, SecurityScheme<'a>>>,
    pub extensions: Extensions<'a>,
}

impl<'a> Components<'a> {
    pub fn find_security_scheme(
        &self,
        name: &str,
    ) -> Option<&ValueReference<'a, SecurityScheme<'a>>> {
        self.security_schemes
            .as_ref()
            .and_then(|schemes| find_item_in_collection(name, schemes))
    }
}

impl<'a> Buildable<'a> for Components<'a> {
    fn build(node: &'a Node, ctx: &BuildContext) -> BuildResult<Self> {
        require_mapping(node)?;
        Ok(Self {
            security_schemes: extract_map(SECURITY_SCHEMES_LABEL, node, ctx)?,
            extensions: extract_extensions(node, ctx),
        })
    }
}
