//! Info, contact and license objects.

use super::{
    CONTACT_LABEL, DESCRIPTION_LABEL, EMAIL_LABEL, LICENSE_LABEL, NAME_LABEL,
    TERMS_OF_SERVICE_LABEL, TITLE_LABEL, URL_LABEL, VERSION_LABEL,
};
use crate::build::{BuildContext, Buildable, require_mapping};
use crate::error::BuildResult;
use crate::extensions::{Extensions, extract_extensions};
use crate::extract::extract_object;
use crate::reference::NodeReference;
use openapi_yaml::Node;

/// Metadata about the API.
#[derive(Debug, Clone, PartialEq)]
pub struct Info<'a> {
    pub title: Option<NodeReference<'a, String>>,
    pub description: Option<NodeReference<'a, String>>,
    pub terms_of_service: Option<NodeReference<'a, String>>,
    pub contact: Option<NodeReference<'a, Contact<'a>>>,
    pub license: Option<NodeReference<'a, License<'a>>>,
    pub version: Option<NodeReference<'a, String>>,
    pub extensions: Extensions<'a>,
}

impl<'a> Buildable<'a> for Info<'a> {
    fn build(node: &'a Node, ctx: &BuildContext) -> BuildResult<Self> {
        require_mapping(node)?;
        Ok(Self {
            title: extract_object(TITLE_LABEL, node, ctx)?,
            description: extract_object(DESCRIPTION_LABEL, node, ctx)?,
            terms_of_service: extract_object(TERMS_OF_SERVICE_LABEL, node, ctx)?,
            contact: extract_object(CONTACT_LABEL, node, ctx)?,
            license: extract_object(LICENSE_LABEL, node, ctx)?,
            version: extract_object(VERSION_LABEL, node, ctx)?,
            extensions: extract_extensions(node, ctx),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Contact<'a> {
    pub name: Option<NodeReference<'a, String>>,
    pub url: Option<NodeReference<'a, String>>,
    pub email: Option<NodeReference<'a, String>>,
    pub extensions: Extensions<'a>,
}

impl<'a> Buildable<'a> for Contact<'a> {
    fn build(node: &'a Node, ctx: &BuildContext) -> BuildResult<Self> {
        require_mapping(node)?;
        Ok(Self {
            name: extract_object(NAME_LABEL, node, ctx)?,
            url: extract_object(URL_LABEL, node, ctx)?,
            email: extract_object(EMAIL_LABEL, node, ctx)?,
            extensions: extract_extensions(node, ctx),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct License<'a> {
    pub name: Option<NodeReference<'a, String>>,
    pub url: Option<NodeReference<'a, String>>,
    pub extensions: Extensions<'a>,
}

impl<'a> Buildable<'a> for License<'a> {
    fn build(node: &'a Node, ctx: &BuildContext) -> BuildResult<Self> {
        require_mapping(node)?;
        Ok(Self {
            name: extract_object(NAME_LABEL, node, ctx)?,
            url: extract_object(URL_LABEL, node, ctx)?,
            extensions: extract_extensions(node, ctx),
        })
    }
}
