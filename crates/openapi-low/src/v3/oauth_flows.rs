//! OAuth flow objects and the flow set of a security scheme.

use super::{
    AUTHORIZATION_CODE_LABEL, AUTHORIZATION_URL_LABEL, CLIENT_CREDENTIALS_LABEL, IMPLICIT_LABEL,
    PASSWORD_LABEL, REFRESH_URL_LABEL, SCOPES_LABEL, TOKEN_URL_LABEL,
};
use crate::build::{BuildContext, Buildable, require_mapping};
use crate::error::BuildResult;
use crate::extensions::{Extensions, extract_extensions};
use crate::extract::{extract_map_flat, extract_object, find_item_in_map};
use crate::reference::{FlatMap, NodeReference, ValueReference};
use openapi_yaml::Node;

/// The OAuth flows a security scheme supports.
#[derive(Debug, Clone, PartialEq)]
pub struct OAuthFlows<'a> {
    pub implicit: Option<NodeReference<'a, OAuthFlow<'a>>>,
    pub password: Option<NodeReference<'a, OAuthFlow<'a>>>,
    pub client_credentials: Option<NodeReference<'a, OAuthFlow<'a>>>,
    pub authorization_code: Option<NodeReference<'a, OAuthFlow<'a>>>,
    pub extensions: Extensions<'a>,
}

impl<'a> Buildable<'a> for OAuthFlows<'a> {
    fn build(node: &'a Node, ctx: &BuildContext) -> BuildResult<Self> {
        require_mapping(node)?;
        Ok(Self {
            implicit: extract_object(IMPLICIT_LABEL, node, ctx)?,
            password: extract_object(PASSWORD_LABEL, node, ctx)?,
            client_credentials: extract_object(CLIENT_CREDENTIALS_LABEL, node, ctx)?,
            authorization_code: extract_object(AUTHORIZATION_CODE_LABEL, node, ctx)?,
            extensions: extract_extensions(node, ctx),
        })
    }
}

/// Configuration for a single OAuth flow.
#[derive(Debug, Clone, PartialEq)]
pub struct OAuthFlow<'a> {
    pub authorization_url: Option<NodeReference<'a, String>>,
    pub token_url: Option<NodeReference<'a, String>>,
    pub refresh_url: Option<NodeReference<'a, String>>,
    pub scopes: Option<NodeReference<'a, FlatMap<'a, String>>>,
    pub extensions: Extensions<'a>,
}

impl<'a> OAuthFlow<'a> {
    /// Look up a scope's description by scope name.
    pub fn find_scope(&self, scope: &str) -> Option<&ValueReference<'a, String>> {
        self.scopes
            .as_ref()
            .and_then(|scopes| find_item_in_map(scope, &scopes.value))
    }
}

impl<'a> Buildable<'a> for OAuthFlow<'a> {
    fn build(node: &'a Node, ctx: &BuildContext) -> BuildResult<Self> {
        require_mapping(node)?;
        Ok(Self {
            authorization_url: extract_object(AUTHORIZATION_URL_LABEL, node, ctx)?,
            token_url: extract_object(TOKEN_URL_LABEL, node, ctx)?,
            refresh_url: extract_object(REFRESH_URL_LABEL, node, ctx)?,
            scopes: extract_map_flat(SCOPES_LABEL, node, ctx)?,
            extensions: extract_extensions(node, ctx),
        })
    }
}
