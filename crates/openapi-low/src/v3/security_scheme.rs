//! Security scheme objects.

use super::{
    BEARER_FORMAT_LABEL, DESCRIPTION_LABEL, FLOWS_LABEL, IN_LABEL, NAME_LABEL,
    OPEN_ID_CONNECT_URL_LABEL, OAuthFlows, SCHEME_LABEL, TYPE_LABEL,
};
use crate::build::{BuildContext, Buildable, require_mapping};
use crate::error::BuildResult;
use crate::extensions::{Extensions, extract_extensions};
use crate::extract::extract_object;
use crate::reference::NodeReference;
use openapi_yaml::Node;

/// A security scheme usable by operations.
///
/// Which fields are meaningful depends on `type` (`apiKey`, `http`,
/// `oauth2`, `openIdConnect`); the builder records whatever is present.
#[derive(Debug, Clone, PartialEq)]
pub struct SecurityScheme<'a> {
    pub r#type: Option<NodeReference<'a, String>>,
    pub description: Option<NodeReference<'a, String>>,
    pub name: Option<NodeReference<'a, String>>,
    pub r#in: Option<NodeReference<'a, String>>,
    pub scheme: Option<NodeReference<'a, String>>,
    pub bearer_format: Option<NodeReference<'a, String>>,
    pub flows: Option<NodeReference<'a, OAuthFlows<'a>>>,
    pub open_id_connect_url: Option<NodeReference<'a, String>>,
    pub extensions: Extensions<'a>,
}

impl<'a> Buildable<'a> for SecurityScheme<'a> {
    fn build(node: &'a Node, ctx: &BuildContext) -> BuildResult<Self> {
        require_mapping(node)?;
        Ok(Self {
            r#type: extract_object(TYPE_LABEL, node, ctx)?,
            description: extract_object(DESCRIPTION_LABEL, node, ctx)?,
            name: extract_object(NAME_LABEL, node, ctx)?,
            r#in: extract_object(IN_LABEL, node, ctx)?,
            scheme: extract_object(SCHEME_LABEL, node, ctx)?,
            bearer_format: extract_object(BEARER_FORMAT_LABEL, node, ctx)?,
            flows: extract_object(FLOWS_LABEL, node, ctx)?,
            open_id_connect_url: extract_object(OPEN_ID_CONNECT_URL_LABEL, node, ctx)?,
            extensions: extract_extensions(node, ctx),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::build_model;
    use openapi_yaml::parse;

    #[test]
    fn test_build_api_key_scheme() {
        let root = parse("type: apiKey\nname: X-API-KEY\nin: header\n").unwrap();
        let scheme: SecurityScheme<'_> = build_model(&root).unwrap();

        assert_eq!(scheme.r#type.unwrap().value, "apiKey");
        assert_eq!(scheme.r#in.unwrap().value, "header");
        // the header name starts with "X-" but is a value, not a key
        assert_eq!(scheme.name.unwrap().value, "X-API-KEY");
        assert!(scheme.flows.is_none());
    }

    #[test]
    fn test_build_oauth_scheme() {
        let root = parse(
            r#"
type: oauth2
flows:
  password:
    tokenUrl: https://pb33f.io/token
    scopes:
      write:burgers: modify burgers
"#,
        )
        .unwrap();
        let scheme: SecurityScheme<'_> = build_model(&root).unwrap();
        let flows = scheme.flows.unwrap().value;
        let password = flows.password.unwrap().value;
        assert_eq!(
            password.find_scope("write:burgers").unwrap().value,
            "modify burgers"
        );
    }
}
