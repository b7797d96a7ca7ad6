//! Comparison of security schemes.

use crate::change::{PropertyChanges, PropertyCheck, check_properties, impl_changes, non_empty};
use crate::compare::compare_nested;
use crate::extensions::{ExtensionChanges, compare_extensions};
use crate::oauth_flows::{OAuthFlowsChanges, compare_oauth_flows};
use openapi_low::v3::{
    BEARER_FORMAT_LABEL, DESCRIPTION_LABEL, FLOWS_LABEL, IN_LABEL, NAME_LABEL,
    OPEN_ID_CONNECT_URL_LABEL, SCHEME_LABEL, SecurityScheme, TYPE_LABEL,
};

#[derive(Debug, Clone)]
pub struct SecuritySchemeChanges<'a> {
    pub property_changes: PropertyChanges<'a>,
    pub oauth_flow_changes: Option<OAuthFlowsChanges<'a>>,
    pub extension_changes: Option<ExtensionChanges<'a>>,
}

impl_changes!(SecuritySchemeChanges { oauth_flow_changes });

/// Compare two security schemes.
///
/// Anything a client sends or authenticates against (type, name, location,
/// scheme, discovery URL) is breaking; descriptive fields are not.
pub fn compare_security_scheme<'a>(
    left: &SecurityScheme<'a>,
    right: &SecurityScheme<'a>,
) -> Option<SecuritySchemeChanges<'a>> {
    if left == right {
        return None;
    }

    let mut changes = Vec::new();
    check_properties(
        &[
            PropertyCheck::new(TYPE_LABEL, &left.r#type, &right.r#type, true),
            PropertyCheck::new(DESCRIPTION_LABEL, &left.description, &right.description, false),
            PropertyCheck::new(NAME_LABEL, &left.name, &right.name, true),
            PropertyCheck::new(IN_LABEL, &left.r#in, &right.r#in, true),
            PropertyCheck::new(SCHEME_LABEL, &left.scheme, &right.scheme, true),
            PropertyCheck::new(
                BEARER_FORMAT_LABEL,
                &left.bearer_format,
                &right.bearer_format,
                false,
            ),
            PropertyCheck::new(
                OPEN_ID_CONNECT_URL_LABEL,
                &left.open_id_connect_url,
                &right.open_id_connect_url,
                true,
            ),
        ],
        &mut changes,
    );
    let oauth_flow_changes = compare_nested(
        FLOWS_LABEL,
        &left.flows,
        &right.flows,
        &mut changes,
        compare_oauth_flows,
    );

    non_empty(SecuritySchemeChanges {
        property_changes: PropertyChanges::new(changes),
        oauth_flow_changes,
        extension_changes: compare_extensions(&left.extensions, &right.extensions),
    })
}
