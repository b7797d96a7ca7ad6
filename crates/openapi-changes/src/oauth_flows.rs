//! Comparison of OAuth flows and the flow set of a security scheme.

use crate::change::{PropertyChanges, PropertyCheck, check_properties, impl_changes, non_empty};
use crate::compare::{compare_keyed_values, compare_nested, keyed_optional_map};
use crate::extensions::{ExtensionChanges, compare_extensions};
use openapi_low::v3::{
    AUTHORIZATION_CODE_LABEL, AUTHORIZATION_URL_LABEL, CLIENT_CREDENTIALS_LABEL, IMPLICIT_LABEL,
    OAuthFlow, OAuthFlows, PASSWORD_LABEL, REFRESH_URL_LABEL, SCOPES_LABEL, TOKEN_URL_LABEL,
};

/// Changes between two sets of OAuth flows.
#[derive(Debug, Clone)]
pub struct OAuthFlowsChanges<'a> {
    pub property_changes: PropertyChanges<'a>,
    pub implicit_changes: Option<OAuthFlowChanges<'a>>,
    pub password_changes: Option<OAuthFlowChanges<'a>>,
    pub client_credentials_changes: Option<OAuthFlowChanges<'a>>,
    pub authorization_code_changes: Option<OAuthFlowChanges<'a>>,
    pub extension_changes: Option<ExtensionChanges<'a>>,
}

impl_changes!(OAuthFlowsChanges {
    implicit_changes,
    password_changes,
    client_credentials_changes,
    authorization_code_changes,
});

pub fn compare_oauth_flows<'a>(
    left: &OAuthFlows<'a>,
    right: &OAuthFlows<'a>,
) -> Option<OAuthFlowsChanges<'a>> {
    if left == right {
        return None;
    }

    let mut changes = Vec::new();
    let implicit_changes = compare_nested(
        IMPLICIT_LABEL,
        &left.implicit,
        &right.implicit,
        &mut changes,
        compare_oauth_flow,
    );
    let password_changes = compare_nested(
        PASSWORD_LABEL,
        &left.password,
        &right.password,
        &mut changes,
        compare_oauth_flow,
    );
    let client_credentials_changes = compare_nested(
        CLIENT_CREDENTIALS_LABEL,
        &left.client_credentials,
        &right.client_credentials,
        &mut changes,
        compare_oauth_flow,
    );
    let authorization_code_changes = compare_nested(
        AUTHORIZATION_CODE_LABEL,
        &left.authorization_code,
        &right.authorization_code,
        &mut changes,
        compare_oauth_flow,
    );

    non_empty(OAuthFlowsChanges {
        property_changes: PropertyChanges::new(changes),
        implicit_changes,
        password_changes,
        client_credentials_changes,
        authorization_code_changes,
        extension_changes: compare_extensions(&left.extensions, &right.extensions),
    })
}

/// Changes between two OAuth flows.
#[derive(Debug, Clone)]
pub struct OAuthFlowChanges<'a> {
    pub property_changes: PropertyChanges<'a>,
    pub extension_changes: Option<ExtensionChanges<'a>>,
}

impl_changes!(OAuthFlowChanges {});

/// Compare two OAuth flows.
///
/// Any change to one of the URLs is breaking. Scopes are compared by name:
/// removing or redefining a scope is breaking, adding one is not.
pub fn compare_oauth_flow<'a>(
    left: &OAuthFlow<'a>,
    right: &OAuthFlow<'a>,
) -> Option<OAuthFlowChanges<'a>> {
    if left == right {
        return None;
    }

    let mut changes = Vec::new();
    check_properties(
        &[
            PropertyCheck::new(
                AUTHORIZATION_URL_LABEL,
                &left.authorization_url,
                &right.authorization_url,
                true,
            ),
            PropertyCheck::new(TOKEN_URL_LABEL, &left.token_url, &right.token_url, true),
            PropertyCheck::new(REFRESH_URL_LABEL, &left.refresh_url, &right.refresh_url, true),
        ],
        &mut changes,
    );
    compare_keyed_values(
        SCOPES_LABEL,
        &keyed_optional_map(&left.scopes),
        &keyed_optional_map(&right.scopes),
        &mut changes,
    );

    non_empty(OAuthFlowChanges {
        property_changes: PropertyChanges::new(changes),
        extension_changes: compare_extensions(&left.extensions, &right.extensions),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::change::{ChangeType, Changes};
    use openapi_low::build_model;
    use openapi_yaml::parse;

    #[test]
    fn test_flow_added_and_removed() {
        let left = parse("implicit:\n  authorizationUrl: https://a/auth\n").unwrap();
        let right = parse("password:\n  tokenUrl: https://a/token\n").unwrap();
        let l: OAuthFlows<'_> = build_model(&left).unwrap();
        let r: OAuthFlows<'_> = build_model(&right).unwrap();

        let changes = compare_oauth_flows(&l, &r).unwrap();
        assert_eq!(changes.total_changes(), 2);
        assert_eq!(changes.total_breaking_changes(), 1);

        let removed = &changes.property_changes.changes[0];
        assert_eq!(removed.change_type, ChangeType::Removed);
        assert_eq!(removed.property, IMPLICIT_LABEL);
        assert!(removed.breaking);
        let added = &changes.property_changes.changes[1];
        assert_eq!(added.change_type, ChangeType::Added);
        assert_eq!(added.property, PASSWORD_LABEL);
        assert!(!added.breaking);
    }

    #[test]
    fn test_nested_flow_changes() {
        let left = parse(
            "clientCredentials:\n  tokenUrl: https://a/token\n  scopes: {read: r}\n",
        )
        .unwrap();
        let right = parse(
            "clientCredentials:\n  tokenUrl: https://a/token\n  refreshUrl: https://a/refresh\n  scopes: {read: r}\n  x-note: hi\n",
        )
        .unwrap();
        let l: OAuthFlows<'_> = build_model(&left).unwrap();
        let r: OAuthFlows<'_> = build_model(&right).unwrap();

        let changes = compare_oauth_flows(&l, &r).unwrap();
        assert!(changes.property_changes.changes.is_empty());
        let flow = changes.client_credentials_changes.as_ref().unwrap();
        assert_eq!(flow.property_changes.changes[0].property, REFRESH_URL_LABEL);
        // adding a scalar property keeps the property's own policy
        assert_eq!(flow.total_breaking_changes(), 1);
        assert_eq!(flow.total_changes(), 2);
        assert_eq!(changes.total_changes(), 2);
    }

    #[test]
    fn test_reformatted_flow_is_unchanged() {
        let left = parse("tokenUrl: https://a/token\nscopes: {ttl: 10}\n").unwrap();
        let right = parse("tokenUrl: 'https://a/token'\nscopes: {ttl: 10.0}\n").unwrap();
        let l: OAuthFlow<'_> = build_model(&left).unwrap();
        let r: OAuthFlow<'_> = build_model(&right).unwrap();

        // scope text differs, so the short-circuit does not apply
        assert_ne!(l, r);
        assert!(compare_oauth_flow(&l, &r).is_none());
    }
}
