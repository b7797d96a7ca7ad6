//! Comparison of the components section.

use crate::change::{PropertyChanges, impl_changes, non_empty};
use crate::compare::{Keyed, compare_keyed_objects, keyed_map};
use crate::extensions::{ExtensionChanges, compare_extensions};
use crate::security_scheme::{SecuritySchemeChanges, compare_security_scheme};
use indexmap::IndexMap;
use openapi_low::v3::{Components, SECURITY_SCHEMES_LABEL, SecurityScheme};

#[derive(Debug, Clone)]
pub struct ComponentsChanges<'a> {
    pub property_changes: PropertyChanges<'a>,
    /// Changes to schemes defined on both sides, by scheme name.
    pub security_scheme_changes: IndexMap<String, SecuritySchemeChanges<'a>>,
    pub extension_changes: Option<ExtensionChanges<'a>>,
}

impl_changes!(ComponentsChanges { security_scheme_changes });

pub fn compare_components<'a>(
    left: &Components<'a>,
    right: &Components<'a>,
) -> Option<ComponentsChanges<'a>> {
    if left == right {
        return None;
    }

    let mut changes = Vec::new();
    let security_scheme_changes = compare_keyed_objects(
        SECURITY_SCHEMES_LABEL,
        &security_schemes(left),
        &security_schemes(right),
        &mut changes,
        compare_security_scheme,
    );

    non_empty(ComponentsChanges {
        property_changes: PropertyChanges::new(changes),
        security_scheme_changes,
        extension_changes: compare_extensions(&left.extensions, &right.extensions),
    })
}

fn security_schemes<'a, 'r>(components: &'r Components<'a>) -> Keyed<'a, 'r, SecurityScheme<'a>> {
    components
        .security_schemes
        .iter()
        .flat_map(|nested| nested.values())
        .flat_map(keyed_map)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::change::{ChangeType, Changes};
    use openapi_low::build_model;
    use openapi_yaml::parse;
    use std::collections::HashSet;

    #[test]
    fn test_security_schemes_keyed_by_name() {
        let left = parse(
            "securitySchemes:\n  apiKey: {type: apiKey, in: header, name: X-KEY}\n  basic: {type: http, scheme: basic}\n",
        )
        .unwrap();
        let right = parse(
            "securitySchemes:\n  apiKey: {type: apiKey, in: query, name: X-KEY}\n  jwt: {type: http, scheme: bearer}\n",
        )
        .unwrap();
        let l: Components<'_> = build_model(&left).unwrap();
        let r: Components<'_> = build_model(&right).unwrap();

        let changes = compare_components(&l, &r).unwrap();
        let api_key = &changes.security_scheme_changes["apiKey"];
        assert_eq!(api_key.property_changes.changes[0].new.as_deref(), Some("query"));

        let direct: HashSet<_> = changes
            .property_changes
            .changes
            .iter()
            .map(|c| (c.change_type, c.key.as_deref(), c.breaking))
            .collect();
        assert_eq!(
            direct,
            HashSet::from([
                (ChangeType::Removed, Some("basic"), true),
                (ChangeType::Added, Some("jwt"), false),
            ])
        );
        assert_eq!(changes.total_changes(), 3);
        assert_eq!(changes.total_breaking_changes(), 2);
    }
}
