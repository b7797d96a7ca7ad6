//! Comparison of servers and their variables.

use crate::change::{PropertyChanges, PropertyCheck, check_properties, impl_changes, non_empty};
use crate::compare::{compare_keyed, compare_keyed_objects, keyed_optional_map, keyed_set};
use crate::extensions::{ExtensionChanges, compare_extensions};
use indexmap::IndexMap;
use openapi_low::v3::{
    DEFAULT_LABEL, DESCRIPTION_LABEL, ENUM_LABEL, Server, ServerVariable, URL_LABEL,
    VARIABLES_LABEL,
};

#[derive(Debug, Clone)]
pub struct ServerChanges<'a> {
    pub property_changes: PropertyChanges<'a>,
    /// Changes to variables defined on both sides, by variable name.
    pub server_variable_changes: IndexMap<String, ServerVariableChanges<'a>>,
    pub extension_changes: Option<ExtensionChanges<'a>>,
}

impl_changes!(ServerChanges { server_variable_changes });

pub fn compare_server<'a>(left: &Server<'a>, right: &Server<'a>) -> Option<ServerChanges<'a>> {
    if left == right {
        return None;
    }

    let mut changes = Vec::new();
    check_properties(
        &[
            PropertyCheck::new(URL_LABEL, &left.url, &right.url, true),
            PropertyCheck::new(DESCRIPTION_LABEL, &left.description, &right.description, false),
        ],
        &mut changes,
    );
    let server_variable_changes = compare_keyed_objects(
        VARIABLES_LABEL,
        &keyed_optional_map(&left.variables),
        &keyed_optional_map(&right.variables),
        &mut changes,
        compare_server_variable,
    );

    non_empty(ServerChanges {
        property_changes: PropertyChanges::new(changes),
        server_variable_changes,
        extension_changes: compare_extensions(&left.extensions, &right.extensions),
    })
}

#[derive(Debug, Clone)]
pub struct ServerVariableChanges<'a> {
    pub property_changes: PropertyChanges<'a>,
    pub extension_changes: Option<ExtensionChanges<'a>>,
}

impl_changes!(ServerVariableChanges {});

/// Compare two server variables.
///
/// The allowed values are treated as a set: dropping one is breaking,
/// adding one is not, and reordering them is no change at all.
pub fn compare_server_variable<'a>(
    left: &ServerVariable<'a>,
    right: &ServerVariable<'a>,
) -> Option<ServerVariableChanges<'a>> {
    if left == right {
        return None;
    }

    let mut changes = Vec::new();
    check_properties(
        &[
            PropertyCheck::new(DEFAULT_LABEL, &left.default, &right.default, true),
            PropertyCheck::new(DESCRIPTION_LABEL, &left.description, &right.description, false),
        ],
        &mut changes,
    );
    compare_keyed(
        ENUM_LABEL,
        &keyed_set(&left.r#enum, String::as_str),
        &keyed_set(&right.r#enum, String::as_str),
        &mut changes,
        |_, _, _, _| {},
    );

    non_empty(ServerVariableChanges {
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
    use std::collections::HashSet;

    #[test]
    fn test_enum_is_a_set() {
        let left = parse("enum: [https, wss]\ndefault: https\n").unwrap();
        let reordered = parse("enum: [wss, https]\ndefault: https\n").unwrap();
        let narrowed = parse("enum: [https, http]\ndefault: https\n").unwrap();
        let l: ServerVariable<'_> = build_model(&left).unwrap();
        let reordered: ServerVariable<'_> = build_model(&reordered).unwrap();
        let narrowed: ServerVariable<'_> = build_model(&narrowed).unwrap();

        assert!(compare_server_variable(&l, &reordered).is_none());

        let changes = compare_server_variable(&l, &narrowed).unwrap();
        let summary: HashSet<_> = changes
            .all_changes()
            .into_iter()
            .map(|c| (c.change_type, c.key.as_deref(), c.breaking))
            .collect();
        assert_eq!(
            summary,
            HashSet::from([
                (ChangeType::Removed, Some("wss"), true),
                (ChangeType::Added, Some("http"), false),
            ])
        );
    }

    #[test]
    fn test_enum_duplicates_collapse() {
        let left = parse("enum: [https, https, wss]\n").unwrap();
        let right = parse("enum: [wss, https]\n").unwrap();
        let l: ServerVariable<'_> = build_model(&left).unwrap();
        let r: ServerVariable<'_> = build_model(&right).unwrap();
        assert!(compare_server_variable(&l, &r).is_none());
    }

    #[test]
    fn test_quoted_default_is_the_same_default() {
        let left = parse("default: 443\ndescription: a\n").unwrap();
        let right = parse("default: \"443\"\ndescription: b\n").unwrap();
        let l: ServerVariable<'_> = build_model(&left).unwrap();
        let r: ServerVariable<'_> = build_model(&right).unwrap();

        let changes = compare_server_variable(&l, &r).unwrap();
        assert_eq!(changes.total_changes(), 1);
        assert_eq!(changes.total_breaking_changes(), 0);
        assert_eq!(changes.property_changes.changes[0].property, DESCRIPTION_LABEL);
    }

    #[test]
    fn test_server_variables_nested() {
        let left = parse(
            "url: https://{host}\nvariables:\n  host: {default: a.io}\n  port: {default: '443'}\n",
        )
        .unwrap();
        let right = parse(
            "url: https://{host}\nvariables:\n  host: {default: b.io}\n  region: {default: eu}\n",
        )
        .unwrap();
        let l: Server<'_> = build_model(&left).unwrap();
        let r: Server<'_> = build_model(&right).unwrap();

        let changes = compare_server(&l, &r).unwrap();
        let host = &changes.server_variable_changes["host"];
        assert_eq!(host.property_changes.changes[0].property, DEFAULT_LABEL);
        assert_eq!(host.property_changes.changes[0].original.as_deref(), Some("a.io"));

        let keys: HashSet<_> = changes
            .property_changes
            .changes
            .iter()
            .map(|c| (c.change_type, c.key.as_deref()))
            .collect();
        assert_eq!(
            keys,
            HashSet::from([(ChangeType::Removed, Some("port")), (ChangeType::Added, Some("region"))])
        );
        // modified default, removed variable
        assert_eq!(changes.total_breaking_changes(), 2);
        assert_eq!(changes.total_changes(), 3);
    }
}
