//! Top-level document comparison.

use crate::change::{
    Changes, PropertyChanges, PropertyCheck, check_properties, impl_changes, non_empty,
};
use crate::compare::{compare_keyed_objects, compare_nested, keyed_list};
use crate::components::{ComponentsChanges, compare_components};
use crate::extensions::{ExtensionChanges, compare_extensions};
use crate::info::{InfoChanges, compare_info};
use crate::server::{ServerChanges, compare_server};
use crate::tag::{TagChanges, compare_tag};
use indexmap::IndexMap;
use openapi_low::v3::{
    COMPONENTS_LABEL, Document, INFO_LABEL, OPENAPI_LABEL, SERVERS_LABEL, Server, TAGS_LABEL, Tag,
};

/// Everything that changed between two documents.
#[derive(Debug, Clone)]
pub struct DocumentChanges<'a> {
    pub property_changes: PropertyChanges<'a>,
    pub info_changes: Option<InfoChanges<'a>>,
    /// Changes to servers present on both sides, by URL.
    pub server_changes: IndexMap<String, ServerChanges<'a>>,
    /// Changes to tags present on both sides, by name.
    pub tag_changes: IndexMap<String, TagChanges<'a>>,
    pub components_changes: Option<ComponentsChanges<'a>>,
    pub extension_changes: Option<ExtensionChanges<'a>>,
}

impl_changes!(DocumentChanges {
    info_changes,
    server_changes,
    tag_changes,
    components_changes,
});

/// Compare two documents.
///
/// Servers are matched by URL and tags by name, so reordering either list is
/// not a change. Entries without that field, or repeating one already seen,
/// are matched by position instead.
pub fn compare_document<'a>(
    left: &Document<'a>,
    right: &Document<'a>,
) -> Option<DocumentChanges<'a>> {
    if left == right {
        tracing::debug!("documents are equal");
        return None;
    }

    let mut changes = Vec::new();
    check_properties(
        &[PropertyCheck::new(OPENAPI_LABEL, &left.version, &right.version, true)],
        &mut changes,
    );
    let info_changes = compare_nested(INFO_LABEL, &left.info, &right.info, &mut changes, compare_info);
    let server_changes = compare_keyed_objects(
        SERVERS_LABEL,
        &keyed_list(&left.servers, server_url),
        &keyed_list(&right.servers, server_url),
        &mut changes,
        compare_server,
    );
    let tag_changes = compare_keyed_objects(
        TAGS_LABEL,
        &keyed_list(&left.tags, tag_name),
        &keyed_list(&right.tags, tag_name),
        &mut changes,
        compare_tag,
    );
    let components_changes = compare_nested(
        COMPONENTS_LABEL,
        &left.components,
        &right.components,
        &mut changes,
        compare_components,
    );

    let result = non_empty(DocumentChanges {
        property_changes: PropertyChanges::new(changes),
        info_changes,
        server_changes,
        tag_changes,
        components_changes,
        extension_changes: compare_extensions(&left.extensions, &right.extensions),
    });
    if let Some(result) = &result {
        tracing::debug!(
            total = result.total_changes(),
            breaking = result.total_breaking_changes(),
            "compared documents"
        );
    }
    result
}

fn server_url<'r>(server: &'r Server<'_>) -> Option<&'r str> {
    server.url.as_ref().map(|url| url.value.as_str())
}

fn tag_name<'r>(tag: &'r Tag<'_>) -> Option<&'r str> {
    tag.name.as_ref().map(|name| name.value.as_str())
}
