//! Comparison of tags and external documentation.

use crate::change::{PropertyChanges, PropertyCheck, check_properties, impl_changes, non_empty};
use crate::compare::compare_nested;
use crate::extensions::{ExtensionChanges, compare_extensions};
use openapi_low::v3::{DESCRIPTION_LABEL, EXTERNAL_DOCS_LABEL, ExternalDoc, NAME_LABEL, Tag, URL_LABEL};

#[derive(Debug, Clone)]
pub struct TagChanges<'a> {
    pub property_changes: PropertyChanges<'a>,
    pub external_docs_changes: Option<ExternalDocChanges<'a>>,
    pub extension_changes: Option<ExtensionChanges<'a>>,
}

impl_changes!(TagChanges { external_docs_changes });

pub fn compare_tag<'a>(left: &Tag<'a>, right: &Tag<'a>) -> Option<TagChanges<'a>> {
    if left == right {
        return None;
    }

    let mut changes = Vec::new();
    check_properties(
        &[
            PropertyCheck::new(NAME_LABEL, &left.name, &right.name, true),
            PropertyCheck::new(DESCRIPTION_LABEL, &left.description, &right.description, false),
        ],
        &mut changes,
    );
    let external_docs_changes = compare_nested(
        EXTERNAL_DOCS_LABEL,
        &left.external_docs,
        &right.external_docs,
        &mut changes,
        compare_external_docs,
    );

    non_empty(TagChanges {
        property_changes: PropertyChanges::new(changes),
        external_docs_changes,
        extension_changes: compare_extensions(&left.extensions, &right.extensions),
    })
}

#[derive(Debug, Clone)]
pub struct ExternalDocChanges<'a> {
    pub property_changes: PropertyChanges<'a>,
    pub extension_changes: Option<ExtensionChanges<'a>>,
}

impl_changes!(ExternalDocChanges {});

pub fn compare_external_docs<'a>(
    left: &ExternalDoc<'a>,
    right: &ExternalDoc<'a>,
) -> Option<ExternalDocChanges<'a>> {
    if left == right {
        return None;
    }

    let mut changes = Vec::new();
    check_properties(
        &[
            PropertyCheck::new(DESCRIPTION_LABEL, &left.description, &right.description, false),
            PropertyCheck::new(URL_LABEL, &left.url, &right.url, false),
        ],
        &mut changes,
    );

    non_empty(ExternalDocChanges {
        property_changes: PropertyChanges::new(changes),
        extension_changes: compare_extensions(&left.extensions, &right.extensions),
    })
}
