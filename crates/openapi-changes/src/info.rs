//! Comparison of document info, contact and license.

use crate::change::{PropertyChanges, PropertyCheck, check_properties, impl_changes, non_empty};
use crate::compare::compare_nested;
use crate::extensions::{ExtensionChanges, compare_extensions};
use openapi_low::v3::{
    CONTACT_LABEL, Contact, DESCRIPTION_LABEL, EMAIL_LABEL, Info, LICENSE_LABEL, License,
    NAME_LABEL, TERMS_OF_SERVICE_LABEL, TITLE_LABEL, URL_LABEL, VERSION_LABEL,
};

#[derive(Debug, Clone)]
pub struct InfoChanges<'a> {
    pub property_changes: PropertyChanges<'a>,
    pub contact_changes: Option<ContactChanges<'a>>,
    pub license_changes: Option<LicenseChanges<'a>>,
    pub extension_changes: Option<ExtensionChanges<'a>>,
}

impl_changes!(InfoChanges { contact_changes, license_changes });

/// Compare API metadata. Nothing here changes the contract except removing
/// the contact or license object outright.
pub fn compare_info<'a>(left: &Info<'a>, right: &Info<'a>) -> Option<InfoChanges<'a>> {
    if left == right {
        return None;
    }

    let mut changes = Vec::new();
    check_properties(
        &[
            PropertyCheck::new(TITLE_LABEL, &left.title, &right.title, false),
            PropertyCheck::new(DESCRIPTION_LABEL, &left.description, &right.description, false),
            PropertyCheck::new(
                TERMS_OF_SERVICE_LABEL,
                &left.terms_of_service,
                &right.terms_of_service,
                false,
            ),
            PropertyCheck::new(VERSION_LABEL, &left.version, &right.version, false),
        ],
        &mut changes,
    );
    let contact_changes = compare_nested(
        CONTACT_LABEL,
        &left.contact,
        &right.contact,
        &mut changes,
        compare_contact,
    );
    let license_changes = compare_nested(
        LICENSE_LABEL,
        &left.license,
        &right.license,
        &mut changes,
        compare_license,
    );

    non_empty(InfoChanges {
        property_changes: PropertyChanges::new(changes),
        contact_changes,
        license_changes,
        extension_changes: compare_extensions(&left.extensions, &right.extensions),
    })
}

#[derive(Debug, Clone)]
pub struct ContactChanges<'a> {
    pub property_changes: PropertyChanges<'a>,
    pub extension_changes: Option<ExtensionChanges<'a>>,
}

impl_changes!(ContactChanges {});

pub fn compare_contact<'a>(left: &Contact<'a>, right: &Contact<'a>) -> Option<ContactChanges<'a>> {
    if left == right {
        return None;
    }

    let mut changes = Vec::new();
    check_properties(
        &[
            PropertyCheck::new(NAME_LABEL, &left.name, &right.name, false),
            PropertyCheck::new(URL_LABEL, &left.url, &right.url, false),
            PropertyCheck::new(EMAIL_LABEL, &left.email, &right.email, false),
        ],
        &mut changes,
    );

    non_empty(ContactChanges {
        property_changes: PropertyChanges::new(changes),
        extension_changes: compare_extensions(&left.extensions, &right.extensions),
    })
}

#[derive(Debug, Clone)]
pub struct LicenseChanges<'a> {
    pub property_changes: PropertyChanges<'a>,
    pub extension_changes: Option<ExtensionChanges<'a>>,
}

impl_changes!(LicenseChanges {});

pub fn compare_license<'a>(left: &License<'a>, right: &License<'a>) -> Option<LicenseChanges<'a>> {
    if left == right {
        return None;
    }

    let mut changes = Vec::new();
    check_properties(
        &[
            PropertyCheck::new(NAME_LABEL, &left.name, &right.name, false),
            PropertyCheck::new(URL_LABEL, &left.url, &right.url, false),
        ],
        &mut changes,
    );

    non_empty(LicenseChanges {
        property_changes: PropertyChanges::new(changes),
        extension_changes: compare_extensions(&left.extensions, &right.extensions),
    })
}
