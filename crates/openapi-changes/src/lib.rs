//! # openapi-changes
//!
//! Structural comparison of two [`openapi_low`] models.
//!
//! Every `compare_*` function takes a left (baseline) and right (candidate)
//! object of the same type and returns `None` when they are semantically
//! equal. Otherwise it returns a change-set holding the object's own leaf
//! [`Change`]s, the change-sets of its nested objects and the changes to its
//! vendor extensions. All change-sets implement [`Changes`].
//!
//! Each leaf change is classified as breaking or not by a fixed policy per
//! property. Removing contract surface is breaking and adding it is not.
//! Extension changes are never breaking.
//!
//! Changes borrow the nodes they were found at, so both source trees must
//! outlive the change-set.
//!
//! ## Example
//!
//! ```rust
//! use openapi_changes::{Changes, compare_oauth_flow};
//! use openapi_low::{build_model, v3::OAuthFlow};
//!
//! let left = openapi_yaml::parse("tokenUrl: https://a/token").unwrap();
//! let right = openapi_yaml::parse("tokenUrl: https://b/token").unwrap();
//! let left: OAuthFlow<'_> = build_model(&left).unwrap();
//! let right: OAuthFlow<'_> = build_model(&right).unwrap();
//!
//! let changes = compare_oauth_flow(&left, &right).unwrap();
//! assert_eq!(changes.total_changes(), 1);
//! assert_eq!(changes.total_breaking_changes(), 1);
//! ```

mod change;
mod compare;
mod components;
mod document;
mod extensions;
mod info;
mod oauth_flows;
mod security_scheme;
mod server;
mod tag;

pub use change::{
    Change, ChangeType, Changes, PropertyChanges, PropertyCheck, check_properties, create_change,
};
pub use components::{ComponentsChanges, compare_components};
pub use document::{DocumentChanges, compare_document};
pub use extensions::{ExtensionChanges, compare_extensions};
pub use info::{ContactChanges, InfoChanges, LicenseChanges, compare_contact, compare_info, compare_license};
pub use oauth_flows::{OAuthFlowChanges, OAuthFlowsChanges, compare_oauth_flow, compare_oauth_flows};
pub use security_scheme::{SecuritySchemeChanges, compare_security_scheme};
pub use server::{ServerChanges, ServerVariableChanges, compare_server, compare_server_variable};
pub use tag::{ExternalDocChanges, TagChanges, compare_external_docs, compare_tag};
