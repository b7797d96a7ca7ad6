//! # openapi-low
//!
//! A low-level OpenAPI 3 model that remembers where every value came from.
//!
//! Each field of a model object is wrapped in a reference type
//! ([`NodeReference`], [`KeyReference`], [`ValueReference`]) holding both the
//! decoded value and the [`openapi_yaml::Node`]s it was read from. Models
//! borrow from the node tree, so the tree must outlive them.
//!
//! Model types implement [`Buildable`] and are populated through a small set
//! of generic extraction functions. Vendor extensions (`x-` keys) are kept
//! apart from typed fields and decoded into [`ExtensionValue`]s.
//!
//! ## Example
//!
//! ```rust
//! use openapi_low::v3::create_document;
//!
//! let root = openapi_yaml::parse(
//!     "openapi: 3.0.1\ninfo:\n  title: Burger Shop\n  x-team: grill\n",
//! )
//! .unwrap();
//! let document = create_document(&root).unwrap();
//!
//! let info = document.info.unwrap().value;
//! assert_eq!(info.title.unwrap().value, "Burger Shop");
//! assert_eq!(info.extensions["x-team"].value.as_str(), Some("grill"));
//! ```

mod build;
mod error;
mod extensions;
mod extract;
mod reference;
pub mod v3;

pub use build::{BuildContext, BuildOptions, Buildable, require_mapping};
pub use error::{BuildResult, ModelError};
pub use extensions::{
    EXTENSION_PREFIX, ExtensionValue, Extensions, extract_extensions, is_extension_key,
};
pub use extract::{
    build_from_node, build_map_flat, build_model, build_model_with_options, extract_array,
    extract_map, extract_map_flat, extract_object, find_item_in_collection, find_item_in_map,
};
pub use reference::{FlatMap, KeyReference, NestedMap, NodeReference, ValueReference};
