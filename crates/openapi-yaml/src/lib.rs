//! # openapi-yaml
//!
//! YAML parsing with source location tracking.
//!
//! This crate provides [`Node`], an owned YAML tree in which every mapping,
//! sequence and scalar carries the [`SourceInfo`] it was read from. It is the
//! input the OpenAPI model builder consumes: the builder only needs named
//! lookup under mappings, ordered iteration of sequences and mappings, kind
//! introspection and positions, all of which live here.
//!
//! ## Design
//!
//! Scalars keep the text they were written with plus a resolved
//! [`NodeKind`] (YAML 1.2 core schema). Decoding into Rust values happens
//! lazily through the `as_*` accessors so that a malformed typed scalar is
//! still representable and callers decide how strict to be.
//!
//! ## Example
//!
//! ```rust
//! use openapi_yaml::parse;
//!
//! let root = parse("openapi: 3.0.1\ninfo:\n  title: Burger Shop\n").unwrap();
//! let title = root.get("info").and_then(|info| info.get("title")).unwrap();
//! assert_eq!(title.as_str(), Some("Burger Shop"));
//! assert!(title.source_info.line >= 1);
//! ```

mod error;
mod node;
mod parser;
mod scalar;
mod source_info;

pub use error::{Error, Result};
pub use node::{Node, NodeEntry, NodeKind};
pub use parser::{parse, parse_file};
pub use source_info::SourceInfo;
