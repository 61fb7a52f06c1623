//! Crate with the value types naming api resources and kinds
//!
//! Covers:
//! - [`gvk`]: group / version / kind / resource identities and their string forms
//! - [`parse`]: reading loosely qualified names like `deployments.v1.apps`
//! - [`resolve`]: picking a preferred kind out of a set of candidates
//! - [`metadata`]: type information carriers and metadata accessor traits
//!
//! The same information here is re-exported from `apimeta` under `apimeta::core`.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod gvk;
pub use gvk::{
    GroupKind, GroupResource, GroupVersion, GroupVersionKind, GroupVersionResource, GroupVersions,
    ParseGroupVersionError,
};

pub mod metadata;
pub use metadata::{
    EmptyObjectKind, HasListMeta, HasObjectKind, HasObjectMeta, ListAccessor, ListMeta,
    ObjectAccessor, ObjectKind, ObjectMeta, TypeAccessor, TypeMeta, EMPTY_OBJECT_KIND,
};

pub mod parse;
pub use parse::{parse_kind_arg, parse_resource_arg};

pub mod resolve;
pub use resolve::GroupVersioner;

mod error;
pub use error::Error;

/// Convient alias for `Result<T, Error>`
pub type Result<T, E = Error> = std::result::Result<T, E>;
