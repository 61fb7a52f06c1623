//! Apimeta names api resources and kinds across groups and versions.
//!
//! # Overview
//!
//! The main modules are:
//!
//! - [`core`](crate::core) with the identity value types, the name parser and the kind resolver
//! - [`flags`](crate::flags) for registering library-owned command line flags
//!
//! # Resolving names
//! ```
//! use apimeta::{parse_resource_arg, GroupVersion, GroupVersionKind, GroupVersions};
//!
//! // a user typed `deployments.v1.apps`; both readings are returned
//! let (gvr, gr) = parse_resource_arg("deployments.v1.apps");
//! assert_eq!(gvr.unwrap().to_string(), "apps/v1, Resource=deployments");
//! assert_eq!(gr.to_string(), "deployments.v1.apps");
//!
//! // pick the kind to encode with, most preferred group version first
//! let kinds = [GroupVersionKind::gvk("apps", "v1", "Deployment")];
//!
//! // a lone group match is pinned to the preferred version
//! let prefs: GroupVersions = vec!["apps/v2".parse::<GroupVersion>()?].into();
//! let gvk = prefs.kind_for_group_version_kinds(&kinds).unwrap();
//! assert_eq!(gvk, GroupVersionKind::gvk("apps", "v2", "Deployment"));
//!
//! // when several group versions match, a registered kind wins over a substituted one
//! let prefs: GroupVersions = ["apps/v2", "apps/v1"]
//!     .iter()
//!     .map(|s| s.parse::<GroupVersion>())
//!     .collect::<Result<_, _>>()?;
//! let gvk = prefs.kind_for_group_version_kinds(&kinds).unwrap();
//! assert_eq!(gvk, GroupVersionKind::gvk("apps", "v1", "Deployment"));
//! # Ok::<(), apimeta::Error>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![forbid(unsafe_code)]

/// Re-exports from apimeta-core
#[doc(inline)]
pub use apimeta_core as core;

pub use crate::core::{
    parse_kind_arg, parse_resource_arg, GroupKind, GroupResource, GroupVersion, GroupVersionKind,
    GroupVersionResource, GroupVersioner, GroupVersions,
};

pub mod error;
#[doc(inline)]
pub use error::{Error, Result};

#[cfg(feature = "cli")]
#[cfg_attr(docsrs, doc(cfg(feature = "cli")))]
pub mod flags;
