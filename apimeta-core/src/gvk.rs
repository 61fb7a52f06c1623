//! Type information structs naming resources and kinds across groups and versions.
use std::{fmt, ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unexpected GroupVersion string: {0}")]
/// Failed to parse group version.
pub struct ParseGroupVersionError(pub String);

/// A group and a resource, without forcing a version.
///
/// Useful for identifying concepts during lookup stages without having partially valid types.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupResource {
    /// API group
    pub group: String,
    /// Plural resource name
    pub resource: String,
}

impl GroupResource {
    /// Construct from explicit group and resource
    pub fn gr(group_: &str, resource_: &str) -> Self {
        let group = group_.to_string();
        let resource = resource_.to_string();
        Self { group, resource }
    }

    /// Parse a `resource.group` string, splitting on the first dot
    pub fn parse(gr: &str) -> Self {
        crate::parse::parse_group_resource(gr)
    }

    /// Pin this group resource to a version
    pub fn with_version(&self, version: &str) -> GroupVersionResource {
        GroupVersionResource::gvr(&self.group, version, &self.resource)
    }

    /// True when both group and resource are empty
    pub fn is_empty(&self) -> bool {
        self.group.is_empty() && self.resource.is_empty()
    }
}

impl fmt::Display for GroupResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            f.write_str(&self.resource)
        } else {
            write!(f, "{}.{}", self.resource, self.group)
        }
    }
}

impl From<&str> for GroupResource {
    fn from(gr: &str) -> Self {
        GroupResource::parse(gr)
    }
}

/// A group and a kind, without forcing a version.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupKind {
    /// API group
    pub group: String,
    /// Kind
    pub kind: String,
}

impl GroupKind {
    /// Construct from explicit group and kind
    pub fn gk(group_: &str, kind_: &str) -> Self {
        let group = group_.to_string();
        let kind = kind_.to_string();
        Self { group, kind }
    }

    /// Parse a `Kind.group` string, splitting on the first dot
    pub fn parse(gk: &str) -> Self {
        crate::parse::parse_group_kind(gk)
    }

    /// Pin this group kind to a version
    pub fn with_version(&self, version: &str) -> GroupVersionKind {
        GroupVersionKind::gvk(&self.group, version, &self.kind)
    }

    /// True when both group and kind are empty
    pub fn is_empty(&self) -> bool {
        self.group.is_empty() && self.kind.is_empty()
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            f.write_str(&self.kind)
        } else {
            write!(f, "{}.{}", self.kind, self.group)
        }
    }
}

impl From<&str> for GroupKind {
    fn from(gk: &str) -> Self {
        GroupKind::parse(gk)
    }
}

/// Core information about an API Resource.
///
/// Does not embed a [`GroupVersion`] so that the three fields compare and serialize flat.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupVersionKind {
    /// API group
    pub group: String,
    /// Version
    pub version: String,
    /// Kind
    pub kind: String,
}

impl GroupVersionKind {
    /// Construct from explicit group, version, and kind
    pub fn gvk(group_: &str, version_: &str, kind_: &str) -> Self {
        let version = version_.to_string();
        let group = group_.to_string();
        let kind = kind_.to_string();

        Self { group, version, kind }
    }

    /// Drop the version
    pub fn group_kind(&self) -> GroupKind {
        GroupKind::gk(&self.group, &self.kind)
    }

    /// Drop the kind
    pub fn group_version(&self) -> GroupVersion {
        GroupVersion::gv(&self.group, &self.version)
    }

    /// Generate the apiVersion string used in a kind's yaml
    pub fn api_version(&self) -> String {
        self.group_version().api_version()
    }

    /// True when group, version and kind are all empty
    pub fn is_empty(&self) -> bool {
        self.group.is_empty() && self.version.is_empty() && self.kind.is_empty()
    }

    /// Split into the `apiVersion` and `kind` strings stored on serialized objects
    ///
    /// An empty kind renders as two empty strings.
    pub fn to_api_version_and_kind(&self) -> (String, String) {
        if self.is_empty() {
            return (String::new(), String::new());
        }
        (self.api_version(), self.kind.clone())
    }

    /// Rebuild from the `apiVersion` and `kind` strings stored on serialized objects
    ///
    /// A malformed `api_version` is discarded and only the kind is kept.
    /// Use [`GroupVersionKind::try_from_api_version_and_kind`] to surface the parse failure.
    pub fn from_api_version_and_kind(api_version: &str, kind: &str) -> Self {
        Self::try_from_api_version_and_kind(api_version, kind).unwrap_or_else(|err| {
            tracing::debug!(%err, kind, "ignoring malformed apiVersion");
            Self::gvk("", "", kind)
        })
    }

    /// Rebuild from the `apiVersion` and `kind` strings, failing on a malformed `api_version`
    pub fn try_from_api_version_and_kind(
        api_version: &str,
        kind: &str,
    ) -> Result<Self, ParseGroupVersionError> {
        Ok(api_version.parse::<GroupVersion>()?.with_kind(kind))
    }
}

impl fmt::Display for GroupVersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}, Kind={}", self.group, self.version, self.kind)
    }
}

/// Core information about a family of API Resources
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupVersion {
    /// API group
    pub group: String,
    /// Version
    pub version: String,
}

impl GroupVersion {
    /// Construct from explicit group and version
    pub fn gv(group_: &str, version_: &str) -> Self {
        let version = version_.to_string();
        let group = group_.to_string();
        Self { group, version }
    }

    /// Upgrade a GroupVersion to a GroupVersionKind
    pub fn with_kind(&self, kind: &str) -> GroupVersionKind {
        GroupVersionKind::gvk(&self.group, &self.version, kind)
    }

    /// Upgrade a GroupVersion to a GroupVersionResource
    pub fn with_resource(&self, resource: &str) -> GroupVersionResource {
        GroupVersionResource::gvr(&self.group, &self.version, resource)
    }

    /// True when both group and version are empty
    ///
    /// The empty value doubles as the "unversioned" sentinel.
    pub fn is_empty(&self) -> bool {
        self.group.is_empty() && self.version.is_empty()
    }

    /// Generate the apiVersion string used in a kind's yaml
    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }

    /// Stable string usable as a map or cache key
    pub fn identifier(&self) -> String {
        self.api_version()
    }
}

impl fmt::Display for GroupVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            f.write_str(&self.version)
        } else {
            write!(f, "{}/{}", self.group, self.version)
        }
    }
}

impl FromStr for GroupVersion {
    type Err = ParseGroupVersionError;

    fn from_str(gv: &str) -> Result<Self, Self::Err> {
        // unversioned sentinel
        if gv.is_empty() || gv == "/" {
            return Ok(Self::default());
        }
        match gv.split_once('/') {
            None => Ok(Self::gv("", gv)), // core v1 case
            Some((group, version)) if !version.contains('/') => Ok(Self::gv(group, version)),
            Some(_) => Err(ParseGroupVersionError(gv.into())),
        }
    }
}

/// Represents a type-erased object resource.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupVersionResource {
    /// API group
    pub group: String,
    /// Version
    pub version: String,
    /// Resource
    pub resource: String,
}

impl GroupVersionResource {
    /// Set the api group, version, and the plural resource name.
    pub fn gvr(group_: &str, version_: &str, resource_: &str) -> Self {
        let version = version_.to_string();
        let group = group_.to_string();
        let resource = resource_.to_string();

        Self {
            group,
            version,
            resource,
        }
    }

    /// Drop the version
    pub fn group_resource(&self) -> GroupResource {
        GroupResource::gr(&self.group, &self.resource)
    }

    /// Drop the resource
    pub fn group_version(&self) -> GroupVersion {
        GroupVersion::gv(&self.group, &self.version)
    }

    /// Concatenation of group and version
    pub fn api_version(&self) -> String {
        self.group_version().api_version()
    }

    /// True when group, version and resource are all empty
    pub fn is_empty(&self) -> bool {
        self.group.is_empty() && self.version.is_empty() && self.resource.is_empty()
    }
}

impl fmt::Display for GroupVersionResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}, Resource={}", self.group, self.version, self.resource)
    }
}

impl From<GroupVersionKind> for GroupKind {
    fn from(gvk: GroupVersionKind) -> Self {
        GroupKind {
            group: gvk.group,
            kind: gvk.kind,
        }
    }
}

impl From<GroupVersionKind> for GroupVersion {
    fn from(gvk: GroupVersionKind) -> Self {
        GroupVersion {
            group: gvk.group,
            version: gvk.version,
        }
    }
}

impl From<GroupVersionResource> for GroupResource {
    fn from(gvr: GroupVersionResource) -> Self {
        GroupResource {
            group: gvr.group,
            resource: gvr.resource,
        }
    }
}

impl From<GroupVersionResource> for GroupVersion {
    fn from(gvr: GroupVersionResource) -> Self {
        GroupVersion {
            group: gvr.group,
            version: gvr.version,
        }
    }
}

/// An ordered set of desired group versions, most preferred first.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct GroupVersions(pub Vec<GroupVersion>);

impl GroupVersions {
    /// Stable string usable as a map or cache key, e.g. `[apps/v1,v1]`
    pub fn identifier(&self) -> String {
        let gvs = self.0.iter().map(GroupVersion::to_string).collect::<Vec<_>>();
        format!("[{}]", gvs.join(","))
    }
}

impl Deref for GroupVersions {
    type Target = [GroupVersion];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<GroupVersion>> for GroupVersions {
    fn from(gvs: Vec<GroupVersion>) -> Self {
        Self(gvs)
    }
}

impl FromIterator<GroupVersion> for GroupVersions {
    fn from_iter<I: IntoIterator<Item = GroupVersion>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for GroupVersions {
    type IntoIter = ::std::vec::IntoIter<Self::Item>;
    type Item = GroupVersion;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a GroupVersions {
    type IntoIter = ::std::slice::Iter<'a, GroupVersion>;
    type Item = &'a GroupVersion;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_json_diff::assert_json_eq;
    use serde_json::json;

    #[test]
    fn parse_group_version_without_slash() {
        for s in ["v1", "v1beta1", "apps", "a.b.c"] {
            assert_eq!(s.parse::<GroupVersion>().unwrap(), GroupVersion::gv("", s));
        }
    }

    #[test]
    fn parse_group_version_with_one_slash() {
        let gv: GroupVersion = "apps/v1".parse().unwrap();
        assert_eq!(gv, GroupVersion::gv("apps", "v1"));
        let gv: GroupVersion = "apps/".parse().unwrap();
        assert_eq!(gv, GroupVersion::gv("apps", ""));
        let gv: GroupVersion = "/v1".parse().unwrap();
        assert_eq!(gv, GroupVersion::gv("", "v1"));
    }

    #[test]
    fn parse_group_version_sentinels() {
        assert!("".parse::<GroupVersion>().unwrap().is_empty());
        assert!("/".parse::<GroupVersion>().unwrap().is_empty());
    }

    #[test]
    fn parse_group_version_rejects_extra_slashes() {
        for s in ["a/b/c", "//", "apps/v1/", "/a/b"] {
            let err = s.parse::<GroupVersion>().unwrap_err();
            assert_eq!(err, ParseGroupVersionError(s.into()));
        }
        let err = "a/b/c".parse::<GroupVersion>().unwrap_err();
        assert_eq!(err.to_string(), "unexpected GroupVersion string: a/b/c");
    }

    #[test]
    fn group_version_display_round_trips() {
        let gv = GroupVersion::gv("apps", "v1");
        assert_eq!(gv.to_string(), "apps/v1");
        assert_eq!(gv.to_string().parse::<GroupVersion>().unwrap(), gv);

        let core = GroupVersion::gv("", "v1");
        assert_eq!(core.to_string(), "v1");
        assert_eq!(core.to_string().parse::<GroupVersion>().unwrap(), core);
        assert_eq!(core.identifier(), "v1");
    }

    #[test]
    fn renderings() {
        assert_eq!(GroupResource::gr("", "pods").to_string(), "pods");
        assert_eq!(GroupResource::gr("apps", "deployments").to_string(), "deployments.apps");
        assert_eq!(GroupKind::gk("", "Pod").to_string(), "Pod");
        assert_eq!(GroupKind::gk("apps", "Deployment").to_string(), "Deployment.apps");
        assert_eq!(
            GroupVersionResource::gvr("", "v1", "pods").to_string(),
            "/v1, Resource=pods"
        );
        assert_eq!(
            GroupVersionKind::gvk("apps", "v1", "Deployment").to_string(),
            "apps/v1, Kind=Deployment"
        );
        assert_eq!(GroupVersionKind::gvk("", "v1", "Pod").to_string(), "/v1, Kind=Pod");
    }

    #[test]
    fn emptiness_requires_every_field_empty() {
        assert!(GroupResource::default().is_empty());
        assert!(!GroupResource::gr("", "pods").is_empty());
        assert!(GroupKind::default().is_empty());
        assert!(!GroupKind::gk("apps", "").is_empty());
        assert!(GroupVersion::default().is_empty());
        assert!(!GroupVersion::gv("", "v1").is_empty());
        assert!(GroupVersionKind::default().is_empty());
        assert!(!GroupVersionKind::gvk("", "", "Pod").is_empty());
        assert!(GroupVersionResource::default().is_empty());
        assert!(!GroupVersionResource::gvr("", "v1", "").is_empty());
    }

    #[test]
    fn projections() {
        let gvk = GroupVersionKind::gvk("apps", "v1", "Deployment");
        assert_eq!(gvk.group_kind(), GroupKind::gk("apps", "Deployment"));
        assert_eq!(gvk.group_version(), GroupVersion::gv("apps", "v1"));
        assert_eq!(
            gvk.group_kind().with_version("v2"),
            GroupVersionKind::gvk("apps", "v2", "Deployment")
        );
        assert_eq!(GroupKind::from(gvk.clone()), gvk.group_kind());
        assert_eq!(GroupVersion::from(gvk.clone()), gvk.group_version());

        let gvr = GroupVersionResource::gvr("apps", "v1", "deployments");
        assert_eq!(gvr.group_resource(), GroupResource::gr("apps", "deployments"));
        assert_eq!(gvr.group_version(), GroupVersion::gv("apps", "v1"));
        assert_eq!(gvr.group_resource().with_version("v1"), gvr);
        assert_eq!(
            gvr.group_version().with_resource(""),
            GroupVersionResource::gvr("apps", "v1", "")
        );
        assert_eq!(GroupResource::from(gvr.clone()), gvr.group_resource());
        assert_eq!(GroupVersion::from(gvr), GroupVersion::gv("apps", "v1"));
    }

    #[test]
    fn api_version_and_kind() {
        let gvk = GroupVersionKind::gvk("apps", "v1", "Deployment");
        assert_eq!(
            gvk.to_api_version_and_kind(),
            ("apps/v1".to_string(), "Deployment".to_string())
        );
        assert_eq!(
            GroupVersionKind::default().to_api_version_and_kind(),
            (String::new(), String::new())
        );
        assert_eq!(GroupVersionKind::from_api_version_and_kind("apps/v1", "Deployment"), gvk);
        assert_eq!(
            GroupVersionKind::from_api_version_and_kind("v1", "Pod"),
            GroupVersionKind::gvk("", "v1", "Pod")
        );
        assert_eq!(
            GroupVersionKind::from_api_version_and_kind("a/b/c", "Pod"),
            GroupVersionKind::gvk("", "", "Pod")
        );
        assert!(GroupVersionKind::try_from_api_version_and_kind("a/b/c", "Pod").is_err());
    }

    #[test]
    fn group_versions_identifier() {
        let gvs: GroupVersions =
            vec![GroupVersion::gv("g1", "v1"), GroupVersion::gv("", "v2")].into();
        assert_eq!(gvs.identifier(), "[g1/v1,v2]");
        assert_eq!(GroupVersions::default().identifier(), "[]");
        assert_eq!(gvs.len(), 2);
        assert_eq!(gvs.iter().next(), Some(&GroupVersion::gv("g1", "v1")));
    }

    #[test]
    fn serializes_flat() {
        let gvk = GroupVersionKind::gvk("apps", "v1", "Deployment");
        assert_json_eq!(
            serde_json::to_value(&gvk).unwrap(),
            json!({"group": "apps", "version": "v1", "kind": "Deployment"})
        );
        let gvs = GroupVersions(vec![GroupVersion::gv("apps", "v1")]);
        assert_json_eq!(
            serde_json::to_value(&gvs).unwrap(),
            json!([{"group": "apps", "version": "v1"}])
        );
    }
}
