//! Parsing of loosely qualified resource and kind names.
//!
//! Names given by users take the form `name`, `name.group.tld` or `name.version.group.tld`.
//! These functions never pick one interpretation over the other; they return every
//! structurally valid reading and leave the choice to callers that know which
//! group versions are actually served.
use crate::gvk::{GroupKind, GroupResource, GroupVersionKind, GroupVersionResource};

/// Parse a `resource.group` string into a [`GroupResource`]
///
/// Splits on the first dot. Empty strings are allowed for each field.
pub fn parse_group_resource(gr: &str) -> GroupResource {
    match gr.split_once('.') {
        Some((resource, group)) => GroupResource::gr(group, resource),
        None => GroupResource::gr("", gr),
    }
}

/// Parse a `Kind.group` string into a [`GroupKind`]
///
/// Splits on the first dot. Empty strings are allowed for each field.
pub fn parse_group_kind(gk: &str) -> GroupKind {
    match gk.split_once('.') {
        Some((kind, group)) => GroupKind::gk(group, kind),
        None => GroupKind::gk("", gk),
    }
}

/// Parse a resource argument into both of its possible readings
///
/// `deployments.v1.apps` yields the fully qualified `apps/v1, Resource=deployments`
/// alongside the coarse `deployments.v1.apps` group resource (group `v1.apps`).
/// With fewer than two dots there is no fully qualified reading and the first
/// element is `None`.
///
/// ```
/// use apimeta_core::parse::parse_resource_arg;
/// use apimeta_core::gvk::{GroupResource, GroupVersionResource};
///
/// let (gvr, gr) = parse_resource_arg("pods.v1.apps");
/// assert_eq!(gvr, Some(GroupVersionResource::gvr("apps", "v1", "pods")));
/// assert_eq!(gr, GroupResource::gr("v1.apps", "pods"));
///
/// let (gvr, gr) = parse_resource_arg("pods");
/// assert_eq!(gvr, None);
/// assert_eq!(gr, GroupResource::gr("", "pods"));
/// ```
pub fn parse_resource_arg(arg: &str) -> (Option<GroupVersionResource>, GroupResource) {
    let gvr = split_qualified(arg)
        .map(|(resource, version, group)| GroupVersionResource::gvr(group, version, resource));
    (gvr, parse_group_resource(arg))
}

/// Parse a kind argument into both of its possible readings
///
/// Same rules as [`parse_resource_arg`], with a kind in place of the resource.
pub fn parse_kind_arg(arg: &str) -> (Option<GroupVersionKind>, GroupKind) {
    let gvk = split_qualified(arg)
        .map(|(kind, version, group)| GroupVersionKind::gvk(group, version, kind));
    (gvk, parse_group_kind(arg))
}

// name, version, and the remainder verbatim as group; needs at least two dots
fn split_qualified(arg: &str) -> Option<(&str, &str, &str)> {
    let mut parts = arg.splitn(3, '.');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(version), Some(group)) => Some((name, version, group)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_resource_has_no_qualified_form() {
        let (gvr, gr) = parse_resource_arg("pods");
        assert!(gvr.is_none());
        assert_eq!(gr, GroupResource::gr("", "pods"));
    }

    #[test]
    fn single_dot_is_group_only() {
        let (gvr, gr) = parse_resource_arg("pods.apps");
        assert!(gvr.is_none());
        assert_eq!(gr, GroupResource::gr("apps", "pods"));
    }

    #[test]
    fn two_dots_yield_both_readings() {
        let (gvr, gr) = parse_resource_arg("pods.v1.apps");
        assert_eq!(gvr, Some(GroupVersionResource::gvr("apps", "v1", "pods")));
        assert_eq!(gr, GroupResource::gr("v1.apps", "pods"));
    }

    #[test]
    fn group_keeps_remaining_dots() {
        let (gvr, gr) = parse_resource_arg("certificates.v1.cert-manager.io");
        assert_eq!(
            gvr,
            Some(GroupVersionResource::gvr("cert-manager.io", "v1", "certificates"))
        );
        assert_eq!(gr, GroupResource::gr("v1.cert-manager.io", "certificates"));

        // may just as well be a group with no version given
        let (gvr, gr) = parse_resource_arg("deployments.apps.k8s.io");
        assert_eq!(gvr, Some(GroupVersionResource::gvr("k8s.io", "apps", "deployments")));
        assert_eq!(gr, GroupResource::gr("apps.k8s.io", "deployments"));
    }

    #[test]
    fn stray_dots_produce_empty_segments() {
        let (gvr, gr) = parse_resource_arg("pods.v1.");
        assert_eq!(gvr, Some(GroupVersionResource::gvr("", "v1", "pods")));
        assert_eq!(gr, GroupResource::gr("v1.", "pods"));

        let (gvr, gr) = parse_resource_arg(".pods");
        assert!(gvr.is_none());
        assert_eq!(gr, GroupResource::gr("pods", ""));

        let (gvr, gr) = parse_resource_arg("..");
        assert_eq!(gvr, Some(GroupVersionResource::default()));
        assert_eq!(gr, GroupResource::gr(".", ""));

        let (gvr, gr) = parse_resource_arg("");
        assert!(gvr.is_none());
        assert!(gr.is_empty());
    }

    #[test]
    fn kind_args_follow_the_same_rules() {
        let (gvk, gk) = parse_kind_arg("Deployment");
        assert!(gvk.is_none());
        assert_eq!(gk, GroupKind::gk("", "Deployment"));

        let (gvk, gk) = parse_kind_arg("Deployment.apps");
        assert!(gvk.is_none());
        assert_eq!(gk, GroupKind::gk("apps", "Deployment"));

        let (gvk, gk) = parse_kind_arg("Issuer.v1.cert-manager.io");
        assert_eq!(gvk, Some(GroupVersionKind::gvk("cert-manager.io", "v1", "Issuer")));
        assert_eq!(gk, GroupKind::gk("v1.cert-manager.io", "Issuer"));
    }

    #[test]
    fn from_str_conversions_split_on_first_dot() {
        assert_eq!(
            GroupResource::from("ingresses.networking.k8s.io"),
            GroupResource::gr("networking.k8s.io", "ingresses")
        );
        assert_eq!(GroupKind::from("Pod"), GroupKind::gk("", "Pod"));
    }

    #[test]
    fn parse_methods_match_free_functions() {
        assert_eq!(
            GroupResource::parse("ingresses.networking.k8s.io"),
            GroupResource::gr("networking.k8s.io", "ingresses")
        );
        assert_eq!(GroupResource::parse("pods"), GroupResource::gr("", "pods"));
        assert_eq!(GroupResource::parse(".pods"), GroupResource::gr("pods", ""));
        assert_eq!(GroupKind::parse("Deployment.apps"), GroupKind::gk("apps", "Deployment"));
        assert_eq!(GroupKind::parse("Pod"), GroupKind::gk("", "Pod"));
        for arg in ["a", "a.b", "a.b.c", "", "."] {
            assert_eq!(GroupKind::parse(arg), parse_group_kind(arg));
            assert_eq!(GroupResource::parse(arg), parse_group_resource(arg));
        }
    }
}
