//! Picking a preferred kind out of a set of candidates.
use crate::gvk::{GroupVersion, GroupVersionKind, GroupVersions};

/// Something that can pick a preferred kind out of a list of candidates
///
/// Implemented both for a single [`GroupVersion`] and for an ordered preference list of
/// [`GroupVersions`], so encoders can be configured with either.
pub trait GroupVersioner {
    /// Stable string usable as a map or cache key
    fn identifier(&self) -> String;

    /// Pick the preferred kind out of `kinds`, or `None` if nothing matches
    fn kind_for_group_version_kinds(&self, kinds: &[GroupVersionKind])
        -> Option<GroupVersionKind>;
}

impl GroupVersion {
    /// Identify the preferred kind out of a list
    ///
    /// An exact group and version match wins. Failing that, the first kind in the same group
    /// is returned pinned to this version. Returns `None` if no kind shares this group.
    pub fn kind_for_group_version_kinds(
        &self,
        kinds: &[GroupVersionKind],
    ) -> Option<GroupVersionKind> {
        if let Some(gvk) = kinds
            .iter()
            .find(|gvk| gvk.group == self.group && gvk.version == self.version)
        {
            return Some(gvk.clone());
        }
        kinds
            .iter()
            .find(|gvk| gvk.group == self.group)
            .map(|gvk| self.with_kind(&gvk.kind))
    }
}

impl GroupVersions {
    /// Identify the preferred kind out of a list
    ///
    /// Every group version is probed in preference order. When several of them match,
    /// the first match that literally appears in `kinds` wins over one whose version was
    /// substituted in; if none does, the first match is returned.
    ///
    /// ```
    /// use apimeta_core::gvk::{GroupVersion, GroupVersionKind, GroupVersions};
    ///
    /// let prefs: GroupVersions =
    ///     vec![GroupVersion::gv("apps", "v2"), GroupVersion::gv("apps", "v1")].into();
    /// let kinds = [
    ///     GroupVersionKind::gvk("apps", "v1", "Deployment"),
    ///     GroupVersionKind::gvk("apps", "v2", "Deployment"),
    /// ];
    /// let picked = prefs.kind_for_group_version_kinds(&kinds).unwrap();
    /// assert_eq!(picked, GroupVersionKind::gvk("apps", "v2", "Deployment"));
    /// ```
    pub fn kind_for_group_version_kinds(
        &self,
        kinds: &[GroupVersionKind],
    ) -> Option<GroupVersionKind> {
        let targets = self
            .iter()
            .filter_map(|gv| gv.kind_for_group_version_kinds(kinds))
            .collect::<Vec<_>>();
        let target = match targets.as_slice() {
            [] => None,
            [only] => Some(only.clone()),
            _ => Some(best_match(kinds, &targets)),
        };
        tracing::trace!(
            preferred = %self.identifier(),
            candidates = kinds.len(),
            picked = ?target,
            "resolved preferred kind"
        );
        target
    }
}

impl GroupVersioner for GroupVersion {
    fn identifier(&self) -> String {
        GroupVersion::identifier(self)
    }

    fn kind_for_group_version_kinds(&self, kinds: &[GroupVersionKind]) -> Option<GroupVersionKind> {
        GroupVersion::kind_for_group_version_kinds(self, kinds)
    }
}

impl GroupVersioner for GroupVersions {
    fn identifier(&self) -> String {
        GroupVersions::identifier(self)
    }

    fn kind_for_group_version_kinds(&self, kinds: &[GroupVersionKind]) -> Option<GroupVersionKind> {
        GroupVersions::kind_for_group_version_kinds(self, kinds)
    }
}

// first target also present verbatim in kinds, else the first target
// NB: targets is non-empty
fn best_match(kinds: &[GroupVersionKind], targets: &[GroupVersionKind]) -> GroupVersionKind {
    if let Some(found) = targets.iter().find(|gvk| kinds.contains(gvk)) {
        return found.clone();
    }
    let first = &targets[0];
    tracing::debug!(kind = %first, "no exact match among candidates, using substituted version");
    first.clone()
}
