//! Metadata structs and accessor traits used by serializable objects and lists.
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::gvk::GroupVersionKind;

/// Sets and reads the type information stamped onto the serialized form of an object
///
/// For objects that cannot be serialized or have unique requirements this may be a no-op,
/// see [`EmptyObjectKind`].
pub trait ObjectKind {
    /// Sets or clears the intended serialized kind of an object
    ///
    /// Passing an empty kind clears the current setting.
    fn set_group_version_kind(&mut self, gvk: GroupVersionKind);

    /// Returns the stored group, version, and kind of an object
    ///
    /// Objects that do not carry type information return an empty kind.
    fn group_version_kind(&self) -> GroupVersionKind;
}

/// No-op [`ObjectKind`] for objects without type information
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EmptyObjectKind;

/// Shared no-op [`ObjectKind`]
pub const EMPTY_OBJECT_KIND: EmptyObjectKind = EmptyObjectKind;

impl ObjectKind for EmptyObjectKind {
    fn set_group_version_kind(&mut self, _gvk: GroupVersionKind) {}

    fn group_version_kind(&self) -> GroupVersionKind {
        GroupVersionKind::default()
    }
}

/// An object exposing its serialization type information
pub trait HasObjectKind {
    /// The type information carrier of this object
    fn object_kind(&self) -> &dyn ObjectKind;

    /// Mutable access to the type information carrier of this object
    fn object_kind_mut(&mut self) -> &mut dyn ObjectKind;
}

/// Raw access to the `apiVersion` and `kind` strings of an object
pub trait TypeAccessor {
    /// The API version of the object
    fn api_version(&self) -> &str;
    /// Set the API version of the object
    fn set_api_version(&mut self, version: &str);
    /// The kind of the object
    fn kind(&self) -> &str;
    /// Set the kind of the object
    fn set_kind(&mut self, kind: &str);
}

/// Type information that is flattened into every serialized object
///
/// The two strings are kept verbatim for wire compatibility. Compare objects through
/// [`ObjectKind::group_version_kind`] rather than through these fields.
#[derive(Deserialize, Serialize, Clone, Default, Debug, Eq, PartialEq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct TypeMeta {
    /// The version of the API
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_version: String,

    /// The name of the API
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
}

impl TypeMeta {
    /// Construct the type information for a known kind
    pub fn from_gvk(gvk: &GroupVersionKind) -> Self {
        let (api_version, kind) = gvk.to_api_version_and_kind();
        Self { api_version, kind }
    }

    /// Parse the stored strings, failing on a malformed `apiVersion`
    pub fn try_group_version_kind(&self) -> crate::Result<GroupVersionKind> {
        Ok(GroupVersionKind::try_from_api_version_and_kind(
            &self.api_version,
            &self.kind,
        )?)
    }
}

impl ObjectKind for TypeMeta {
    fn set_group_version_kind(&mut self, gvk: GroupVersionKind) {
        (self.api_version, self.kind) = gvk.to_api_version_and_kind();
    }

    fn group_version_kind(&self) -> GroupVersionKind {
        GroupVersionKind::from_api_version_and_kind(&self.api_version, &self.kind)
    }
}

impl HasObjectKind for TypeMeta {
    fn object_kind(&self) -> &dyn ObjectKind {
        self
    }

    fn object_kind_mut(&mut self) -> &mut dyn ObjectKind {
        self
    }
}

impl TypeAccessor for TypeMeta {
    fn api_version(&self) -> &str {
        &self.api_version
    }

    fn set_api_version(&mut self, version: &str) {
        self.api_version = version.to_string();
    }

    fn kind(&self) -> &str {
        &self.kind
    }

    fn set_kind(&mut self, kind: &str) {
        self.kind = kind.to_string();
    }
}

/// Accessors for the metadata common to all persisted objects
pub trait ObjectAccessor {
    /// Numeric identity of the object
    fn id(&self) -> u64;
    /// Set the numeric identity of the object
    fn set_id(&mut self, id: u64);
    /// Name of the object
    fn name(&self) -> &str;
    /// Set the name of the object
    fn set_name(&mut self, name: &str);
    /// Creation time of the object
    fn created_at(&self) -> Timestamp;
    /// Set the creation time of the object
    fn set_created_at(&mut self, created_at: Timestamp);
    /// Last update time of the object
    fn updated_at(&self) -> Timestamp;
    /// Set the last update time of the object
    fn set_updated_at(&mut self, updated_at: Timestamp);
}

/// Accessors for the metadata of list responses
pub trait ListAccessor {
    /// Total number of items across all pages
    fn total_count(&self) -> i64;
    /// Set the total number of items across all pages
    fn set_total_count(&mut self, count: i64);
}

/// An object exposing its [`ObjectAccessor`]
pub trait HasObjectMeta {
    /// The metadata of this object
    fn object_meta(&self) -> &dyn ObjectAccessor;

    /// Mutable access to the metadata of this object
    fn object_meta_mut(&mut self) -> &mut dyn ObjectAccessor;
}

/// A list exposing its [`ListAccessor`]
pub trait HasListMeta {
    /// The metadata of this list
    fn list_meta(&self) -> &dyn ListAccessor;

    /// Mutable access to the metadata of this list
    fn list_meta_mut(&mut self) -> &mut dyn ListAccessor;
}

/// Metadata that all persisted objects carry
#[derive(Deserialize, Serialize, Clone, Default, Debug, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectMeta {
    /// Numeric identity, unique per kind
    #[serde(default)]
    pub id: u64,

    /// Name, unique per kind
    #[serde(default)]
    pub name: String,

    /// Creation time
    #[serde(default)]
    pub created_at: Timestamp,

    /// Last update time
    #[serde(default)]
    pub updated_at: Timestamp,
}

impl ObjectAccessor for ObjectMeta {
    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn set_created_at(&mut self, created_at: Timestamp) {
        self.created_at = created_at;
    }

    fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    fn set_updated_at(&mut self, updated_at: Timestamp) {
        self.updated_at = updated_at;
    }
}

impl HasObjectMeta for ObjectMeta {
    fn object_meta(&self) -> &dyn ObjectAccessor {
        self
    }

    fn object_meta_mut(&mut self) -> &mut dyn ObjectAccessor {
        self
    }
}

/// Metadata of list responses
#[derive(Deserialize, Serialize, Clone, Default, Debug, Eq, PartialEq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct ListMeta {
    /// Total number of items across all pages
    #[serde(default)]
    pub total_count: i64,
}

impl ListAccessor for ListMeta {
    fn total_count(&self) -> i64 {
        self.total_count
    }

    fn set_total_count(&mut self, count: i64) {
        self.total_count = count;
    }
}

impl HasListMeta for ListMeta {
    fn list_meta(&self) -> &dyn ListAccessor {
        self
    }

    fn list_meta_mut(&mut self) -> &mut dyn ListAccessor {
        self
    }
}
