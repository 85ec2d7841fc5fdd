//! Structural type descriptions used to drive decoding.
//!
//! A [`StructSchema`] describes one Go struct type: the package it lives in,
//! its printed name, and its fields in declaration order. Field types are
//! [`TypeRef`]s, which bottom out either in scalar kinds or in a [`Named`]
//! reference resolved through the registry.
//!
//! [`Named`]: TypeRef::Named

use std::fmt;

/// A structural reference to a field's type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    String,
    Bool,
    Int32,
    Int64,
    Uint32,
    Float32,
    Float64,
    Pointer(Box<TypeRef>),
    Sequence(Box<TypeRef>),
    Mapping(Box<TypeRef>, Box<TypeRef>),
    /// Reference to a registered struct type by its printed name,
    /// e.g. `v1.ObjectMeta`.
    Named(String),
}

impl TypeRef {
    pub fn pointer(inner: TypeRef) -> Self {
        TypeRef::Pointer(Box::new(inner))
    }

    pub fn sequence(elem: TypeRef) -> Self {
        TypeRef::Sequence(Box::new(elem))
    }

    pub fn mapping(key: TypeRef, value: TypeRef) -> Self {
        TypeRef::Mapping(Box::new(key), Box::new(value))
    }

    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    /// The printed Go name of a scalar kind. `None` for compound kinds.
    pub(crate) fn scalar_name(&self) -> Option<&'static str> {
        match self {
            TypeRef::String => Some("string"),
            TypeRef::Bool => Some("bool"),
            TypeRef::Int32 => Some("int32"),
            TypeRef::Int64 => Some("int64"),
            TypeRef::Uint32 => Some("uint32"),
            TypeRef::Float32 => Some("float32"),
            TypeRef::Float64 => Some("float64"),
            _ => None,
        }
    }
}

/// One field of a [`StructSchema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    /// Go field name, e.g. `Replicas`.
    pub name: String,
    /// Key under which the field appears in YAML, e.g. `replicas`.
    pub yaml_name: String,
    /// Derived from the Go field name: exported iff it starts uppercase.
    pub exported: bool,
    pub ty: TypeRef,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, yaml_name: impl Into<String>, ty: TypeRef) -> Self {
        let name = name.into();
        let exported = name.chars().next().is_some_and(char::is_uppercase);
        Self {
            name,
            yaml_name: yaml_name.into(),
            exported,
            ty,
        }
    }
}

/// Description of one registered Go struct type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructSchema {
    /// Package import path, e.g. `k8s.io/api/apps/v1`.
    pub namespace: String,
    /// Printed type name, e.g. `v1.Deployment`.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldSchema>,
}

impl StructSchema {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: &str, yaml_name: &str, ty: TypeRef) -> Self {
        self.fields.push(FieldSchema::new(name, yaml_name, ty));
        self
    }
}

/// Identity of a document kind: API group, version, and kind name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GroupVersionKind {
    /// Empty for the core API group.
    pub group: String,
    pub version: String,
    pub kind: String,
}

impl GroupVersionKind {
    pub fn new(
        group: impl Into<String>,
        version: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            version: version.into(),
            kind: kind.into(),
        }
    }

    /// Build a GVK from a document's `apiVersion` and `kind` values.
    ///
    /// `apiVersion` is either `group/version` or a bare `version` for the
    /// core group, e.g. `apps/v1` or `v1`.
    pub fn from_api_version(api_version: &str, kind: &str) -> Self {
        match api_version.split_once('/') {
            Some((group, version)) => Self::new(group, version, kind),
            None => Self::new("", api_version, kind),
        }
    }
}

impl fmt::Display for GroupVersionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.group.is_empty() {
            write!(f, "{}, Kind={}", self.version, self.kind)
        } else {
            write!(f, "{}/{}, Kind={}", self.group, self.version, self.kind)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gvk_from_api_version() {
        let gvk = GroupVersionKind::from_api_version("apps/v1", "Deployment");
        assert_eq!(gvk.group, "apps");
        assert_eq!(gvk.version, "v1");
        assert_eq!(gvk.kind, "Deployment");

        let core = GroupVersionKind::from_api_version("v1", "Service");
        assert_eq!(core.group, "");
        assert_eq!(core.version, "v1");
    }

    #[test]
    fn test_gvk_display() {
        let gvk = GroupVersionKind::from_api_version("apps/v1", "Deployment");
        assert_eq!(gvk.to_string(), "apps/v1, Kind=Deployment");
        let core = GroupVersionKind::from_api_version("v1", "Service");
        assert_eq!(core.to_string(), "v1, Kind=Service");
    }

    #[test]
    fn test_field_exported_derivation() {
        assert!(FieldSchema::new("Replicas", "replicas", TypeRef::Int32).exported);
        assert!(!FieldSchema::new("unexported", "unexported", TypeRef::String).exported);
    }
}
