//! Kind-to-schema lookup.

use indexmap::IndexMap;

use crate::{
    DeclaredType, Error, GroupVersionKind, Result, StructField, StructSchema, TypeRef, TypedValue,
    ValueKind,
};

/// Registry of decodable types.
///
/// Maps a document's group/version/kind to the schema of its root struct, and
/// holds the named-type table through which `TypeRef::Named` references are
/// resolved. Insertion order is preserved so diagnostics list kinds in
/// registration order.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    kinds: IndexMap<GroupVersionKind, String>,
    types: IndexMap<String, StructSchema>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a struct schema under its printed type name.
    pub fn register_type(&mut self, schema: StructSchema) {
        self.types.insert(schema.name.clone(), schema);
    }

    /// Associate a group/version/kind with the name of its root struct type.
    pub fn register_kind(&mut self, gvk: GroupVersionKind, type_name: impl Into<String>) {
        self.kinds.insert(gvk, type_name.into());
    }

    /// Resolve the root schema for a document kind.
    pub fn schema_for_kind(&self, gvk: &GroupVersionKind) -> Option<&StructSchema> {
        let name = self.kinds.get(gvk)?;
        self.types.get(name)
    }

    /// Resolve a named struct schema. Dangling references are registration
    /// bugs and surface as errors.
    pub fn schema(&self, name: &str) -> Result<&StructSchema> {
        self.types
            .get(name)
            .ok_or_else(|| Box::new(Error::UnknownType { name: name.into() }))
    }

    /// Registered kinds in registration order.
    pub fn kinds(&self) -> impl Iterator<Item = &GroupVersionKind> {
        self.kinds.keys()
    }

    /// The declared type identity a value of `ty` carries.
    ///
    /// Sequences take the *element* type's package as their namespace, which
    /// is what the alias rewrite keys off when emitting `[]v1.Container{...}`.
    pub fn declared_type(&self, ty: &TypeRef) -> Result<DeclaredType> {
        if let Some(name) = ty.scalar_name() {
            return Ok(DeclaredType::unqualified(name));
        }
        match ty {
            TypeRef::Pointer(inner) => {
                let inner = self.declared_type(inner)?;
                Ok(DeclaredType::unqualified(format!("*{}", inner.name)))
            }
            TypeRef::Sequence(elem) => {
                let elem = self.declared_type(elem)?;
                Ok(DeclaredType::new(elem.namespace, format!("[]{}", elem.name)))
            }
            TypeRef::Mapping(key, value) => {
                let key = self.declared_type(key)?;
                let value = self.declared_type(value)?;
                Ok(DeclaredType::unqualified(format!(
                    "map[{}]{}",
                    key.name, value.name
                )))
            }
            TypeRef::Named(name) => {
                let schema = self.schema(name)?;
                Ok(DeclaredType::new(
                    schema.namespace.clone(),
                    schema.name.clone(),
                ))
            }
            _ => unreachable!("scalar kinds handled above"),
        }
    }

    /// The zero value of `ty`, used for struct fields absent from the YAML.
    pub fn zero_value(&self, ty: &TypeRef) -> Result<TypedValue> {
        let declared = self.declared_type(ty)?;
        let kind = match ty {
            TypeRef::String => ValueKind::String(String::new()),
            TypeRef::Bool => ValueKind::Bool(false),
            TypeRef::Int32 | TypeRef::Int64 => ValueKind::Int(0),
            TypeRef::Uint32 => ValueKind::Uint(0),
            TypeRef::Float32 => ValueKind::Float32(0.0),
            TypeRef::Float64 => ValueKind::Float64(0.0),
            TypeRef::Pointer(_) => ValueKind::Pointer(None),
            TypeRef::Sequence(_) => ValueKind::Sequence(Vec::new()),
            TypeRef::Mapping(_, _) => ValueKind::Mapping(Vec::new()),
            TypeRef::Named(name) => {
                let schema = self.schema(name)?.clone();
                let mut fields = Vec::with_capacity(schema.fields.len());
                for field in &schema.fields {
                    fields.push(StructField {
                        name: field.name.clone(),
                        exported: field.exported,
                        value: self.zero_value(&field.ty)?,
                    });
                }
                ValueKind::Struct(fields)
            }
        };
        Ok(TypedValue::new(declared, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry_with_meta() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.register_type(
            StructSchema::new("k8s.io/apimachinery/pkg/apis/meta/v1", "v1.ObjectMeta")
                .field("Name", "name", TypeRef::String)
                .field(
                    "Labels",
                    "labels",
                    TypeRef::mapping(TypeRef::String, TypeRef::String),
                ),
        );
        registry
    }

    #[test]
    fn test_declared_type_for_sequence_uses_element_namespace() {
        let registry = registry_with_meta();
        let declared = registry
            .declared_type(&TypeRef::sequence(TypeRef::named("v1.ObjectMeta")))
            .unwrap();
        assert_eq!(declared.namespace, "k8s.io/apimachinery/pkg/apis/meta/v1");
        assert_eq!(declared.name, "[]v1.ObjectMeta");
    }

    #[test]
    fn test_declared_type_for_mapping_is_unqualified() {
        let registry = registry_with_meta();
        let declared = registry
            .declared_type(&TypeRef::mapping(TypeRef::String, TypeRef::String))
            .unwrap();
        assert_eq!(declared.namespace, "");
        assert_eq!(declared.name, "map[string]string");
    }

    #[test]
    fn test_zero_value_of_named_struct_is_zero() {
        let registry = registry_with_meta();
        let zero = registry
            .zero_value(&TypeRef::named("v1.ObjectMeta"))
            .unwrap();
        assert!(zero.is_zero());
    }

    #[test]
    fn test_dangling_named_reference_is_an_error() {
        let registry = TypeRegistry::new();
        let err = registry.schema("v1.Missing").unwrap_err();
        assert!(err.to_string().contains("v1.Missing"));
    }
}
