//! The decoder boundary and the registry-driven YAML decoder.

use serde_yaml::Value;

use crate::{
    DeclaredType, Error, GroupVersionKind, Result, StructField, StructSchema, TypeRef,
    TypeRegistry, TypedValue, ValueKind, scheme,
};

/// A successfully decoded document.
#[derive(Debug)]
pub struct Decoded {
    /// Pointer to the root struct, mirroring how Kubernetes decoders hand
    /// back objects.
    pub value: TypedValue,
    /// Declared kind name, e.g. `Deployment`.
    pub kind: String,
}

/// Boundary between the generation driver and document decoding.
pub trait Decode {
    fn decode(&self, document: &str) -> Result<Decoded>;
}

/// Decoder that resolves documents against a [`TypeRegistry`] and converts
/// the YAML tree into a [`TypedValue`] guided by the registered schemas.
#[derive(Debug)]
pub struct SchemeDecoder {
    registry: TypeRegistry,
}

impl SchemeDecoder {
    pub fn new(registry: TypeRegistry) -> Self {
        Self { registry }
    }

    /// A decoder preloaded with the built-in Kubernetes scheme.
    pub fn with_default_scheme() -> Self {
        Self::new(scheme::default_registry())
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    fn root_schema(&self, yaml: &Value) -> Result<(&StructSchema, GroupVersionKind)> {
        let api_version = yaml
            .get("apiVersion")
            .and_then(Value::as_str)
            .ok_or(Box::new(Error::MissingField { field: "apiVersion" }))?;
        let kind = yaml
            .get("kind")
            .and_then(Value::as_str)
            .ok_or(Box::new(Error::MissingField { field: "kind" }))?;

        let gvk = GroupVersionKind::from_api_version(api_version, kind);
        let schema = self.registry.schema_for_kind(&gvk).ok_or_else(|| {
            let registered = self
                .registry
                .kinds()
                .map(|k| k.kind.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            Box::new(Error::UnknownKind {
                gvk: gvk.to_string(),
                registered,
            })
        })?;
        Ok((schema, gvk))
    }

    fn decode_value(&self, ty: &TypeRef, yaml: &Value, path: &str) -> Result<TypedValue> {
        let declared = self.registry.declared_type(ty)?;
        let kind = match ty {
            TypeRef::String => ValueKind::String(self.expect_str(yaml, path)?.to_string()),
            TypeRef::Bool => ValueKind::Bool(
                yaml.as_bool()
                    .ok_or_else(|| Error::mismatch(path, "bool", yaml_kind(yaml)))?,
            ),
            TypeRef::Int32 | TypeRef::Int64 => ValueKind::Int(
                yaml.as_i64()
                    .ok_or_else(|| Error::mismatch(path, "integer", yaml_kind(yaml)))?,
            ),
            TypeRef::Uint32 => ValueKind::Uint(
                yaml.as_u64()
                    .ok_or_else(|| Error::mismatch(path, "unsigned integer", yaml_kind(yaml)))?,
            ),
            TypeRef::Float32 => ValueKind::Float32(
                yaml.as_f64()
                    .ok_or_else(|| Error::mismatch(path, "number", yaml_kind(yaml)))?
                    as f32,
            ),
            TypeRef::Float64 => ValueKind::Float64(
                yaml.as_f64()
                    .ok_or_else(|| Error::mismatch(path, "number", yaml_kind(yaml)))?,
            ),
            TypeRef::Pointer(inner) => {
                let pointee = self.decode_value(inner, yaml, path)?;
                ValueKind::Pointer(Some(Box::new(pointee)))
            }
            TypeRef::Sequence(elem) => {
                let items = yaml
                    .as_sequence()
                    .ok_or_else(|| Error::mismatch(path, "sequence", yaml_kind(yaml)))?;
                let mut values = Vec::with_capacity(items.len());
                for (i, item) in items.iter().enumerate() {
                    values.push(self.decode_value(elem, item, &format!("{path}[{i}]"))?);
                }
                ValueKind::Sequence(values)
            }
            TypeRef::Mapping(key_ty, value_ty) => {
                let mapping = yaml
                    .as_mapping()
                    .ok_or_else(|| Error::mismatch(path, "mapping", yaml_kind(yaml)))?;
                let mut pairs = Vec::with_capacity(mapping.len());
                for (key, value) in mapping {
                    let key_path = format!("{path}[{}]", key.as_str().unwrap_or("?"));
                    let decoded_key = self.decode_value(key_ty, key, &key_path)?;
                    let decoded_value = self.decode_value(value_ty, value, &key_path)?;
                    pairs.push((decoded_key, decoded_value));
                }
                ValueKind::Mapping(pairs)
            }
            TypeRef::Named(name) => {
                let schema = self.registry.schema(name)?;
                return self.decode_struct(schema, yaml, path, false);
            }
        };
        Ok(TypedValue::new(declared, kind))
    }

    /// Decode a struct value. `envelope` is true only for the document root,
    /// where `apiVersion` and `kind` are consumed by kind resolution rather
    /// than decoded into fields (typed decoders leave TypeMeta empty).
    fn decode_struct(
        &self,
        schema: &StructSchema,
        yaml: &Value,
        path: &str,
        envelope: bool,
    ) -> Result<TypedValue> {
        let mapping = yaml
            .as_mapping()
            .ok_or_else(|| Error::mismatch(path, format!("{} mapping", schema.name), yaml_kind(yaml)))?;

        // Absent fields become their type's zero value so the encoder can
        // elide them.
        let mut fields = Vec::with_capacity(schema.fields.len());
        for field in &schema.fields {
            let field_path = format!("{path}.{}", field.yaml_name);
            let value = match mapping.get(field.yaml_name.as_str()) {
                Some(yaml_value) => self.decode_value(&field.ty, yaml_value, &field_path)?,
                None => self.registry.zero_value(&field.ty)?,
            };
            fields.push(StructField {
                name: field.name.clone(),
                exported: field.exported,
                value,
            });
        }

        for key in mapping.keys() {
            if let Some(key) = key.as_str()
                && !(envelope && matches!(key, "apiVersion" | "kind"))
                && !schema.fields.iter().any(|f| f.yaml_name == key)
            {
                tracing::debug!(field = key, path, "skipping unknown field");
            }
        }

        Ok(TypedValue::new(
            DeclaredType::new(schema.namespace.clone(), schema.name.clone()),
            ValueKind::Struct(fields),
        ))
    }

    fn expect_str<'y>(&self, yaml: &'y Value, path: &str) -> Result<&'y str> {
        yaml.as_str()
            .ok_or_else(|| Error::mismatch(path, "string", yaml_kind(yaml)))
    }
}

impl Decode for SchemeDecoder {
    fn decode(&self, document: &str) -> Result<Decoded> {
        let yaml: Value =
            serde_yaml::from_str(document).map_err(|e| Error::parse(e, document))?;
        let (schema, gvk) = self.root_schema(&yaml)?;
        let root = self.decode_struct(schema, &yaml, &gvk.kind, true)?;

        // Hand back a pointer to the root struct, so the emitted literal is
        // `&appsv1.Deployment{...}`.
        let value = TypedValue::new(
            DeclaredType::unqualified(format!("*{}", schema.name)),
            ValueKind::Pointer(Some(Box::new(root))),
        );
        Ok(Decoded {
            value,
            kind: gvk.kind,
        })
    }
}

fn yaml_kind(yaml: &Value) -> &'static str {
    match yaml {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
