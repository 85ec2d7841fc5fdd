//! The tagged value graph produced by decoding and consumed by the encoder.

/// Static type identity of a value as it would print in Go source.
#[derive(Debug, Clone, PartialEq)]
pub struct DeclaredType {
    /// Go package import path. Empty for scalars and anonymous map types.
    /// For sequences this is the package of the *element* type.
    pub namespace: String,
    /// Printed Go type name, e.g. `v1.Deployment`, `[]v1.Container`,
    /// `map[string]string`, `int32`.
    pub name: String,
}

impl DeclaredType {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// A declared type with no package qualifier (scalars, anonymous maps).
    pub fn unqualified(name: impl Into<String>) -> Self {
        Self::new("", name)
    }
}

/// Runtime kind of a decoded value, with its constituents.
///
/// This is the closed set of kinds the literal encoder dispatches over.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueKind {
    /// Absent value. Encodes to nothing.
    Invalid,
    String(String),
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float32(f32),
    Float64(f64),
    /// `None` is a nil pointer.
    Pointer(Option<Box<TypedValue>>),
    Sequence(Vec<TypedValue>),
    /// Key/value pairs in decoder order.
    Mapping(Vec<(TypedValue, TypedValue)>),
    /// Fields in declaration order.
    Struct(Vec<StructField>),
}

/// A single struct field carried by [`ValueKind::Struct`].
#[derive(Debug, Clone, PartialEq)]
pub struct StructField {
    /// Go field name, e.g. `Replicas`.
    pub name: String,
    /// Unexported fields are never emitted.
    pub exported: bool,
    pub value: TypedValue,
}

/// A decoded value together with its declared type identity.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedValue {
    pub declared: DeclaredType,
    pub kind: ValueKind,
}

impl TypedValue {
    pub fn new(declared: DeclaredType, kind: ValueKind) -> Self {
        Self { declared, kind }
    }

    /// Whether this value is the zero value of its type.
    ///
    /// Zero struct fields are elided from the emitted literal, so this must
    /// agree with Go's notion of a zero value: empty string, zero number,
    /// false, nil pointer, empty container, or a struct whose every field is
    /// itself zero.
    pub fn is_zero(&self) -> bool {
        match &self.kind {
            ValueKind::Invalid => true,
            ValueKind::String(s) => s.is_empty(),
            ValueKind::Bool(b) => !b,
            ValueKind::Int(n) => *n == 0,
            ValueKind::Uint(n) => *n == 0,
            ValueKind::Float32(f) => *f == 0.0,
            ValueKind::Float64(f) => *f == 0.0,
            ValueKind::Pointer(p) => p.is_none(),
            ValueKind::Sequence(items) => items.is_empty(),
            ValueKind::Mapping(pairs) => pairs.is_empty(),
            ValueKind::Struct(fields) => fields.iter().all(|f| f.value.is_zero()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn string_value(s: &str) -> TypedValue {
        TypedValue::new(
            DeclaredType::unqualified("string"),
            ValueKind::String(s.to_string()),
        )
    }

    #[test]
    fn test_scalar_zero_values() {
        assert!(string_value("").is_zero());
        assert!(!string_value("nginx").is_zero());

        let zero = TypedValue::new(DeclaredType::unqualified("int32"), ValueKind::Int(0));
        assert!(zero.is_zero());
        let one = TypedValue::new(DeclaredType::unqualified("int32"), ValueKind::Int(1));
        assert!(!one.is_zero());

        let off = TypedValue::new(DeclaredType::unqualified("bool"), ValueKind::Bool(false));
        assert!(off.is_zero());
    }

    #[test]
    fn test_pointer_zero_values() {
        let nil = TypedValue::new(
            DeclaredType::unqualified("*int32"),
            ValueKind::Pointer(None),
        );
        assert!(nil.is_zero());

        // A non-nil pointer is never zero, even when the pointee is.
        let to_zero = TypedValue::new(
            DeclaredType::unqualified("*int32"),
            ValueKind::Pointer(Some(Box::new(TypedValue::new(
                DeclaredType::unqualified("int32"),
                ValueKind::Int(0),
            )))),
        );
        assert!(!to_zero.is_zero());
    }

    #[test]
    fn test_struct_zero_is_recursive() {
        let all_zero = TypedValue::new(
            DeclaredType::new("k8s.io/api/core/v1", "v1.ConfigMap"),
            ValueKind::Struct(vec![StructField {
                name: "Data".to_string(),
                exported: true,
                value: TypedValue::new(
                    DeclaredType::unqualified("map[string]string"),
                    ValueKind::Mapping(vec![]),
                ),
            }]),
        );
        assert!(all_zero.is_zero());

        let non_zero = TypedValue::new(
            DeclaredType::new("k8s.io/api/core/v1", "v1.ConfigMap"),
            ValueKind::Struct(vec![StructField {
                name: "Data".to_string(),
                exported: true,
                value: TypedValue::new(
                    DeclaredType::unqualified("map[string]string"),
                    ValueKind::Mapping(vec![(string_value("key"), string_value("value"))]),
                ),
            }]),
        );
        assert!(!non_zero.is_zero());
    }
}
