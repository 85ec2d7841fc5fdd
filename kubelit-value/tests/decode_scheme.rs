//! Decoding full manifests against the built-in scheme.

use kubelit_value::{Decode, SchemeDecoder, StructField, TypedValue, ValueKind};

fn field<'a>(value: &'a TypedValue, name: &str) -> &'a StructField {
    let ValueKind::Struct(fields) = &value.kind else {
        panic!("expected struct, got {:?}", value.kind);
    };
    fields
        .iter()
        .find(|f| f.name == name)
        .unwrap_or_else(|| panic!("no field {name}"))
}

fn deref(value: &TypedValue) -> &TypedValue {
    match &value.kind {
        ValueKind::Pointer(Some(pointee)) => pointee,
        other => panic!("expected non-nil pointer, got {other:?}"),
    }
}

#[test]
fn test_decode_deployment_manifest() {
    let manifest = concat!(
        "apiVersion: apps/v1\n",
        "kind: Deployment\n",
        "metadata:\n",
        "  name: web\n",
        "  labels:\n",
        "    app: web\n",
        "spec:\n",
        "  replicas: 3\n",
        "  template:\n",
        "    spec:\n",
        "      containers:\n",
        "        - name: app\n",
        "          image: nginx:1.27\n",
    );

    let decoded = SchemeDecoder::with_default_scheme()
        .decode(manifest)
        .unwrap();
    assert_eq!(decoded.kind, "Deployment");

    let root = deref(&decoded.value);
    assert_eq!(root.declared.namespace, "k8s.io/api/apps/v1");
    assert_eq!(root.declared.name, "v1.Deployment");

    let name = field(&field(root, "ObjectMeta").value, "Name");
    assert_eq!(
        name.value.kind,
        ValueKind::String("web".to_string())
    );

    let spec = &field(root, "Spec").value;
    let replicas = deref(&field(spec, "Replicas").value);
    assert_eq!(replicas.kind, ValueKind::Int(3));
    assert_eq!(replicas.declared.name, "int32");

    let containers = &field(&field(spec, "Template").value, "Spec").value;
    let ValueKind::Sequence(items) = &field(containers, "Containers").value.kind else {
        panic!("expected containers sequence");
    };
    assert_eq!(items.len(), 1);
    assert_eq!(
        field(&items[0], "Image").value.kind,
        ValueKind::String("nginx:1.27".to_string())
    );
}

#[test]
fn test_type_meta_is_not_decoded_into_fields() {
    // Typed decoders leave TypeMeta empty; apiVersion/kind are envelope
    // keys, not part of the decoded value.
    let decoded = SchemeDecoder::with_default_scheme()
        .decode("apiVersion: v1\nkind: ConfigMap\n")
        .unwrap();
    let root = deref(&decoded.value);
    let ValueKind::Struct(fields) = &root.kind else {
        panic!("expected struct");
    };
    assert!(fields.iter().all(|f| f.name != "Kind"));
    assert!(root.is_zero());
}

#[test]
fn test_every_non_zero_exported_field_survives_decoding() {
    let manifest = concat!(
        "apiVersion: v1\n",
        "kind: Service\n",
        "metadata:\n",
        "  name: web\n",
        "spec:\n",
        "  type: NodePort\n",
        "  selector:\n",
        "    app: web\n",
        "  ports:\n",
        "    - port: 80\n",
        "      nodePort: 30080\n",
    );

    let decoded = SchemeDecoder::with_default_scheme()
        .decode(manifest)
        .unwrap();
    let root = deref(&decoded.value);
    let spec = &field(root, "Spec").value;

    assert_eq!(
        field(spec, "Type").value.kind,
        ValueKind::String("NodePort".to_string())
    );
    let ValueKind::Mapping(pairs) = &field(spec, "Selector").value.kind else {
        panic!("expected selector mapping");
    };
    assert_eq!(pairs.len(), 1);
    let ValueKind::Sequence(ports) = &field(spec, "Ports").value.kind else {
        panic!("expected ports sequence");
    };
    assert_eq!(field(&ports[0], "Port").value.kind, ValueKind::Int(80));
    assert_eq!(field(&ports[0], "NodePort").value.kind, ValueKind::Int(30080));
}
