//! Built-in type registrations for common Kubernetes kinds.
//!
//! Mirrors the scheme a Kubernetes client seeds before decoding: each kind's
//! root struct plus the transitive field types it reaches. Field order
//! follows the upstream Go struct declarations so emitted literals list
//! fields in the familiar order.

use crate::{GroupVersionKind, StructSchema, TypeRef, TypeRegistry};

const META_PKG: &str = "k8s.io/apimachinery/pkg/apis/meta/v1";
const CORE_PKG: &str = "k8s.io/api/core/v1";
const APPS_PKG: &str = "k8s.io/api/apps/v1";

/// Registry preloaded with every built-in kind.
pub fn default_registry() -> TypeRegistry {
    let mut registry = TypeRegistry::new();
    add_meta_types(&mut registry);
    add_core_types(&mut registry);
    add_apps_types(&mut registry);
    registry
}

fn add_meta_types(registry: &mut TypeRegistry) {
    registry.register_type(
        StructSchema::new(META_PKG, "v1.ObjectMeta")
            .field("Name", "name", TypeRef::String)
            .field("GenerateName", "generateName", TypeRef::String)
            .field("Namespace", "namespace", TypeRef::String)
            .field(
                "Labels",
                "labels",
                TypeRef::mapping(TypeRef::String, TypeRef::String),
            )
            .field(
                "Annotations",
                "annotations",
                TypeRef::mapping(TypeRef::String, TypeRef::String),
            ),
    );
    registry.register_type(
        StructSchema::new(META_PKG, "v1.LabelSelector").field(
            "MatchLabels",
            "matchLabels",
            TypeRef::mapping(TypeRef::String, TypeRef::String),
        ),
    );
}

fn add_core_types(registry: &mut TypeRegistry) {
    registry.register_type(
        StructSchema::new(CORE_PKG, "v1.EnvVar")
            .field("Name", "name", TypeRef::String)
            .field("Value", "value", TypeRef::String),
    );
    registry.register_type(
        StructSchema::new(CORE_PKG, "v1.ContainerPort")
            .field("Name", "name", TypeRef::String)
            .field("HostPort", "hostPort", TypeRef::Int32)
            .field("ContainerPort", "containerPort", TypeRef::Int32)
            .field("Protocol", "protocol", TypeRef::String),
    );
    registry.register_type(
        StructSchema::new(CORE_PKG, "v1.Container")
            .field("Name", "name", TypeRef::String)
            .field("Image", "image", TypeRef::String)
            .field("Command", "command", TypeRef::sequence(TypeRef::String))
            .field("Args", "args", TypeRef::sequence(TypeRef::String))
            .field("WorkingDir", "workingDir", TypeRef::String)
            .field(
                "Ports",
                "ports",
                TypeRef::sequence(TypeRef::named("v1.ContainerPort")),
            )
            .field("Env", "env", TypeRef::sequence(TypeRef::named("v1.EnvVar")))
            .field("ImagePullPolicy", "imagePullPolicy", TypeRef::String),
    );
    registry.register_type(
        StructSchema::new(CORE_PKG, "v1.PodSpec")
            .field(
                "Containers",
                "containers",
                TypeRef::sequence(TypeRef::named("v1.Container")),
            )
            .field("RestartPolicy", "restartPolicy", TypeRef::String)
            .field(
                "NodeSelector",
                "nodeSelector",
                TypeRef::mapping(TypeRef::String, TypeRef::String),
            )
            .field("ServiceAccountName", "serviceAccountName", TypeRef::String)
            .field("Hostname", "hostname", TypeRef::String),
    );
    registry.register_type(
        StructSchema::new(CORE_PKG, "v1.PodTemplateSpec")
            .field("ObjectMeta", "metadata", TypeRef::named("v1.ObjectMeta"))
            .field("Spec", "spec", TypeRef::named("v1.PodSpec")),
    );
    registry.register_type(
        StructSchema::new(CORE_PKG, "v1.ServicePort")
            .field("Name", "name", TypeRef::String)
            .field("Protocol", "protocol", TypeRef::String)
            .field("Port", "port", TypeRef::Int32)
            .field("NodePort", "nodePort", TypeRef::Int32),
    );
    registry.register_type(
        StructSchema::new(CORE_PKG, "v1.ServiceSpec")
            .field(
                "Ports",
                "ports",
                TypeRef::sequence(TypeRef::named("v1.ServicePort")),
            )
            .field(
                "Selector",
                "selector",
                TypeRef::mapping(TypeRef::String, TypeRef::String),
            )
            .field("ClusterIP", "clusterIP", TypeRef::String)
            .field("Type", "type", TypeRef::String),
    );

    registry.register_type(
        StructSchema::new(CORE_PKG, "v1.Pod")
            .field("ObjectMeta", "metadata", TypeRef::named("v1.ObjectMeta"))
            .field("Spec", "spec", TypeRef::named("v1.PodSpec")),
    );
    registry.register_type(
        StructSchema::new(CORE_PKG, "v1.Service")
            .field("ObjectMeta", "metadata", TypeRef::named("v1.ObjectMeta"))
            .field("Spec", "spec", TypeRef::named("v1.ServiceSpec")),
    );
    registry.register_type(
        StructSchema::new(CORE_PKG, "v1.ConfigMap")
            .field("ObjectMeta", "metadata", TypeRef::named("v1.ObjectMeta"))
            .field("Immutable", "immutable", TypeRef::pointer(TypeRef::Bool))
            .field(
                "Data",
                "data",
                TypeRef::mapping(TypeRef::String, TypeRef::String),
            ),
    );

    registry.register_kind(GroupVersionKind::new("", "v1", "Pod"), "v1.Pod");
    registry.register_kind(GroupVersionKind::new("", "v1", "Service"), "v1.Service");
    registry.register_kind(GroupVersionKind::new("", "v1", "ConfigMap"), "v1.ConfigMap");
}

fn add_apps_types(registry: &mut TypeRegistry) {
    registry.register_type(
        StructSchema::new(APPS_PKG, "v1.DeploymentSpec")
            .field("Replicas", "replicas", TypeRef::pointer(TypeRef::Int32))
            .field(
                "Selector",
                "selector",
                TypeRef::pointer(TypeRef::named("v1.LabelSelector")),
            )
            .field("Template", "template", TypeRef::named("v1.PodTemplateSpec"))
            .field("MinReadySeconds", "minReadySeconds", TypeRef::Int32)
            .field("Paused", "paused", TypeRef::Bool),
    );
    registry.register_type(
        StructSchema::new(APPS_PKG, "v1.Deployment")
            .field("ObjectMeta", "metadata", TypeRef::named("v1.ObjectMeta"))
            .field("Spec", "spec", TypeRef::named("v1.DeploymentSpec")),
    );

    registry.register_kind(
        GroupVersionKind::new("apps", "v1", "Deployment"),
        "v1.Deployment",
    );
}
