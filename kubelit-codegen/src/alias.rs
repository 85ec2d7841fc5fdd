//! Package alias resolution for versioned Kubernetes type packages.
//!
//! Kubernetes type packages across multiple API groups share the same
//! package name, e.g. `v1` or `v1alpha1`. Conventionally these are imported
//! under an alias built from the last two path segments:
//!
//! ```text
//! "k8s.io/api/apps/v1"                  -> appsv1 "k8s.io/api/apps/v1"
//! "k8s.io/apimachinery/pkg/apis/meta/v1" -> metav1 "k8s.io/apimachinery/pkg/apis/meta/v1"
//! ```

use std::sync::LazyLock;

use regex::Regex;

/// Matches a package path whose final segment is a bare API version token.
static VERSIONED_PACKAGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v\d[a-zA-Z0-9]*$").expect("valid regex"));

/// Compute the import alias for a package path.
///
/// Returns `None` when the path does not follow the versioned naming
/// convention; such packages are imported unaliased.
pub fn resolve_alias(namespace: &str) -> Option<String> {
    if !VERSIONED_PACKAGE.is_match(namespace) {
        return None;
    }
    let segments: Vec<&str> = namespace.split('/').collect();
    match segments.as_slice() {
        [.., parent, version] => Some(format!("{parent}{version}")),
        _ => None,
    }
}

/// Render one import list entry: `alias "path"` when aliased, else `"path"`.
pub fn import_entry(namespace: &str) -> String {
    match resolve_alias(namespace) {
        Some(alias) => format!("{alias} \"{namespace}\""),
        None => format!("\"{namespace}\""),
    }
}

/// Replace the package qualifier in a printed type name with the alias used
/// when the package is imported.
///
/// This is a textual replacement of every literal `v1` in the name, not a
/// structural rewrite: a type whose own name contains `v1` is rewritten too.
/// Known limitation, kept as-is.
pub fn render_type_name(name: &str, namespace: &str) -> String {
    match resolve_alias(namespace) {
        Some(alias) => name.replace("v1", &alias),
        None => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_alias_for_versioned_packages() {
        assert_eq!(
            resolve_alias("k8s.io/api/apps/v1"),
            Some("appsv1".to_string())
        );
        assert_eq!(
            resolve_alias("k8s.io/apimachinery/pkg/apis/meta/v1"),
            Some("metav1".to_string())
        );
        assert_eq!(
            resolve_alias("k8s.io/api/flowcontrol/v1beta3"),
            Some("flowcontrolv1beta3".to_string())
        );
    }

    #[test]
    fn test_unversioned_packages_are_not_aliased() {
        assert_eq!(resolve_alias("k8s.io/apimachinery/pkg/runtime"), None);
        assert_eq!(resolve_alias("fmt"), None);
        // The version token must terminate the path.
        assert_eq!(resolve_alias("k8s.io/api/apps/v1/types"), None);
    }

    #[test]
    fn test_import_entry() {
        assert_eq!(
            import_entry("k8s.io/api/core/v1"),
            "corev1 \"k8s.io/api/core/v1\""
        );
        assert_eq!(
            import_entry("k8s.io/apimachinery/pkg/runtime"),
            "\"k8s.io/apimachinery/pkg/runtime\""
        );
    }

    #[test]
    fn test_render_type_name() {
        assert_eq!(
            render_type_name("v1.Deployment", "k8s.io/api/apps/v1"),
            "appsv1.Deployment"
        );
        assert_eq!(
            render_type_name("[]v1.Container", "k8s.io/api/core/v1"),
            "[]corev1.Container"
        );
        assert_eq!(
            render_type_name("runtime.RawExtension", "k8s.io/apimachinery/pkg/runtime"),
            "runtime.RawExtension"
        );
    }

    #[test]
    fn test_render_type_name_rewrites_every_v1_occurrence() {
        // Textual replacement, so a type name containing "v1" is hit too.
        assert_eq!(
            render_type_name("v1.Thingv1", "k8s.io/api/apps/v1"),
            "appsv1.Thingappsv1"
        );
    }
}
