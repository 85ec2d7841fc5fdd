//! Package dependency tracking for one generation run.

use indexmap::IndexSet;

use crate::alias::{import_entry, resolve_alias};

/// One package a generated literal depends on, with its computed alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRef {
    pub path: String,
    /// `None` for packages imported unaliased.
    pub alias: Option<String>,
}

impl PackageRef {
    /// Render as one Go import list entry.
    pub fn import_entry(&self) -> String {
        import_entry(&self.path)
    }
}

/// Deduplicated set of packages touched while encoding.
///
/// Maintains insertion order so the generated import list is deterministic
/// for a given input. The empty path (scalars, anonymous map types) is never
/// recorded. Threaded through the encoder as an explicit accumulator; one
/// instance per generation run.
#[derive(Debug, Clone, Default)]
pub struct PackageSet {
    paths: IndexSet<String>,
}

impl PackageSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a package path. No-op for the empty path and for paths already
    /// present.
    pub fn insert(&mut self, path: &str) {
        if path.is_empty() {
            return;
        }
        self.paths.insert(path.to_string());
    }

    /// Packages in insertion order, with aliases derived from the path.
    pub fn iter(&self) -> impl Iterator<Item = PackageRef> + '_ {
        self.paths.iter().map(|path| PackageRef {
            path: path.clone(),
            alias: resolve_alias(path),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }
}
