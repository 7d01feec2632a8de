//! Capabilities the host environment supplies to the inspector.
//!
//! Every query takes its collaborator explicitly; nothing here is looked up
//! through a global registry.

use std::path::{Path, PathBuf};

/// Opaque handle for a module owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModuleId(u32);

impl ModuleId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn to_raw(self) -> u32 {
        self.0
    }
}

/// Opaque handle for a project (a set of modules) owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProjectId(u32);

impl ProjectId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn to_raw(self) -> u32 {
        self.0
    }
}

pub trait ModuleLibraryLookup {
    /// Names of the module's library dependency entries.
    ///
    /// Module-to-module and SDK entries are not libraries and must not be listed.
    fn library_names(&self, module: ModuleId) -> Vec<String>;

    /// Runtime classpath class roots (jars and class directories), in classpath order.
    fn classpath_roots(&self, module: ModuleId) -> Vec<PathBuf>;
}

pub trait ContentRootLookup {
    /// Content roots in host order.
    fn content_roots(&self, module: ModuleId) -> Vec<PathBuf>;

    /// The directory the module was declared in. It may not exist on disk.
    fn declared_module_dir(&self, module: ModuleId) -> Option<PathBuf>;
}

pub trait ModuleOwnerLookup {
    fn module_for_file(&self, project: ProjectId, file: &Path) -> Option<ModuleId>;

    /// `true` when the module was explicitly provisioned as a Quarkus module.
    fn has_quarkus_facet(&self, module: ModuleId) -> bool;

    fn modules(&self, project: ProjectId) -> Vec<ModuleId>;
}

/// Read-only key/value configuration scoped to a project.
pub trait PropertyLookup {
    fn raw_property(&self, key: &str) -> Option<String>;

    fn property(&self, key: &str, default: &str) -> String {
        self.raw_property(key)
            .unwrap_or_else(|| default.to_string())
    }

    /// Integer property; absent or unparsable values yield `default`.
    fn property_as_int(&self, key: &str, default: i32) -> i32 {
        let Some(raw) = self.raw_property(key) else {
            return default;
        };
        match raw.trim().parse::<i32>() {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(
                    target: "nova.quarkus",
                    key,
                    value = %raw,
                    error = %err,
                    "ignoring non-integer property value"
                );
                default
            }
        }
    }
}

impl<T: PropertyLookup + ?Sized> PropertyLookup for &T {
    fn raw_property(&self, key: &str) -> Option<String> {
        (**self).raw_property(key)
    }
}
