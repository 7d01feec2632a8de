//! Quarkus applicability detection.
//!
//! Detection is driven by library names (`io.quarkus:quarkus-core:*`) rather than
//! by looking at classes, so it works before any sources are indexed.

use std::path::Path;

use crate::host::{ModuleId, ModuleLibraryLookup, ModuleOwnerLookup, ProjectId};

pub const QUARKUS_CORE_PREFIX: &str = "quarkus-core";
pub const QUARKUS_VERTX_HTTP_PREFIX: &str = "quarkus-vertx-http";

/// Returns `true` when the module depends on a `quarkus-core` library.
pub fn is_quarkus_module<L>(libraries: &L, module: Option<ModuleId>) -> bool
where
    L: ModuleLibraryLookup + ?Sized,
{
    module.is_some_and(|module| has_library(libraries, module, QUARKUS_CORE_PREFIX))
}

/// Returns `true` when the module depends on the Quarkus HTTP layer
/// (`quarkus-vertx-http`), i.e. it serves a web application.
pub fn is_quarkus_web_app_module<L>(libraries: &L, module: Option<ModuleId>) -> bool
where
    L: ModuleLibraryLookup + ?Sized,
{
    module.is_some_and(|module| has_library(libraries, module, QUARKUS_VERTX_HTTP_PREFIX))
}

fn has_library<L>(libraries: &L, module: ModuleId, needle: &str) -> bool
where
    L: ModuleLibraryLookup + ?Sized,
{
    libraries
        .library_names(module)
        .iter()
        .any(|name| name.contains(needle))
}

/// Quarkus is enabled for the module owning `file` when that module carries the
/// Quarkus facet or depends on `quarkus-core`.
pub(crate) fn is_quarkus_enabled_for_file<H>(host: &H, file: &Path, project: ProjectId) -> bool
where
    H: ModuleOwnerLookup + ModuleLibraryLookup + ?Sized,
{
    let Some(module) = host.module_for_file(project, file) else {
        return false;
    };
    host.has_quarkus_facet(module) || is_quarkus_module(host, Some(module))
}
