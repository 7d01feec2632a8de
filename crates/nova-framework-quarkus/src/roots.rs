//! Content-root ordering and module directory resolution.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use url::Url;

use crate::host::{ContentRootLookup, ModuleId, ModuleOwnerLookup, ProjectId};

fn path_len(path: &Path) -> usize {
    path.to_string_lossy().chars().count()
}

/// Sorts roots so the shortest path comes first.
///
/// Generated-source roots usually nest under the main root, so this puts the
/// "real" root at index 0.
pub fn sort_roots(roots: &mut [PathBuf]) {
    roots.sort_by_key(|root| path_len(root));
}

/// Content roots of `module`, shortest path first.
pub fn content_roots<R>(roots: &R, module: ModuleId) -> Vec<PathBuf>
where
    R: ContentRootLookup + ?Sized,
{
    let mut content_roots = roots.content_roots(module);
    if content_roots.len() > 1 {
        sort_roots(&mut content_roots);
    }
    content_roots
}

/// The primary content root of `module`, falling back to the module's declared
/// directory when it has no content roots. `None` when neither resolves to an
/// existing location.
pub fn module_dir_path<R>(roots: &R, module: ModuleId) -> Option<PathBuf>
where
    R: ContentRootLookup + ?Sized,
{
    if let Some(first) = content_roots(roots, module).into_iter().next() {
        return Some(first);
    }

    let declared = roots.declared_module_dir(module)?;
    if declared.exists() {
        Some(declared)
    } else {
        tracing::debug!(
            target: "nova.quarkus",
            module = module.to_raw(),
            path = %declared.display(),
            "declared module directory does not exist"
        );
        None
    }
}

/// `file://` directory URIs of every module in `project` whose directory resolves.
pub fn module_uris<H>(host: &H, project: ProjectId) -> BTreeSet<String>
where
    H: ModuleOwnerLookup + ContentRootLookup + ?Sized,
{
    host.modules(project)
        .into_iter()
        .filter_map(|module| module_dir_path(host, module))
        .filter_map(|dir| match Url::from_directory_path(&dir) {
            Ok(url) => Some(url.to_string()),
            Err(()) => {
                tracing::debug!(
                    target: "nova.quarkus",
                    path = %dir.display(),
                    "module directory is not an absolute path"
                );
                None
            }
        })
        .collect()
}
