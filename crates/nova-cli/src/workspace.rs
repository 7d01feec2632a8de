//! A single on-disk module exposed through the inspector's host traits.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nova_config::NovaConfig;
use nova_framework_quarkus::{
    classify_config_file_name, ConfigSource, ContentRootLookup, MicroProfileConfig, ModuleId,
    ModuleLibraryLookup, ModuleOwnerLookup, ProjectId,
};
use walkdir::WalkDir;

pub const MODULE: ModuleId = ModuleId::new(0);
pub const PROJECT: ProjectId = ProjectId::new(0);

/// Maven and Gradle locations of generated sources, relative to the module root.
const GENERATED_ROOTS: &[&str] = &[
    "target/generated-sources/annotations",
    "target/generated-test-sources/test-annotations",
    "build/generated/sources/annotationProcessor/java/main",
    "build/generated/sources/annotationProcessor/java/test",
];

/// Resource directories searched for configuration files.
const RESOURCE_DIRS: &[&str] = &["src/main/resources", "src/main/resources/META-INF"];

/// A resolved module root and the Nova config discovered for it.
#[derive(Debug)]
pub struct ModuleConfig {
    pub root: PathBuf,
    pub config: NovaConfig,
    pub config_path: Option<PathBuf>,
}

impl ModuleConfig {
    pub fn load(root: &Path) -> Result<Self> {
        let root = root
            .canonicalize()
            .with_context(|| format!("failed to resolve module root {}", root.display()))?;
        if !root.is_dir() {
            anyhow::bail!("module root {} is not a directory", root.display());
        }

        let (config, config_path) = nova_config::load_for_workspace(&root)
            .with_context(|| format!("failed to load Nova config for {}", root.display()))?;
        Ok(Self {
            root,
            config,
            config_path,
        })
    }
}

#[derive(Debug)]
pub struct DirectoryModule {
    root: PathBuf,
    config: NovaConfig,
    config_path: Option<PathBuf>,
    classpath: Vec<PathBuf>,
    content_roots: Vec<PathBuf>,
}

impl DirectoryModule {
    /// Opens the module rooted at `root`. `classpath` entries come on top of the
    /// configured `[quarkus] classpath`.
    pub fn open(root: &Path, classpath: &[PathBuf]) -> Result<Self> {
        let config = ModuleConfig::load(root)?;
        Ok(Self::from_config(config, classpath))
    }

    /// Builds the module from an already loaded [`ModuleConfig`].
    pub fn from_config(module_config: ModuleConfig, classpath: &[PathBuf]) -> Self {
        let ModuleConfig {
            root,
            config,
            config_path,
        } = module_config;

        let mut entries = config.quarkus.resolved_classpath(&root);
        entries.extend(classpath.iter().cloned());
        let classpath = expand_classpath(&entries);

        let mut content_roots = vec![root.clone()];
        content_roots.extend(
            GENERATED_ROOTS
                .iter()
                .map(|rel| root.join(rel))
                .filter(|path| path.is_dir()),
        );
        for extra in config.quarkus.resolved_content_roots(&root) {
            let extra = extra.canonicalize().unwrap_or(extra);
            if !content_roots.contains(&extra) {
                content_roots.push(extra);
            }
        }

        Self {
            root,
            config,
            config_path,
            classpath,
            content_roots,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &NovaConfig {
        &self.config
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Quarkus configuration files found in the module's resource directories.
    pub fn config_files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for dir in RESOURCE_DIRS {
            let Ok(entries) = std::fs::read_dir(self.root.join(dir)) else {
                continue;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                let recognised = path
                    .file_name()
                    .and_then(|name| name.to_str())
                    .and_then(classify_config_file_name)
                    .is_some();
                if recognised && path.is_file() {
                    files.push(path);
                }
            }
        }
        files.sort();
        files
    }

    /// Property source assembled from [`DirectoryModule::config_files`].
    pub fn microprofile_config(&self) -> MicroProfileConfig {
        let mut config = MicroProfileConfig::new();
        for path in self.config_files() {
            match ConfigSource::load(&path) {
                Ok(source) => config.add_source(source),
                Err(err) => {
                    tracing::warn!(target: "nova.cli", error = %err, "skipping config source");
                }
            }
        }
        config
    }
}

/// Expands directories into the `*.jar` files below them; other entries are kept.
fn expand_classpath(entries: &[PathBuf]) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for entry in entries {
        if !entry.is_dir() {
            out.push(entry.clone());
            continue;
        }

        let mut jars: Vec<PathBuf> = WalkDir::new(entry)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.into_path())
            .filter(|path| is_jar(path))
            .collect();
        jars.sort();
        tracing::debug!(
            target: "nova.cli",
            dir = %entry.display(),
            jars = jars.len(),
            "expanded classpath directory"
        );
        out.extend(jars);
    }
    out
}

fn is_jar(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("jar"))
}

impl ModuleLibraryLookup for DirectoryModule {
    fn library_names(&self, module: ModuleId) -> Vec<String> {
        if module != MODULE {
            return Vec::new();
        }
        self.classpath
            .iter()
            .filter(|path| is_jar(path))
            .filter_map(|path| path.file_stem()?.to_str().map(str::to_owned))
            .collect()
    }

    fn classpath_roots(&self, module: ModuleId) -> Vec<PathBuf> {
        if module != MODULE {
            return Vec::new();
        }
        self.classpath.clone()
    }
}

impl ContentRootLookup for DirectoryModule {
    fn content_roots(&self, module: ModuleId) -> Vec<PathBuf> {
        if module != MODULE {
            return Vec::new();
        }
        self.content_roots.clone()
    }

    fn declared_module_dir(&self, module: ModuleId) -> Option<PathBuf> {
        (module == MODULE).then(|| self.root.clone())
    }
}

impl ModuleOwnerLookup for DirectoryModule {
    fn module_for_file(&self, project: ProjectId, file: &Path) -> Option<ModuleId> {
        if project != PROJECT {
            return None;
        }
        let file = file.canonicalize().unwrap_or_else(|_| file.to_path_buf());
        self.content_roots
            .iter()
            .any(|root| file.starts_with(root))
            .then_some(MODULE)
    }

    fn has_quarkus_facet(&self, module: ModuleId) -> bool {
        module == MODULE && self.config.quarkus.facet
    }

    fn modules(&self, project: ProjectId) -> Vec<ModuleId> {
        if project == PROJECT {
            vec![MODULE]
        } else {
            Vec::new()
        }
    }
}
