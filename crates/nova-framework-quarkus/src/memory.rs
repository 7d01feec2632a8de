use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::host::{
    ContentRootLookup, ModuleId, ModuleLibraryLookup, ModuleOwnerLookup, ProjectId,
    PropertyLookup,
};

#[derive(Debug, Default, Clone)]
struct ModuleData {
    project: Option<ProjectId>,
    libraries: Vec<String>,
    classpath_roots: Vec<PathBuf>,
    content_roots: Vec<PathBuf>,
    module_dir: Option<PathBuf>,
    quarkus_facet: bool,
}

/// Simple in-memory project model for unit tests and embedders.
#[derive(Debug, Default)]
pub struct MemoryProject {
    next_project: u32,
    next_module: u32,
    modules: HashMap<ModuleId, ModuleData>,
    project_modules: HashMap<ProjectId, Vec<ModuleId>>,
    file_owner: HashMap<(ProjectId, PathBuf), ModuleId>,
}

impl MemoryProject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_project(&mut self) -> ProjectId {
        let id = ProjectId::new(self.next_project);
        self.next_project += 1;
        self.project_modules.entry(id).or_default();
        id
    }

    pub fn add_module(&mut self, project: ProjectId) -> ModuleId {
        let id = ModuleId::new(self.next_module);
        self.next_module += 1;
        self.modules.insert(
            id,
            ModuleData {
                project: Some(project),
                ..ModuleData::default()
            },
        );
        self.project_modules.entry(project).or_default().push(id);
        id
    }

    pub fn add_library(&mut self, module: ModuleId, name: impl Into<String>) {
        self.module_mut(module).libraries.push(name.into());
    }

    pub fn add_classpath_root(&mut self, module: ModuleId, root: impl Into<PathBuf>) {
        self.module_mut(module).classpath_roots.push(root.into());
    }

    pub fn add_content_root(&mut self, module: ModuleId, root: impl Into<PathBuf>) {
        self.module_mut(module).content_roots.push(root.into());
    }

    pub fn set_module_dir(&mut self, module: ModuleId, dir: impl Into<PathBuf>) {
        self.module_mut(module).module_dir = Some(dir.into());
    }

    pub fn set_quarkus_facet(&mut self, module: ModuleId, enabled: bool) {
        self.module_mut(module).quarkus_facet = enabled;
    }

    /// Registers `path` as a file owned by `module`.
    pub fn add_file(&mut self, module: ModuleId, path: impl Into<PathBuf>) {
        let Some(project) = self.module_mut(module).project else {
            return;
        };
        self.file_owner.insert((project, path.into()), module);
    }

    fn module_mut(&mut self, module: ModuleId) -> &mut ModuleData {
        self.modules.entry(module).or_default()
    }
}

impl ModuleLibraryLookup for MemoryProject {
    fn library_names(&self, module: ModuleId) -> Vec<String> {
        self.modules
            .get(&module)
            .map(|m| m.libraries.clone())
            .unwrap_or_default()
    }

    fn classpath_roots(&self, module: ModuleId) -> Vec<PathBuf> {
        self.modules
            .get(&module)
            .map(|m| m.classpath_roots.clone())
            .unwrap_or_default()
    }
}

impl ContentRootLookup for MemoryProject {
    fn content_roots(&self, module: ModuleId) -> Vec<PathBuf> {
        self.modules
            .get(&module)
            .map(|m| m.content_roots.clone())
            .unwrap_or_default()
    }

    fn declared_module_dir(&self, module: ModuleId) -> Option<PathBuf> {
        self.modules.get(&module)?.module_dir.clone()
    }
}

impl ModuleOwnerLookup for MemoryProject {
    fn module_for_file(&self, project: ProjectId, file: &Path) -> Option<ModuleId> {
        self.file_owner
            .get(&(project, file.to_path_buf()))
            .copied()
    }

    fn has_quarkus_facet(&self, module: ModuleId) -> bool {
        self.modules
            .get(&module)
            .is_some_and(|m| m.quarkus_facet)
    }

    fn modules(&self, project: ProjectId) -> Vec<ModuleId> {
        self.project_modules
            .get(&project)
            .cloned()
            .unwrap_or_default()
    }
}

/// Plain key/value property source.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryProperties {
    values: BTreeMap<String, String>,
}

impl MemoryProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl PropertyLookup for MemoryProperties {
    fn raw_property(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_resolve_to_their_module_within_the_project_only() {
        let mut db = MemoryProject::new();
        let project = db.add_project();
        let other = db.add_project();
        let module = db.add_module(project);
        db.add_file(module, "/app/src/main/resources/application.properties");

        let file = Path::new("/app/src/main/resources/application.properties");
        assert_eq!(db.module_for_file(project, file), Some(module));
        assert_eq!(db.module_for_file(other, file), None);
        assert_eq!(db.modules(project), vec![module]);
        assert!(db.modules(other).is_empty());
    }

    #[test]
    fn property_defaults() {
        let props: MemoryProperties = [("quarkus.http.port", " 9090 "), ("bad", "x1")]
            .into_iter()
            .collect();
        assert_eq!(props.property_as_int("quarkus.http.port", 8080), 9090);
        assert_eq!(props.property_as_int("bad", 7), 7);
        assert_eq!(props.property_as_int("missing", 8080), 8080);
        assert_eq!(props.property("missing", "/"), "/");
    }
}
