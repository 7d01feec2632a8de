use std::path::{Path, PathBuf};

use nova_framework_quarkus::{
    application_url, check_quarkus_version, content_roots, dev_ui_url, is_quarkus_module,
    is_quarkus_properties_file, is_quarkus_web_app_module, is_quarkus_yaml_file_in_project,
    module_dir_path, ConfigSource, ContentRootLookup, MemoryProject, MicroProfileConfig, ModuleId,
    ModuleLibraryLookup, ModuleOwnerLookup, ProjectId,
};

/// A host backed by a single on-disk module, the way an editor integration would
/// wire the inspector.
struct SingleModuleHost {
    root: PathBuf,
    jars: Vec<PathBuf>,
}

const MODULE: ModuleId = ModuleId::new(7);
const PROJECT: ProjectId = ProjectId::new(1);

impl ModuleLibraryLookup for SingleModuleHost {
    fn library_names(&self, _module: ModuleId) -> Vec<String> {
        self.jars
            .iter()
            .filter_map(|jar| jar.file_stem()?.to_str().map(str::to_owned))
            .collect()
    }

    fn classpath_roots(&self, _module: ModuleId) -> Vec<PathBuf> {
        self.jars.clone()
    }
}

impl ContentRootLookup for SingleModuleHost {
    fn content_roots(&self, _module: ModuleId) -> Vec<PathBuf> {
        vec![
            self.root.join("target/generated-sources/annotations"),
            self.root.clone(),
        ]
    }

    fn declared_module_dir(&self, _module: ModuleId) -> Option<PathBuf> {
        Some(self.root.clone())
    }
}

impl ModuleOwnerLookup for SingleModuleHost {
    fn module_for_file(&self, project: ProjectId, file: &Path) -> Option<ModuleId> {
        (project == PROJECT && file.starts_with(&self.root)).then_some(MODULE)
    }

    fn has_quarkus_facet(&self, _module: ModuleId) -> bool {
        false
    }

    fn modules(&self, project: ProjectId) -> Vec<ModuleId> {
        if project == PROJECT {
            vec![MODULE]
        } else {
            Vec::new()
        }
    }
}

#[test]
fn inspects_an_on_disk_quarkus_module() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_path_buf();
    let resources = root.join("src/main/resources");
    std::fs::create_dir_all(&resources).unwrap();

    let properties = resources.join("application.properties");
    std::fs::write(
        &properties,
        "quarkus.http.port=9090\nquarkus.http.root-path=/api\n%dev.quarkus.http.port=9191\n",
    )
    .unwrap();
    let yaml = resources.join("application-dev.yaml");
    std::fs::write(&yaml, "quarkus:\n  http:\n    non-application-root-path: /internal\n").unwrap();

    let host = SingleModuleHost {
        root: root.clone(),
        jars: vec![
            PathBuf::from("/m2/quarkus-vertx-http-3.8.1.jar"),
            PathBuf::from("/m2/quarkus-core-3.8.1.jar"),
        ],
    };

    assert!(is_quarkus_module(&host, Some(MODULE)));
    assert!(is_quarkus_web_app_module(&host, Some(MODULE)));
    assert!(check_quarkus_version(
        &host,
        MODULE,
        |m| m.matches() && m.is_at_least(3, 0),
        false
    ));

    assert_eq!(content_roots(&host, MODULE)[0], root);
    assert_eq!(module_dir_path(&host, MODULE), Some(root.clone()));

    assert!(is_quarkus_properties_file(&host, &properties, PROJECT));
    assert!(is_quarkus_yaml_file_in_project(&host, &yaml, PROJECT));
    assert!(!is_quarkus_properties_file(&host, &properties, ProjectId::new(99)));

    let mut config = MicroProfileConfig::new();
    config.add_source(ConfigSource::load(&properties).unwrap());
    config.add_source(ConfigSource::load(&yaml).unwrap());

    assert_eq!(application_url(&config), "http://localhost:9191/api/");
    // The YAML value is scoped to `%dev`, so the default `q` still applies.
    assert_eq!(dev_ui_url(&config), "http://localhost:9191/api/q/dev");
}

#[test]
fn trait_objects_are_accepted() {
    let mut db = MemoryProject::new();
    let project = db.add_project();
    let module = db.add_module(project);
    db.add_library(module, "Maven: io.quarkus:quarkus-core:2.16.12.Final");

    let libraries: &dyn ModuleLibraryLookup = &db;
    assert!(is_quarkus_module(libraries, Some(module)));
    assert!(!is_quarkus_web_app_module(libraries, Some(module)));
    // Library names alone do not reveal a version: the default applies.
    assert!(check_quarkus_version(libraries, module, |_| false, true));
}
