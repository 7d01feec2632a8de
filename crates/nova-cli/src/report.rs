use std::path::{Path, PathBuf};

use nova_framework_quarkus::{
    application_url, check_quarkus_version, classify_config_file_name, content_roots,
    detect_quarkus_version, dev_ui_url, is_quarkus_module, is_quarkus_properties_file,
    is_quarkus_web_app_module, is_quarkus_yaml_file_in_project, module_dir_path, ConfigFileKind,
    ModuleOwnerLookup, VersionMatch,
};
use serde::Serialize;

use crate::workspace::{DirectoryModule, MODULE, PROJECT};

#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub module_root: PathBuf,
    pub config_path: Option<PathBuf>,
    pub module_dir: Option<PathBuf>,
    pub content_roots: Vec<PathBuf>,
    pub quarkus: bool,
    pub web_app: bool,
    pub facet: bool,
    pub version: Option<VersionReport>,
    /// Result of a `>= 2.0` version check using the configured fallback.
    pub supports_quarkus_2: bool,
    pub config_files: Vec<ConfigFileReport>,
    pub urls: UrlsReport,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct VersionReport {
    pub raw: String,
    pub standard: bool,
    pub major: Option<u32>,
    pub minor: Option<u32>,
    pub patch: Option<u32>,
    pub final_release: bool,
    pub redhat_build: Option<String>,
}

impl VersionReport {
    fn new(m: &VersionMatch<'_>) -> Self {
        Self {
            raw: m.version().to_string(),
            standard: m.matches(),
            major: m.major(),
            minor: m.minor(),
            patch: m.patch(),
            final_release: m.is_final(),
            redhat_build: m.redhat_build().map(str::to_owned),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ConfigFileReport {
    pub path: PathBuf,
    pub kind: &'static str,
    pub profile: Option<String>,
    /// Whether the file counts as Quarkus configuration for its module.
    pub quarkus: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UrlsReport {
    pub application: String,
    pub dev_ui: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ClassifyReport {
    pub file: PathBuf,
    pub kind: Option<&'static str>,
    pub profile: Option<String>,
    pub in_module: bool,
    pub quarkus_properties: bool,
    pub quarkus_yaml: bool,
}

fn kind_label(kind: ConfigFileKind) -> &'static str {
    match kind {
        ConfigFileKind::ApplicationProperties => "application-properties",
        ConfigFileKind::MicroProfileConfigProperties => "microprofile-config-properties",
        ConfigFileKind::ApplicationYaml => "application-yaml",
    }
}

impl UrlsReport {
    pub fn build(module: &DirectoryModule) -> Self {
        let config = module.microprofile_config();
        Self {
            application: application_url(&config),
            dev_ui: dev_ui_url(&config),
        }
    }
}

impl InspectReport {
    pub fn build(module: &DirectoryModule) -> Self {
        let version = detect_quarkus_version(module, MODULE).map(|raw| {
            let m = VersionMatch::new(&raw);
            VersionReport::new(&m)
        });

        let assume = module.config().quarkus.assume_quarkus_when_undetected;
        let supports_quarkus_2 =
            check_quarkus_version(module, MODULE, |m| m.is_at_least(2, 0), assume);

        let config_files = module
            .config_files()
            .into_iter()
            .filter_map(|path| {
                let name = classify_config_file_name(path.file_name()?.to_str()?)?;
                let quarkus = match name.kind {
                    ConfigFileKind::ApplicationYaml => {
                        is_quarkus_yaml_file_in_project(module, &path, PROJECT)
                    }
                    _ => is_quarkus_properties_file(module, &path, PROJECT),
                };
                Some(ConfigFileReport {
                    kind: kind_label(name.kind),
                    profile: name.profile,
                    quarkus,
                    path,
                })
            })
            .collect();

        Self {
            module_root: module.root().to_path_buf(),
            config_path: module.config_path().map(Path::to_path_buf),
            module_dir: module_dir_path(module, MODULE),
            content_roots: content_roots(module, MODULE),
            quarkus: is_quarkus_module(module, Some(MODULE)),
            web_app: is_quarkus_web_app_module(module, Some(MODULE)),
            facet: module.has_quarkus_facet(MODULE),
            version,
            supports_quarkus_2,
            config_files,
            urls: UrlsReport::build(module),
        }
    }

    pub fn print_human(&self) {
        println!("module: {}", self.module_root.display());
        if let Some(path) = &self.config_path {
            println!("  config: {}", path.display());
        }
        println!("  quarkus: {}", self.quarkus);
        println!("  web_app: {}", self.web_app);
        println!("  facet: {}", self.facet);
        match &self.version {
            Some(v) if v.standard => println!("  version: {} (standard)", v.raw),
            Some(v) => println!("  version: {} (non-standard)", v.raw),
            None => println!("  version: (not detected)"),
        }
        println!("  content_roots:");
        for root in &self.content_roots {
            println!("    {}", root.display());
        }
        println!("  config_files:");
        for file in &self.config_files {
            println!(
                "    {} [{}{}]{}",
                file.path.display(),
                file.kind,
                file.profile
                    .as_ref()
                    .map(|p| format!(", profile {p}"))
                    .unwrap_or_default(),
                if file.quarkus { "" } else { " (not a Quarkus module)" }
            );
        }
        self.urls.print_human();
    }
}

impl UrlsReport {
    pub fn print_human(&self) {
        println!("application: {}", self.application);
        println!("dev_ui: {}", self.dev_ui);
    }
}

impl ClassifyReport {
    pub fn build(module: &DirectoryModule, file: &Path) -> Self {
        let name = file
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(classify_config_file_name);
        Self {
            file: file.to_path_buf(),
            kind: name.as_ref().map(|n| kind_label(n.kind)),
            profile: name.and_then(|n| n.profile),
            in_module: module.module_for_file(PROJECT, file).is_some(),
            quarkus_properties: is_quarkus_properties_file(module, file, PROJECT),
            quarkus_yaml: is_quarkus_yaml_file_in_project(module, file, PROJECT),
        }
    }

    pub fn print_human(&self) {
        println!("file: {}", self.file.display());
        println!("  kind: {}", self.kind.unwrap_or("(not a Quarkus config file name)"));
        println!("  in_module: {}", self.in_module);
        println!("  quarkus_properties: {}", self.quarkus_properties);
        println!("  quarkus_yaml: {}", self.quarkus_yaml);
    }
}
