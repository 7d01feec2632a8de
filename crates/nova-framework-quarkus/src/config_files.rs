//! Classification of Quarkus configuration files by name and owning module.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::applicability::is_quarkus_enabled_for_file;
use crate::host::{ModuleLibraryLookup, ModuleOwnerLookup, ProjectId};

pub static APPLICATION_PROPERTIES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^application(-.+)?\.properties$").expect("application.properties regex")
});

pub static MICROPROFILE_CONFIG_PROPERTIES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^microprofile-config(-.+)?\.properties$")
        .expect("microprofile-config.properties regex")
});

pub static APPLICATION_YAML: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^application(-.+)?\.ya?ml$").expect("application.yaml regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFileKind {
    /// `application[-profile].properties`
    ApplicationProperties,
    /// `microprofile-config[-profile].properties`
    MicroProfileConfigProperties,
    /// `application[-profile].yaml` / `.yml`
    ApplicationYaml,
}

/// A configuration file name split into its kind and optional profile suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFileName {
    pub kind: ConfigFileKind,
    /// `dev` for `application-dev.properties`.
    pub profile: Option<String>,
}

/// Classifies a file by name only; the owning module is not consulted.
pub fn classify_config_file_name(file_name: &str) -> Option<ConfigFileName> {
    let patterns: [(&Regex, ConfigFileKind); 3] = [
        (&*APPLICATION_PROPERTIES, ConfigFileKind::ApplicationProperties),
        (
            &*MICROPROFILE_CONFIG_PROPERTIES,
            ConfigFileKind::MicroProfileConfigProperties,
        ),
        (&*APPLICATION_YAML, ConfigFileKind::ApplicationYaml),
    ];

    patterns.into_iter().find_map(|(re, kind)| {
        let caps = re.captures(file_name)?;
        let profile = caps
            .get(1)
            .map(|m| m.as_str().trim_start_matches('-').to_string());
        Some(ConfigFileName { kind, profile })
    })
}

fn file_name(file: &Path) -> Option<&str> {
    file.file_name()?.to_str()
}

/// `application[-profile].properties` or `microprofile-config[-profile].properties`
/// owned by a Quarkus-enabled module.
pub fn is_quarkus_properties_file<H>(host: &H, file: &Path, project: ProjectId) -> bool
where
    H: ModuleOwnerLookup + ModuleLibraryLookup + ?Sized,
{
    let Some(name) = file_name(file) else {
        return false;
    };
    if APPLICATION_PROPERTIES.is_match(name) || MICROPROFILE_CONFIG_PROPERTIES.is_match(name) {
        return is_quarkus_enabled_for_file(host, file, project);
    }
    false
}

/// Name-only check for `application[-profile].yaml` / `.yml`.
pub fn is_quarkus_yaml_file(file: &Path) -> bool {
    file_name(file).is_some_and(|name| APPLICATION_YAML.is_match(name))
}

/// Like [`is_quarkus_yaml_file`], additionally requiring a Quarkus-enabled owner module.
pub fn is_quarkus_yaml_file_in_project<H>(host: &H, file: &Path, project: ProjectId) -> bool
where
    H: ModuleOwnerLookup + ModuleLibraryLookup + ?Sized,
{
    is_quarkus_yaml_file(file) && is_quarkus_enabled_for_file(host, file, project)
}
