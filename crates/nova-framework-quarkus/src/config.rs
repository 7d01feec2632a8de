//! MicroProfile config sources backing [`PropertyLookup`] for a Quarkus module.
//!
//! Ordinals follow Quarkus: `application.yaml` (255) beats
//! `application.properties` (250), which beats `microprofile-config.properties` (100).

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use nova_properties::profiled_key;
use thiserror::Error;

use crate::config_files::{classify_config_file_name, ConfigFileKind};
use crate::host::PropertyLookup;

pub const APPLICATION_YAML_ORDINAL: i32 = 255;
pub const APPLICATION_PROPERTIES_ORDINAL: i32 = 250;
pub const MICROPROFILE_CONFIG_ORDINAL: i32 = 100;

#[derive(Debug, Error)]
pub enum ConfigSourceError {
    #[error("failed to read config source {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a Quarkus configuration file")]
    UnsupportedFile { path: String },
}

/// Key/value pairs read from one configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub path: PathBuf,
    pub kind: ConfigFileKind,
    pub ordinal: i32,
    /// Profile encoded in the file name (`application-dev.properties`).
    pub profile: Option<String>,
    values: HashMap<String, String>,
}

impl ConfigSource {
    /// Builds a source from file text; the file name decides format, ordinal and profile.
    pub fn from_text(path: impl Into<PathBuf>, text: &str) -> Result<Self, ConfigSourceError> {
        let path = path.into();
        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(classify_config_file_name)
            .ok_or_else(|| ConfigSourceError::UnsupportedFile {
                path: path.display().to_string(),
            })?;

        let (ordinal, pairs): (i32, Vec<(String, String)>) = match name.kind {
            ConfigFileKind::ApplicationProperties | ConfigFileKind::MicroProfileConfigProperties => {
                let ordinal = if name.kind == ConfigFileKind::ApplicationProperties {
                    APPLICATION_PROPERTIES_ORDINAL
                } else {
                    MICROPROFILE_CONFIG_ORDINAL
                };
                let pairs = nova_properties::parse(text)
                    .entries
                    .into_iter()
                    .map(|e| (e.key, e.value))
                    .collect();
                (ordinal, pairs)
            }
            ConfigFileKind::ApplicationYaml => {
                let pairs = nova_yaml::parse(text)
                    .entries
                    .into_iter()
                    .map(|e| (e.key, e.value))
                    .collect();
                (APPLICATION_YAML_ORDINAL, pairs)
            }
        };

        let mut values = HashMap::with_capacity(pairs.len());
        for (key, value) in pairs {
            let key = match name.profile.as_deref() {
                Some(profile) if !key.starts_with('%') => profiled_key(profile, &key),
                _ => key,
            };
            // Later occurrences override earlier ones.
            values.insert(key, value);
        }

        Ok(Self {
            path,
            kind: name.kind,
            ordinal,
            profile: name.profile,
            values,
        })
    }

    /// Reads and parses `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigSourceError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigSourceError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_text(path, &text)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Ordered set of config sources; the highest ordinal holding a key wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MicroProfileConfig {
    sources: Vec<ConfigSource>,
}

impl MicroProfileConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a source. Among equal ordinals, sources added first win.
    pub fn add_source(&mut self, source: ConfigSource) {
        let at = self
            .sources
            .iter()
            .position(|existing| existing.ordinal < source.ordinal)
            .unwrap_or(self.sources.len());
        self.sources.insert(at, source);
    }

    /// Sources in lookup order.
    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }
}

impl PropertyLookup for MicroProfileConfig {
    fn raw_property(&self, key: &str) -> Option<String> {
        self.sources
            .iter()
            .find_map(|source| source.get(key))
            .map(str::to_owned)
    }
}
