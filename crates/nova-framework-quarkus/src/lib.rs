//! Quarkus project inspection for Nova.
//!
//! Stateless queries over a host-supplied project model:
//! - is a module a Quarkus (web) module, and which Quarkus version does it use
//! - is a file a Quarkus `application.properties` / `application.yaml`
//! - which content root is the module's primary root
//! - where a locally running application and its Dev UI are reachable
//!
//! The host is passed in through the traits in [`host`]; [`MemoryProject`] is a
//! ready-made in-memory implementation.

mod applicability;
mod config;
mod config_files;
pub mod host;
mod memory;
mod roots;
mod urls;
mod version;

pub use applicability::{
    is_quarkus_module, is_quarkus_web_app_module, QUARKUS_CORE_PREFIX, QUARKUS_VERTX_HTTP_PREFIX,
};
pub use config::{
    ConfigSource, ConfigSourceError, MicroProfileConfig, APPLICATION_PROPERTIES_ORDINAL,
    APPLICATION_YAML_ORDINAL, MICROPROFILE_CONFIG_ORDINAL,
};
pub use config_files::{
    classify_config_file_name, is_quarkus_properties_file, is_quarkus_yaml_file,
    is_quarkus_yaml_file_in_project, ConfigFileKind, ConfigFileName, APPLICATION_PROPERTIES,
    APPLICATION_YAML, MICROPROFILE_CONFIG_PROPERTIES,
};
pub use host::{
    ContentRootLookup, ModuleId, ModuleLibraryLookup, ModuleOwnerLookup, ProjectId,
    PropertyLookup,
};
pub use memory::{MemoryProject, MemoryProperties};
pub use roots::{content_roots, module_dir_path, module_uris, sort_roots};
pub use urls::{
    application_url, dev_ui_url, http_port, DEFAULT_HTTP_PORT, DEFAULT_NON_APPLICATION_ROOT_PATH,
    DEFAULT_ROOT_PATH, DEV_HTTP_PORT, HTTP_NON_APPLICATION_ROOT_PATH, HTTP_PORT, HTTP_ROOT_PATH,
};
pub use version::{
    check_quarkus_version, detect_quarkus_version, VersionMatch, QUARKUS_CORE_JAR,
    QUARKUS_STANDARD_VERSIONING,
};
