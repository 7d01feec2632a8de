//! Quarkus version detection from the module classpath.
//!
//! Parsing happens in two independent stages:
//! 1. [`QUARKUS_CORE_JAR`] recognises a `quarkus-core-<version>.jar` file name and
//!    captures `<version>` permissively.
//! 2. [`QUARKUS_STANDARD_VERSIONING`] checks whether that version is a comparable
//!    `major.minor.patch[.Final][-redhat-N]` version.
//!
//! Keeping the stages apart lets callers tell "no quarkus-core jar" from
//! "quarkus-core jar with a non-standard version" (e.g. `999-SNAPSHOT`).

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::host::{ModuleId, ModuleLibraryLookup};

pub static QUARKUS_CORE_JAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^quarkus-core-(\d[a-zA-Z\d\-.]+?)\.jar$")
        .expect("quarkus-core jar regex should compile")
});

pub static QUARKUS_STANDARD_VERSIONING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)\.(\d+)\.(\d+)(\.Final)?(-redhat-\d+)?$")
        .expect("quarkus versioning regex should compile")
});

/// Outcome of matching a detected version against [`QUARKUS_STANDARD_VERSIONING`].
///
/// The version itself is always available; the capture groups only exist when the
/// version follows the standard scheme. Group 1..=3 are major, minor and patch,
/// group 4 is `.Final` and group 5 the `-redhat-N` qualifier.
#[derive(Debug)]
pub struct VersionMatch<'a> {
    version: &'a str,
    captures: Option<Captures<'a>>,
}

impl<'a> VersionMatch<'a> {
    pub fn new(version: &'a str) -> Self {
        Self {
            version,
            captures: QUARKUS_STANDARD_VERSIONING.captures(version),
        }
    }

    /// The raw version extracted from the jar name.
    pub fn version(&self) -> &'a str {
        self.version
    }

    /// `true` when the version follows the standard scheme.
    pub fn matches(&self) -> bool {
        self.captures.is_some()
    }

    /// Capture group `index`; `None` when the version did not match or the
    /// optional group is absent.
    pub fn group(&self, index: usize) -> Option<&'a str> {
        self.captures
            .as_ref()?
            .get(index)
            .map(|m| m.as_str())
    }

    pub fn major(&self) -> Option<u32> {
        self.numeric_group(1)
    }

    pub fn minor(&self) -> Option<u32> {
        self.numeric_group(2)
    }

    pub fn patch(&self) -> Option<u32> {
        self.numeric_group(3)
    }

    pub fn is_final(&self) -> bool {
        self.group(4).is_some()
    }

    /// The Red Hat build number of a `-redhat-N` qualified version.
    pub fn redhat_build(&self) -> Option<&'a str> {
        self.group(5).and_then(|q| q.strip_prefix("-redhat-"))
    }

    /// `true` when the version is standard and `>= major.minor`.
    pub fn is_at_least(&self, major: u32, minor: u32) -> bool {
        match (self.major(), self.minor()) {
            (Some(actual_major), Some(actual_minor)) => {
                (actual_major, actual_minor) >= (major, minor)
            }
            _ => false,
        }
    }

    fn numeric_group(&self, index: usize) -> Option<u32> {
        self.group(index)?.parse().ok()
    }
}

/// File name of the first class root that looks like `quarkus-core-<version>.jar`.
fn find_quarkus_core_jar<L>(libraries: &L, module: ModuleId) -> Option<String>
where
    L: ModuleLibraryLookup + ?Sized,
{
    libraries
        .classpath_roots(module)
        .iter()
        .filter_map(|root| root.file_name()?.to_str())
        .find(|name| QUARKUS_CORE_JAR.is_match(name))
        .map(str::to_owned)
}

fn core_jar_version(jar_name: &str) -> Option<&str> {
    let version = QUARKUS_CORE_JAR.captures(jar_name)?.get(1)?.as_str();
    tracing::debug!(target: "nova.quarkus", version, "detected Quarkus version");
    Some(version)
}

/// Returns the version captured from the first `quarkus-core-<version>.jar` class
/// root of the module.
pub fn detect_quarkus_version<L>(libraries: &L, module: ModuleId) -> Option<String>
where
    L: ModuleLibraryLookup + ?Sized,
{
    let jar_name = find_quarkus_core_jar(libraries, module)?;
    core_jar_version(&jar_name).map(str::to_owned)
}

/// Checks whether the Quarkus version used by `module` satisfies `predicate`.
///
/// When no `quarkus-core` jar is found on the runtime classpath, the answer is
/// `return_if_no_quarkus_detected`. Otherwise `predicate` receives the strict match
/// attempt, which may not have matched; predicates must treat a non-match as
/// "unknown".
pub fn check_quarkus_version<L, F>(
    libraries: &L,
    module: ModuleId,
    predicate: F,
    return_if_no_quarkus_detected: bool,
) -> bool
where
    L: ModuleLibraryLookup + ?Sized,
    F: FnOnce(&VersionMatch<'_>) -> bool,
{
    let Some(jar_name) = find_quarkus_core_jar(libraries, module) else {
        return return_if_no_quarkus_detected;
    };
    let Some(version) = core_jar_version(&jar_name) else {
        return false;
    };
    predicate(&VersionMatch::new(version))
}
