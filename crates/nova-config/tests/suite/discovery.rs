use std::ffi::OsString;

use nova_config::{
    discover_config_path, load_for_workspace, with_config_env_lock, ConfigError, NovaConfig,
    NOVA_CONFIG_ENV_VAR,
};
use tempfile::tempdir;

struct EnvVarGuard {
    key: &'static str,
    prev: Option<OsString>,
}

impl EnvVarGuard {
    fn set(key: &'static str, value: &std::path::Path) -> Self {
        let prev = std::env::var_os(key);
        std::env::set_var(key, value);
        Self { key, prev }
    }

    fn unset(key: &'static str) -> Self {
        let prev = std::env::var_os(key);
        std::env::remove_var(key);
        Self { key, prev }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        match &self.prev {
            Some(v) => std::env::set_var(self.key, v),
            None => std::env::remove_var(self.key),
        }
    }
}

#[test]
fn discovers_nova_toml_in_module_root() {
    with_config_env_lock(|| {
        let _env = EnvVarGuard::unset(NOVA_CONFIG_ENV_VAR);

        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nova.toml");
        std::fs::write(&config_path, "[quarkus]\nfacet = true\n").unwrap();

        let discovered = discover_config_path(dir.path()).expect("nova.toml should be discovered");
        assert_eq!(
            discovered,
            config_path.canonicalize().unwrap_or(config_path)
        );

        let (config, path) = load_for_workspace(dir.path()).unwrap();
        assert!(config.quarkus.facet);
        assert!(path.is_some());
    });
}

#[test]
fn legacy_dot_nova_directory_is_a_fallback() {
    with_config_env_lock(|| {
        let _env = EnvVarGuard::unset(NOVA_CONFIG_ENV_VAR);

        let dir = tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".nova")).unwrap();
        std::fs::write(
            dir.path().join(".nova/config.toml"),
            "[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let (config, path) = load_for_workspace(dir.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(path.unwrap().ends_with(".nova/config.toml"));
    });
}

#[test]
fn env_var_overrides_discovery() {
    with_config_env_lock(|| {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("nova.toml"), "[quarkus]\nfacet = false\n").unwrap();
        std::fs::write(dir.path().join("custom.toml"), "[quarkus]\nfacet = true\n").unwrap();

        let _env = EnvVarGuard::set(NOVA_CONFIG_ENV_VAR, std::path::Path::new("custom.toml"));

        let (config, path) = load_for_workspace(dir.path()).unwrap();
        assert!(config.quarkus.facet);
        assert!(path.unwrap().ends_with("custom.toml"));
    });
}

#[test]
fn missing_config_yields_defaults() {
    with_config_env_lock(|| {
        let _env = EnvVarGuard::unset(NOVA_CONFIG_ENV_VAR);

        let dir = tempdir().unwrap();
        let (config, path) = load_for_workspace(dir.path()).unwrap();
        assert_eq!(config, NovaConfig::default());
        assert!(path.is_none());
    });
}

#[test]
fn invalid_toml_is_reported() {
    with_config_env_lock(|| {
        let _env = EnvVarGuard::unset(NOVA_CONFIG_ENV_VAR);

        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("nova.toml"), "[quarkus\n").unwrap();

        let err = load_for_workspace(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)), "{err:?}");
    });
}
