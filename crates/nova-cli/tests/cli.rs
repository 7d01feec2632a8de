use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

fn nova() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("nova"));
    cmd.env_remove("NOVA_CONFIG_PATH").env_remove("RUST_LOG");
    cmd
}

fn quarkus_module() -> TempDir {
    let temp = TempDir::new().unwrap();
    temp.child("lib/quarkus-core-3.8.1.jar").touch().unwrap();
    temp.child("lib/quarkus-vertx-http-3.8.1.jar").touch().unwrap();
    temp.child("src/main/resources/application.properties")
        .write_str("quarkus.http.port=9090\nquarkus.http.root-path=/api\n")
        .unwrap();
    temp.child("src/main/resources/application-dev.yaml")
        .write_str("quarkus:\n  http:\n    port: 9191\n")
        .unwrap();
    temp.child("nova.toml")
        .write_str("[quarkus]\nclasspath = [\"lib\"]\n")
        .unwrap();
    temp
}

#[test]
fn help_mentions_core_commands() {
    nova().arg("--help").assert().success().stdout(
        predicate::str::contains("inspect")
            .and(predicate::str::contains("urls"))
            .and(predicate::str::contains("classify")),
    );
}

#[test]
fn inspect_json_reports_quarkus_facts() {
    let temp = quarkus_module();

    let output = nova()
        .arg("inspect")
        .arg(temp.path())
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["quarkus"], true);
    assert_eq!(json["web_app"], true);
    assert_eq!(json["facet"], false);
    assert_eq!(json["supports_quarkus_2"], true);
    assert_eq!(json["version"]["raw"], "3.8.1");
    assert_eq!(json["version"]["standard"], true);
    assert_eq!(json["version"]["major"], 3);
    assert_eq!(json["version"]["final_release"], false);
    assert_eq!(json["config_files"].as_array().unwrap().len(), 2);
    assert_eq!(json["urls"]["application"], "http://localhost:9191/api/");
    assert_eq!(json["urls"]["dev_ui"], "http://localhost:9191/api/q/dev");
}

#[test]
fn inspect_accepts_classpath_flag() {
    let temp = TempDir::new().unwrap();
    let jars = TempDir::new().unwrap();
    jars.child("quarkus-core-2.16.12.Final.jar").touch().unwrap();

    let output = nova()
        .arg("inspect")
        .arg(temp.path())
        .arg("--classpath")
        .arg(jars.path())
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["quarkus"], true);
    assert_eq!(json["web_app"], false);
    assert_eq!(json["version"]["raw"], "2.16.12.Final");
    assert_eq!(json["version"]["final_release"], true);
}

#[test]
fn inspect_without_libraries_is_not_quarkus() {
    let temp = TempDir::new().unwrap();

    nova()
        .arg("inspect")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("quarkus: false")
                .and(predicate::str::contains("version: (not detected)")),
        );
}

#[test]
fn urls_default_to_localhost_8080() {
    let temp = TempDir::new().unwrap();

    nova()
        .arg("urls")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(
            predicate::str::contains("application: http://localhost:8080/")
                .and(predicate::str::contains("dev_ui: http://localhost:8080/q/dev")),
        );
}

#[test]
fn classify_sets_exit_code() {
    let temp = quarkus_module();
    let properties = temp.child("src/main/resources/application.properties");

    let output = nova()
        .arg("classify")
        .arg(properties.path())
        .arg("--module")
        .arg(temp.path())
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success(), "{output:?}");
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["kind"], "application-properties");
    assert_eq!(json["quarkus_properties"], true);
    assert_eq!(json["quarkus_yaml"], false);

    let other = temp.child("src/main/resources/other.properties");
    other.write_str("a=b\n").unwrap();
    nova()
        .arg("classify")
        .arg(other.path())
        .arg("--module")
        .arg(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("in_module: true"));
}

#[test]
fn debug_logging_covers_config_and_classpath_loading() {
    let temp = TempDir::new().unwrap();
    temp.child("lib/quarkus-core-3.8.1.jar").touch().unwrap();
    temp.child("nova.toml")
        .write_str("[logging]\nlevel = \"debug\"\n\n[quarkus]\nclasspath = [\"lib\"]\n")
        .unwrap();

    nova()
        .arg("urls")
        .arg(temp.path())
        .assert()
        .success()
        .stderr(
            predicate::str::contains("loaded config")
                .and(predicate::str::contains("expanded classpath directory"))
                .and(predicate::str::contains("opened module")),
        );
}

#[test]
fn invalid_config_is_reported() {
    let temp = TempDir::new().unwrap();
    temp.child("nova.toml")
        .write_str("[quarkus]\nunknown = 1\n")
        .unwrap();

    nova()
        .arg("inspect")
        .arg(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown field"));
}

#[test]
fn missing_module_root_fails() {
    let temp = TempDir::new().unwrap();

    nova()
        .arg("urls")
        .arg(temp.path().join("missing"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to resolve module root"));
}
