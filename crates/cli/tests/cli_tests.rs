//! End-to-end binary tests for manifest-cli.
//!
//! Each test runs the real binary with a scrubbed environment
//! (`env_clear` plus `DOTENV_DISABLED`) so resolution sees exactly the
//! variables the test sets, and a temporary project root so filesystem
//! probes are hermetic.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn manifest_cli(project: &Path) -> Command {
    let mut cmd = Command::cargo_bin("manifest-cli").unwrap();
    cmd.env_clear()
        .env("DOTENV_DISABLED", "1")
        .current_dir(project);
    cmd
}

fn write_google_services_files(root: &Path) {
    let dir = root.join("google-services");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("GoogleService-Info.plist"), "<plist/>").unwrap();
    fs::write(dir.join("google-services.json"), "{}").unwrap();
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "manifest-cli failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_defaults_with_bare_environment() {
    let project = TempDir::new().unwrap();
    let value = stdout_json(&mut manifest_cli(project.path()));

    assert_eq!(value["name"], "");
    assert_eq!(value["version"], "1.0.0");
    assert_eq!(value["ios"]["bundleIdentifier"], "com.example");
    assert_eq!(value["android"]["package"], "com.example");
    assert_eq!(value["ios"]["entitlements"]["aps-environment"], "development");
    assert!(value["ios"].get("googleServicesFile").is_none());
    assert!(value["android"].get("googleServicesFile").is_none());
}

#[test]
fn test_env_vars_flow_into_manifest() {
    let project = TempDir::new().unwrap();
    let value = stdout_json(
        manifest_cli(project.path())
            .env("APP_NAME", "Example App")
            .env("APP_SLUG", "example-app")
            .env("APP_VERSION", "2.0.0")
            .env("BUNDLE_IDENTIFIER", "org.example.mobile")
            .env("IOS_URL_SCHEME", "com.googleusercontent.apps.42"),
    );

    assert_eq!(value["name"], "Example App");
    assert_eq!(value["slug"], "example-app");
    assert_eq!(value["version"], "2.0.0");
    assert_eq!(value["ios"]["bundleIdentifier"], "org.example.mobile");
    assert_eq!(
        value["plugins"][8][1]["iosUrlScheme"],
        "com.googleusercontent.apps.42"
    );
}

#[test]
fn test_production_node_env_with_credential_files() {
    let project = TempDir::new().unwrap();
    write_google_services_files(project.path());

    let value = stdout_json(manifest_cli(project.path()).env("NODE_ENV", "production"));

    assert_eq!(value["ios"]["entitlements"]["aps-environment"], "production");
    let ios_path = value["ios"]["googleServicesFile"].as_str().unwrap();
    let android_path = value["android"]["googleServicesFile"].as_str().unwrap();
    assert!(Path::new(ios_path).is_absolute());
    assert!(Path::new(android_path).is_absolute());
    assert!(ios_path.ends_with("GoogleService-Info.plist"));
    assert!(android_path.ends_with("google-services.json"));
}

#[test]
fn test_custom_profile_keeps_development_entitlement() {
    let project = TempDir::new().unwrap();
    let value = stdout_json(
        manifest_cli(project.path())
            .env("EAS_BUILD_PROFILE", "preview")
            .env("NODE_ENV", "production"),
    );

    assert_eq!(value["ios"]["entitlements"]["aps-environment"], "development");
}

#[test]
fn test_project_root_flag_controls_probe_location() {
    let cwd = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    write_google_services_files(project.path());

    let value = stdout_json(
        manifest_cli(cwd.path())
            .arg("--project-root")
            .arg(project.path()),
    );

    let android_path = value["android"]["googleServicesFile"].as_str().unwrap();
    assert!(android_path.starts_with(project.path().to_str().unwrap()));
}

#[test]
fn test_output_file_writes_manifest() {
    let project = TempDir::new().unwrap();
    let out = project.path().join("app.json");

    manifest_cli(project.path())
        .arg("--output-file")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let value: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(value["version"], "1.0.0");
}

#[test]
fn test_compact_json_is_single_line() {
    let project = TempDir::new().unwrap();
    let output = manifest_cli(project.path())
        .arg("--compact")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end().lines().count(), 1);
}

#[test]
fn test_yaml_output_parses() {
    let project = TempDir::new().unwrap();
    let output = manifest_cli(project.path())
        .args(["--output", "yaml"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: Value = serde_yaml::from_slice(&output.stdout).unwrap();
    assert_eq!(value["web"]["bundler"], "metro");
    assert_eq!(value["experiments"]["typedRoutes"], true);
}

#[test]
fn test_unknown_output_format_is_rejected() {
    let project = TempDir::new().unwrap();
    manifest_cli(project.path())
        .args(["--output", "toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
