//! Runs the built `daprhome` binary against temporary installation roots.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;

fn daprhome(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_daprhome"))
        .arg("--install-root")
        .arg(root)
        .args(args)
        .env_remove("DAPR_E2E_INIT_SLIM")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_paths_json_uses_install_root() {
    let temp = tempdir().unwrap();
    let output = daprhome(temp.path(), &["paths", "--json"]);

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(
        json["resources_dir"].as_str().unwrap(),
        temp.path().join("resources").to_str().unwrap()
    );
}

#[test]
#[cfg(unix)]
fn test_migrate_then_resources_dir() {
    let temp = tempdir().unwrap();
    let components = temp.path().join("components");
    fs::create_dir_all(&components).unwrap();
    fs::write(components.join("statestore.yaml"), b"kind: Component").unwrap();

    let migrated = daprhome(temp.path(), &["migrate"]);
    assert!(migrated.status.success(), "{}", String::from_utf8_lossy(&migrated.stderr));
    assert!(stdout(&migrated).contains("Moved 1 file(s)"));

    let again = daprhome(temp.path(), &["migrate"]);
    assert!(stdout(&again).contains("already linked"));

    let selected = daprhome(temp.path(), &["resources-dir"]);
    assert_eq!(
        stdout(&selected),
        temp.path().join("resources").display().to_string()
    );
}

#[test]
fn test_cert_check_rejects_bad_timestamp_with_usage_code() {
    let temp = tempdir().unwrap();
    let output = daprhome(temp.path(), &["cert-check", "--expires-at", "never"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_cert_check_warns_for_near_expiry() {
    let temp = tempdir().unwrap();
    let soon = (chrono::Utc::now() + chrono::TimeDelta::days(10)).to_rfc3339();
    let output = daprhome(temp.path(), &["cert-check", "--expires-at", &soon]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("expires in"));
}
