use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn stringlift_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("stringlift"))
}

#[test]
fn test_check_passes_for_well_formed_arb() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app_en.arb");
    fs::write(&path, "{\n    \"appTitle\": \"Demo\"\n}\n").unwrap();

    let output = stringlift_cmd()
        .args(["check", "-i", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("accepts appends"));
}

#[test]
fn test_check_fails_for_truncated_arb() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app_en.arb");
    fs::write(&path, "{\n    \"appTitle\": \"Demo\"\n").unwrap();

    let output = stringlift_cmd()
        .args(["check", "-i", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("malformed resource file"));
}

#[test]
fn test_check_fails_for_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("app_en.arb");
    fs::write(&path, "").unwrap();

    let output = stringlift_cmd()
        .args(["check", "-i", path.to_str().unwrap()])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("file is empty"));
}
