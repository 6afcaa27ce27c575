//! CLI tests for the check command.

use std::process::Command;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_check_builtin_content() {
    let temp_dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_folio"))
        .arg("--config")
        .arg(isolated_config(&temp_dir))
        .arg("check")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("✓ built-in content is valid"));
    assert!(stdout.contains("3 projects"));
}

#[test]
fn test_check_valid_file() {
    let (content_path, temp_dir) = create_temp_content_file(&test_content());
    let output = Command::new(env!("CARGO_BIN_EXE_folio"))
        .arg("--config")
        .arg(isolated_config(&temp_dir))
        .arg("check")
        .arg("--content")
        .arg(&content_path)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("2 frontend, 1 backend, 1 tools skills, 2 projects"));
}

#[test]
fn test_check_reports_invalid_color() {
    let mut content = test_content();
    content.skills.get_mut("frontend").unwrap()[1].color = "orange".to_string();
    let (content_path, temp_dir) = create_temp_content_file(&content);

    let output = Command::new(env!("CARGO_BIN_EXE_folio"))
        .arg("--config")
        .arg(isolated_config(&temp_dir))
        .arg("check")
        .arg("--content")
        .arg(&content_path)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("skill 'Svelte' in category 'frontend' has invalid display color 'orange'"));
}

#[test]
fn test_check_reports_duplicate_project() {
    let mut content = test_content();
    content.projects[1].id = 10;
    let (content_path, temp_dir) = create_temp_content_file(&content);

    let output = Command::new(env!("CARGO_BIN_EXE_folio"))
        .arg("--config")
        .arg(isolated_config(&temp_dir))
        .args(["check", "--content"])
        .arg(&content_path)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("duplicate project id 10: 'Bernoulli' and 'Loom'"));
}

#[test]
fn test_check_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope.toml");

    let output = Command::new(env!("CARGO_BIN_EXE_folio"))
        .arg("--config")
        .arg(isolated_config(&temp_dir))
        .args(["check", "--content"])
        .arg(&missing)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("nope.toml"));
}
