//! CLI integration tests for resin
//!
//! These tests drive the real binary. Manager state lives per process,
//! so they focus on argument handling, error reporting, and the output
//! of a fresh project root.

use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command instance for the resin binary
fn resin_cmd() -> assert_cmd::Command {
    assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("resin"))
}

// =============================================================================
// General
// =============================================================================

#[test]
fn test_help_lists_the_commands() {
    resin_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bind"))
        .stdout(predicate::str::contains("package"))
        .stdout(predicate::str::contains("map"));
}

// =============================================================================
// Package
// =============================================================================

#[test]
fn test_package_list_shows_the_fresh_root_unadorned() {
    let dir = TempDir::new().unwrap();
    let root_name = dir
        .path()
        .file_name()
        .unwrap()
        .to_string_lossy()
        .into_owned();

    resin_cmd()
        .current_dir(dir.path())
        .args(["package", "list"])
        .assert()
        .success()
        .stdout(format!("{}\n", root_name));
}

#[test]
fn test_package_list_with_format_renders_the_root_state() {
    let dir = TempDir::new().unwrap();

    resin_cmd()
        .current_dir(dir.path())
        .args(["package", "list", "--format", "%name%:%installer%:%state%"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with(":enabled\n"));
}

#[test]
fn test_package_delete_of_a_missing_package_fails() {
    let dir = TempDir::new().unwrap();

    resin_cmd()
        .current_dir(dir.path())
        .args(["package", "delete", "vendor/ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "The package \"vendor/ghost\" is not installed.",
        ));
}

#[test]
fn test_package_clean_on_a_fresh_root_removes_nothing() {
    let dir = TempDir::new().unwrap();

    resin_cmd()
        .current_dir(dir.path())
        .args(["package", "clean"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// =============================================================================
// Bind
// =============================================================================

#[test]
fn test_bind_add_accepts_typed_parameters() {
    let dir = TempDir::new().unwrap();

    resin_cmd()
        .current_dir(dir.path())
        .args([
            "bind",
            "/app/views/*.twig",
            "twig-template",
            "--param",
            "priority=1",
            "--param",
            "cached=true",
        ])
        .assert()
        .success();
}

#[test]
fn test_bind_add_rejects_a_parameter_without_equals() {
    let dir = TempDir::new().unwrap();

    resin_cmd()
        .current_dir(dir.path())
        .args(["bind", "/app/*.yml", "config", "--param", "broken"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid parameter \"broken\": expected <name>=<value>",
        ));
}

#[test]
fn test_bind_delete_of_an_unknown_prefix_is_a_no_op() {
    let dir = TempDir::new().unwrap();

    resin_cmd()
        .current_dir(dir.path())
        .args(["bind", "--delete", "abc123"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_bind_list_on_a_fresh_root_prints_nothing() {
    let dir = TempDir::new().unwrap();

    resin_cmd()
        .current_dir(dir.path())
        .args(["bind"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// =============================================================================
// Map
// =============================================================================

#[test]
fn test_map_add_requires_a_filesystem_path() {
    let dir = TempDir::new().unwrap();

    resin_cmd()
        .current_dir(dir.path())
        .args(["map", "/app"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("filesystem path"));
}

#[test]
fn test_map_add_accepts_several_filesystem_paths() {
    let dir = TempDir::new().unwrap();

    resin_cmd()
        .current_dir(dir.path())
        .args(["map", "/app", "res", "assets"])
        .assert()
        .success();
}
