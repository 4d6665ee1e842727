//! Integration tests for the project-context CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("project-context").unwrap()
}

#[test]
fn generates_artifact_in_invocation_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("main.py"), "print('hi')\n").unwrap();

    cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Project Context Generation Complete"))
        .stdout(predicate::str::contains("Output file: project-context.txt"))
        .stdout(predicate::str::contains("Files processed: 1"));

    let artifact = fs::read_to_string(dir.path().join("project-context.txt")).unwrap();
    assert!(artifact.starts_with("<project_overview>"));
    assert!(artifact.contains("<file path=\"main.py\">"));
    assert!(artifact.ends_with("</project_overview>"));
}

#[test]
fn reports_line_and_token_totals() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("greeting.txt"), "hello\n").unwrap();

    cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total lines: 2"))
        .stdout(predicate::str::contains("Estimated tokens: 1"));
}

#[test]
fn positional_path_scopes_the_walk() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    fs::write(dir.path().join("sub/note.md"), "# note\n").unwrap();
    fs::write(dir.path().join("outside.txt"), "not walked\n").unwrap();

    cmd().current_dir(dir.path()).arg("sub").assert().success();

    let artifact = fs::read_to_string(dir.path().join("project-context.txt")).unwrap();
    assert!(artifact.contains("<generated_at>sub</generated_at>"));
    assert!(artifact.contains("<file path=\"note.md\">"));
    assert!(!artifact.contains("outside.txt"));
}

#[test]
fn output_flag_overrides_artifact_name() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "content\n").unwrap();

    cmd()
        .current_dir(dir.path())
        .args(["--output", "ctx.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Output file: ctx.txt"));

    let artifact = fs::read_to_string(dir.path().join("ctx.txt")).unwrap();
    assert!(artifact.contains("<file path=\"a.txt\">"));
    // The artifact under its overridden name never ingests itself.
    assert!(!artifact.contains("<file path=\"ctx.txt\">"));
}

#[test]
fn lock_files_and_excluded_dirs_stay_out() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("yarn.lock"), "# lock\n").unwrap();
    fs::create_dir(dir.path().join("node_modules")).unwrap();
    fs::write(dir.path().join("node_modules/dep.js"), "x\n").unwrap();
    fs::write(dir.path().join("app.js"), "y\n").unwrap();

    cmd()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Files processed: 1"));

    let artifact = fs::read_to_string(dir.path().join("project-context.txt")).unwrap();
    assert!(artifact.contains("app.js"));
    assert!(!artifact.contains("yarn.lock"));
    assert!(!artifact.contains("dep.js"));
}

#[test]
fn nonexistent_root_is_a_fatal_error() {
    let dir = TempDir::new().unwrap();

    cmd()
        .current_dir(dir.path())
        .arg("no-such-dir")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    assert!(!dir.path().join("project-context.txt").exists());
}
