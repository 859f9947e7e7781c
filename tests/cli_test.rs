/// Binary tests: invoke `session-finder` against a scratch projects directory
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::json;

use common::{ProjectsDirBuilder, text_record, tool_record};

const PROJECT: &str = "/Users/a/Dev/proj";

fn cmd(projects: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_session-finder"));
    cmd.env("SESSION_FINDER_PROJECTS_DIR", projects)
        .env("NO_COLOR", "1")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("SESSION_FINDER_LOG");
    cmd
}

#[test]
fn test_missing_query_prints_usage_and_fails() {
    let projects = ProjectsDirBuilder::new().build();
    cmd(projects.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"))
        .stderr(predicate::str::contains("Examples:"));
}

#[test]
fn test_ranks_matching_sessions() {
    let edit = tool_record("Edit", json!({"file_path": "/src/auth.rs", "old_string": "auth"}));
    let projects = ProjectsDirBuilder::new()
        .with_session(PROJECT, "weak", &[&text_record("fix auth bug")])
        .with_session(PROJECT, "strong", &[&edit, &text_record("auth works now")])
        .with_session(PROJECT, "other", &[&text_record("unrelated")])
        .build();

    cmd(projects.path())
        .args(["auth", PROJECT])
        .assert()
        .success()
        .stdout(predicate::str::contains("Searching 3 sessions for: \"auth\""))
        .stdout(predicate::str::contains("Project: /Users/a/Dev/proj"))
        .stdout(predicate::str::contains("Found 2 matching session(s):"))
        .stdout(predicate::str::contains("1. Session: strong"))
        .stdout(predicate::str::contains("Relevance: Medium (score: 2)"))
        .stdout(predicate::str::contains("2. Session: weak"))
        .stdout(predicate::str::contains("Files: /src/auth.rs"))
        .stdout(predicate::str::contains("Tools: Edit"))
        .stdout(predicate::str::contains(
            "Resume: claude --resume strong --project /Users/a/Dev/proj",
        ))
        .stdout(predicate::str::contains("other").not());
}

#[test]
fn test_no_matches_is_not_an_error() {
    let projects = ProjectsDirBuilder::new()
        .with_session(PROJECT, "s1", &[&text_record("hello world")])
        .build();

    cmd(projects.path())
        .args(["zebra", PROJECT])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions found matching your search."))
        .stdout(predicate::str::contains("Try:"));
}

#[test]
fn test_metadata_only_match_is_ignored() {
    let record = json!({"sessionId": "auth", "gitBranch": "auth", "message": {"content": "hi"}});
    let projects = ProjectsDirBuilder::new()
        .with_session(PROJECT, "s1", &[&record.to_string()])
        .build();

    cmd(projects.path())
        .args(["auth", PROJECT])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sessions found matching your search."));
}

#[test]
fn test_empty_project_directory() {
    let projects = ProjectsDirBuilder::new().with_empty_project(PROJECT).build();

    cmd(projects.path())
        .args(["auth", PROJECT])
        .assert()
        .success()
        .stdout(predicate::str::contains("No session files found in:"))
        .stdout(predicate::str::contains("No sessions found matching your search."));
}

#[test]
fn test_unknown_project_falls_back_to_cwd() {
    let cwd = tempfile::TempDir::new().unwrap();
    let projects = ProjectsDirBuilder::new().build();

    cmd(projects.path())
        .current_dir(cwd.path())
        .args(["auth", "/does/not/exist"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: Session directory not found:"))
        .stdout(predicate::str::contains("Falling back to current working directory..."))
        .stdout(predicate::str::contains("Error: Session directory not found:"));
}

#[test]
fn test_uses_current_directory_without_project_arg() {
    let cwd = tempfile::TempDir::new().unwrap();
    let cwd_path = cwd.path().canonicalize().unwrap();
    let cwd_str = cwd_path.to_string_lossy().into_owned();

    let projects = ProjectsDirBuilder::new()
        .with_session(&cwd_str, "here", &[&text_record("rotation")])
        .build();

    cmd(projects.path())
        .current_dir(&cwd_path)
        .arg("rotation")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Session: here"))
        .stdout(predicate::str::contains(format!("Project: {}", cwd_str)));
}

#[test]
fn test_help_flag() {
    let projects = ProjectsDirBuilder::new().build();
    cmd(projects.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Search Claude Code sessions"))
        .stdout(predicate::str::contains("PROJECT_PATH"));
}

#[test]
fn test_empty_project_arg_uses_current_directory() {
    let cwd = tempfile::TempDir::new().unwrap();
    let cwd_path = cwd.path().canonicalize().unwrap();
    let cwd_str = cwd_path.to_string_lossy().into_owned();

    let projects = ProjectsDirBuilder::new()
        .with_session(&cwd_str, "here", &[&text_record("rotation")])
        .build();

    cmd(projects.path())
        .current_dir(&cwd_path)
        .args(["rotation", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Session: here"))
        .stdout(predicate::str::contains(format!(
            "Resume: claude --resume here --project {}",
            cwd_str
        )));
}
