//! Shared fixtures for binary tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for a scratch `projects` directory holding session logs
pub struct ProjectsDirBuilder {
    temp_dir: TempDir,
}

impl ProjectsDirBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a session file under the directory Claude would use for `project_path`
    pub fn with_session(self, project_path: &str, session_id: &str, lines: &[&str]) -> Self {
        let dir = self.project_dir(project_path);
        fs::create_dir_all(&dir).expect("Failed to create project dir");
        fs::write(dir.join(format!("{}.jsonl", session_id)), lines.join("\n"))
            .expect("Failed to write session file");
        self
    }

    /// Add an empty session directory for `project_path`
    pub fn with_empty_project(self, project_path: &str) -> Self {
        fs::create_dir_all(self.project_dir(project_path)).expect("Failed to create project dir");
        self
    }

    pub fn project_dir(&self, project_path: &str) -> PathBuf {
        self.temp_dir.path().join(project_path.replace('/', "-"))
    }

    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

pub fn text_record(text: &str) -> String {
    serde_json::json!({"type": "user", "message": {"role": "user", "content": text}}).to_string()
}

pub fn tool_record(name: &str, input: serde_json::Value) -> String {
    serde_json::json!({
        "type": "assistant",
        "message": {
            "role": "assistant",
            "content": [{"type": "tool_use", "id": "t1", "name": name, "input": input}]
        }
    })
    .to_string()
}
