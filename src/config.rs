use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Overrides the default `~/.claude/projects` location.
pub const PROJECTS_DIR_ENV: &str = "SESSION_FINDER_PROJECTS_DIR";

const SESSION_EXTENSION: &str = "jsonl";

pub struct Config {
    pub projects_dir: PathBuf,
    pub cwd: PathBuf,
}

/// Where a project's sessions live, plus the project path to show the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionLocation {
    pub dir: PathBuf,
    pub project_path: String,
    /// Set when the requested project had no session directory and the
    /// working directory was used instead.
    pub missing: Option<PathBuf>,
}

impl Config {
    pub fn new(projects_dir: impl Into<PathBuf>, cwd: impl Into<PathBuf>) -> Self {
        Config {
            projects_dir: projects_dir.into(),
            cwd: cwd.into(),
        }
    }

    pub fn from_env() -> Result<Self> {
        let projects_dir = match std::env::var_os(PROJECTS_DIR_ENV) {
            Some(p) if !p.is_empty() => PathBuf::from(p),
            _ => default_projects_dir()?,
        };
        let cwd = std::env::current_dir().context("Could not determine current directory")?;
        Ok(Config::new(projects_dir, cwd))
    }

    fn session_dir_for(&self, project_path: &str) -> PathBuf {
        self.projects_dir.join(encode_project_path(project_path))
    }

    /// Resolve the session directory for `project`, falling back to the
    /// working directory when the project's directory doesn't exist.
    /// An empty project path counts as no project. Never fails; the
    /// returned directory may not exist either.
    pub fn locate(&self, project: Option<&str>) -> SessionLocation {
        let cwd = self.cwd.to_string_lossy().into_owned();

        match project.filter(|p| !p.is_empty()) {
            Some(p) => {
                let dir = self.session_dir_for(p);
                if dir.exists() {
                    SessionLocation {
                        dir,
                        project_path: p.to_string(),
                        missing: None,
                    }
                } else {
                    SessionLocation {
                        dir: self.session_dir_for(&cwd),
                        project_path: p.to_string(),
                        missing: Some(dir),
                    }
                }
            }
            None => SessionLocation {
                dir: self.session_dir_for(&cwd),
                project_path: cwd,
                missing: None,
            },
        }
    }
}

fn default_projects_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not find home directory")?;
    Ok(home.join(".claude").join("projects"))
}

/// Claude names a project's session directory after its path with every
/// separator turned into `-`, e.g. `/Users/a/Dev/proj` -> `-Users-a-Dev-proj`.
/// Hyphens already in the path are kept, so the mapping is not reversible.
pub fn encode_project_path(project_path: &str) -> String {
    project_path
        .chars()
        .map(|c| if std::path::is_separator(c) { '-' } else { c })
        .collect()
}

#[derive(Debug, Clone)]
pub struct SessionFile {
    pub path: PathBuf,
    pub session_id: String,
}

/// All `*.jsonl` files directly inside `dir`, sorted by path. A missing
/// directory yields an empty list; one that exists but can't be listed is
/// an error.
pub fn discover_session_files(dir: &Path) -> Result<Vec<SessionFile>> {
    let mut files = Vec::new();

    if !dir.exists() {
        return Ok(files);
    }

    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read session directory {}", dir.display()))?;

    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read session directory {}", dir.display()))?;
        let path = entry.path();

        if path.extension().map_or(true, |e| e != SESSION_EXTENSION) || !path.is_file() {
            continue;
        }

        let session_id = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        files.push(SessionFile { path, session_id });
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}
