use crate::config::{self, Config, SessionFile};
use crate::matcher::{self, SearchTerms};
use crate::models::{MessageContent, Record};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::cmp::Ordering;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::time::SystemTime;

pub const MAX_MATCHES: usize = 3;
pub const MAX_FILES: usize = 5;

/// Relevance summary for one session file. Only built when the score is positive.
#[derive(Debug, Clone)]
pub struct SessionMatch {
    pub session_id: String,
    pub path: PathBuf,
    pub score: f64,
    /// Set once a fractional weight (a tool result hit) went into `score`;
    /// from then on it is shown with a decimal part even when whole.
    pub fractional: bool,
    pub matches: Vec<String>,
    pub files: Vec<String>,
    pub tools: Vec<String>,
    pub modified: SystemTime,
}

pub struct SearchOutcome {
    pub results: Vec<SessionMatch>,
    pub project_path: String,
}

#[derive(Default)]
struct Tally {
    score: f64,
    fractional: bool,
    matches: Vec<String>,
    files: Vec<String>,
    tools: Vec<String>,
}

impl Tally {
    fn add_match(&mut self, snippet: String) {
        if self.matches.len() < MAX_MATCHES {
            self.matches.push(snippet);
        }
    }

    fn add_file(&mut self, path: &str) {
        if self.files.len() < MAX_FILES && !self.files.iter().any(|f| f == path) {
            self.files.push(path.to_string());
        }
    }

    fn add_tool(&mut self, name: &str) {
        if !self.tools.iter().any(|t| t == name) {
            self.tools.push(name.to_string());
        }
    }

    fn record(&mut self, record: &Record, terms: &SearchTerms) {
        match &record.message.content {
            MessageContent::Text(text) => {
                let lower = text.to_lowercase();
                let hits = terms.count_in(&lower);
                if hits > 0 {
                    self.add_match(matcher::snippet(text));
                    self.score += hits as f64;
                }
            }
            MessageContent::Blocks(slots) => {
                for block in slots.iter().filter_map(|s| s.block()) {
                    let m = matcher::match_block(block, terms);
                    self.score += m.score;
                    self.fractional |= m.score.fract() != 0.0;
                    for s in m.snippets {
                        self.add_match(s);
                    }

                    if let Some(path) = block.referenced_file() {
                        self.add_file(path);
                    }
                    if let Some(name) = block.tool_name() {
                        self.add_tool(name);
                    }
                }
            }
            MessageContent::Other(_) => {}
        }
    }
}

/// Scan one session log. Malformed lines are skipped; I/O errors fail the
/// whole file.
pub fn scan_session_file(file: &SessionFile, terms: &SearchTerms) -> Result<Option<SessionMatch>> {
    let f = std::fs::File::open(&file.path)
        .with_context(|| format!("Failed to open {}", file.path.display()))?;
    let reader = std::io::BufReader::with_capacity(256 * 1024, f);

    let mut tally = Tally::default();

    for (line_num, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", line_num + 1))?;
        if line.trim().is_empty() {
            continue;
        }

        let Some(record) = Record::parse(&line) else {
            tracing::debug!(file = %file.path.display(), line = line_num + 1, "skipping line");
            continue;
        };

        tally.record(&record, terms);
    }

    if tally.score <= 0.0 {
        return Ok(None);
    }

    let modified = std::fs::metadata(&file.path)
        .and_then(|m| m.modified())
        .with_context(|| format!("Failed to read mtime of {}", file.path.display()))?;

    tracing::debug!(session = %file.session_id, score = tally.score, "session matched");

    Ok(Some(SessionMatch {
        session_id: file.session_id.clone(),
        path: file.path.clone(),
        score: tally.score,
        fractional: tally.fractional,
        matches: tally.matches,
        files: tally.files,
        tools: tally.tools,
        modified,
    }))
}

/// Highest score first; equal scores go to the most recently modified file.
pub fn rank(results: &mut [SessionMatch]) {
    results.sort_by(|a, b| match b.score.total_cmp(&a.score) {
        Ordering::Equal => b.modified.cmp(&a.modified),
        other => other,
    });
}

fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} sessions")
    {
        pb.set_style(style.progress_chars("█▓░"));
    }
    pb
}

/// Locate, scan and rank the sessions of a project. Status lines go to
/// `out`; an unlistable directory or unreadable files are reported on
/// stderr and end up as no results rather than an error.
pub fn search_sessions(
    cfg: &Config,
    query: &str,
    project: Option<&str>,
    out: &mut dyn Write,
) -> Result<SearchOutcome> {
    let terms = SearchTerms::parse(query);
    let location = cfg.locate(project);

    if let Some(missing) = &location.missing {
        writeln!(out, "Warning: Session directory not found: {}", missing.display())?;
        writeln!(out, "Falling back to current working directory...")?;
    }
    tracing::debug!(dir = %location.dir.display(), "resolved session directory");

    let empty = |project_path: String| SearchOutcome {
        results: Vec::new(),
        project_path,
    };

    if !location.dir.exists() {
        writeln!(out, "Error: Session directory not found: {}", location.dir.display())?;
        return Ok(empty(location.project_path));
    }

    let files = match config::discover_session_files(&location.dir) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            writeln!(out, "No session files found in: {}", location.dir.display())?;
            return Ok(empty(location.project_path));
        }
    };
    tracing::debug!(count = files.len(), "enumerated session files");

    if files.is_empty() {
        writeln!(out, "No session files found in: {}", location.dir.display())?;
        return Ok(empty(location.project_path));
    }

    writeln!(out, "\nSearching {} sessions for: \"{}\"", files.len(), query)?;
    writeln!(out, "Project: {}\n", location.project_path)?;

    let pb = progress_bar(files.len() as u64);
    let mut results = Vec::new();

    for file in &files {
        match scan_session_file(file, &terms) {
            Ok(Some(m)) => results.push(m),
            Ok(None) => {}
            Err(e) => {
                pb.suspend(|| eprintln!("Error reading {}: {:#}", file.path.display(), e));
            }
        }
        pb.inc(1);
    }

    pb.finish_and_clear();

    rank(&mut results);

    Ok(SearchOutcome {
        results,
        project_path: location.project_path,
    })
}
