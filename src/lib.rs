//! # session-finder
//!
//! Find the Claude Code session you're looking for.
//!
//! Claude Code keeps every conversation of a project as a JSONL file under
//! `~/.claude/projects/<encoded project path>/`. This library scans those
//! files for a set of keywords, scores each session by where the keywords
//! turn up (plain text, tool names, tool inputs, tool results) and ranks
//! them so the right one can be resumed.
//!
//! ## Quick Start
//!
//! ```no_run
//! use session_finder::{config::Config, display, search};
//!
//! let cfg = Config::from_env().unwrap();
//! let mut out = std::io::stdout();
//! let outcome = search::search_sessions(&cfg, "pino log rotation", None, &mut out).unwrap();
//! display::print_results(&mut out, &outcome.results, &outcome.project_path).unwrap();
//! ```

pub mod config;
pub mod display;
pub mod logging;
pub mod matcher;
pub mod models;
pub mod search;
