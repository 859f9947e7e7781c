use crate::search::SessionMatch;
use chrono::{DateTime, Local};
use colored::*;
use std::io::{self, Write};

pub const MAX_SESSIONS: usize = 5;
const SNIPPET_DISPLAY_CHARS: usize = 150;

pub fn relevance_label(score: f64) -> &'static str {
    if score >= 3.0 {
        "High"
    } else if score >= 1.0 {
        "Medium"
    } else {
        "Low"
    }
}

fn format_date(result: &SessionMatch) -> String {
    let dt: DateTime<Local> = result.modified.into();
    dt.format("%b %d, %Y at %I:%M %p").to_string()
}

/// Whole scores print as `3`, but once a fractional weight went in they
/// keep their decimal part: `1.0`, `3.5`.
pub fn format_score(score: f64, fractional: bool) -> String {
    if fractional {
        format!("{:?}", score)
    } else {
        format!("{}", score)
    }
}

fn format_snippet(s: &str) -> String {
    let flat = s.replace('\n', " ");
    let truncated: String = flat.chars().take(SNIPPET_DISPLAY_CHARS).collect();
    format!("{}...", truncated)
}

pub fn resume_hint(session_id: &str, project_path: &str) -> String {
    format!("claude --resume {} --project {}", session_id, project_path)
}

pub fn print_no_results(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "No sessions found matching your search.\n")?;
    writeln!(w, "Try:")?;
    writeln!(w, "- Using different keywords")?;
    writeln!(w, "- Broadening your search terms")?;
    writeln!(w, "- Checking if sessions exist for this project")?;
    Ok(())
}

pub fn print_results(w: &mut dyn Write, results: &[SessionMatch], project_path: &str) -> io::Result<()> {
    if results.is_empty() {
        return print_no_results(w);
    }

    writeln!(w, "Found {} matching session(s):\n", results.len())?;

    for (i, result) in results.iter().take(MAX_SESSIONS).enumerate() {
        let label = relevance_label(result.score);
        let label_colored = match label {
            "High" => label.green().bold(),
            "Medium" => label.yellow(),
            _ => label.dimmed(),
        };

        writeln!(w, "{}. Session: {}", i + 1, result.session_id.cyan().bold())?;
        writeln!(w, "   Date: {}", format_date(result))?;
        writeln!(
            w,
            "   Relevance: {} (score: {})",
            label_colored,
            format_score(result.score, result.fractional)
        )?;

        if !result.matches.is_empty() {
            writeln!(w, "\n   Context:")?;
            for m in &result.matches {
                writeln!(w, "   - {}", format_snippet(m))?;
            }
        }

        if !result.files.is_empty() {
            writeln!(w, "\n   Files: {}", result.files.join(", "))?;
        }

        if !result.tools.is_empty() {
            writeln!(w, "   Tools: {}", result.tools.join(", "))?;
        }

        writeln!(
            w,
            "\n   Resume: {}",
            resume_hint(&result.session_id, project_path).dimmed()
        )?;
        writeln!(w)?;
    }

    Ok(())
}
