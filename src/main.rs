use anyhow::Result;
use clap::Parser;
use session_finder::{config, display, logging, search};

const EXAMPLES: &str = "\
Examples:
  session-finder \"pino log rotation\"
  session-finder \"authentication\" /Users/jnarowski/Dev/myproject";

#[derive(Parser)]
#[command(
    name = "session-finder",
    about = "Search Claude Code sessions of a project by keyword",
    version,
    arg_required_else_help = true,
    after_help = EXAMPLES
)]
struct Cli {
    /// Search terms (whitespace separated, case-insensitive)
    query: String,

    /// Project directory (default: current directory)
    project_path: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();

    let cfg = config::Config::from_env()?;
    let mut out = std::io::stdout().lock();

    let outcome = search::search_sessions(&cfg, &cli.query, cli.project_path.as_deref(), &mut out)?;
    display::print_results(&mut out, &outcome.results, &outcome.project_path)?;

    Ok(())
}
