use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::extractor::{ExtractionStats, extract_conversations};
use crate::output::{DEFAULT_OUTPUT_DIR, write_conversations};
use crate::utils::{
    default_sessions_dir, find_sessions_dir, format_count, format_megabytes,
    format_path_with_tilde, init_tracing,
};

#[derive(Parser, Debug)]
#[command(name = "droid-session-extractor")]
#[command(version = "0.1.0")]
#[command(about = "Extract Droid CLI chat sessions into a single JSONL file", long_about = None)]
#[command(after_help = "With no options, reads ~/.factory/sessions and writes ./extracted_data/. \
Every option only overrides one of those defaults.")]
pub struct Cli {
    /// Override the sessions directory (default: ~/.factory/sessions)
    #[arg(long, value_name = "DIR")]
    pub sessions_dir: Option<PathBuf>,

    /// Override the output directory for the extracted JSONL file
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Override the diagnostics log level on stderr (RUST_LOG takes precedence)
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    pub log_level: String,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);
    extract(&cli)
}

fn extract(cli: &Cli) -> Result<()> {
    println!("Droid Session Extraction");
    println!("========================");
    println!();
    println!("Searching for Droid sessions...");

    let Some(sessions_dir) = find_sessions_dir(cli.sessions_dir.as_deref())? else {
        let expected = match &cli.sessions_dir {
            Some(dir) => dir.clone(),
            None => default_sessions_dir()?,
        };
        println!("No Droid sessions directory found!");
        println!("  Expected: {}", expected.display());
        return Ok(());
    };

    println!("Found sessions directory: {}", format_path_with_tilde(&sessions_dir));
    println!();

    let conversations = extract_conversations(&sessions_dir)?;
    if conversations.is_empty() {
        println!("No Droid sessions found!");
        return Ok(());
    }

    println!("Found {} session(s)", format_count(conversations.len()));
    println!();

    let stats = ExtractionStats::from_conversations(&conversations);
    println!("Total messages: {}", format_count(stats.total_messages));
    println!("User messages: {}", format_count(stats.user_messages));
    println!("Assistant messages: {}", format_count(stats.assistant_messages));
    println!("With tool use/results: {}", format_count(stats.with_tools));
    println!("With reasoning/thinking: {}", format_count(stats.with_thinking));
    println!();

    let report = write_conversations(&cli.output_dir, &conversations)?;
    tracing::info!(path = %report.path.display(), bytes = report.size_bytes, "output written");

    println!("Saved to: {}", report.path.display());
    println!("  Size: {}", format_megabytes(report.size_bytes));
    println!("  Format: JSONL (one session per line)");

    Ok(())
}
