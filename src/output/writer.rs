//! JSONL output: one extracted conversation per line

use std::fs::{self, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local, TimeZone};

use crate::models::Conversation;

/// Default output directory, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "extracted_data";

const OUTPUT_FILE_PREFIX: &str = "droid_conversations";
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Where a run's output ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputReport {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub conversations: usize,
}

/// Output file path for a run started at `now`
pub fn output_file_path<Tz: TimeZone>(output_dir: &Path, now: &DateTime<Tz>) -> PathBuf
where
    Tz::Offset: std::fmt::Display,
{
    output_dir.join(format!("{}_{}.jsonl", OUTPUT_FILE_PREFIX, now.format(TIMESTAMP_FORMAT)))
}

/// Write conversations to a new timestamped JSONL file in `output_dir`
///
/// The directory is created if missing. Non-ASCII text is written as-is.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, the output file
/// already exists, or writing fails.
pub fn write_conversations(
    output_dir: &Path,
    conversations: &[Conversation],
) -> Result<OutputReport> {
    write_conversations_at(output_dir, conversations, &Local::now())
}

/// [`write_conversations`] with an explicit run time
pub fn write_conversations_at<Tz: TimeZone>(
    output_dir: &Path,
    conversations: &[Conversation],
    now: &DateTime<Tz>,
) -> Result<OutputReport>
where
    Tz::Offset: std::fmt::Display,
{
    fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;

    let path = output_file_path(output_dir, now);
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;

    let mut writer = BufWriter::new(file);
    for conversation in conversations {
        serde_json::to_writer(&mut writer, conversation).with_context(|| {
            format!("Failed to serialize session {}", conversation.session_id)
        })?;
        writer.write_all(b"\n").context("Failed to write output file")?;
    }
    writer.flush().context("Failed to flush output file")?;

    let size_bytes = fs::metadata(&path)
        .with_context(|| format!("Failed to read output file metadata: {}", path.display()))?
        .len();

    Ok(OutputReport { path, size_bytes, conversations: conversations.len() })
}
