use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

const SESSION_FILE_SUFFIX: &str = ".jsonl";

/// Find all `*.jsonl` session files directly inside `sessions_dir`
///
/// Subdirectories are not searched. Results are sorted by path so repeated
/// runs over the same directory produce the same output order.
///
/// # Errors
///
/// Returns an error if the directory itself cannot be read. Entries that
/// cannot be inspected are logged and skipped.
pub fn discover_session_files(sessions_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(sessions_dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(e).with_context(|| {
                    format!("Failed to read sessions directory: {}", sessions_dir.display())
                });
            }
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {}: {}", sessions_dir.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        // Match on the name so a bare `.jsonl` counts too
        if entry.file_name().to_string_lossy().ends_with(SESSION_FILE_SUFFIX) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}
