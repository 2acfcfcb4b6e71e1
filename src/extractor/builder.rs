//! Whole-directory extraction of Droid conversations.
//!
//! Each session file is parsed independently. A file that fails to open or
//! read is logged with its path and dropped entirely; the remaining files are
//! still extracted. Only a sessions directory that cannot be listed at all is
//! returned as an error.

use std::path::Path;

use anyhow::Result;

use crate::extractor::discovery::discover_session_files;
use crate::models::Conversation;
use crate::parsers::parse_session_file;

/// Extract every conversation from the session logs in `sessions_dir`
///
/// Files without any user or assistant message produce no conversation.
/// The output follows the (sorted) discovery order.
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use droid_session_extractor::extract_conversations;
///
/// let sessions_dir = PathBuf::from("/Users/alice/.factory/sessions");
/// let conversations = extract_conversations(&sessions_dir)?;
/// println!("Extracted {} sessions", conversations.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn extract_conversations(sessions_dir: &Path) -> Result<Vec<Conversation>> {
    let files = discover_session_files(sessions_dir)?;

    let mut conversations = Vec::new();
    let mut failed_files = 0;
    let mut empty_files = 0;

    for path in &files {
        match parse_session_file(path) {
            Ok(Some(conversation)) => conversations.push(conversation),
            Ok(None) => empty_files += 1,
            Err(e) => {
                failed_files += 1;
                tracing::warn!("Error processing {}: {:#}", path.display(), e);
            }
        }
    }

    tracing::debug!(
        files = files.len(),
        conversations = conversations.len(),
        empty = empty_files,
        failed = failed_files,
        "extraction finished"
    );

    Ok(conversations)
}
