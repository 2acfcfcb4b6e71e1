//! Droid Session Extractor - Export Droid CLI chat sessions as JSONL
//!
//! This library reads the session logs the Droid CLI keeps in
//! `~/.factory/sessions/` and normalizes them into one conversation per file.
//! It supports:
//!
//! - Locating the sessions directory
//! - Parsing session logs, tolerating malformed lines and unreadable files
//! - Summarizing message, tool-use and thinking counts
//! - Writing all conversations to a timestamped JSONL file
//!
//! # Example
//!
//! ```no_run
//! use droid_session_extractor::{ExtractionStats, extract_conversations, find_sessions_dir};
//!
//! if let Some(dir) = find_sessions_dir(None)? {
//!     let conversations = extract_conversations(&dir)?;
//!     let stats = ExtractionStats::from_conversations(&conversations);
//!     println!("{} messages in {} sessions", stats.total_messages, stats.conversations);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod extractor;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use extractor::{ExtractionStats, extract_conversations};
pub use models::{Conversation, Message, Role};
pub use output::{OutputReport, write_conversations};
pub use parsers::parse_session_file;
pub use utils::{find_sessions_dir, format_path_with_tilde};
