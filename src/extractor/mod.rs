//! Extraction of conversations from a Droid sessions directory
//!
//! # Error Handling Strategy
//!
//! - **File-level failures**: A session file that cannot be opened or read is logged
//!   (`Error processing <path>: <error>`) and skipped; other files are unaffected.
//! - **Directory-level failures**: Only an unreadable sessions directory is returned as
//!   an error. A missing directory is handled before extraction by the locator.

pub mod builder;
pub mod discovery;
pub mod stats;

pub use builder::extract_conversations;
pub use discovery::discover_session_files;
pub use stats::ExtractionStats;
