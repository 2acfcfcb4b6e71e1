//! Data models for Droid session logs.
//!
//! This module defines the data structures used throughout the application:
//!
//! - [`SessionRecord`] - One decoded line of a session log, tagged by `type`
//! - [`ContentBlock`] - A tagged block inside a message's content list
//! - [`Conversation`] - The normalized form of one session log
//! - [`Message`] - One user or assistant turn inside a conversation
//!
//! Input records are deliberately lenient (missing fields default) so that a
//! single odd record only costs its own line. Output models serialize in the
//! shape written to the extracted JSONL file.

pub mod conversation;
pub mod record;

pub use conversation::{Conversation, Message, Role, SOURCE_TAG, ToolResult, ToolUse};
pub use record::{ContentBlock, RawMessage, SessionRecord, SessionStart};
