//! JSONL parser for Droid session logs
//!
//! # Error Handling Strategy
//!
//! Failures are contained at the narrowest granularity that still makes sense:
//!
//! - **Line failures**: A line that is not JSON, has no `type`, or has fields of the
//!   wrong shape is skipped. Skips are only visible at `debug` level.
//!
//! - **Block failures**: Inside a message, a content block that cannot be decoded is
//!   dropped while the rest of the message is kept.
//!
//! - **File failures**: Open and read errors (including non-UTF-8 data) are returned
//!   as `anyhow::Error` with the file path attached. The extractor decides what to do
//!   with them; it logs and moves on.

pub mod deserializers;
pub mod session;

pub use session::{SessionParser, parse_session_file};
