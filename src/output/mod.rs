//! Output of extracted conversations
//!
//! Each run writes a fresh file under the output directory (default
//! `./extracted_data/`), named `droid_conversations_<YYYYMMDD_HHMMSS>.jsonl`.
//! Files are opened with create-new semantics so an earlier run is never
//! overwritten.

pub mod writer;

pub use writer::{
    DEFAULT_OUTPUT_DIR, OutputReport, output_file_path, write_conversations, write_conversations_at,
};
