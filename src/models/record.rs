use serde::Deserialize;
use serde_json::Value;

use crate::parsers::deserializers::deserialize_lenient_string;

/// Title used when a `session_start` record carries no `title` key at all
pub const DEFAULT_SESSION_TITLE: &str = "New Session";

/// One line of a Droid session log, classified by its `type` field
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionRecord {
    SessionStart(SessionStart),
    Message {
        #[serde(default)]
        message: Option<RawMessage>,
        #[serde(default)]
        timestamp: Value,
    },
    TodoState {
        #[serde(default)]
        todos: Value,
    },
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionStart {
    #[serde(default = "default_title", deserialize_with = "deserialize_lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_string")]
    pub owner: Option<String>,
}

fn default_title() -> Option<String> {
    Some(DEFAULT_SESSION_TITLE.to_string())
}

/// The `message` object of a `message` record, before normalization
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, deserialize_with = "crate::parsers::deserializers::deserialize_content_list")]
    pub content: Vec<Value>,
}

/// A block inside a message's content list
///
/// Blocks are decoded one at a time from the raw content list, so an entry
/// that is not an object is dropped on its own without affecting its siblings.
/// Optional string fields of the wrong JSON type decode as `None` instead of
/// failing the block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        #[serde(default)]
        text: String,
    },
    Thinking {
        #[serde(default, deserialize_with = "deserialize_lenient_string")]
        thinking: Option<String>,
    },
    ToolUse {
        #[serde(default, deserialize_with = "deserialize_lenient_string")]
        id: Option<String>,
        #[serde(default, deserialize_with = "deserialize_lenient_string")]
        name: Option<String>,
        #[serde(default)]
        input: Value,
    },
    ToolResult {
        #[serde(default, deserialize_with = "deserialize_lenient_string")]
        tool_use_id: Option<String>,
        #[serde(default)]
        content: Value,
    },
    #[serde(other)]
    Unknown,
}

impl ContentBlock {
    /// Decode a single raw content entry, returning `None` for anything unusable
    pub fn from_value(value: Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }
}
