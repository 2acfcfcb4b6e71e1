use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tag written into every extracted conversation to identify the producing tool
pub const SOURCE_TAG: &str = "droid";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    /// Map a raw role string; anything other than `user`/`assistant` is `None`
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolUse {
    pub id: Option<String>,
    pub name: Option<String>,
    pub input: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub tool_use_id: Option<String>,
    pub content: Value,
}

/// One normalized user or assistant turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    /// Text blocks joined with newlines, in block order
    pub content: String,
    pub timestamp: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thinking: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_uses: Vec<ToolUse>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_results: Vec<ToolResult>,
    /// Set by the first `todo_state` record after this message; `Some(Null)` is a
    /// real attachment of a null payload
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::parsers::deserializers::deserialize_present"
    )]
    pub todos: Option<Value>,
}

impl Message {
    pub fn new(role: Role, content: String, timestamp: Value) -> Self {
        Self {
            role,
            content,
            timestamp,
            thinking: None,
            tool_uses: Vec::new(),
            tool_results: Vec::new(),
            todos: None,
        }
    }

    pub fn has_tool_activity(&self) -> bool {
        !self.tool_uses.is_empty() || !self.tool_results.is_empty()
    }

    /// Attach a todo payload unless one is already present
    ///
    /// Returns `true` when the payload was attached.
    pub fn attach_todos(&mut self, todos: Value) -> bool {
        if self.todos.is_some() {
            return false;
        }
        self.todos = Some(todos);
        true
    }
}

/// The normalized contents of one session log
///
/// Field order matches the key order of the extracted JSONL lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub messages: Vec<Message>,
    pub source: String,
    pub session_id: String,
    pub session_title: Option<String>,
    pub session_owner: Option<String>,
    pub source_file: String,
}

impl Conversation {
    pub fn new(session_id: impl Into<String>, source_file: impl Into<String>) -> Self {
        Self {
            messages: Vec::new(),
            source: SOURCE_TAG.to_string(),
            session_id: session_id.into(),
            session_title: None,
            session_owner: None,
            source_file: source_file.into(),
        }
    }

    pub fn has_tool_activity(&self) -> bool {
        self.messages.iter().any(Message::has_tool_activity)
    }

    pub fn has_thinking(&self) -> bool {
        self.messages.iter().any(|m| m.thinking.is_some())
    }
}
