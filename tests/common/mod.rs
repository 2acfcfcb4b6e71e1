//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builder for a temporary home directory holding `.factory/sessions`
pub struct SessionsDirBuilder {
    temp_dir: TempDir,
}

impl SessionsDirBuilder {
    /// Create a new builder with an empty sessions directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(temp_dir.path().join(".factory").join("sessions"))
            .expect("Failed to create sessions dir");
        Self { temp_dir }
    }

    /// The fake home directory
    pub fn home(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The `.factory/sessions` directory under the fake home
    pub fn sessions_dir(&self) -> PathBuf {
        self.temp_dir.path().join(".factory").join("sessions")
    }

    /// Add a session file built from records
    pub fn with_session(self, session: SessionFileBuilder) -> Self {
        session.create_in(&self.sessions_dir());
        self
    }

    /// Add a file with raw content (name includes extension)
    pub fn with_raw_file(self, filename: &str, content: &[u8]) -> Self {
        fs::write(self.sessions_dir().join(filename), content).expect("Failed to write raw file");
        self
    }

    /// Build and return the temp home directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for SessionsDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one `<session_id>.jsonl` file
pub struct SessionFileBuilder {
    session_id: String,
    lines: Vec<String>,
}

impl SessionFileBuilder {
    pub fn new(session_id: &str) -> Self {
        Self { session_id: session_id.to_string(), lines: Vec::new() }
    }

    /// Add a `session_start` record
    pub fn session_start(mut self, title: Option<&str>, owner: Option<&str>) -> Self {
        let mut fields = vec![r#""type":"session_start""#.to_string()];
        if let Some(title) = title {
            fields.push(format!(r#""title":"{}""#, title));
        }
        if let Some(owner) = owner {
            fields.push(format!(r#""owner":"{}""#, owner));
        }
        self.lines.push(format!("{{{}}}", fields.join(",")));
        self
    }

    /// Add a `message` record
    pub fn message(mut self, message: MessageRecordBuilder) -> Self {
        self.lines.push(message.to_json());
        self
    }

    /// Add a `todo_state` record with a raw JSON payload
    pub fn todo_state(mut self, todos_json: &str) -> Self {
        self.lines.push(format!(r#"{{"type":"todo_state","todos":{}}}"#, todos_json));
        self
    }

    /// Add an arbitrary raw line
    pub fn raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn create_in(&self, dir: &Path) {
        let path = dir.join(format!("{}.jsonl", self.session_id));
        fs::write(path, self.lines.join("\n")).expect("Failed to write session file");
    }
}

/// Builder for `message` records
pub struct MessageRecordBuilder {
    role: String,
    blocks: Vec<String>,
    timestamp: Option<String>,
}

impl MessageRecordBuilder {
    pub fn user() -> Self {
        Self::with_role("user")
    }

    pub fn assistant() -> Self {
        Self::with_role("assistant")
    }

    pub fn with_role(role: &str) -> Self {
        Self { role: role.to_string(), blocks: Vec::new(), timestamp: None }
    }

    pub fn text(mut self, text: &str) -> Self {
        self.blocks.push(format!(r#"{{"type":"text","text":"{}"}}"#, text));
        self
    }

    pub fn thinking(mut self, thinking: &str) -> Self {
        self.blocks.push(format!(r#"{{"type":"thinking","thinking":"{}"}}"#, thinking));
        self
    }

    pub fn tool_use(mut self, id: &str, name: &str, input_json: &str) -> Self {
        self.blocks.push(format!(
            r#"{{"type":"tool_use","id":"{}","name":"{}","input":{}}}"#,
            id, name, input_json
        ));
        self
    }

    pub fn tool_result(mut self, tool_use_id: &str, content_json: &str) -> Self {
        self.blocks.push(format!(
            r#"{{"type":"tool_result","tool_use_id":"{}","content":{}}}"#,
            tool_use_id, content_json
        ));
        self
    }

    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = Some(timestamp.to_string());
        self
    }

    pub fn to_json(&self) -> String {
        let timestamp = self
            .timestamp
            .as_ref()
            .map(|t| format!(r#","timestamp":"{}""#, t))
            .unwrap_or_default();
        format!(
            r#"{{"type":"message"{},"message":{{"role":"{}","content":[{}]}}}}"#,
            timestamp,
            self.role,
            self.blocks.join(",")
        )
    }
}

/// Helper to create a realistic home directory with a few sessions
pub fn realistic_home() -> TempDir {
    SessionsDirBuilder::new()
        .with_session(
            SessionFileBuilder::new("alpha")
                .session_start(Some("Refactor parser"), Some("dev"))
                .message(MessageRecordBuilder::user().text("Refactor the parser").timestamp("t1"))
                .message(
                    MessageRecordBuilder::assistant()
                        .thinking("Start with the lexer")
                        .text("On it")
                        .tool_use("tool_1", "Read", r#"{"path":"src/parser.rs"}"#)
                        .timestamp("t2"),
                )
                .todo_state(r#"[{"content":"split lexer","status":"in_progress"}]"#)
                .message(
                    MessageRecordBuilder::user()
                        .tool_result("tool_1", r#""fn parse() {}""#)
                        .timestamp("t3"),
                ),
        )
        .with_session(
            SessionFileBuilder::new("beta")
                .session_start(None, None)
                .message(MessageRecordBuilder::user().text("hello"))
                .message(MessageRecordBuilder::assistant().text("hi")),
        )
        .with_session(SessionFileBuilder::new("gamma").session_start(Some("Empty"), None))
        .build()
}
