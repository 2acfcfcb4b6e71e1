use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::models::{
    ContentBlock, Conversation, Message, RawMessage, Role, SessionRecord, SessionStart, ToolResult,
    ToolUse,
};

/// Incremental fold of session-log lines into a [`Conversation`]
///
/// Lines are fed in file order. State only grows: messages are appended, and a
/// `todo_state` record can attach to the newest message once.
#[derive(Debug)]
pub struct SessionParser {
    conversation: Conversation,
    skipped_lines: usize,
}

impl SessionParser {
    pub fn new(session_id: impl Into<String>, source_file: impl Into<String>) -> Self {
        Self {
            conversation: Conversation::new(session_id, source_file),
            skipped_lines: 0,
        }
    }

    /// Feed one raw line. Blank lines are ignored and undecodable lines are skipped.
    pub fn feed_line(&mut self, line: &str) {
        if line.trim().is_empty() {
            return;
        }

        match serde_json::from_str::<SessionRecord>(line) {
            Ok(record) => self.apply(record),
            Err(e) => {
                self.skipped_lines += 1;
                tracing::debug!(
                    session_id = %self.conversation.session_id,
                    error = %e,
                    "skipping undecodable line"
                );
            }
        }
    }

    pub fn apply(&mut self, record: SessionRecord) {
        match record {
            SessionRecord::SessionStart(start) => self.start_session(start),
            SessionRecord::Message { message: Some(raw), timestamp } => {
                if let Some(message) = normalize_message(raw, timestamp) {
                    self.conversation.messages.push(message);
                }
            }
            SessionRecord::Message { message: None, .. } => {}
            SessionRecord::TodoState { todos } => {
                if let Some(last) = self.conversation.messages.last_mut() {
                    last.attach_todos(todos);
                }
            }
            SessionRecord::Unknown => {}
        }
    }

    fn start_session(&mut self, start: SessionStart) {
        // A log normally holds one session_start; a later one overwrites both fields.
        self.conversation.session_title = start.title;
        self.conversation.session_owner = start.owner;
    }

    pub fn skipped_lines(&self) -> usize {
        self.skipped_lines
    }

    /// Finish the scan. Conversations without any message are dropped.
    pub fn finish(self) -> Option<Conversation> {
        if self.conversation.messages.is_empty() {
            None
        } else {
            Some(self.conversation)
        }
    }
}

/// Build a [`Message`] from a raw `message` record, or `None` for roles other
/// than user and assistant
pub fn normalize_message(raw: RawMessage, timestamp: Value) -> Option<Message> {
    let role = raw.role.as_deref().and_then(Role::parse)?;

    let mut text_parts = Vec::new();
    let mut thinking = None;
    let mut tool_uses = Vec::new();
    let mut tool_results = Vec::new();

    for block in raw.content.into_iter().filter_map(ContentBlock::from_value) {
        match block {
            ContentBlock::Text { text } => text_parts.push(text),
            ContentBlock::Thinking { thinking: value } => thinking = value,
            ContentBlock::ToolUse { id, name, input } => tool_uses.push(ToolUse { id, name, input }),
            ContentBlock::ToolResult { tool_use_id, content } => {
                tool_results.push(ToolResult { tool_use_id, content })
            }
            ContentBlock::Unknown => {}
        }
    }

    let mut message = Message::new(role, text_parts.join("\n"), timestamp);
    message.thinking = thinking.filter(|t| !t.is_empty());
    message.tool_uses = tool_uses;
    message.tool_results = tool_results;
    Some(message)
}

/// Parse one Droid session log into a [`Conversation`]
///
/// The session id is the file name without its extension. Returns `Ok(None)`
/// when the file yields no user or assistant messages.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a line cannot be read
/// (including invalid UTF-8). Malformed JSON lines are not errors.
pub fn parse_session_file(path: &Path) -> Result<Option<Conversation>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open session file: {}", path.display()))?;

    let session_id =
        path.file_stem().map(|stem| stem.to_string_lossy().into_owned()).unwrap_or_default();
    let mut parser = SessionParser::new(session_id, path.to_string_lossy());

    let reader = BufReader::new(file);
    for (line_num, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!("Failed to read line {} from {}", line_num + 1, path.display())
        })?;
        parser.feed_line(&line);
    }

    if parser.skipped_lines() > 0 {
        tracing::debug!(
            path = %path.display(),
            skipped = parser.skipped_lines(),
            "skipped undecodable lines"
        );
    }

    Ok(parser.finish())
}
