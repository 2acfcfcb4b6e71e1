use serde::Serialize;

use crate::models::{Conversation, Role};

/// Summary counters over a set of extracted conversations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    pub conversations: usize,
    pub total_messages: usize,
    pub user_messages: usize,
    pub assistant_messages: usize,
    /// Conversations with at least one tool use or tool result
    pub with_tools: usize,
    /// Conversations with at least one thinking block
    pub with_thinking: usize,
}

impl ExtractionStats {
    pub fn from_conversations(conversations: &[Conversation]) -> Self {
        let mut stats = Self { conversations: conversations.len(), ..Self::default() };

        for conversation in conversations {
            stats.total_messages += conversation.messages.len();
            for message in &conversation.messages {
                match message.role {
                    Role::User => stats.user_messages += 1,
                    Role::Assistant => stats.assistant_messages += 1,
                }
            }
            if conversation.has_tool_activity() {
                stats.with_tools += 1;
            }
            if conversation.has_thinking() {
                stats.with_thinking += 1;
            }
        }

        stats
    }
}
