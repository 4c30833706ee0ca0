//! Conversation context for the primary inference stage.
//!
//! Stored exchanges are replayed as alternating `user:` / `assistant:`
//! lines after a fixed system line, followed by the new message and an open
//! `assistant:` turn for the model to complete.

use mindscope_core::models::chat::ChatExchange;
use serde::{Deserialize, Serialize};

pub const SYSTEM_PROMPT: &str = "You are a supportive, empathetic mental health assistant. \
Be kind, understanding, and provide helpful suggestions. Don't give medical advice.";

/// How many stored exchanges are replayed into the prompt.
pub const MAX_HISTORY_EXCHANGES: usize = 6;

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Role of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    fn prefix(self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Turn the most recent stored exchanges into history, oldest first.
///
/// At most [`MAX_HISTORY_EXCHANGES`] exchanges are used. An exchange without
/// a stored reply contributes only its user message.
pub fn history_from_exchanges(exchanges: &[ChatExchange]) -> Vec<ChatMessage> {
    let mut recent: Vec<&ChatExchange> = exchanges.iter().collect();
    recent.sort_by_key(|e| e.occurred_at);
    let skip = recent.len().saturating_sub(MAX_HISTORY_EXCHANGES);

    let mut history = Vec::new();
    for exchange in recent.into_iter().skip(skip) {
        history.push(ChatMessage::user(exchange.user_message.clone()));
        if let Some(response) = &exchange.assistant_response {
            history.push(ChatMessage::assistant(response.clone()));
        }
    }
    history
}

/// Build the prompt text sent to the primary endpoint.
pub fn build_conversation(message: &str, history: &[ChatMessage]) -> String {
    let mut conversation = format!("System: {SYSTEM_PROMPT}\n");

    for msg in history {
        conversation.push_str(&format!("{}: {}\n", msg.role.prefix(), msg.content));
    }

    conversation.push_str(&format!("user: {message}\n"));
    conversation.push_str("assistant:");
    conversation
}

/// Prompt used by the secondary endpoint, which sees no history.
pub fn simple_prompt(message: &str) -> String {
    format!("User: {message}\nAssistant:")
}
