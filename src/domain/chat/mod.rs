//! Chat bot: ask questions about coins, get answers.

pub mod state;

#[cfg(feature = "http")]
pub mod client;

pub use state::ChatSession;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who said what in the chat panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Bot,
}

/// One message in the chat session.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            at: Utc::now(),
        }
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Bot,
            content: content.into(),
            at: Utc::now(),
        }
    }
}

/// Body for the chat bot endpoint.
#[derive(Serialize, Debug, Clone)]
pub struct ChatPromptRequest {
    pub prompt: String,
}

/// Response from the chat bot endpoint.
#[derive(Deserialize, Debug, Clone)]
pub struct ChatBotResponse {
    pub message: String,
}
