//! Chat state container — the running message transcript.

use super::{ChatMessage, ChatRole};

/// A chat-bot transcript. Committed to the chat slice as a whole on every
/// successful exchange, so the snapshot always holds the full session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one message.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Append a user prompt and the bot's reply as one exchange.
    pub fn push_exchange(&mut self, prompt: ChatMessage, reply: ChatMessage) {
        self.messages.push(prompt);
        self.messages.push(reply);
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn latest(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_exchange_keeps_order() {
        let mut session = ChatSession::new();
        session.push_exchange(
            ChatMessage::user("what is bitcoin?"),
            ChatMessage::bot("Digital gold."),
        );
        assert_eq!(session.len(), 2);
        assert_eq!(session.messages()[0].role, ChatRole::User);
        assert_eq!(session.latest().unwrap().role, ChatRole::Bot);
    }

    #[test]
    fn test_clear() {
        let mut session = ChatSession::new();
        session.push(ChatMessage::user("hi"));
        session.clear();
        assert!(session.is_empty());
    }
}
