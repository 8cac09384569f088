//! Chat sub-client — send a prompt, commit the grown transcript.

use crate::client::TradexClient;
use crate::domain::chat::{ChatMessage, ChatPromptRequest, ChatSession};
use crate::error::SdkError;

/// Sub-client for the chat bot panel.
pub struct Chat<'a> {
    pub(crate) client: &'a TradexClient,
}

impl<'a> Chat<'a> {
    /// Send a prompt to the bot.
    ///
    /// On success the chat slice is committed with the previous transcript
    /// plus both sides of the exchange. On failure the transcript is left
    /// untouched (the prompt is not echoed into a failed snapshot).
    pub async fn send(&self, prompt: &str) -> Result<ChatSession, SdkError> {
        let slice = &self.client.store.chat;
        let mut session = slice.data().await.unwrap_or_default();

        slice
            .run_mutation(async {
                let request = ChatPromptRequest {
                    prompt: prompt.to_string(),
                };
                let resp = self.client.http.post_chat_prompt(&request).await?;
                session.push_exchange(ChatMessage::user(prompt), ChatMessage::bot(resp.message));
                Ok(session)
            })
            .await
    }

    /// Clear the transcript (e.g. when the panel is closed).
    pub async fn reset(&self) {
        self.client.store.chat.reset().await;
    }
}
