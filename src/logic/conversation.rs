//! Chatbot Conversation
//!
//! Transcript for the HealthBot chat. The whole transcript is sent on each
//! turn; backend failures become a bot apology instead of an error.

use crate::api::{ApiClient, ChatMessage};

pub const GREETING: &str = "Hi there! I'm HealthBot, your AI health assistant. How can I help you today? \
You can ask me about heart health, nutrition, or stress.";

pub const FALLBACK_ANSWER: &str =
    "Sorry, I'm having a little trouble thinking right now. Please try again later.";

#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::bot(GREETING)],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Send one user turn. Blank input is ignored and returns None.
    pub async fn submit(&mut self, client: &ApiClient, input: &str) -> Option<&ChatMessage> {
        if input.trim().is_empty() {
            return None;
        }

        self.messages.push(ChatMessage::user(input));

        let reply = match client.chatbot(&self.messages).await {
            Ok(answer) => ChatMessage::bot(answer),
            Err(e) => {
                tracing::error!("Error calling chatbot API: {}", e);
                ChatMessage::bot(FALLBACK_ANSWER)
            }
        };

        self.messages.push(reply);
        self.messages.last()
    }
}
