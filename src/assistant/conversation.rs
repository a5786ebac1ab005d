//! Chat transcript and its send/reply cycle

use serde::{Deserialize, Serialize};

use crate::error::{LedgerlyError, LedgerlyResult};
use crate::models::MessageId;

use super::Persona;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role,
            content: content.into(),
        }
    }
}

/// Ordered transcript, seeded with the persona's greeting
#[derive(Debug, Clone)]
pub struct Conversation {
    persona: Persona,
    messages: Vec<ChatMessage>,
    awaiting_reply: Option<String>,
}

impl Conversation {
    pub fn new(persona: Persona) -> Self {
        Self {
            persona,
            messages: vec![ChatMessage::new(Role::Assistant, persona.greeting())],
            awaiting_reply: None,
        }
    }

    pub fn persona(&self) -> Persona {
        self.persona
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply.is_some()
    }

    /// Suggestions are offered until the user has said anything
    pub fn shows_suggestions(&self) -> bool {
        self.messages.iter().all(|m| m.role == Role::Assistant)
    }

    pub fn can_send(&self, text: &str) -> bool {
        !text.trim().is_empty() && !self.is_awaiting_reply()
    }

    /// Append the user's message and return the reply that should follow it
    pub fn send(&mut self, text: &str) -> LedgerlyResult<&'static str> {
        if text.trim().is_empty() {
            return Err(LedgerlyError::Validation("Message is empty".into()));
        }
        if self.is_awaiting_reply() {
            return Err(LedgerlyError::Validation(
                "Still waiting for the previous reply".into(),
            ));
        }
        self.messages.push(ChatMessage::new(Role::User, text));
        self.awaiting_reply = Some(text.to_string());
        Ok(self.persona.reply(text))
    }

    /// Append the assistant's reply to the pending question
    pub fn receive(&mut self, reply: impl Into<String>) {
        self.awaiting_reply = None;
        self.messages.push(ChatMessage::new(Role::Assistant, reply));
    }

    /// Give up on the pending reply
    pub fn abandon_reply(&mut self) {
        self.awaiting_reply = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_greeting() {
        let conversation = Conversation::new(Persona::Personal);
        assert_eq!(conversation.messages().len(), 1);
        assert_eq!(conversation.messages()[0].role, Role::Assistant);
        assert!(conversation.shows_suggestions());
    }

    #[test]
    fn test_send_then_receive() {
        let mut conversation = Conversation::new(Persona::Personal);
        let reply = conversation.send("How can I save more?").unwrap();
        assert!(conversation.is_awaiting_reply());
        assert!(!conversation.can_send("again"));
        assert!(!conversation.shows_suggestions());

        conversation.receive(reply);
        assert!(!conversation.is_awaiting_reply());
        let messages = conversation.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].content, "How can I save more?");
        assert!(messages[2].content.contains("Track daily expenses"));
    }

    #[test]
    fn test_blank_and_concurrent_sends_are_rejected() {
        let mut conversation = Conversation::new(Persona::Business);
        assert!(conversation.send("   ").unwrap_err().is_validation());
        conversation.send("hello").unwrap();
        assert!(conversation.send("again").unwrap_err().is_validation());

        conversation.abandon_reply();
        assert!(conversation.can_send("again"));
    }
}
