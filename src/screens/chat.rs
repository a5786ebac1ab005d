//! Assistant chat screen
//!
//! The reply to each message arrives after a fixed delay on a scoped task.
//! Leaving the screen cancels it, so no reply lands in a transcript the user
//! has already left.

use std::time::Duration;

use crate::assistant::{Conversation, Persona};
use crate::tasks::{ScopedTask, TaskPoll, TaskScope};

use super::input::TextInput;
use super::FormScreen;

#[derive(Debug)]
pub struct ChatScreen {
    pub conversation: Conversation,
    pub input: TextInput,
    reply_delay: Duration,
    scope: TaskScope,
    pending: Option<ScopedTask<&'static str>>,
}

impl ChatScreen {
    pub fn new(persona: Persona, reply_delay: Duration) -> Self {
        Self {
            conversation: Conversation::new(persona),
            input: TextInput::new("Message").placeholder("Ask about your finances..."),
            reply_delay,
            scope: TaskScope::new(),
            pending: None,
        }
    }

    pub fn can_send(&self) -> bool {
        self.conversation.can_send(self.input.value())
    }

    /// Send what is in the input box
    pub fn send(&mut self) -> bool {
        let text = self.input.value().to_string();
        if self.send_text(&text) {
            self.input.clear();
            true
        } else {
            false
        }
    }

    /// Send one of the suggested questions
    pub fn send_suggestion(&mut self, index: usize) -> bool {
        if !self.conversation.shows_suggestions() {
            return false;
        }
        match self.conversation.persona().suggested_questions().get(index) {
            Some(question) => self.send_text(question),
            None => false,
        }
    }

    fn send_text(&mut self, text: &str) -> bool {
        match self.conversation.send(text) {
            Ok(reply) => {
                self.pending = Some(self.scope.delayed(
                    "assistant-reply",
                    self.reply_delay,
                    reply,
                ));
                true
            }
            Err(_) => false,
        }
    }

    pub fn is_typing(&self) -> bool {
        self.pending.is_some()
    }

    /// Deliver the reply if it is due. Returns true when the transcript changed.
    pub fn poll(&mut self) -> bool {
        let Some(task) = self.pending.as_mut() else {
            return false;
        };
        match task.poll() {
            TaskPoll::Pending => false,
            TaskPoll::Ready(reply) => {
                self.pending = None;
                self.conversation.receive(reply);
                true
            }
            TaskPoll::Cancelled => {
                self.pending = None;
                self.conversation.abandon_reply();
                false
            }
        }
    }

    /// Called when navigating away
    pub fn leave(&mut self) {
        self.scope.cancel_all();
        if self.pending.take().is_some() {
            self.conversation.abandon_reply();
        }
    }
}

impl FormScreen for ChatScreen {
    fn focused_input(&mut self) -> Option<&mut TextInput> {
        Some(&mut self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::Role;
    use std::time::Instant;

    fn wait_for_reply(screen: &mut ChatScreen) {
        let deadline = Instant::now() + Duration::from_secs(2);
        while screen.is_typing() && Instant::now() < deadline {
            screen.poll();
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    #[test]
    fn test_reply_arrives_after_delay() {
        let mut screen = ChatScreen::new(Persona::Personal, Duration::from_millis(20));
        screen.input.set("How can I save more?");
        assert!(screen.send());
        assert!(screen.input.is_blank());
        assert!(screen.is_typing());
        assert!(!screen.can_send());

        wait_for_reply(&mut screen);
        let last = screen.conversation.messages().last().unwrap();
        assert_eq!(last.role, Role::Assistant);
        assert!(last.content.starts_with("Here are some tips to save more:"));
    }

    #[test]
    fn test_suggestions_only_before_first_message() {
        let mut screen = ChatScreen::new(Persona::Business, Duration::ZERO);
        assert!(screen.send_suggestion(2));
        wait_for_reply(&mut screen);
        assert!(screen.conversation.messages()[2]
            .content
            .contains("Cost Reduction Strategies"));
        assert!(!screen.send_suggestion(0));
    }

    #[test]
    fn test_leaving_drops_pending_reply() {
        let mut screen = ChatScreen::new(Persona::Personal, Duration::from_millis(30));
        screen.input.set("hello");
        screen.send();
        screen.leave();
        std::thread::sleep(Duration::from_millis(60));
        assert!(!screen.poll());
        assert_eq!(screen.conversation.messages().len(), 2);
        assert!(!screen.conversation.is_awaiting_reply());
    }
}
