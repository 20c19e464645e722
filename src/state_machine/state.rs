//! View-model state types

use crate::llm::Message;

/// Submission state of a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatState {
    /// Ready for input
    #[default]
    Idle,
    /// One relay call is outstanding
    Pending,
}

impl ChatState {
    /// The busy flag: true for the span of one outstanding request
    pub fn is_busy(self) -> bool {
        matches!(self, ChatState::Pending)
    }
}

/// Ordered, append-only history of turns. Lives as long as the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub(crate) fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Full history followed by `next`, as sent to the relay
    pub fn with_turn(&self, next: Message) -> Vec<Message> {
        let mut messages = Vec::with_capacity(self.messages.len() + 1);
        messages.extend_from_slice(&self.messages);
        messages.push(next);
        messages
    }
}
