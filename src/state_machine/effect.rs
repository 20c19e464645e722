//! Effects produced by state transitions

use crate::llm::Message;

/// Effects to be executed after state transition, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Empty the input control
    ClearInput,

    /// Append a turn to the transcript
    AppendMessage { message: Message },

    /// Send the conversation to the relay endpoint
    CallRelay { messages: Vec<Message> },

    /// Record a failed relay call. Nothing is shown in the transcript.
    LogFailure { message: String },
}

impl Effect {
    pub fn append(message: Message) -> Self {
        Effect::AppendMessage { message }
    }
}
