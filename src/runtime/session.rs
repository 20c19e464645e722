//! Conversation session executor

use super::traits::{RelayClient, RelayClientError};
use crate::api::ApiResponse;
use crate::llm::Message;
use crate::state_machine::{transition, ChatState, Conversation, Effect, Event, TransitionError};

/// One conversation as seen by the view. Everything lives in memory and is
/// gone when the session is dropped.
#[derive(Debug, Default)]
pub struct ChatSession {
    state: ChatState,
    conversation: Conversation,
    input: String,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ChatState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    // The input control is disabled while a request is pending, so edits
    // are ignored then.

    pub fn set_input(&mut self, text: impl Into<String>) {
        if !self.is_busy() {
            self.input = text.into();
        }
    }

    pub fn push_input(&mut self, c: char) {
        if !self.is_busy() {
            self.input.push(c);
        }
    }

    pub fn pop_input(&mut self) {
        if !self.is_busy() {
            self.input.pop();
        }
    }

    /// Try to submit the current input.
    ///
    /// Returns the conversation to send to the relay, or `None` when the
    /// submission was dropped (blank input, or a request already pending).
    pub fn begin_submit(&mut self) -> Option<Vec<Message>> {
        let event = Event::Submit {
            input: self.input.clone(),
        };
        match self.apply(event) {
            Ok(call) => call,
            Err(TransitionError::Busy) => {
                tracing::debug!("Submission dropped: request already in flight");
                None
            }
            Err(e) => {
                tracing::debug!(error = %e, "Submission dropped");
                None
            }
        }
    }

    /// Apply the outcome of the relay call started by `begin_submit`.
    pub fn finish(&mut self, result: Result<ApiResponse, RelayClientError>) {
        let event = match result {
            Ok(response) => Event::RelaySucceeded {
                content: response.content,
            },
            Err(e) => Event::RelayFailed {
                message: e.to_string(),
            },
        };
        if let Err(e) = self.apply(event) {
            tracing::warn!(error = %e, "Ignoring relay outcome");
        }
    }

    /// Submit the current input and wait for the reply.
    ///
    /// The session is borrowed mutably for the whole round trip, so a
    /// second submission cannot start until this one resolves.
    pub async fn submit<C: RelayClient + ?Sized>(&mut self, client: &C) {
        let Some(messages) = self.begin_submit() else {
            return;
        };
        let result = client.send(&messages).await;
        self.finish(result);
    }

    /// Run one event through the state machine and execute its effects.
    /// Returns the relay payload if the transition asked for a call.
    fn apply(&mut self, event: Event) -> Result<Option<Vec<Message>>, TransitionError> {
        let result = transition(self.state, &self.conversation, event)?;
        self.state = result.new_state;

        let mut call = None;
        for effect in result.effects {
            match effect {
                Effect::ClearInput => self.input.clear(),
                Effect::AppendMessage { message } => self.conversation.push(message),
                Effect::CallRelay { messages } => call = Some(messages),
                Effect::LogFailure { message } => {
                    tracing::error!(
                        error = %message,
                        turns = self.conversation.len(),
                        "Error calling Claude API"
                    );
                }
            }
        }
        Ok(call)
    }
}
