//! Pure state transition function

use super::{ChatState, Conversation, Effect, Event};
use crate::llm::Message;
use thiserror::Error;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: ChatState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: ChatState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Errors that can occur during transition. All of them leave the state
/// and the conversation untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Input is empty")]
    EmptyInput,
    #[error("A request is already in flight")]
    Busy,
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

/// Pure transition function
///
/// Given the same inputs it always produces the same outputs, with no I/O.
/// `conversation` is the history before the event is applied.
pub fn transition(
    state: ChatState,
    conversation: &Conversation,
    event: Event,
) -> Result<TransitionResult, TransitionError> {
    match (state, event) {
        // ============================================================
        // Submission
        // ============================================================

        // Idle + Submit -> Pending. The input is cleared and the user turn
        // shown before the relay call starts.
        (ChatState::Idle, Event::Submit { input }) => {
            let text = input.trim();
            if text.is_empty() {
                return Err(TransitionError::EmptyInput);
            }

            let turn = Message::user(text);
            let messages = conversation.with_turn(turn.clone());
            Ok(TransitionResult::new(ChatState::Pending)
                .with_effect(Effect::ClearInput)
                .with_effect(Effect::append(turn))
                .with_effect(Effect::CallRelay { messages }))
        }

        // Pending + Submit -> dropped, not queued
        (ChatState::Pending, Event::Submit { .. }) => Err(TransitionError::Busy),

        // ============================================================
        // Relay outcome
        // ============================================================
        (ChatState::Pending, Event::RelaySucceeded { content }) => {
            Ok(TransitionResult::new(ChatState::Idle)
                .with_effect(Effect::append(Message::assistant(content))))
        }

        // Failures leave the transcript as it is; the user turn stays
        // without a reply.
        (ChatState::Pending, Event::RelayFailed { message }) => {
            Ok(TransitionResult::new(ChatState::Idle)
                .with_effect(Effect::LogFailure { message }))
        }

        (ChatState::Idle, event @ (Event::RelaySucceeded { .. } | Event::RelayFailed { .. })) => {
            Err(TransitionError::InvalidTransition(format!(
                "relay outcome without a pending request: {event:?}"
            )))
        }
    }
}
