//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across arbitrary event sequences.

use super::*;
use crate::llm::{Message, MessageRole};
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

/// Minimal effect interpreter: enough to replay sequences without a client
#[derive(Default)]
struct Harness {
    state: ChatState,
    conversation: Conversation,
    input: String,
    in_flight: Option<Vec<Message>>,
    calls: usize,
}

impl Harness {
    fn apply(&mut self, event: Event) -> Result<(), TransitionError> {
        let result = transition(self.state, &self.conversation, event)?;
        self.state = result.new_state;
        for effect in result.effects {
            match effect {
                Effect::ClearInput => self.input.clear(),
                Effect::AppendMessage { message } => self.conversation.push(message),
                Effect::CallRelay { messages } => {
                    self.calls += 1;
                    self.in_flight = Some(messages);
                }
                Effect::LogFailure { .. } => {}
            }
        }
        if !self.state.is_busy() {
            self.in_flight = None;
        }
        Ok(())
    }
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        "[ a-z\n]{0,12}".prop_map(|input| Event::Submit { input }),
        "[a-zA-Z `\n]{0,20}".prop_map(|content| Event::RelaySucceeded { content }),
        "[a-z ]{1,20}".prop_map(|message| Event::RelayFailed { message }),
    ]
}

// ============================================================================
// Invariants
// ============================================================================

proptest! {
    #[test]
    fn transition_is_deterministic(
        pending in any::<bool>(),
        event in arb_event(),
    ) {
        let state = if pending { ChatState::Pending } else { ChatState::Idle };
        let conv = Conversation::new();
        let a = transition(state, &conv, event.clone());
        let b = transition(state, &conv, event);
        match (a, b) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(a.new_state, b.new_state);
                prop_assert_eq!(a.effects, b.effects);
            }
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            _ => prop_assert!(false, "outcomes differ"),
        }
    }

    #[test]
    fn rejected_events_change_nothing(events in proptest::collection::vec(arb_event(), 0..30)) {
        let mut harness = Harness::default();
        for event in events {
            let before_state = harness.state;
            let before_conv = harness.conversation.clone();
            let before_calls = harness.calls;
            if harness.apply(event).is_err() {
                prop_assert_eq!(harness.state, before_state);
                prop_assert_eq!(&harness.conversation, &before_conv);
                prop_assert_eq!(harness.calls, before_calls);
            }
        }
    }

    #[test]
    fn relay_payload_is_history_plus_one_user_turn(
        events in proptest::collection::vec(arb_event(), 0..30),
    ) {
        let mut harness = Harness::default();
        for event in events {
            let before = harness.conversation.messages().to_vec();
            let before_calls = harness.calls;
            let _ = harness.apply(event);
            if harness.calls > before_calls {
                let sent = harness.in_flight.clone().unwrap();
                prop_assert_eq!(sent.len(), before.len() + 1);
                prop_assert_eq!(&sent[..before.len()], &before[..]);
                let last = sent.last().unwrap();
                prop_assert_eq!(last.role, MessageRole::User);
                prop_assert!(!last.content.trim().is_empty());
                prop_assert_eq!(last.content.trim(), last.content.as_str());
                prop_assert_eq!(&sent, harness.conversation.messages());
            }
        }
    }

    #[test]
    fn at_most_one_request_in_flight(events in proptest::collection::vec(arb_event(), 0..40)) {
        let mut harness = Harness::default();
        let mut outstanding = 0usize;
        for event in events {
            let before_calls = harness.calls;
            let was_busy = harness.state.is_busy();
            if harness.apply(event).is_ok() && was_busy && !harness.state.is_busy() {
                outstanding -= 1;
            }
            outstanding += harness.calls - before_calls;
            prop_assert!(outstanding <= 1);
            prop_assert_eq!(outstanding == 1, harness.state.is_busy());
        }
    }

    #[test]
    fn conversation_only_grows_and_alternates_per_round_trip(
        events in proptest::collection::vec(arb_event(), 0..40),
    ) {
        let mut harness = Harness::default();
        for event in events {
            let before = harness.conversation.messages().to_vec();
            let _ = harness.apply(event);
            let after = harness.conversation.messages();
            prop_assert!(after.len() >= before.len());
            prop_assert!(after.len() - before.len() <= 1);
            prop_assert_eq!(&after[..before.len()], &before[..]);
        }
        // No assistant turn ever appears without a user turn right before it
        let messages = harness.conversation.messages();
        for (i, message) in messages.iter().enumerate() {
            if message.role == MessageRole::Assistant {
                prop_assert!(i > 0);
                prop_assert_eq!(messages[i - 1].role, MessageRole::User);
            }
        }
    }
}
