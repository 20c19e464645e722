//! Conversation view-model state machine
//!
//! Implements the Elm Architecture pattern with pure state transitions:
//! `transition` decides, the session in `runtime` applies the effects.

mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use state::{ChatState, Conversation};
pub use transition::{transition, TransitionError, TransitionResult};
