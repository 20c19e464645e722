//! Events that can occur in a conversation

/// Events that trigger state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    // User events
    Submit { input: String },

    // Relay events
    RelaySucceeded { content: String },
    RelayFailed { message: String },
}
