//! Runtime for driving a conversation from the client side
//!
//! `ChatSession` owns the transcript, the input buffer and the busy state,
//! and applies the effects the state machine asks for. The relay endpoint
//! is reached through the `RelayClient` trait.

mod http_client;
mod session;
pub mod traits;

#[cfg(test)]
pub mod testing;

pub use http_client::{ClientConfig, HttpRelayClient};
pub use session::ChatSession;
pub use traits::*;
