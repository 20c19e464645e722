//! Claudius - a minimal chat relay and conversation view
//!
//! The server side relays conversations to the Anthropic API; the client
//! side keeps the transcript and renders replies with code-block
//! formatting.

pub mod api;
pub mod llm;
pub mod relay;
pub mod render;
pub mod runtime;
pub mod state_machine;
pub mod tui;
