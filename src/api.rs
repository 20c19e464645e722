//! HTTP API for the relay
//!
//! `POST /api/claude` is the relay endpoint; the rest is operational.

mod handlers;
mod types;

pub use handlers::{create_router, MAX_BODY_BYTES};
pub use types::*;

use crate::llm::LlmService;
use crate::relay::Relay;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<Relay>,
}

impl AppState {
    pub fn new(llm: Arc<dyn LlmService>) -> Self {
        Self {
            relay: Arc::new(Relay::new(llm)),
        }
    }
}
