//! Common types for LLM interactions

use serde::{Deserialize, Serialize};

/// Speaker of a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

impl MessageRole {
    /// Parse the wire name. Anything other than `user`/`assistant` is rejected.
    pub fn from_wire(role: &str) -> Option<Self> {
        match role {
            "user" => Some(Self::User),
            "assistant" => Some(Self::Assistant),
            _ => None,
        }
    }
}

/// One turn of a conversation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

impl Message {
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

/// LLM request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<Message>,
}

impl LlmRequest {
    pub fn new(model: impl Into<String>, max_tokens: u32, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            max_tokens,
            messages,
        }
    }
}

/// Content segment of a model response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentBlock {
    Text { text: String },
    /// Any segment type that carries no text (tool use, thinking, ...)
    NonText,
}

impl ContentBlock {
    pub fn text(s: impl Into<String>) -> Self {
        ContentBlock::Text { text: s.into() }
    }
}

/// LLM response
#[derive(Debug, Clone, Default)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

impl LlmResponse {
    /// Text of the first content segment, if that segment is text
    pub fn first_text(&self) -> Option<&str> {
        match self.content.first()? {
            ContentBlock::Text { text } => Some(text.as_str()),
            ContentBlock::NonText => None,
        }
    }
}

/// Usage statistics
#[derive(Debug, Clone, Copy, Default)]
pub struct Usage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_wire_names() {
        assert_eq!(MessageRole::from_wire("user"), Some(MessageRole::User));
        assert_eq!(MessageRole::from_wire("assistant"), Some(MessageRole::Assistant));
        assert_eq!(MessageRole::from_wire("system"), None);
        assert_eq!(MessageRole::from_wire("User"), None);
        assert_eq!(
            serde_json::to_value(Message::assistant("x")).unwrap(),
            serde_json::json!({ "role": "assistant", "content": "x" })
        );
    }

    #[test]
    fn first_text_only_looks_at_first_segment() {
        let empty = LlmResponse::default();
        assert_eq!(empty.first_text(), None);

        let text_first = LlmResponse {
            content: vec![ContentBlock::text("a"), ContentBlock::text("b")],
            usage: Usage::default(),
        };
        assert_eq!(text_first.first_text(), Some("a"));

        let other_first = LlmResponse {
            content: vec![ContentBlock::NonText, ContentBlock::text("b")],
            usage: Usage::default(),
        };
        assert_eq!(other_first.first_text(), None);
    }
}
