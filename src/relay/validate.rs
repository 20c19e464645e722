//! Structural validation of incoming conversations

use super::ApiError;
use crate::llm::{Message, MessageRole};
use serde_json::Value;

/// Check the request body shape and extract the conversation.
///
/// Every element must have a string `content` and a `role` of `user` or
/// `assistant`; extra fields are ignored. Order is preserved exactly.
pub fn parse_messages(body: &Value) -> Result<Vec<Message>, ApiError> {
    let Some(items) = body.get("messages").and_then(Value::as_array) else {
        return Err(ApiError::MissingMessages);
    };

    items
        .iter()
        .map(parse_message)
        .collect::<Option<Vec<_>>>()
        .ok_or(ApiError::InvalidMessageFormat)
}

fn parse_message(item: &Value) -> Option<Message> {
    let content = item.get("content")?.as_str()?;
    let role = MessageRole::from_wire(item.get("role")?.as_str()?)?;
    Some(Message::new(role, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_ordered_history() {
        let body = json!({
            "messages": [
                { "role": "user", "content": "one" },
                { "role": "assistant", "content": "two" },
                { "role": "user", "content": "three", "id": 7 }
            ]
        });
        let messages = parse_messages(&body).unwrap();
        assert_eq!(
            messages,
            vec![
                Message::user("one"),
                Message::assistant("two"),
                Message::user("three"),
            ]
        );
    }

    #[test]
    fn empty_array_is_structurally_valid() {
        let messages = parse_messages(&json!({ "messages": [] })).unwrap();
        assert!(messages.is_empty());
    }

    #[test]
    fn missing_or_non_array_messages() {
        for body in [
            json!({}),
            json!({ "messages": null }),
            json!({ "messages": "hi" }),
            json!({ "messages": { "role": "user", "content": "hi" } }),
            json!([{ "role": "user", "content": "hi" }]),
            Value::Null,
        ] {
            assert!(
                matches!(parse_messages(&body), Err(ApiError::MissingMessages)),
                "body {body} should be rejected as missing messages"
            );
        }
    }

    #[test]
    fn bad_elements() {
        for bad in [
            json!({ "role": "system", "content": "x" }),
            json!({ "role": "USER", "content": "x" }),
            json!({ "content": "x" }),
            json!({ "role": "user" }),
            json!({ "role": "user", "content": 5 }),
            json!({ "role": "user", "content": null }),
            json!({ "role": "user", "content": [{ "type": "text", "text": "x" }] }),
            json!("user: x"),
        ] {
            let body = json!({ "messages": [{ "role": "user", "content": "ok" }, bad] });
            assert!(
                matches!(parse_messages(&body), Err(ApiError::InvalidMessageFormat)),
                "element should be rejected: {body}"
            );
        }
    }
}
