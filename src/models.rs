use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    /// Any other role the widget sends; only the last message's content matters.
    #[default]
    #[serde(other)]
    Other,
}

/// One chat turn as exchanged with the widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub role: MessageRole,
    #[serde(default)]
    pub content: String,
}

impl Message {
    /// A reply from the assistant with a freshly generated id.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            id: format!("msg-{}", uuid::Uuid::new_v4()),
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Option<Vec<Message>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_use_lowercase_on_the_wire() {
        let msg: Message =
            serde_json::from_str(r#"{"id":"user-1","role":"user","content":"hi"}"#).unwrap();
        assert_eq!(msg.role, MessageRole::User);

        let json = serde_json::to_value(Message::assistant("hello")).unwrap();
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["content"], "hello");
    }

    #[test]
    fn unknown_role_and_missing_id_are_tolerated() {
        let msg: Message = serde_json::from_str(r#"{"role":"system","content":"be kind"}"#).unwrap();
        assert_eq!(msg.role, MessageRole::Other);
        assert_eq!(msg.id, "");
        assert_eq!(msg.content, "be kind");
    }

    #[test]
    fn assistant_ids_are_fresh() {
        let a = Message::assistant("same");
        let b = Message::assistant("same");
        assert!(a.id.starts_with("msg-"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn missing_messages_field_parses_as_none() {
        let req: ChatRequest = serde_json::from_str("{}").unwrap();
        assert!(req.messages.is_none());
    }
}
