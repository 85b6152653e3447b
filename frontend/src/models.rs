use serde::{Deserialize, Serialize};

/// Matches the backend `Message` model.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Message {
    pub id: String,
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn new(id: impl Into<String>, role: &str, content: impl Into<String>) -> Self {
        Self { id: id.into(), role: role.to_string(), content: content.into() }
    }

    pub fn is_user(&self) -> bool {
        self.role == "user"
    }
}

/// Request body for the chat API.
#[derive(Clone, Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub messages: &'a [Message],
}

/// Response from the chat API. Only `content` is used; the widget assigns its own ids.
/// Missing content still reaches the session instead of failing to parse.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub content: Option<String>,
}
