use crate::models::{ChatResponse, Message};

const GREETING: &str = "How are you today? I'm here to help with any questions or concerns you might have about mental health and wellness.";
const EMPTY_REPLY: &str = "I apologize, but I encountered an error. Please try again.";
const CONNECTION_APOLOGY: &str = "I'm sorry, I'm having trouble connecting right now. Please try again in a moment. If this persists, please refresh the page.";

/// In-memory conversation for one page visit, plus the busy flag that keeps
/// a single request in flight.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatSession {
    messages: Vec<Message>,
    busy: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![Message::new("initial", "assistant", GREETING)],
            busy: false,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Appends the user's message and marks the session busy.
    /// Returns the conversation to send, or `None` if the input is blank or a
    /// request is already outstanding.
    pub fn begin_submit(&mut self, input: &str, now_ms: u64) -> Option<Vec<Message>> {
        let text = input.trim();
        if text.is_empty() || self.busy {
            return None;
        }
        self.messages.push(Message::new(format!("user-{now_ms}"), "user", text));
        self.busy = true;
        Some(self.messages.clone())
    }

    /// Appends the outcome of the outstanding request and clears the busy flag.
    pub fn complete(&mut self, result: Result<ChatResponse, String>, now_ms: u64) {
        let message = match result {
            Ok(resp) => {
                let content = resp.content.filter(|c| !c.is_empty()).unwrap_or_else(|| EMPTY_REPLY.to_string());
                Message::new(format!("assistant-{now_ms}"), "assistant", content)
            }
            Err(e) => {
                log::error!("Chat error: {e}");
                Message::new(format!("error-{now_ms}"), "assistant", CONNECTION_APOLOGY)
            }
        };
        self.messages.push(message);
        self.busy = false;
    }
}
