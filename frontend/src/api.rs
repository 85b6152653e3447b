use gloo_net::http::Request;

use crate::models::{ChatRequest, ChatResponse, Message};

/// Base URL of the backend API server; empty means same origin.
const API_BASE: &str = match option_env!("CHAT_API_BASE") {
    Some(base) => base,
    None => "",
};

/// Posts the whole conversation and returns the assistant reply.
/// Any non-2xx status is an error, as is a network or parse failure.
pub async fn send_chat(messages: &[Message]) -> Result<ChatResponse, String> {
    let body = ChatRequest { messages };

    let resp = Request::post(&format!("{API_BASE}/api/chat"))
        .json(&body)
        .map_err(|e| format!("Serialize error: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.ok() {
        let text = resp.text().await.unwrap_or_default();
        return Err(format!("Server error: {} {text}", resp.status()));
    }

    resp.json::<ChatResponse>()
        .await
        .map_err(|e| format!("Parse error: {e}"))
}
