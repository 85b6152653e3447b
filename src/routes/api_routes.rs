use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{error, warn};

use crate::errors::AppError;
use crate::models::{ChatRequest, ErrorBody, Message};
use crate::service::chat_service::{ChatService, FallbackReply};

/// POST `/api/chat` — accepts `{ messages }`, returns the assistant message as JSON
pub async fn chat_handler(
    State(svc): State<ChatService>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            // An unreadable body still gets a conversational answer.
            warn!("Could not read chat request body: {}", rejection.body_text());
            return Json(Message::assistant(FallbackReply::Generic.text())).into_response();
        }
    };

    match svc.chat(request.messages).await {
        Ok(message) => Json(message).into_response(),
        Err(err) => error_response(&err),
    }
}

// ── Helper ────────────────────────────────────────────────────────────────────

fn error_response(err: &AppError) -> Response {
    let status = if err.is_validation() {
        StatusCode::BAD_REQUEST
    } else {
        error!("Unexpected error reached the chat route: {err}");
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(ErrorBody { error: err.to_string() })).into_response()
}
