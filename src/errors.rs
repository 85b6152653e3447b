use thiserror::Error;

/// Top-level application error.
/// Only the validation variants ever reach the HTTP caller as an error status;
/// everything else is turned into a canned reply by the chat service.
#[derive(Debug, Error)]
pub enum AppError {
    // ── Validation errors ────────────────────────────────────────────────────
    #[error("Messages are required")]
    MissingMessages,

    // ── Configuration errors ─────────────────────────────────────────────────
    #[error("GEMINI_API_KEY is not set")]
    MissingCredential,

    #[error("Failed to set up Gemini client: {message}")]
    ProviderSetup { message: String },

    // ── AI provider errors ───────────────────────────────────────────────────
    #[error("Model '{model}' failed: {message}")]
    InferenceError { model: String, message: String },

    #[error("All models failed")]
    AllModelsFailed,
}

impl AppError {
    pub fn inference(model: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::InferenceError { model: model.into(), message: message.into() }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::MissingMessages)
    }
}
