use std::sync::Arc;

use tracing::{error, info, warn};

use crate::agent::prompt::{build_prompt, MODEL_CANDIDATES};
use crate::agent::TextGenerator;
use crate::errors::AppError;
use crate::models::Message;

/// Canned replies used whenever the upstream path cannot produce text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReply {
    Unconfigured,
    Credential,
    Quota,
    Generic,
}

impl FallbackReply {
    /// Picks the reply from the wording of the last upstream error.
    pub fn from_error(err: &AppError) -> Self {
        let text = match err {
            AppError::MissingCredential => return FallbackReply::Unconfigured,
            AppError::InferenceError { message, .. } => message.clone(),
            other => other.to_string(),
        };
        if text.contains("API_KEY") {
            FallbackReply::Credential
        } else if text.contains("quota") {
            FallbackReply::Quota
        } else {
            FallbackReply::Generic
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            FallbackReply::Unconfigured => {
                "I'm sorry, but my AI service is not properly configured. Please contact support."
            }
            FallbackReply::Credential => {
                "I'm experiencing a configuration issue. Please try again in a moment or contact support if the problem persists."
            }
            FallbackReply::Quota => {
                "I'm temporarily unavailable due to high usage. Please try again in a few minutes."
            }
            FallbackReply::Generic => {
                "I'm here to listen and support you. It seems I'm having trouble connecting right now, but please know that your feelings are important. If you're in crisis, please reach out to the 988 Suicide & Crisis Lifeline or contact emergency services."
            }
        }
    }
}

/// Turns a conversation into one assistant reply.
/// `generator` is `None` when no credential was configured.
#[derive(Clone)]
pub struct ChatService {
    generator: Option<Arc<dyn TextGenerator>>,
    candidates: Arc<[String]>,
}

impl ChatService {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self::with_candidates(generator, MODEL_CANDIDATES.iter().map(|m| m.to_string()).collect())
    }

    pub fn with_candidates(
        generator: Option<Arc<dyn TextGenerator>>,
        candidates: Vec<String>,
    ) -> Self {
        Self { generator, candidates: candidates.into() }
    }

    /// Answers the last message of `messages`.
    ///
    /// Returns `Err` only for a missing or empty conversation; configuration and
    /// upstream failures come back as an assistant message carrying a canned reply.
    pub async fn chat(&self, messages: Option<Vec<Message>>) -> Result<Message, AppError> {
        let user_input = match messages.as_deref().and_then(<[Message]>::last) {
            Some(last) => last.content.as_str(),
            None => return Err(AppError::MissingMessages),
        };

        let Some(generator) = self.generator.as_deref() else {
            let err = AppError::MissingCredential;
            error!("{err}; replying with the configuration notice");
            return Ok(Message::assistant(FallbackReply::from_error(&err).text()));
        };

        info!("Answering conversation ({} chars of input)", user_input.chars().count());
        let prompt = build_prompt(user_input);

        match self.generate_with_fallback(generator, &prompt).await {
            Ok(text) => {
                let preview: String = text.chars().take(100).collect();
                info!("Gemini response received: {preview}...");
                Ok(Message::assistant(text))
            }
            Err(e) => {
                let reply = FallbackReply::from_error(&e);
                error!("All models failed. Last error: {e}; replying with {reply:?}");
                Ok(Message::assistant(reply.text()))
            }
        }
    }

    /// Tries each candidate model in order and returns the first text produced.
    /// Fails with the last model's error, or [`AppError::AllModelsFailed`] if none were tried.
    pub async fn generate_with_fallback(
        &self,
        generator: &dyn TextGenerator,
        prompt: &str,
    ) -> Result<String, AppError> {
        let mut last_error = None;
        for model in self.candidates.iter() {
            info!("Trying model: {model}");
            match generator.generate(model, prompt).await {
                Ok(text) => {
                    info!("Successfully got response from model: {model}");
                    return Ok(text);
                }
                Err(e) => {
                    warn!("Model {model} failed: {e}");
                    last_error = Some(e);
                }
            }
        }
        Err(last_error.unwrap_or(AppError::AllModelsFailed))
    }
}
