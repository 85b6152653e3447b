pub mod prompt;

#[cfg(test)]
pub mod test_support;

use async_trait::async_trait;
use rig::completion::Prompt;
use rig::prelude::CompletionClient;
use rig::providers::gemini;
use tracing::debug;

use crate::errors::AppError;

/// Upstream text generation, one model at a time.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, AppError>;
}

/// [`TextGenerator`] backed by the rig [`gemini::Client`].
/// A fresh agent is built per call so each candidate model gets its own.
#[derive(Clone)]
pub struct GeminiAgentService {
    client: gemini::Client,
}

impl GeminiAgentService {
    pub fn new(api_key: &str) -> Result<Self, AppError> {
        let client = gemini::Client::builder()
            .api_key(api_key)
            .build()
            .map_err(|e| AppError::ProviderSetup { message: e.to_string() })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl TextGenerator for GeminiAgentService {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, AppError> {
        let agent = self.client.agent(model).build();

        debug!("Calling Gemini model {model}");
        agent.prompt(prompt).await.map_err(|e| {
            debug!("Gemini inference failed for model {model}: {e}");
            AppError::inference(model, e.to_string())
        })
    }
}
