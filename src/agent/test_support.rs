use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::TextGenerator;
use crate::errors::AppError;

/// Replays a fixed list of outcomes, one per call, and records which models were asked.
/// Once the script runs out every further call fails.
#[derive(Default)]
pub struct ScriptedGenerator {
    outcomes: Mutex<VecDeque<Result<String, String>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedGenerator {
    pub fn new(outcomes: Vec<Result<&str, &str>>) -> Self {
        let outcomes = outcomes
            .into_iter()
            .map(|o| o.map(str::to_string).map_err(str::to_string))
            .collect();
        Self { outcomes: Mutex::new(outcomes), calls: Mutex::default() }
    }

    pub fn always_failing(message: &str) -> Self {
        Self::new(vec![Err(message); 8])
    }

    pub fn called_models(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(m, _)| m.clone()).collect()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(_, p)| p.clone()).collect()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String, AppError> {
        self.calls.lock().unwrap().push((model.to_string(), prompt.to_string()));
        match self.outcomes.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(AppError::inference(model, message)),
            None => Err(AppError::inference(model, "script exhausted")),
        }
    }
}
