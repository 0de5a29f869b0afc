//! Test utilities for uismith_models tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use uismith_core::{GenerateRequest, GenerateResponse, Output};
use uismith_error::{GeminiError, GeminiErrorKind, UismithResult};
use uismith_interface::TextGenerator;

/// What a mock generator should do when called.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Succeed with the given text output.
    Text(String),
    /// Succeed with no outputs.
    Empty,
    /// Fail with a provider error carrying the given message.
    Fail(String),
}

/// A scripted TextGenerator that records every request it receives.
#[derive(Debug, Clone)]
pub struct MockGenerator {
    model: String,
    behavior: MockBehavior,
    calls: Arc<Mutex<Vec<GenerateRequest>>>,
}

impl MockGenerator {
    pub fn new(model: impl Into<String>, behavior: MockBehavior) -> Self {
        Self {
            model: model.into(),
            behavior,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Requests received so far, in call order.
    pub fn calls(&self) -> Vec<GenerateRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, req: &GenerateRequest) -> UismithResult<GenerateResponse> {
        self.calls.lock().unwrap().push(req.clone());

        match &self.behavior {
            MockBehavior::Text(text) => Ok(GenerateResponse::builder()
                .outputs(vec![Output::Text(text.clone())])
                .build()
                .unwrap()),
            MockBehavior::Empty => Ok(GenerateResponse::default()),
            MockBehavior::Fail(message) => Err(GeminiError::new(GeminiErrorKind::ApiRequest(
                message.clone(),
            ))
            .into()),
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
