//! Trait definitions for the uismith generation service.

use async_trait::async_trait;
use uismith_core::{GenerateRequest, GenerateResponse};
use uismith_error::UismithResult;

/// A text generation backend.
///
/// This is the seam between the HTTP surface and provider clients: the
/// server holds an `Arc<dyn TextGenerator>`, production wires in the
/// Gemini tier stack, and tests substitute mocks.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates a response for the given request.
    async fn generate(&self, req: &GenerateRequest) -> UismithResult<GenerateResponse>;

    /// Returns the model identifier this generator targets.
    fn model_name(&self) -> &str;
}
