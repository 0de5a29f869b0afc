//! Two-tier fallback between a fast and a robust model variant.

use async_trait::async_trait;
use tracing::{instrument, warn};
use uismith_core::{GenerateRequest, GenerateResponse};
use uismith_error::UismithResult;
use uismith_interface::TextGenerator;

/// A generator that retries once against a stronger model.
///
/// One attempt against the primary tier; on any failure, exactly one
/// attempt against the fallback tier with the identical request. The
/// fallback's outcome is final.
#[derive(Debug, Clone)]
pub struct FallbackGenerator<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> FallbackGenerator<P, F>
where
    P: TextGenerator,
    F: TextGenerator,
{
    /// Creates a new fallback generator from a primary and a fallback tier.
    pub fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    /// Returns the primary tier.
    pub fn primary(&self) -> &P {
        &self.primary
    }

    /// Returns the fallback tier.
    pub fn fallback(&self) -> &F {
        &self.fallback
    }
}

#[async_trait]
impl<P, F> TextGenerator for FallbackGenerator<P, F>
where
    P: TextGenerator,
    F: TextGenerator,
{
    #[instrument(skip(self, req))]
    async fn generate(&self, req: &GenerateRequest) -> UismithResult<GenerateResponse> {
        match self.primary.generate(req).await {
            Ok(response) => Ok(response),
            Err(primary_err) => {
                warn!(
                    primary = self.primary.model_name(),
                    fallback = self.fallback.model_name(),
                    error = %primary_err,
                    "Primary model failed, switching to fallback"
                );
                self.fallback.generate(req).await
            }
        }
    }

    fn model_name(&self) -> &str {
        self.primary.model_name()
    }
}
