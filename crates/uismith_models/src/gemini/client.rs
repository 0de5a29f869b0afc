//! Client for the Gemini generateContent API.

use crate::gemini::{GenerateContentResponse, conversions};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};
use uismith_core::{GenerateRequest, GenerateResponse};
use uismith_error::{GeminiError, GeminiErrorKind, UismithResult};
use uismith_interface::TextGenerator;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Timeout per generateContent attempt. A timed-out call is an ordinary
/// provider failure, so the tier fallback still applies.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for one Gemini model variant.
///
/// Stateless and cheap to clone; a single instance is safely shared across
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a new client for the given model identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    #[instrument(skip(api_key), fields(model = %model.as_ref()))]
    pub fn new(api_key: impl Into<String>, model: impl AsRef<str>) -> Result<Self, GeminiError> {
        Self::new_with_base_url(api_key, model, DEFAULT_BASE_URL)
    }

    /// Creates a new client against a custom base URL.
    pub fn new_with_base_url(
        api_key: impl Into<String>,
        model: impl AsRef<str>,
        base_url: impl Into<String>,
    ) -> Result<Self, GeminiError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                GeminiError::new(GeminiErrorKind::ApiRequest(format!(
                    "Failed to build HTTP client: {}",
                    e
                )))
            })?;

        let model = model.as_ref().to_string();
        debug!(model = %model, "Created Gemini client");

        Ok(Self {
            client,
            api_key: api_key.into(),
            model,
            base_url: base_url.into(),
        })
    }

    async fn generate_content(
        &self,
        req: &GenerateRequest,
    ) -> Result<GenerateResponse, GeminiError> {
        let wire_request = conversions::to_content_request(req);
        let url = format!("{}/{}:generateContent", self.base_url, self.model);

        debug!(
            model = %self.model,
            content_count = wire_request.contents.len(),
            "Sending request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                error!(model = %self.model, error = ?e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::ApiRequest(format!("Request failed: {}", e)))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!(
                model = %self.model,
                status = %status,
                error = %error_text,
                "API error"
            );

            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message: error_text,
            }));
        }

        let envelope: GenerateContentResponse = response.json().await.map_err(|e| {
            error!(model = %self.model, error = ?e, "Failed to parse response");
            GeminiError::new(GeminiErrorKind::ResponseParsing(format!(
                "Failed to parse JSON: {}",
                e
            )))
        })?;

        debug!(
            model = %self.model,
            candidates = envelope.candidates.len(),
            "Received response"
        );

        Ok(conversions::from_content_response(&envelope))
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    #[instrument(skip(self, req), fields(model = %self.model))]
    async fn generate(&self, req: &GenerateRequest) -> UismithResult<GenerateResponse> {
        Ok(self.generate_content(req).await?)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
