//! Environment configuration for the generation server.

use axum::http::{HeaderValue, Method};
use derive_getters::Getters;
use tower_http::cors::{AllowOrigin, CorsLayer};
use uismith_error::ConfigError;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5000;

const DEFAULT_ALLOWED_ORIGINS: &str =
    "http://localhost:5173,https://vercel-frontend-ivory.vercel.app";
const DEFAULT_PRIMARY_MODEL: &str = "models/gemini-2.5-flash";
const DEFAULT_FALLBACK_MODEL: &str = "models/gemini-2.5-pro";

/// Ordered pair of model identifiers, tried in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters)]
pub struct ModelTier {
    /// Fast model tried first
    primary: String,
    /// Stronger model tried once after a primary failure
    fallback: String,
}

impl ModelTier {
    /// Creates a new model tier pair.
    pub fn new(primary: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            fallback: fallback.into(),
        }
    }
}

impl Default for ModelTier {
    fn default() -> Self {
        Self::new(DEFAULT_PRIMARY_MODEL, DEFAULT_FALLBACK_MODEL)
    }
}

/// Configuration for the generation server.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ServerConfig {
    /// Gemini API key
    api_key: String,
    /// Listening port
    #[builder(default = "DEFAULT_PORT")]
    port: u16,
    /// Origins allowed to call the API cross-origin
    #[builder(default = "default_allowed_origins()")]
    allowed_origins: Vec<String>,
    /// Model tier pair
    #[builder(default)]
    models: ModelTier,
}

fn default_allowed_origins() -> Vec<String> {
    DEFAULT_ALLOWED_ORIGINS
        .split(',')
        .map(|origin| origin.to_string())
        .collect()
}

impl ServerConfig {
    /// Returns a builder for constructing a ServerConfig.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `GEMINI_API_KEY` (required)
    /// - `PORT` (default: 5000)
    /// - `UISMITH_ALLOWED_ORIGINS` (comma-separated, defaults to the
    ///   known frontend origins)
    /// - `GEMINI_PRIMARY_MODEL` / `GEMINI_FALLBACK_MODEL` (tier overrides)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| ConfigError::new("GEMINI_API_KEY not set"))?;

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::new(format!("PORT is not a valid port: {}", raw)))?,
            Err(_) => DEFAULT_PORT,
        };

        let allowed_origins = std::env::var("UISMITH_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect::<Vec<_>>();

        let models = ModelTier::new(
            std::env::var("GEMINI_PRIMARY_MODEL")
                .unwrap_or_else(|_| DEFAULT_PRIMARY_MODEL.to_string()),
            std::env::var("GEMINI_FALLBACK_MODEL")
                .unwrap_or_else(|_| DEFAULT_FALLBACK_MODEL.to_string()),
        );

        Ok(ServerConfigBuilder::default()
            .api_key(api_key)
            .port(port)
            .allowed_origins(allowed_origins)
            .models(models)
            .build()
            .expect("Valid ServerConfig"))
    }

    /// Builds the CORS layer: configured origins only, GET and POST,
    /// credentials allowed.
    pub fn cors_layer(&self) -> Result<CorsLayer, ConfigError> {
        let origins = self
            .allowed_origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .map_err(|_| ConfigError::new(format!("Invalid allowed origin: {}", origin)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST])
            .allow_credentials(true))
    }
}
