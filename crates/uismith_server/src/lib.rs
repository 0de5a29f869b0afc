//! HTTP surface for the uismith generation service.

mod api;
mod config;
pub mod prompt;

pub use api::{ApiState, GenerateBody, create_router};
pub use config::{DEFAULT_PORT, ModelTier, ServerConfig, ServerConfigBuilder};
