//! Error types for the uismith generation service.
//!
//! Each concern gets its own location-tracked error type; [`UismithError`]
//! unifies them for propagation across crate boundaries.

mod config;
mod gemini;
mod server;

pub use config::ConfigError;
pub use gemini::{GeminiError, GeminiErrorKind};
pub use server::ServerError;

/// Unified error type for the uismith service.
#[derive(Debug, Clone, derive_more::Display, derive_more::From)]
pub enum UismithError {
    /// Configuration error (startup only)
    #[display("{}", _0)]
    Config(ConfigError),

    /// Gemini provider error
    #[display("{}", _0)]
    Gemini(GeminiError),

    /// Server bind/serve error
    #[display("{}", _0)]
    Server(ServerError),
}

impl std::error::Error for UismithError {}

/// Result alias used across the uismith crates.
pub type UismithResult<T> = Result<T, UismithError>;
