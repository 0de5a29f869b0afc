//! Provider integrations for the uismith generation service.

mod fallback;
pub mod gemini;

pub use fallback::FallbackGenerator;
pub use gemini::GeminiClient;
