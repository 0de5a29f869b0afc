//! Input types for generation requests.

use serde::{Deserialize, Serialize};

/// Supported input types to the generation service.
///
/// The service is text-only; the tagged representation leaves room for
/// other modalities without breaking serialized payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Input {
    /// Plain text input.
    Text(String),
}
