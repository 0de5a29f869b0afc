//! Gemini generateContent API integration.

mod client;
pub mod conversions;
mod dto;

pub use client::GeminiClient;
pub use dto::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
