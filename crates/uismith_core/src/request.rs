//! Request and response types for text generation.

use crate::{Message, Output};
use serde::{Deserialize, Serialize};

/// Generic generation request.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Default,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct GenerateRequest {
    /// Conversation messages
    messages: Vec<Message>,
    /// Maximum tokens to generate
    max_tokens: Option<u32>,
    /// Sampling temperature
    temperature: Option<f32>,
}

impl GenerateRequest {
    /// Returns a builder for constructing a GenerateRequest.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// The unified response object.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Default,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), default)]
pub struct GenerateResponse {
    /// Generated outputs, in candidate order
    outputs: Vec<Output>,
}

impl GenerateResponse {
    /// Returns a builder for constructing a GenerateResponse.
    pub fn builder() -> GenerateResponseBuilder {
        GenerateResponseBuilder::default()
    }

    /// Returns the first text output, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use uismith_core::{GenerateResponse, Output};
    ///
    /// let response = GenerateResponse::builder()
    ///     .outputs(vec![Output::Text("<!DOCTYPE html>".to_string())])
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(response.first_text(), Some("<!DOCTYPE html>"));
    /// ```
    pub fn first_text(&self) -> Option<&str> {
        self.outputs.first().and_then(Output::as_text)
    }
}
