//! Core data types for the uismith generation service.
//!
//! This crate provides the provider-neutral request and response types used
//! across the uismith crates.

mod input;
mod message;
mod output;
mod request;
mod role;

pub use input::Input;
pub use message::{Message, MessageBuilder};
pub use output::Output;
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateResponse, GenerateResponseBuilder,
};
pub use role::Role;
