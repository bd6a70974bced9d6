//! Client and wire types for the text completions endpoint.

pub mod client;
pub mod types;

pub use client::{CompletionClient, CompletionsConfig};
pub use types::{
    CompletionChoice, CompletionError, CompletionRequest, CompletionResponse, CompletionUsage,
};
