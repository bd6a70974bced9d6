//! # completion-cli
//!
//! Send one request to the OpenAI text completions endpoint and read back the
//! first choice.
//!
//! ```rust,no_run
//! use completion_cli::{ApiKey, CompletionClient, CompletionRequest, CompletionsConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     completion_cli::load_env_file(None)?;
//!     let api_key = ApiKey::Default.resolve()?;
//!
//!     let client = CompletionClient::new(CompletionsConfig::new(api_key))?;
//!     let response = client
//!         .fetch_completion(&CompletionRequest::default().with_prompt("Say hello"))
//!         .await?;
//!
//!     if let Some(text) = response.first_text() {
//!         print!("{text}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod completions;
pub mod core;
mod provider;

pub use completions::{
    CompletionChoice, CompletionClient, CompletionError, CompletionRequest, CompletionResponse,
    CompletionUsage, CompletionsConfig,
};
pub use crate::core::{ApiKey, CompletionProvider, HttpClientConfig, LlmError, load_env_file};
