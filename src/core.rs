pub mod config;
pub mod error;
pub mod http;
pub mod traits;

pub use config::{ApiKey, load_env_file};
pub use error::LlmError;
pub use http::{HttpClient, HttpClientConfig};
pub use traits::CompletionProvider;
