use thiserror::Error;

type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised locally while preparing, sending or decoding a completion call.
///
/// Errors reported by the remote service itself are not represented here; they
/// are decoded into [`crate::CompletionResponse::error`].
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("Provider configuration error: {0}")]
    ProviderConfiguration(String),

    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: BoxedSource,
    },

    #[error("Request build error: {message}")]
    RequestBuild {
        message: String,
        #[source]
        source: BoxedSource,
    },

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: BoxedSource,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: BoxedSource,
    },
}

impl LlmError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        LlmError::Config {
            message: message.into(),
            source: None,
        }
    }
}
