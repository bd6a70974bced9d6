//! Client for the OpenAI text completions endpoint.

use async_trait::async_trait;
use tracing::debug;

use crate::{
    core::{CompletionProvider, HttpClient, HttpClientConfig, LlmError},
    provider::constants::{defaults, openai},
};

use super::types::{CompletionRequest, CompletionResponse};

/// Connection settings for [`CompletionClient`].
#[derive(Debug, Clone)]
pub struct CompletionsConfig {
    pub api_key: String,
    pub base_url: String,
    pub http_config: HttpClientConfig,
}

impl CompletionsConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: openai::API_BASE.to_string(),
            http_config: HttpClientConfig::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_http_config(mut self, config: HttpClientConfig) -> Self {
        self.http_config = config;
        self
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            openai::COMPLETIONS_ENDPOINT
        )
    }

    fn auth_header(&self) -> (String, String) {
        (
            "Authorization".to_string(),
            format!("Bearer {}", self.api_key),
        )
    }
}

pub struct CompletionClient {
    pub config: CompletionsConfig,
    http: HttpClient,
}

impl CompletionClient {
    pub fn new(config: CompletionsConfig) -> Result<Self, LlmError> {
        let http = HttpClient::new(&config.http_config)?;
        Ok(Self { config, http })
    }

    /// Send one completion request and return the decoded response.
    ///
    /// Remote errors come back as `Ok` with [`CompletionResponse::error`] set
    /// and `http_status` holding the status code. The first choice has its
    /// first two newlines removed.
    #[tracing::instrument(
        name = "fetch_completion",
        skip(self, request),
        fields(model = %request.model, max_tokens = request.max_tokens)
    )]
    pub async fn fetch_completion(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, LlmError> {
        let url = self.config.endpoint_url();
        let headers = [self.config.auth_header()];

        let (status, mut response): (_, CompletionResponse) =
            self.http.post_json(&url, &headers, request).await?;
        response.http_status = Some(status.as_u16());

        response.strip_first_choice_newlines(defaults::NEWLINES_TO_STRIP);
        debug!(
            status = status.as_u16(),
            choices = response.choices.len(),
            total_tokens = response.usage.total_tokens,
            "Completion received"
        );

        Ok(response)
    }
}

#[async_trait]
impl CompletionProvider for CompletionClient {
    async fn fetch_completion(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, LlmError> {
        CompletionClient::fetch_completion(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_openai() {
        let config = CompletionsConfig::new("sk-test".to_string());
        assert_eq!(config.endpoint_url(), "https://api.openai.com/v1/completions");
        assert_eq!(
            config.auth_header(),
            ("Authorization".to_string(), "Bearer sk-test".to_string())
        );
        assert!(config.http_config.timeout.is_none());
    }

    #[test]
    fn base_url_trailing_slash_is_ignored() {
        let config = CompletionsConfig::new("sk-test".to_string())
            .with_base_url("http://localhost:8080/v1/".to_string());
        assert_eq!(config.endpoint_url(), "http://localhost:8080/v1/completions");
    }
}
