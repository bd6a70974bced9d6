//! Thin HTTP layer: one JSON POST per call, no retries.

use std::time::Duration;

use reqwest::StatusCode;
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use super::error::LlmError;

/// Configuration for the underlying reqwest client
#[derive(Debug, Clone, Default)]
pub struct HttpClientConfig {
    /// Total request timeout. `None` waits for the server indefinitely.
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

pub struct HttpClient {
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: &HttpClientConfig) -> Result<Self, LlmError> {
        let default_ua = format!("completion-cli/{}", env!("CARGO_PKG_VERSION"));
        let ua = config.user_agent.as_deref().unwrap_or(&default_ua);

        let mut builder = reqwest::Client::builder().user_agent(ua);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            LlmError::ProviderConfiguration(format!("Failed to build reqwest client: {e}"))
        })?;

        Ok(Self { client })
    }

    /// POST `body` as JSON and decode the response body as `Res`.
    ///
    /// The status code is returned alongside the decoded body and is not
    /// checked: error statuses with a JSON body decode like any other.
    #[tracing::instrument(
        name = "http_post_json",
        skip(self, headers, body),
        fields(url = %url),
        err
    )]
    pub async fn post_json<Req, Res>(
        &self,
        url: &str,
        headers: &[(String, String)],
        body: &Req,
    ) -> Result<(StatusCode, Res), LlmError>
    where
        Req: Serialize,
        Res: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body).map_err(|e| LlmError::Serialization {
            message: "Failed to serialize request body".to_string(),
            source: Box::new(e),
        })?;

        let mut req_builder = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");
        for (name, value) in headers {
            req_builder = req_builder.header(name, value);
        }

        let request = req_builder
            .body(payload)
            .build()
            .map_err(|e| LlmError::RequestBuild {
                message: "Failed to build HTTP request".to_string(),
                source: Box::new(e),
            })?;

        let res = self
            .client
            .execute(request)
            .await
            .map_err(|e| LlmError::Network {
                message: "Failed to complete request".to_string(),
                source: Box::new(e),
            })?;

        let status = res.status();
        debug!(status = %status, "HTTP response received");

        let bytes = res.bytes().await.map_err(|e| LlmError::Network {
            message: "Failed to read response body".to_string(),
            source: Box::new(e),
        })?;

        let decoded = serde_json::from_slice(&bytes).map_err(|e| LlmError::Parse {
            message: format!("Failed to parse API response (status {status})"),
            source: Box::new(e),
        })?;

        Ok((status, decoded))
    }
}
