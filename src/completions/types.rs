use serde::{Deserialize, Deserializer, Serialize};

use crate::provider::constants::defaults;

/// Body of a `POST /completions` call.
///
/// All seven fields are always serialized. Values are passed through without
/// range checks; the remote service rejects what it does not accept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub prompt: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
}

impl Default for CompletionRequest {
    fn default() -> Self {
        Self {
            model: defaults::MODEL.to_string(),
            prompt: defaults::PROMPT.to_string(),
            temperature: defaults::TEMPERATURE,
            max_tokens: defaults::MAX_TOKENS,
            top_p: defaults::TOP_P,
            frequency_penalty: defaults::FREQUENCY_PENALTY,
            presence_penalty: defaults::PRESENCE_PENALTY,
        }
    }
}

impl CompletionRequest {
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CompletionChoice {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub index: i64,
    pub logprobs: Option<String>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CompletionUsage {
    #[serde(deserialize_with = "null_as_default")]
    pub prompt_tokens: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub completion_tokens: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_tokens: i64,
}

/// Error object returned by the service in place of a completion.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CompletionError {
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub r#type: String,
    pub param: Option<String>,
    pub code: Option<String>,
}

/// Decoded completions response.
///
/// Every field may be missing or `null` on the wire: an error-only body decodes
/// to an empty response with [`CompletionResponse::error`] set.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CompletionResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub object: String,
    /// Unix timestamp, seconds.
    #[serde(deserialize_with = "null_as_default")]
    pub created: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub model: String,
    #[serde(deserialize_with = "null_as_default")]
    pub choices: Vec<CompletionChoice>,
    #[serde(deserialize_with = "null_as_default")]
    pub usage: CompletionUsage,
    pub error: Option<CompletionError>,

    /// HTTP status the response arrived with. Set by the client, never read
    /// from the body.
    #[serde(skip)]
    pub http_status: Option<u16>,
}

impl CompletionResponse {
    /// Text of the first choice, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.choices.first().map(|choice| choice.text.as_str())
    }

    /// Error reported by the remote service, if any.
    pub fn api_error(&self) -> Option<&CompletionError> {
        self.error.as_ref()
    }

    /// True when the status was 2xx (or unknown) and no error body came back.
    pub fn is_success(&self) -> bool {
        let status_ok = self
            .http_status
            .is_none_or(|status| (200..300).contains(&status));
        status_ok && self.error.is_none()
    }

    /// Remove at most the first `limit` newlines from the first choice's text,
    /// left to right. Later newlines are kept.
    pub fn strip_first_choice_newlines(&mut self, limit: usize) {
        if let Some(choice) = self.choices.first_mut() {
            choice.text = choice.text.replacen('\n', "", limit);
        }
    }
}

/// Decode `null` as the field's default, like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    let value: Option<T> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
