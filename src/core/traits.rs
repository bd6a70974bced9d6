use async_trait::async_trait;

use super::error::LlmError;
use crate::completions::types::{CompletionRequest, CompletionResponse};

#[async_trait]
pub trait CompletionProvider {
    async fn fetch_completion(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, LlmError>;
}
