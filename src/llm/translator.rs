use crate::llm::client::{ChatMessage, LLMClient, LLMError};
use crate::types::{SourceKind, TranslationRequest, TranslationResult};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

pub const SYSTEM_PROMPT: &str = "You are a translation expert, proficient in multiple languages.";

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("source text is empty")]
    EmptySource,

    #[error("{0}")]
    LLMError(#[from] LLMError),
}

/// Build the two-turn prompt for a request
pub fn build_messages(request: &TranslationRequest) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_PROMPT),
        ChatMessage::user(format!(
            "Translate the following text to {}: {}",
            request.target_language(),
            request.source_text()
        )),
    ]
}

pub struct Translator {
    client: Arc<dyn LLMClient>,
}

impl Translator {
    pub fn new(client: Arc<dyn LLMClient>) -> Self {
        Self { client }
    }

    pub async fn translate(
        &self,
        request: &TranslationRequest,
        source: SourceKind,
    ) -> Result<TranslationResult, TranslationError> {
        if request.source_text().trim().is_empty() {
            return Err(TranslationError::EmptySource);
        }

        let messages = build_messages(request);
        let started = Instant::now();
        let text = self.client.complete(&messages).await?;

        Ok(TranslationResult::new(
            text,
            request.target_language(),
            source,
            started.elapsed(),
        ))
    }
}
