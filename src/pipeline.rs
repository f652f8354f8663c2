//! Resolve input, extract URLs, translate.
//!
//! The pipeline owns the two remote clients and runs one request end to end.
//! It is built once at startup and shared with the UI behind an `Arc`.

use crate::extract::{ExtractError, ExtractionClient};
use crate::input::{load_source, select_source, InputError, ResolvedSource, TranslationInputs};
use crate::llm::{LLMClient, TranslationError, Translator};
use crate::types::{SourceKind, TargetLanguage, TranslationRequest, TranslationResult};
use std::sync::Arc;
use thiserror::Error;

pub const NO_INPUT_MESSAGE: &str = "Please provide input for translation.";

/// Coarse failure category, used by the UI to pick how an error is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NoInput,
    Input,
    Extraction,
    Translation,
}

/// Why a translation job produced no result
#[derive(Debug, Error)]
pub enum JobError {
    #[error("Please provide input for translation.")]
    NoInput,

    #[error("{0}")]
    Input(#[from] InputError),

    #[error("Error parsing URL: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Error during translation: {0}")]
    Translation(#[from] TranslationError),
}

impl JobError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            JobError::NoInput => ErrorKind::NoInput,
            JobError::Input(_) => ErrorKind::Input,
            JobError::Extraction(_) => ErrorKind::Extraction,
            JobError::Translation(_) => ErrorKind::Translation,
        }
    }
}

pub struct TranslationPipeline {
    translator: Translator,
    extractor: Arc<dyn ExtractionClient>,
}

impl TranslationPipeline {
    pub fn new(llm: Arc<dyn LLMClient>, extractor: Arc<dyn ExtractionClient>) -> Self {
        Self {
            translator: Translator::new(llm),
            extractor,
        }
    }

    /// Run one request: pick the active input, load it, translate it
    pub async fn run(
        &self,
        inputs: &TranslationInputs,
        target_language: TargetLanguage,
    ) -> Result<TranslationResult, JobError> {
        let selection = select_source(inputs).ok_or(JobError::NoInput)?;
        let kind = selection.kind();

        let text = match load_source(selection).await? {
            ResolvedSource::Content { text, .. } => text,
            ResolvedSource::Url(url) => self.extractor.extract(&url).await?,
        };
        let chars = text.chars().count();

        tracing::info!(source = %kind, language = %target_language, chars, "translation requested");

        self.translate_text(text, chars, target_language, kind).await
    }

    async fn translate_text(
        &self,
        text: String,
        chars: usize,
        target_language: TargetLanguage,
        kind: SourceKind,
    ) -> Result<TranslationResult, JobError> {
        let request = TranslationRequest::new(text, target_language)
            .ok_or(JobError::Translation(TranslationError::EmptySource))?;

        match self.translator.translate(&request, kind).await {
            Ok(result) => {
                tracing::info!(
                    source = %kind,
                    chars,
                    elapsed_ms = result.elapsed.as_millis() as u64,
                    "translation complete"
                );
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(source = %kind, error = %e, "translation failed");
                Err(e.into())
            }
        }
    }
}
