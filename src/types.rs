use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Destination language for a translation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TargetLanguage {
    #[default]
    Chinese,
    English,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 2] = [TargetLanguage::Chinese, TargetLanguage::English];

    pub fn as_str(&self) -> &'static str {
        match self {
            TargetLanguage::Chinese => "Chinese",
            TargetLanguage::English => "English",
        }
    }

    /// Flip to the other language
    pub fn toggle(self) -> Self {
        match self {
            TargetLanguage::Chinese => TargetLanguage::English,
            TargetLanguage::English => TargetLanguage::Chinese,
        }
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown target language '{0}' (expected Chinese or English)")]
pub struct UnknownLanguage(pub String);

impl FromStr for TargetLanguage {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chinese" => Ok(TargetLanguage::Chinese),
            "english" => Ok(TargetLanguage::English),
            _ => Err(UnknownLanguage(s.to_string())),
        }
    }
}

/// Which input mode produced the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Text,
    File,
    Url,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceKind::Text => "text",
            SourceKind::File => "file",
            SourceKind::Url => "url",
        };
        f.write_str(name)
    }
}

/// A single translation call: non-empty source text plus destination language
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationRequest {
    source_text: String,
    target_language: TargetLanguage,
}

impl TranslationRequest {
    /// Returns `None` when the text is empty or whitespace only
    pub fn new(source_text: impl Into<String>, target_language: TargetLanguage) -> Option<Self> {
        let source_text = source_text.into();
        if source_text.trim().is_empty() {
            return None;
        }
        Some(Self {
            source_text,
            target_language,
        })
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn target_language(&self) -> TargetLanguage {
        self.target_language
    }
}

/// A completed translation
#[derive(Debug, Clone)]
pub struct TranslationResult {
    pub text: String,
    pub target_language: TargetLanguage,
    pub source: SourceKind,
    pub elapsed: Duration,
    pub finished_at: DateTime<Local>,
}

impl TranslationResult {
    pub fn new(text: String, target_language: TargetLanguage, source: SourceKind, elapsed: Duration) -> Self {
        Self {
            text,
            target_language,
            source,
            elapsed,
            finished_at: Local::now(),
        }
    }
}
