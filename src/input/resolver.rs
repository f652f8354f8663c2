use crate::types::SourceKind;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Extensions the file tab suggests; others are still accepted
pub const SUGGESTED_EXTENSIONS: &[&str] = &["md", "txt", "html"];

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Could not read file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not read file {}: content is not valid UTF-8", .0.display())]
    InvalidEncoding(PathBuf),

    #[error("Could not read file {}: file is empty", .0.display())]
    EmptyFile(PathBuf),
}

/// Raw values from the three input modes. Blank strings count as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationInputs {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub url: Option<String>,
}

impl TranslationInputs {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }
}

/// The one input chosen for a request
#[derive(Debug, Clone, PartialEq)]
pub enum SourceSelection {
    Text(String),
    File(PathBuf),
    Url(String),
}

impl SourceSelection {
    pub fn kind(&self) -> SourceKind {
        match self {
            SourceSelection::Text(_) => SourceKind::Text,
            SourceSelection::File(_) => SourceKind::File,
            SourceSelection::Url(_) => SourceKind::Url,
        }
    }
}

/// Source after local loading. URLs still need remote extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedSource {
    Content { text: String, kind: SourceKind },
    Url(String),
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Pick exactly one input: text, then file, then URL
pub fn select_source(inputs: &TranslationInputs) -> Option<SourceSelection> {
    if let Some(text) = present(&inputs.text) {
        return Some(SourceSelection::Text(text.to_string()));
    }

    if let Some(path) = inputs.file.as_ref().filter(|p| !p.as_os_str().is_empty()) {
        return Some(SourceSelection::File(path.clone()));
    }

    present(&inputs.url).map(|url| SourceSelection::Url(url.trim().to_string()))
}

/// Load the selected source. Files are read whole and decoded as UTF-8.
pub async fn load_source(selection: SourceSelection) -> Result<ResolvedSource, InputError> {
    match selection {
        SourceSelection::Text(text) => Ok(ResolvedSource::Content {
            text,
            kind: SourceKind::Text,
        }),
        SourceSelection::File(path) => {
            let text = read_text_file(&path).await?;
            Ok(ResolvedSource::Content {
                text,
                kind: SourceKind::File,
            })
        }
        SourceSelection::Url(url) => Ok(ResolvedSource::Url(url)),
    }
}

async fn read_text_file(path: &Path) -> Result<String, InputError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| InputError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let text = String::from_utf8(bytes).map_err(|_| InputError::InvalidEncoding(path.to_path_buf()))?;

    if text.trim().is_empty() {
        return Err(InputError::EmptyFile(path.to_path_buf()));
    }

    Ok(text)
}

/// Whether the path has one of the extensions the file tab advertises
pub fn is_suggested_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUGGESTED_EXTENSIONS.iter().any(|s| s.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// What the file tab can say about a path before it is submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Missing,
    NotAFile,
    Ready { suggested: bool },
}

impl FileStatus {
    /// Check a path on disk. Only metadata is read.
    pub fn of(path: &Path) -> Self {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => FileStatus::Ready {
                suggested: is_suggested_extension(path),
            },
            Ok(_) => FileStatus::NotAFile,
            Err(_) => FileStatus::Missing,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FileStatus::Missing => "File not found",
            FileStatus::NotAFile => "Not a regular file",
            FileStatus::Ready { suggested: true } => "File found, ready to translate",
            FileStatus::Ready { suggested: false } => {
                "File found; not .md/.txt/.html, it will be read as UTF-8 text"
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, FileStatus::Ready { .. })
    }
}
