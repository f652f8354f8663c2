use lingo::config::ConfigError;
use lingo::error::{AppError, AppResult};
use lingo::extract::ExtractError;
use lingo::input::InputError;
use lingo::llm::{LLMError, TranslationError};
use lingo::{ErrorKind, JobError};
use std::error::Error;
use std::path::PathBuf;

/// Test that ConfigError converts to AppError::Config
#[test]
fn test_config_error_converts_to_app_error() {
    let app_err: AppError = ConfigError::DirectoryNotFound.into();
    assert!(matches!(app_err, AppError::Config(_)));
    assert!(app_err.to_string().contains("Configuration error"));
}

/// Test that clipboard failures convert to AppError::Clipboard
#[test]
fn test_clipboard_error_converts_to_app_error() {
    let app_err: AppError = arboard::Error::ContentNotAvailable.into();
    assert!(matches!(app_err, AppError::Clipboard(_)));
    assert!(app_err.to_string().starts_with("Clipboard error: "));
}

/// Test that std::io::Error converts to AppError::Io
#[test]
fn test_io_error_converts_to_app_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
    let app_err: AppError = io_err.into();
    assert!(matches!(app_err, AppError::Io(_)));
}

/// The file read error keeps the io::Error as its source
#[test]
fn test_error_source_preserved() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let input_err = InputError::FileRead {
        path: PathBuf::from("/secret.txt"),
        source: io_err,
    };
    assert!(input_err.source().is_some());

    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let app_err: AppError = ConfigError::ReadError(io_err).into();
    assert!(app_err.source().is_some());
}

/// Job errors carry the user-facing prefixes
#[test]
fn test_job_error_messages() {
    assert_eq!(JobError::NoInput.to_string(), "Please provide input for translation.");

    let err: JobError = ExtractError::InvalidUrl("ftp://x".to_string()).into();
    assert_eq!(err.kind(), ErrorKind::Extraction);
    assert_eq!(err.to_string(), "Error parsing URL: invalid URL 'ftp://x'");

    let err: JobError = TranslationError::from(LLMError::InvalidResponse("No choices in response".to_string())).into();
    assert_eq!(err.kind(), ErrorKind::Translation);
    assert_eq!(
        err.to_string(),
        "Error during translation: Invalid API response: No choices in response"
    );

    let err: JobError = InputError::EmptyFile(PathBuf::from("notes.md")).into();
    assert_eq!(err.kind(), ErrorKind::Input);
    assert_eq!(err.to_string(), "Could not read file notes.md: file is empty");
}

/// Test that ? operator works with AppError
#[test]
fn test_question_mark_operator() {
    fn may_fail() -> Result<(), ConfigError> {
        Err(ConfigError::InvalidValue("tick_rate_ms".to_string()))
    }

    fn app_level() -> AppResult<()> {
        may_fail()?;
        Ok(())
    }

    let err = app_level().unwrap_err();
    assert!(matches!(err, AppError::Config(ConfigError::InvalidValue(_))));
}
