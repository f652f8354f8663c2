pub mod config;
pub mod error;
pub mod extract;
pub mod input;
pub mod llm;
pub mod logging;
pub mod pipeline;
pub mod types;
pub mod ui;

// Re-export commonly used types for convenience
pub use error::{AppError, AppResult};
pub use pipeline::{ErrorKind, JobError, TranslationPipeline};
pub use types::{SourceKind, TargetLanguage, TranslationRequest, TranslationResult};
