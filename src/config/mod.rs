pub mod settings;

pub use settings::{Config, ConfigError, ExtractionConfig, LLMConfig, LoggingConfig, UIConfig};
