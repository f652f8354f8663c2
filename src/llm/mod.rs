pub mod client;
pub mod openai;
pub mod translator;

pub use client::{ChatMessage, LLMClient, LLMError, Role};
pub use openai::OpenAICompatibleClient;
pub use translator::{build_messages, TranslationError, Translator, SYSTEM_PROMPT};
