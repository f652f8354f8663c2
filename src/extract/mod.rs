pub mod jina;

pub use jina::{ExtractError, ExtractionClient, JinaReader, DEFAULT_READER_URL};
