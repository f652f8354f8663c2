#![allow(dead_code)]

use lingo::extract::JinaReader;
use lingo::llm::OpenAICompatibleClient;
use lingo::TranslationPipeline;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

pub const TEST_API_KEY: &str = "sk-test-123";
pub const TEST_MODEL: &str = "qwen3-30b-a3b-thinking-2507";

/// Helper to create a file with the given bytes in a fresh temp dir
pub fn write_temp_file(name: &str, content: impl AsRef<[u8]>) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write file");
    (temp_dir, path)
}

/// Body of a successful chat-completion response
pub fn completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": TEST_MODEL,
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

/// Pipeline with both real clients pointed at mock servers
pub fn pipeline_for(llm_base_url: &str, reader_url: &str) -> TranslationPipeline {
    let llm = Arc::new(OpenAICompatibleClient::with_endpoint(
        TEST_API_KEY.to_string(),
        llm_base_url.to_string(),
        TEST_MODEL.to_string(),
    ));
    let extractor = Arc::new(JinaReader::with_reader_url(reader_url));
    TranslationPipeline::new(llm, extractor)
}
