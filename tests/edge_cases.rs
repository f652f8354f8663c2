mod helpers;

use helpers::{completion_body, pipeline_for, write_temp_file};
use lingo::extract::JinaReader;
use lingo::input::{load_source, select_source, InputError, ResolvedSource, SourceSelection, TranslationInputs};
use lingo::llm::build_messages;
use lingo::{SourceKind, TargetLanguage, TranslationRequest};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A UTF-8 BOM is kept as part of the file text
#[tokio::test]
async fn test_file_with_bom() {
    let (_dir, path) = write_temp_file("bom.txt", b"\xEF\xBB\xBFHello");
    let resolved = load_source(SourceSelection::File(path)).await.unwrap();

    match resolved {
        ResolvedSource::Content { text, kind } => {
            assert_eq!(kind, SourceKind::File);
            assert_eq!(text, "\u{feff}Hello");
        }
        other => panic!("unexpected: {:?}", other),
    }
}

/// UTF-16 files are not decoded
#[tokio::test]
async fn test_utf16_file_rejected() {
    let (_dir, path) = write_temp_file("utf16.txt", [0xFF, 0xFE, 0x48, 0x00, 0x69, 0x00]);
    let err = load_source(SourceSelection::File(path)).await.unwrap_err();
    assert!(matches!(err, InputError::InvalidEncoding(_)));
}

/// Files with extensions outside the suggested set are still read
#[tokio::test]
async fn test_unlisted_extension_is_accepted() {
    let (_dir, path) = write_temp_file("data.csv", "a,b\n1,2\n");
    let resolved = load_source(SourceSelection::File(path)).await.unwrap();
    assert!(matches!(resolved, ResolvedSource::Content { .. }));
}

/// Directories cannot be read as text
#[tokio::test]
async fn test_directory_as_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = load_source(SourceSelection::File(dir.path().to_path_buf()))
        .await
        .unwrap_err();
    assert!(matches!(err, InputError::FileRead { .. }));
}

/// Large inputs go into the prompt unchanged
#[test]
fn test_long_text_prompt() {
    let long = "段落。".repeat(5000);
    let request = TranslationRequest::new(long.clone(), TargetLanguage::English).unwrap();
    let messages = build_messages(&request);

    assert_eq!(
        messages[1].content,
        format!("Translate the following text to English: {}", long)
    );
}

/// Prompt text is not escaped or trimmed
#[test]
fn test_prompt_keeps_special_characters() {
    let text = "  line one\n\t\"quoted\" {braces} <tag>  ";
    let request = TranslationRequest::new(text, TargetLanguage::Chinese).unwrap();
    let messages = build_messages(&request);
    assert!(messages[1].content.ends_with(text));
}

/// Whitespace-only text falls through to the next input
#[test]
fn test_whitespace_text_falls_through() {
    let inputs = TranslationInputs {
        text: Some(" \n ".to_string()),
        file: None,
        url: Some("example.com".to_string()),
    };
    assert_eq!(
        select_source(&inputs),
        Some(SourceSelection::Url("example.com".to_string()))
    );
}

/// URLs with spaces or no scheme are normalized before hitting the reader
#[test]
fn test_url_normalization() {
    let url = JinaReader::normalize_target("  example.com/some page?q=a b  ").unwrap();
    assert_eq!(url.as_str(), "https://example.com/some%20page?q=a%20b");

    assert!(JinaReader::normalize_target("javascript:alert(1)").is_err());
    assert!(JinaReader::normalize_target("").is_err());
}

/// Model output is passed through verbatim, including surrounding whitespace
#[tokio::test]
async fn test_completion_verbatim() {
    let llm = MockServer::start().await;
    let reader = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(completion_body("\n<think>hmm</think>\n你好\n")),
        )
        .mount(&llm)
        .await;

    let pipeline = pipeline_for(&llm.uri(), &reader.uri());
    let result = pipeline
        .run(&TranslationInputs::text("Hello"), TargetLanguage::Chinese)
        .await
        .unwrap();

    assert_eq!(result.text, "\n<think>hmm</think>\n你好\n");
}

/// Completion with an empty choices list is an error
#[tokio::test]
async fn test_empty_choices() {
    let llm = MockServer::start().await;
    let reader = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })))
        .mount(&llm)
        .await;

    let pipeline = pipeline_for(&llm.uri(), &reader.uri());
    let err = pipeline
        .run(&TranslationInputs::text("Hello"), TargetLanguage::Chinese)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Error during translation: Invalid API response: No choices in response"
    );
}
