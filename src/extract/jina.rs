use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

pub const DEFAULT_READER_URL: &str = "https://r.jina.ai";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid URL '{0}'")]
    InvalidUrl(String),

    #[error("reader returned status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Could not parse URL.")]
    Empty,
}

/// Turns a web page into readable text
#[async_trait]
pub trait ExtractionClient: Send + Sync {
    async fn extract(&self, url: &str) -> Result<String, ExtractError>;
}

/// Client for the r.jina.ai reader proxy
pub struct JinaReader {
    reader_url: String,
    http_client: Client,
}

impl JinaReader {
    pub fn new() -> Self {
        Self::with_reader_url(DEFAULT_READER_URL)
    }

    pub fn with_reader_url(reader_url: impl Into<String>) -> Self {
        Self {
            reader_url: reader_url.into(),
            http_client: Client::new(),
        }
    }

    /// Parse the user URL, assuming https when no scheme is given.
    /// Only http and https pages are accepted.
    pub fn normalize_target(raw: &str) -> Result<Url, ExtractError> {
        let raw = raw.trim();
        let candidate = if has_scheme(raw) {
            raw.to_string()
        } else {
            format!("https://{}", raw)
        };
        let parsed = Url::parse(&candidate).map_err(|_| ExtractError::InvalidUrl(raw.to_string()))?;

        match parsed.scheme() {
            "http" | "https" if parsed.host_str().is_some() => Ok(parsed),
            _ => Err(ExtractError::InvalidUrl(raw.to_string())),
        }
    }

    /// Reader endpoint for a target page
    pub fn reader_endpoint(&self, target: &Url) -> String {
        format!("{}/{}", self.reader_url.trim_end_matches('/'), target)
    }
}

/// Whether the text before the first `://` is a bare scheme name.
/// `example.com/login?next=https://...` has no scheme of its own.
fn has_scheme(raw: &str) -> bool {
    let Some((scheme, _)) = raw.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-')
}

impl Default for JinaReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExtractionClient for JinaReader {
    async fn extract(&self, url: &str) -> Result<String, ExtractError> {
        let target = Self::normalize_target(url)?;
        let endpoint = self.reader_endpoint(&target);

        tracing::debug!(target_url = %target, "requesting reader extraction");

        let response = self.http_client.get(&endpoint).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, "reader extraction failed");
            return Err(ExtractError::Status { status, body });
        }

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Err(ExtractError::Empty);
        }

        tracing::debug!(chars = text.chars().count(), "reader extraction complete");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_keeps_full_url() {
        let url = JinaReader::normalize_target("https://example.com/blog/post?id=3").unwrap();
        assert_eq!(url.as_str(), "https://example.com/blog/post?id=3");
    }

    #[test]
    fn test_normalize_adds_scheme() {
        let url = JinaReader::normalize_target("example.com/article").unwrap();
        assert_eq!(url.as_str(), "https://example.com/article");
    }

    #[test]
    fn test_normalize_escapes_spaces() {
        let url = JinaReader::normalize_target("https://example.com/a page").unwrap();
        assert_eq!(url.as_str(), "https://example.com/a%20page");
    }

    #[test]
    fn test_normalize_url_in_query_without_scheme() {
        let url = JinaReader::normalize_target("example.com/login?next=https://example.com/home").unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.path(), "/login");
        assert_eq!(url.query(), Some("next=https://example.com/home"));
    }

    #[test]
    fn test_has_scheme() {
        assert!(has_scheme("https://example.com"));
        assert!(has_scheme("svn+ssh://host/repo"));
        assert!(!has_scheme("example.com"));
        assert!(!has_scheme("example.com/a?u=http://b.com"));
        assert!(!has_scheme("://example.com"));
    }

    #[test]
    fn test_normalize_rejects_other_schemes() {
        assert!(matches!(
            JinaReader::normalize_target("file:///etc/passwd"),
            Err(ExtractError::InvalidUrl(_))
        ));
        assert!(matches!(
            JinaReader::normalize_target("ftp://example.com/file"),
            Err(ExtractError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_reader_endpoint() {
        let reader = JinaReader::with_reader_url("https://r.jina.ai/");
        let target = JinaReader::normalize_target("https://example.com/page").unwrap();
        assert_eq!(
            reader.reader_endpoint(&target),
            "https://r.jina.ai/https://example.com/page"
        );
    }

    #[test]
    fn test_empty_error_message() {
        assert_eq!(ExtractError::Empty.to_string(), "Could not parse URL.");
    }
}
