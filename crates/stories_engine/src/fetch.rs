use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use stories_logging::stories_debug;
use url::Url;

use crate::types::SearchResponse;
use crate::{FailureKind, FetchError, Story};

pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://hn.algolia.com/api/v1/search";

#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Search endpoint; the term goes into its `query` parameter.
    pub endpoint: String,
    pub connect_timeout: Option<Duration>,
    /// Whole-request limit. Unset means the request may take as long as it takes.
    pub request_timeout: Option<Duration>,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_SEARCH_ENDPOINT.to_string(),
            connect_timeout: Some(Duration::from_secs(10)),
            request_timeout: None,
            redirect_limit: 5,
            max_bytes: 5 * 1024 * 1024,
            allowed_content_types: vec!["application/json".to_string()],
        }
    }
}

/// A source of stories. `query` narrows the result when the source supports
/// searching; `None` asks for everything.
#[async_trait::async_trait]
pub trait StoryFetcher: Send + Sync {
    async fn fetch_stories(&self, query: Option<&str>) -> Result<Vec<Story>, FetchError>;
}

/// Fetches stories from a Hacker News style search endpoint.
#[derive(Debug, Clone)]
pub struct HnSearchFetcher {
    settings: FetchSettings,
}

impl HnSearchFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    pub fn search_url(&self, query: Option<&str>) -> Result<Url, FetchError> {
        let parsed = match query {
            Some(query) => Url::parse_with_params(&self.settings.endpoint, &[("query", query)]),
            None => Url::parse(&self.settings.endpoint),
        };
        parsed.map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    fn build_client(&self, redirect_counter: Arc<AtomicUsize>) -> Result<reqwest::Client, FetchError> {
        let redirect_limit = self.settings.redirect_limit;
        let policy = reqwest::redirect::Policy::custom(move |attempt| {
            let count = attempt.previous().len();
            redirect_counter.store(count, Ordering::Relaxed);
            if count >= redirect_limit {
                attempt.error("redirect limit exceeded")
            } else {
                attempt.follow()
            }
        });

        let mut builder = reqwest::Client::builder().redirect(policy);
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }

    fn is_content_type_allowed(&self, content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, FetchError> {
        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl StoryFetcher for HnSearchFetcher {
    async fn fetch_stories(&self, query: Option<&str>) -> Result<Vec<Story>, FetchError> {
        let url = self.search_url(query)?;
        let redirect_counter = Arc::new(AtomicUsize::new(0));
        let client = self.build_client(redirect_counter.clone())?;

        stories_debug!("GET {}", url);
        let response = client
            .get(url.as_str())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        if let Some(ct) = content_type.as_deref() {
            if !self.is_content_type_allowed(ct) {
                return Err(FetchError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "unsupported content type",
                ));
            }
        }

        let bytes = self.read_body(response).await?;
        let payload: SearchResponse = serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::new(FailureKind::MalformedPayload, err.to_string()))?;

        stories_debug!(
            "Search returned {} hits after {} redirects",
            payload.hits.len(),
            redirect_counter.load(Ordering::Relaxed)
        );
        Ok(payload.hits)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return FetchError::new(FailureKind::RedirectLimitExceeded, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
