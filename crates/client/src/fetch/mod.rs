//! HTTP fetch step for judge problem pages.
//!
//! ### URL Construction
//! - Base URL is normalized once (scheme default, lowercase host, no query/fragment).
//! - Problem pages live at `{base}/problem/{id}`.
//!
//! ### Request Policy
//! - One GET per run, no retries.
//! - Non-2xx responses are errors.
//! - Timeout is the HTTP client's default unless configured.
//! - Max body bytes: 5MB (configurable)

pub mod url;

use std::time::{Duration, Instant};

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, header};

pub use self::url::{UrlError, normalize_base, problem_url};

use boj2md_core::{AppConfig, Error};

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Judge base URL (default: "https://www.acmicpc.net")
    pub base_url: String,

    /// User agent string (default: "boj2md/<version>")
    pub user_agent: String,

    /// Maximum response body size in bytes (default: 5MB)
    pub max_bytes: usize,

    /// Request timeout; `None` keeps reqwest's default
    pub timeout: Option<Duration>,

    /// Maximum number of redirects to follow (default: 10)
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for FetchConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            user_agent: config.user_agent.clone(),
            max_bytes: config.max_bytes,
            timeout: config.timeout(),
            max_redirects: config.max_redirects,
        }
    }
}

/// Something that can produce the HTML of a problem page.
///
/// The CLI drives this trait so it can be exercised without the network.
#[async_trait]
pub trait ProblemSource: Send + Sync {
    /// Canonical URL of the problem page.
    fn problem_url(&self, problem_id: &str) -> Result<::url::Url, Error>;

    /// Fetch the problem page and return its HTML.
    async fn fetch_problem(&self, problem_id: &str) -> Result<String, Error>;
}

/// HTTP fetch client for the judge.
pub struct FetchClient {
    http: Client,
    base_url: ::url::Url,
    config: FetchConfig,
}

impl FetchClient {
    /// Create a new fetch client with the given configuration.
    pub fn new(config: FetchConfig) -> Result<Self, Error> {
        let base_url = normalize_base(&config.base_url).map_err(|e| Error::InvalidUrl(e.to_string()))?;

        let mut builder = Client::builder()
            .user_agent(&config.user_agent)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| Error::HttpError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, base_url, config })
    }

    /// Fetch a URL and return the body bytes, enforcing status and size limits.
    pub async fn fetch(&self, url: &::url::Url) -> Result<Bytes, Error> {
        let start = Instant::now();

        let response = self
            .http
            .get(url.as_str())
            .header(header::ACCEPT, "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();

        if !status.is_success() {
            return Err(Error::HttpError(format!("status {} for {}", status.as_u16(), url)));
        }

        if let Some(len) = response.content_length()
            && len as usize > self.config.max_bytes
        {
            return Err(Error::FetchTooLarge(format!(
                "{} bytes exceeds {}",
                len, self.config.max_bytes
            )));
        }

        let final_url = response.url().clone();

        let bytes = response.bytes().await.map_err(map_transport_error)?;

        if bytes.len() > self.config.max_bytes {
            return Err(Error::FetchTooLarge(format!(
                "{} bytes exceeds {}",
                bytes.len(),
                self.config.max_bytes
            )));
        }

        let fetch_ms = start.elapsed().as_millis() as u64;

        tracing::debug!(
            "fetched {} -> {} in {}ms ({} bytes)",
            url,
            final_url,
            fetch_ms,
            bytes.len()
        );

        Ok(bytes)
    }

    /// Normalized judge base URL.
    pub fn base_url(&self) -> &::url::Url {
        &self.base_url
    }

    /// Get reference to the configuration.
    pub fn config(&self) -> &FetchConfig {
        &self.config
    }
}

#[async_trait]
impl ProblemSource for FetchClient {
    fn problem_url(&self, problem_id: &str) -> Result<::url::Url, Error> {
        problem_url(&self.base_url, problem_id)
    }

    async fn fetch_problem(&self, problem_id: &str) -> Result<String, Error> {
        let url = ProblemSource::problem_url(self, problem_id)?;
        let bytes = self.fetch(&url).await?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

fn map_transport_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::FetchTimeout(err.to_string())
    } else {
        Error::HttpError(format!("network error: {}", err))
    }
}
