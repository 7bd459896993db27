//! Loading the static feed from a local file or an HTTP(S) URL.
//!
//! The feed is read exactly once per page build. Failures are not retried;
//! they surface as a [`DataLoadError`] which the page layer turns into the
//! visible fallback message.
//!
//! Typical usage:
//! ```no_run
//! # use daily_digest::source::{DataSource, Loader};
//! let loader = Loader::default();
//! let data = loader.load(&DataSource::parse("data.json"))?;
//! println!("{} articles", data.articles.len());
//! # Ok::<(), daily_digest::DataLoadError>(())
//! ```
use crate::models::Dataset;
use reqwest::blocking::Client as HttpClient;
use reqwest::header::{CACHE_CONTROL, HeaderValue};
use reqwest::redirect::Policy;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Default feed location, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "data.json";

/// Message shown to readers when the feed cannot be loaded.
pub const LOAD_FAILED_MESSAGE: &str = "Не удалось загрузить данные. Проверьте файл data.json.";

/// Why the feed could not be loaded.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("HTTP {status} while fetching {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("network error while fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid feed JSON from {origin}: {source}")]
    Decode {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

impl DataLoadError {
    /// Text for the reader-facing error state.
    pub fn user_message(&self) -> &'static str {
        LOAD_FAILED_MESSAGE
    }
}

/// Where the feed lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Url(String),
}

impl DataSource {
    /// `http://` and `https://` locations are URLs, anything else a path.
    pub fn parse(s: &str) -> Self {
        let t = s.trim();
        let lower = t.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DataSource::Url(t.to_string())
        } else {
            DataSource::File(PathBuf::from(t))
        }
    }
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::File(PathBuf::from(DEFAULT_DATA_PATH))
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::File(p) => write!(f, "{}", p.display()),
            DataSource::Url(u) => f.write_str(u),
        }
    }
}

impl From<&str> for DataSource {
    fn from(s: &str) -> Self {
        DataSource::parse(s)
    }
}

/// Feed loader. Holds the HTTP client so repeated loads share connections.
#[derive(Debug, Clone)]
pub struct Loader {
    http: HttpClient,
}

impl Default for Loader {
    fn default() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }
}

impl Loader {
    /// Build a loader whose HTTP requests give up after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Self {
        let http = HttpClient::builder()
            .timeout(timeout) // total request timeout
            .connect_timeout(Duration::from_secs(10).min(timeout))
            .redirect(Policy::limited(5))
            .user_agent(concat!("daily-digest/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                log::warn!("falling back to default HTTP client: {}", e);
                HttpClient::new()
            });
        Self { http }
    }

    /// Read and decode the feed. Single attempt, no retries.
    pub fn load(&self, source: &DataSource) -> Result<Dataset, DataLoadError> {
        let data = match source {
            DataSource::File(path) => load_file(path)?,
            DataSource::Url(url) => self.load_url(url)?,
        };
        log::info!(
            "loaded {} articles and {} topics from {}",
            data.articles.len(),
            data.topics.len(),
            source
        );
        Ok(data)
    }

    fn load_url(&self, url: &str) -> Result<Dataset, DataLoadError> {
        let network = |source| DataLoadError::Network {
            url: url.to_string(),
            source,
        };
        // The feed changes daily; never serve it from an intermediate cache.
        let resp = self
            .http
            .get(url)
            .header(CACHE_CONTROL, HeaderValue::from_static("no-store"))
            .send()
            .map_err(network)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(DataLoadError::Status {
                url: url.to_string(),
                status,
            });
        }
        let body = resp.bytes().map_err(network)?;
        decode(&body, url)
    }
}

/// Decode feed JSON. `origin` names the source in error messages.
pub fn decode(bytes: &[u8], origin: &str) -> Result<Dataset, DataLoadError> {
    serde_json::from_slice(bytes).map_err(|source| DataLoadError::Decode {
        origin: origin.to_string(),
        source,
    })
}

fn load_file(path: &Path) -> Result<Dataset, DataLoadError> {
    let bytes = std::fs::read(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    decode(&bytes, &path.display().to_string())
}
