use std::path::PathBuf;
use thiserror::Error;

/// Failure kinds a scraping pipeline can run into
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Timeout, connection failure, or a non-2xx response
    #[error("request to {url} failed: {reason}")]
    Network {
        url: String,
        /// HTTP status when the server answered with a non-success code
        status: Option<u16>,
        reason: String,
    },

    /// The document could not be processed at all
    #[error("failed to parse page: {0}")]
    Parse(String),

    /// Local filesystem failure
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScrapeError {
    pub(crate) fn network(url: impl Into<String>, reason: impl ToString) -> Self {
        ScrapeError::Network {
            url: url.into(),
            status: None,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScrapeError::Io {
            path: path.into(),
            source,
        }
    }

    /// HTTP status code carried by a network error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ScrapeError::Network { status, .. } => *status,
            _ => None,
        }
    }
}

/// Errors raised while loading scraper configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
