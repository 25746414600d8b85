use crate::error::{ConfigError, ScrapeError};
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::collections::BTreeMap;
use std::time::Duration;
use url::Url;

/// A single GET request: target, timeout and extra headers
#[derive(Debug, Clone)]
pub struct PageRequest {
    pub url: Url,
    pub timeout: Duration,
    pub headers: BTreeMap<String, String>,
}

impl PageRequest {
    pub fn new(url: Url, timeout: Duration) -> Self {
        Self {
            url,
            timeout,
            headers: BTreeMap::new(),
        }
    }

    /// Add one header to the request
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    /// Add several headers to the request
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

/// Issues bounded-timeout GET requests over one shared client
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Result<Self, ConfigError> {
        let client = Client::builder().build().map_err(ConfigError::HttpClient)?;
        Ok(Self { client })
    }

    /// Fetch a page and decode its body as text
    pub async fn fetch_text(&self, request: &PageRequest) -> Result<String, ScrapeError> {
        let response = self.send(request).await?;
        response
            .text()
            .await
            .map_err(|e| ScrapeError::network(request.url.as_str(), e))
    }

    /// Fetch a resource and return its raw body
    pub async fn fetch_bytes(&self, request: &PageRequest) -> Result<Vec<u8>, ScrapeError> {
        let response = self.send(request).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ScrapeError::network(request.url.as_str(), e))?;
        Ok(bytes.to_vec())
    }

    async fn send(&self, request: &PageRequest) -> Result<reqwest::Response, ScrapeError> {
        let url = request.url.as_str();
        let headers = build_headers(request)?;

        ::log::debug!("GET {} (timeout {:?})", url, request.timeout);
        let response = self
            .client
            .get(request.url.clone())
            .headers(headers)
            .timeout(request.timeout)
            .send()
            .await
            .map_err(|e| {
                let reason = if e.is_timeout() {
                    format!("timed out after {:?}", request.timeout)
                } else {
                    e.to_string()
                };
                ScrapeError::network(url, reason)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Network {
                url: url.to_string(),
                status: Some(status.as_u16()),
                reason: format!("HTTP {}", status),
            });
        }

        Ok(response)
    }
}

fn build_headers(request: &PageRequest) -> Result<HeaderMap, ScrapeError> {
    let mut headers = HeaderMap::with_capacity(request.headers.len());
    for (name, value) in &request.headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ScrapeError::network(request.url.as_str(), e))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ScrapeError::network(request.url.as_str(), e))?;
        headers.insert(name, value);
    }
    Ok(headers)
}
