use crate::config::TitleScraperConfig;
use crate::error::{ConfigError, ScrapeError};
use crate::fetcher::{Fetcher, PageRequest};
use crate::parsers::Extractor;
use crate::sinks::TitleSink;
use url::Url;

/// Collects the ranked titles of a hot-list page and stores them as text
#[derive(Debug, Clone)]
pub struct TitleScraper {
    fetcher: Fetcher,
    config: TitleScraperConfig,
    url: Url,
    sink: TitleSink,
}

impl TitleScraper {
    pub fn new(config: TitleScraperConfig) -> Result<Self, ConfigError> {
        Self::with_fetcher(Fetcher::new()?, config)
    }

    /// Create a scraper that shares an existing fetcher
    pub fn with_fetcher(
        fetcher: Fetcher,
        config: TitleScraperConfig,
    ) -> Result<Self, ConfigError> {
        let url = config.target()?;
        let sink = TitleSink::new(config.output_path());
        Ok(Self {
            fetcher,
            config,
            url,
            sink,
        })
    }

    pub fn sink(&self) -> &TitleSink {
        &self.sink
    }

    /// Fetch the page and extract its titles, propagating any failure
    pub async fn try_fetch_titles(&self) -> Result<Vec<String>, ScrapeError> {
        let request = PageRequest::new(self.url.clone(), self.config.timeout())
            .with_headers(self.config.headers.clone());
        let html = self.fetcher.fetch_text(&request).await?;

        let titles = Extractor::Titles(self.config.selectors.clone())
            .extract(&html)?
            .into_iter()
            .filter_map(|item| item.as_title().map(str::to_string))
            .collect::<Vec<_>>();
        ::log::debug!("Extracted {} titles from {}", titles.len(), self.url);
        Ok(titles)
    }

    /// Fetch the hot titles, logging failures and returning an empty list
    pub async fn fetch_hot_titles(&self) -> Vec<String> {
        match self.try_fetch_titles().await {
            Ok(titles) => titles,
            Err(e @ ScrapeError::Parse(_)) => {
                ::log::error!("Failed to parse {}: {}", self.url, e);
                Vec::new()
            }
            Err(e) => {
                ::log::error!("Request failed: {}", e);
                Vec::new()
            }
        }
    }

    /// Write the titles to the output file, reporting whether it succeeded
    pub async fn save_to_file<S: AsRef<str>>(&self, titles: &[S]) -> bool {
        match self.sink.write(titles).await {
            Ok(path) => {
                ::log::info!("Saved {} titles to {}", titles.len(), path.display());
                true
            }
            Err(e) => {
                ::log::error!("Failed to write titles: {}", e);
                false
            }
        }
    }
}
