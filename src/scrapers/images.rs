use crate::config::ImageScraperConfig;
use crate::error::{ConfigError, ScrapeError};
use crate::fetcher::{Fetcher, PageRequest};
use crate::parsers::Extractor;
use crate::results::{DownloadReport, SavedImage};
use crate::sinks::ImageSink;
use futures::stream::{self, StreamExt};
use std::time::Duration;
use url::Url;

/// Downloads every image referenced by a page
#[derive(Debug, Clone)]
pub struct ImageScraper {
    fetcher: Fetcher,
    sink: ImageSink,
    timeout: Duration,
    max_concurrency: usize,
}

impl ImageScraper {
    /// Create a scraper writing into the configured save directory
    pub fn new(config: &ImageScraperConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_fetcher(Fetcher::new()?, config))
    }

    /// Create a scraper that shares an existing fetcher
    pub fn with_fetcher(fetcher: Fetcher, config: &ImageScraperConfig) -> Self {
        Self {
            fetcher,
            sink: ImageSink::new(&config.save_dir),
            timeout: config.timeout(),
            max_concurrency: config.max_concurrency.max(1),
        }
    }

    pub fn sink(&self) -> &ImageSink {
        &self.sink
    }

    /// Fetch the page, extract its images and download each one.
    ///
    /// Only a failure to fetch or parse the page itself is returned as an
    /// error. Individual image failures are logged and recorded in the report
    /// while the remaining images are still processed.
    pub async fn fetch_images(&self, page_url: &Url) -> Result<DownloadReport, ScrapeError> {
        ::log::info!("Fetching page: {}", page_url);
        let html = self
            .fetcher
            .fetch_text(&PageRequest::new(page_url.clone(), self.timeout))
            .await?;

        let extractor = Extractor::Images {
            base_url: page_url.clone(),
        };
        let image_urls = extractor
            .extract(&html)?
            .into_iter()
            .filter_map(|item| item.as_image_url().cloned())
            .collect::<Vec<_>>();
        ::log::info!("Found {} images on {}", image_urls.len(), page_url);

        // Fetches may overlap, but files are written in document order so a
        // later image with the same name always wins.
        let mut report = DownloadReport::new(page_url.clone());
        let mut fetches = stream::iter(image_urls)
            .map(|url| async move {
                let fetched = self.fetch_image(&url).await;
                (url, fetched)
            })
            .buffered(self.max_concurrency);

        while let Some((url, fetched)) = fetches.next().await {
            let outcome = match fetched {
                Ok(bytes) => self.sink.save(&url, &bytes).await,
                Err(e) => Err(e),
            };
            match &outcome {
                Ok(saved) => ::log::info!("Downloaded {} -> {}", url, saved.path.display()),
                Err(e) => ::log::warn!("Failed to download {}: {}", url, e),
            }
            report.record(url, outcome);
        }

        ::log::info!(
            "Saved {} of {} images from {}",
            report.saved.len(),
            report.attempted(),
            page_url
        );
        Ok(report)
    }

    /// Download one image and write it into the save directory
    pub async fn download_image(&self, url: &Url) -> Result<SavedImage, ScrapeError> {
        let bytes = self.fetch_image(url).await?;
        self.sink.save(url, &bytes).await
    }

    async fn fetch_image(&self, url: &Url) -> Result<Vec<u8>, ScrapeError> {
        // Fail on an unusable file name before spending a request on it
        self.sink.target_for(url)?;

        self.fetcher
            .fetch_bytes(&PageRequest::new(url.clone(), self.timeout))
            .await
    }
}
