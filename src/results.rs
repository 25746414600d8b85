use crate::error::ScrapeError;
use std::path::PathBuf;
use url::Url;

/// An image that was downloaded and written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedImage {
    /// Source URL of the image
    pub url: Url,

    /// File the bytes were written to
    pub path: PathBuf,

    /// Number of bytes written
    pub bytes: usize,
}

/// An image whose download or write failed
#[derive(Debug)]
pub struct FailedImage {
    pub url: Url,
    pub error: ScrapeError,
}

/// Outcome of one image scraping run, in document order
#[derive(Debug)]
pub struct DownloadReport {
    /// Page the images were collected from
    pub page_url: Url,

    pub saved: Vec<SavedImage>,

    pub failed: Vec<FailedImage>,
}

impl DownloadReport {
    /// Create an empty report for the given page
    pub fn new(page_url: Url) -> Self {
        Self {
            page_url,
            saved: Vec::new(),
            failed: Vec::new(),
        }
    }

    /// Record the outcome of one image
    pub fn record(&mut self, url: Url, outcome: Result<SavedImage, ScrapeError>) {
        match outcome {
            Ok(saved) => self.saved.push(saved),
            Err(error) => self.failed.push(FailedImage { url, error }),
        }
    }

    /// Number of images that reached the sink
    pub fn attempted(&self) -> usize {
        self.saved.len() + self.failed.len()
    }

    /// True when every attempted image was saved
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}
