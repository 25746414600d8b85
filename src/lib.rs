// Re-export modules
pub mod config;
pub mod error;
pub mod fetcher;
pub mod parsers;
pub mod results;
pub mod scrapers;
pub mod sinks;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{ImageScraperConfig, ScraperConfigType, TitleScraperConfig};
pub use error::{ConfigError, ScrapeError};
pub use fetcher::{Fetcher, PageRequest};
pub use parsers::{ExtractedItem, Extractor};
pub use results::DownloadReport;
pub use scrapers::{ImageScraper, TitleScraper};
