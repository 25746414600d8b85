//! Pipelines wiring fetcher, extractor and sink together.

pub mod images;
pub mod titles;

pub use images::ImageScraper;
pub use titles::TitleScraper;
