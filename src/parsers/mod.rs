pub mod images;
pub mod titles;

#[cfg(test)]
mod tests;

use crate::error::ScrapeError;
use titles::TitleSelectors;
use url::Url;

/// A value pulled out of a page, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedItem {
    /// Absolute URL of an `<img>` source
    ImageReference { absolute_url: Url },
    /// Trimmed text of a ranked title
    TitleEntry { text: String },
}

impl ExtractedItem {
    /// Returns the image URL for image references
    pub fn as_image_url(&self) -> Option<&Url> {
        match self {
            ExtractedItem::ImageReference { absolute_url } => Some(absolute_url),
            ExtractedItem::TitleEntry { .. } => None,
        }
    }

    /// Returns the text for title entries
    pub fn as_title(&self) -> Option<&str> {
        match self {
            ExtractedItem::TitleEntry { text } => Some(text),
            ExtractedItem::ImageReference { .. } => None,
        }
    }
}

/// Selects which items are extracted from a page
#[derive(Debug, Clone)]
pub enum Extractor {
    /// Every `<img src>`, resolved against the page URL
    Images { base_url: Url },
    /// Anchor text of ranked table rows
    Titles(TitleSelectors),
}

impl Extractor {
    /// Extract items from an HTML document
    pub fn extract(&self, html: &str) -> Result<Vec<ExtractedItem>, ScrapeError> {
        match self {
            Extractor::Images { base_url } => images::extract(html, base_url),
            Extractor::Titles(selectors) => titles::extract(html, selectors),
        }
    }
}
