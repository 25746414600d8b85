use crate::error::ScrapeError;
use crate::parsers::ExtractedItem;
use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};

/// CSS selectors locating ranked titles on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleSelectors {
    /// Selects one element per ranked entry
    #[serde(default = "default_rows")]
    pub rows: String,

    /// Selects the title element within a row
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_rows() -> String {
    "table tbody tr".to_string()
}

fn default_title() -> String {
    "td:nth-child(2) a".to_string()
}

impl Default for TitleSelectors {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            title: default_title(),
        }
    }
}

/// Extracts the trimmed anchor text of every row that has one.
///
/// Rows without a matching anchor produce nothing. A layout change on the page
/// therefore yields fewer titles rather than an error.
pub fn extract(html: &str, selectors: &TitleSelectors) -> Result<Vec<ExtractedItem>, ScrapeError> {
    let row_selector = compile(&selectors.rows)?;
    let title_selector = compile(&selectors.title)?;
    let doc = Html::parse_document(html);

    let mut items = Vec::new();
    for row in doc.select(&row_selector) {
        let Some(anchor) = row.select(&title_selector).next() else {
            continue;
        };
        let text = anchor.text().collect::<String>().trim().to_string();
        items.push(ExtractedItem::TitleEntry { text });
    }

    ::log::debug!("Title extractor found {} titles", items.len());
    Ok(items)
}

fn compile(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector)
        .map_err(|e| ScrapeError::Parse(format!("invalid selector {:?}: {}", selector, e)))
}
