use crate::error::ScrapeError;
use crate::parsers::ExtractedItem;
use scraper::{Html, Selector};
use url::Url;

/// Collects every `<img>` source in the document as an absolute URL.
///
/// Images without a `src` (or with a blank one) are skipped, as are sources
/// that cannot be joined onto `base_url`.
pub fn extract(html: &str, base_url: &Url) -> Result<Vec<ExtractedItem>, ScrapeError> {
    let doc = Html::parse_document(html);
    let img_selector =
        Selector::parse("img").map_err(|e| ScrapeError::Parse(format!("img selector: {}", e)))?;

    let items = doc
        .select(&img_selector)
        .filter_map(|e| e.value().attr("src"))
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .filter_map(|src| match base_url.join(src) {
            Ok(absolute_url) => Some(ExtractedItem::ImageReference { absolute_url }),
            Err(e) => {
                ::log::debug!("Skipping unresolvable image source {:?}: {}", src, e);
                None
            }
        })
        .collect::<Vec<_>>();

    ::log::debug!("Image extractor found {} images", items.len());
    Ok(items)
}
