use crate::parsers::titles::TitleSelectors;
use crate::parsers::{ExtractedItem, Extractor};
use url::Url;

#[test]
fn test_extractor_dispatch() {
    let html = r#"<html><body>
        <img src="logo.png">
        <table><tbody><tr><td>1</td><td><a>Headline</a></td></tr></tbody></table>
    </body></html>"#;

    let images = Extractor::Images {
        base_url: Url::parse("https://x.test/").unwrap(),
    }
    .extract(html)
    .unwrap();
    assert_eq!(
        images,
        vec![ExtractedItem::ImageReference {
            absolute_url: Url::parse("https://x.test/logo.png").unwrap()
        }]
    );

    let titles = Extractor::Titles(TitleSelectors::default())
        .extract(html)
        .unwrap();
    assert_eq!(
        titles,
        vec![ExtractedItem::TitleEntry {
            text: "Headline".to_string()
        }]
    );
    assert_eq!(titles[0].as_image_url(), None);
}
