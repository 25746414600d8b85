use crate::parsers::images;
use url::Url;

fn base() -> Url {
    Url::parse("https://x.test/gallery/index.html?page=1").unwrap()
}

fn urls(html: &str) -> Vec<String> {
    images::extract(html, &base())
        .unwrap()
        .iter()
        .filter_map(|item| item.as_image_url())
        .map(|u| u.to_string())
        .collect()
}

#[test]
fn test_resolves_every_reference_form() {
    let html = r##"<html><body>
        <img src="https://cdn.test/abs.png">
        <img src="//cdn.test/scheme.png">
        <img src="/root.png">
        <img src="thumbs/rel.png">
        <img src="../up.png">
        <img src="?size=2">
        <img src="#frag">
    </body></html>"##;

    assert_eq!(
        urls(html),
        vec![
            "https://cdn.test/abs.png",
            "https://cdn.test/scheme.png",
            "https://x.test/root.png",
            "https://x.test/gallery/thumbs/rel.png",
            "https://x.test/up.png",
            "https://x.test/gallery/index.html?size=2",
            "https://x.test/gallery/index.html?page=1#frag",
        ]
    );
}

#[test]
fn test_img_without_src_is_skipped() {
    let html = r#"<img alt="no source"><img src=""><img src="   "><img src="a.png">"#;
    assert_eq!(urls(html), vec!["https://x.test/gallery/a.png"]);
}

#[test]
fn test_one_item_per_img_in_document_order() {
    let html = r#"<div><img src="b.png"></div><p><img src="a.png"><img src="b.png"></p>"#;
    assert_eq!(
        urls(html),
        vec![
            "https://x.test/gallery/b.png",
            "https://x.test/gallery/a.png",
            "https://x.test/gallery/b.png",
        ]
    );
}

#[test]
fn test_page_without_images() {
    assert!(urls("<html><body><p>nothing here</p></body></html>").is_empty());
    assert!(urls("").is_empty());
}

#[test]
fn test_malformed_markup_still_yields_images() {
    let html = r#"<html><body><div><img src="ok.png"<p>unclosed <img src=late.png></table>"#;
    let found = urls(html);
    assert!(found.contains(&"https://x.test/gallery/late.png".to_string()));
}
