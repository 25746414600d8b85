use crate::error::ScrapeError;
use std::borrow::Cow;
use std::io;
use url::Url;

/// Derive a local file name from the last path segment of a URL.
///
/// The query string and fragment are ignored, so
/// `https://x.test/pics/img.png?ver=2` maps to `img.png`. The segment is
/// percent-decoded; one that is not valid UTF-8 once decoded is kept encoded.
pub fn filename_from_url(url: &Url) -> Result<String, ScrapeError> {
    let segment = url
        .path_segments()
        .and_then(|mut segments| segments.next_back())
        .unwrap_or_default();
    let name = urlencoding::decode(segment).unwrap_or(Cow::Borrowed(segment));

    if name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0'])
    {
        return Err(ScrapeError::io(
            url.path(),
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("no file name in {}", url),
            ),
        ));
    }

    Ok(name.into_owned())
}
