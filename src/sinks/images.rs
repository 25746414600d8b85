use crate::error::ScrapeError;
use crate::results::SavedImage;
use crate::utils::filename_from_url;
use std::path::{Path, PathBuf};
use url::Url;

/// Writes downloaded images into a directory, one file per URL
#[derive(Debug, Clone)]
pub struct ImageSink {
    save_dir: PathBuf,
}

impl ImageSink {
    pub fn new(save_dir: impl Into<PathBuf>) -> Self {
        Self {
            save_dir: save_dir.into(),
        }
    }

    pub fn save_dir(&self) -> &Path {
        &self.save_dir
    }

    /// Local path an image URL is saved under
    pub fn target_for(&self, url: &Url) -> Result<PathBuf, ScrapeError> {
        Ok(self.save_dir.join(filename_from_url(url)?))
    }

    /// Write the image bytes, creating the directory if needed.
    ///
    /// An existing file with the same name is overwritten.
    pub async fn save(&self, url: &Url, bytes: &[u8]) -> Result<SavedImage, ScrapeError> {
        let path = self.target_for(url)?;

        tokio::fs::create_dir_all(&self.save_dir)
            .await
            .map_err(|e| ScrapeError::io(&self.save_dir, e))?;
        tokio::fs::write(&path, bytes)
            .await
            .map_err(|e| ScrapeError::io(&path, e))?;

        Ok(SavedImage {
            url: url.clone(),
            path,
            bytes: bytes.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sink = ImageSink::new(dir.path().join("nested").join("images"));
        let url = Url::parse("https://x.test/pics/img.png?ver=2").unwrap();

        let saved = sink.save(&url, b"\x89PNG").await.unwrap();
        assert_eq!(saved.path, sink.save_dir().join("img.png"));
        assert_eq!(saved.bytes, 4);
        assert_eq!(std::fs::read(&saved.path).unwrap(), b"\x89PNG");
    }

    #[tokio::test]
    async fn test_same_name_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let sink = ImageSink::new(dir.path());

        let first = Url::parse("https://a.test/logo.png").unwrap();
        let second = Url::parse("https://b.test/other/logo.png").unwrap();
        sink.save(&first, b"first").await.unwrap();
        let saved = sink.save(&second, b"second").await.unwrap();

        assert_eq!(std::fs::read(saved.path).unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_url_without_file_name_fails() {
        let dir = tempfile::tempdir().unwrap();
        let sink = ImageSink::new(dir.path());
        let url = Url::parse("https://x.test/pics/").unwrap();

        assert!(matches!(
            sink.save(&url, b"data").await,
            Err(ScrapeError::Io { .. })
        ));
    }
}
