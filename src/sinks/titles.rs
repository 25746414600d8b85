use crate::error::ScrapeError;
use std::path::{Path, PathBuf};

/// Writes titles to a text file, one per line
#[derive(Debug, Clone)]
pub struct TitleSink {
    path: PathBuf,
}

impl TitleSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the file contents with the given titles.
    ///
    /// Each title is followed by `\n`. The parent directory is created if
    /// it does not exist yet.
    pub async fn write<S: AsRef<str>>(&self, titles: &[S]) -> Result<&Path, ScrapeError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ScrapeError::io(parent, e))?;
        }

        let mut contents = String::new();
        for title in titles {
            contents.push_str(title.as_ref());
            contents.push('\n');
        }
        tokio::fs::write(&self.path, contents)
            .await
            .map_err(|e| ScrapeError::io(&self.path, e))?;

        Ok(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_write_then_truncate() {
        let dir = tempfile::tempdir().unwrap();
        let sink = TitleSink::new(dir.path().join("data").join("weibo_hot_titles.txt"));

        sink.write(&["A", "B"]).await.unwrap();
        assert_eq!(fs::read_to_string(sink.path()).unwrap(), "A\nB\n");

        sink.write(&["C"]).await.unwrap();
        assert_eq!(fs::read_to_string(sink.path()).unwrap(), "C\n");
    }

    #[tokio::test]
    async fn test_utf8_titles() {
        let dir = tempfile::tempdir().unwrap();
        let sink = TitleSink::new(dir.path().join("titles.txt"));

        sink.write(&["热搜 第一", "日本語"]).await.unwrap();
        assert_eq!(
            fs::read_to_string(sink.path()).unwrap(),
            "热搜 第一\n日本語\n"
        );
    }

    #[tokio::test]
    async fn test_empty_titles_truncate_to_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = TitleSink::new(dir.path().join("titles.txt"));

        sink.write(&["A"]).await.unwrap();
        sink.write::<&str>(&[]).await.unwrap();
        assert_eq!(fs::read_to_string(sink.path()).unwrap(), "");
    }

    #[tokio::test]
    async fn test_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();

        let sink = TitleSink::new(blocker.join("titles.txt"));
        assert!(matches!(
            sink.write(&["A"]).await,
            Err(ScrapeError::Io { .. })
        ));
    }
}
