use crate::error::ConfigError;
use crate::parsers::titles::TitleSelectors;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Configuration for the image scraper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageScraperConfig {
    /// Page whose images should be downloaded
    #[serde(default = "default_target_url")]
    pub target_url: String,

    /// Directory the images are written to
    #[serde(default = "default_save_dir")]
    pub save_dir: PathBuf,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Maximum number of image downloads in flight at once
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
}

/// Configuration for the hot-title scraper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleScraperConfig {
    /// Ranking page to scrape
    #[serde(default = "default_titles_url")]
    pub url: String,

    /// Directory holding the output file
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Name of the output file inside `output_dir`
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,

    /// Headers sent with the page request
    #[serde(default = "default_title_headers")]
    pub headers: BTreeMap<String, String>,

    /// Selectors locating the ranked titles
    #[serde(default)]
    pub selectors: TitleSelectors,
}

/// Enum containing both scraper configuration types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScraperConfigType {
    /// Image scraper configuration
    Images(ImageScraperConfig),

    /// Title scraper configuration
    Titles(TitleScraperConfig),
}

impl ScraperConfigType {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        load_json(path)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Read and deserialize a JSON configuration file
pub fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, ConfigError> {
    let path = path.as_ref();
    let mut contents = String::new();
    File::open(path)
        .and_then(|mut file| file.read_to_string(&mut contents))
        .map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(serde_json::from_str(&contents)?)
}

/// Default value for target_url
fn default_target_url() -> String {
    "https://bing.ee123.net/".to_string()
}

/// Default value for save_dir
fn default_save_dir() -> PathBuf {
    PathBuf::from("downloaded_images")
}

fn default_timeout_seconds() -> u64 {
    10
}

/// Default value for max_concurrency (sequential downloads)
fn default_max_concurrency() -> usize {
    1
}

fn default_titles_url() -> String {
    "https://s.weibo.com/top/summary".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_output_file() -> String {
    "weibo_hot_titles.txt".to_string()
}

/// Browser-like headers expected by the ranking page
fn default_title_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            "User-Agent".to_string(),
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0 Safari/537.36".to_string(),
        ),
        ("Connection".to_string(), "keep-alive".to_string()),
    ])
}

impl ImageScraperConfig {
    /// Create a new configuration with default values for the given page
    pub fn new(target_url: &str) -> Self {
        Self {
            target_url: target_url.to_string(),
            save_dir: default_save_dir(),
            timeout_seconds: default_timeout_seconds(),
            max_concurrency: default_max_concurrency(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Parse the target URL
    pub fn target(&self) -> Result<Url, ConfigError> {
        parse_url(&self.target_url)
    }
}

impl Default for ImageScraperConfig {
    fn default() -> Self {
        Self::new(&default_target_url())
    }
}

impl TitleScraperConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Full path of the output file
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }

    /// Parse the page URL
    pub fn target(&self) -> Result<Url, ConfigError> {
        parse_url(&self.url)
    }
}

impl Default for TitleScraperConfig {
    fn default() -> Self {
        Self {
            url: default_titles_url(),
            output_dir: default_output_dir(),
            output_file: default_output_file(),
            timeout_seconds: default_timeout_seconds(),
            headers: default_title_headers(),
            selectors: TitleSelectors::default(),
        }
    }
}

fn parse_url(url: &str) -> Result<Url, ConfigError> {
    Url::parse(url).map_err(|source| ConfigError::InvalidUrl {
        url: url.to_string(),
        source,
    })
}
