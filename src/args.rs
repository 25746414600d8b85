use clap::{Parser, Subcommand};
use page_harvest::config::{self, ImageScraperConfig, ScraperConfigType, TitleScraperConfig};
use page_harvest::error::ConfigError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-harvest")]
#[command(about = "Download the images of a page or collect hot-list titles")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download every image referenced by a page
    Images(ImagesArgs),

    /// Save the ranked titles of the hot-search page
    Titles(TitlesArgs),

    /// Run whichever scraper a tagged JSON config file describes
    Run {
        /// Config file with a "type" of "Images" or "Titles"
        config: PathBuf,
    },
}

#[derive(clap::Args, Debug)]
pub struct ImagesArgs {
    /// Page whose images should be downloaded
    #[arg(long, env = "TARGET_URL")]
    pub url: Option<String>,

    /// Directory the images are written to
    #[arg(long)]
    pub save_dir: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Number of images downloaded at once
    #[arg(short, long)]
    pub concurrency: Option<usize>,

    /// JSON file with image scraper settings
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct TitlesArgs {
    /// Directory holding the output file
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// JSON file with title scraper settings
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Command {
    /// Resolve the arguments into a scraper configuration.
    ///
    /// Command-line values win over the config file, which wins over defaults.
    pub fn into_config(self) -> Result<ScraperConfigType, ConfigError> {
        match self {
            Command::Images(args) => {
                let mut cfg = match &args.config {
                    Some(path) => config::load_json::<ImageScraperConfig, _>(path)?,
                    None => ImageScraperConfig::default(),
                };
                if let Some(url) = args.url {
                    cfg.target_url = url;
                }
                if let Some(save_dir) = args.save_dir {
                    cfg.save_dir = save_dir;
                }
                if let Some(timeout) = args.timeout {
                    cfg.timeout_seconds = timeout;
                }
                if let Some(concurrency) = args.concurrency {
                    cfg.max_concurrency = concurrency;
                }
                Ok(ScraperConfigType::Images(cfg))
            }
            Command::Titles(args) => {
                let mut cfg = match &args.config {
                    Some(path) => config::load_json::<TitleScraperConfig, _>(path)?,
                    None => TitleScraperConfig::default(),
                };
                if let Some(output_dir) = args.output_dir {
                    cfg.output_dir = output_dir;
                }
                Ok(ScraperConfigType::Titles(cfg))
            }
            Command::Run { config } => ScraperConfigType::from_file(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_images_flags_override_defaults() {
        let args = Args::try_parse_from([
            "page-harvest",
            "images",
            "--url",
            "https://x.test/",
            "--save-dir",
            "pics",
            "-c",
            "3",
        ])
        .unwrap();

        match args.command.into_config().unwrap() {
            ScraperConfigType::Images(cfg) => {
                assert_eq!(cfg.target_url, "https://x.test/");
                assert_eq!(cfg.save_dir, PathBuf::from("pics"));
                assert_eq!(cfg.max_concurrency, 3);
                assert_eq!(cfg.timeout_seconds, 10);
            }
            other => panic!("unexpected config: {:?}", other),
        }
    }

    #[test]
    fn test_titles_defaults() {
        let args = Args::try_parse_from(["page-harvest", "titles"]).unwrap();
        match args.command.into_config().unwrap() {
            ScraperConfigType::Titles(cfg) => {
                assert_eq!(cfg.url, "https://s.weibo.com/top/summary");
                assert_eq!(cfg.output_dir, PathBuf::from("data"));
            }
            other => panic!("unexpected config: {:?}", other),
        }
    }
}
