use clap::Parser;
use page_harvest::{
    ImageScraper, ImageScraperConfig, ScraperConfigType, TitleScraper, TitleScraperConfig,
};
use std::process::ExitCode;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging, defaulting to info level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match args.command.into_config() {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match config {
        ScraperConfigType::Images(config) => run_images(config).await,
        ScraperConfigType::Titles(config) => run_titles(config).await,
    }
}

async fn run_images(config: ImageScraperConfig) -> ExitCode {
    let target = match config.target() {
        Ok(url) => url,
        Err(e) => {
            ::log::error!("Invalid target: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let scraper = match ImageScraper::new(&config) {
        Ok(scraper) => scraper,
        Err(e) => {
            ::log::error!("Failed to start image scraper: {}", e);
            return ExitCode::FAILURE;
        }
    };

    ::log::info!("Start scraping images, target URL: {}", target);
    let start_time = std::time::Instant::now();

    match scraper.fetch_images(&target).await {
        Ok(report) => {
            ::log::info!(
                "Image scraping complete - saved {} of {} images to {} in {:.2} seconds",
                report.saved.len(),
                report.attempted(),
                scraper.sink().save_dir().display(),
                start_time.elapsed().as_secs_f64()
            );
        }
        Err(e) => {
            ::log::error!("Error while scraping {}: {:?}", target, e);
        }
    }

    ExitCode::SUCCESS
}

async fn run_titles(config: TitleScraperConfig) -> ExitCode {
    let scraper = match TitleScraper::new(config) {
        Ok(scraper) => scraper,
        Err(e) => {
            ::log::error!("Failed to start title scraper: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let titles = scraper.fetch_hot_titles().await;
    for (rank, title) in titles.iter().enumerate() {
        println!("{:>2}. {}", rank + 1, title);
    }

    if titles.is_empty() {
        ::log::warn!("No titles extracted, nothing written");
    } else {
        scraper.save_to_file(&titles).await;
    }

    ExitCode::SUCCESS
}
