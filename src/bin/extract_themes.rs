use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use theme_scout::{Scraper, ScraperConfig};

#[derive(Parser, Debug)]
#[command(name = "extract-themes")]
#[command(about = "Visits theme detail pages and extracts GitHub URLs and metadata")]
#[command(version)]
struct Args {
    /// Number of detail pages to visit (defaults to the configured limit, 10)
    limit: Option<usize>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// WebDriver server URL (overrides config and WEBDRIVER_URL)
    #[arg(long)]
    webdriver_url: Option<String>,

    /// Directory for themes-with-github.json
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging, showing progress lines unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match ScraperConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => ScraperConfig::default(),
    }
    .apply_env();

    let mut scraper = Scraper::new(config);
    if let Some(limit) = args.limit {
        scraper = scraper.with_limit(limit);
    }
    if let Some(url) = &args.webdriver_url {
        scraper = scraper.with_webdriver_url(url);
    }
    if let Some(dir) = args.output_dir {
        scraper = scraper.with_output_dir(dir);
    }

    ::log::info!(
        "Extracting up to {} themes from {}",
        scraper.limit(),
        scraper.config().listing_url
    );

    match scraper.extract_themes().await {
        Ok(summary) => {
            ::log::info!(
                "Done: {} themes, {} with GitHub URL",
                summary.total_count,
                summary.with_github_count()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            ::log::error!("Extraction failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
