use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use theme_scout::{Scraper, ScraperConfig};

#[derive(Parser, Debug)]
#[command(name = "analyze-structure")]
#[command(about = "Dumps the listing page's structure to help pick theme selectors")]
#[command(version)]
struct Args {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// WebDriver server URL (overrides config and WEBDRIVER_URL)
    #[arg(long)]
    webdriver_url: Option<String>,

    /// Directory for the structure report and screenshot
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
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
    if let Some(url) = &args.webdriver_url {
        scraper = scraper.with_webdriver_url(url);
    }
    if let Some(dir) = args.output_dir {
        scraper = scraper.with_output_dir(dir);
    }

    println!("Note: requires a WebDriver server (e.g., ChromeDriver).");
    println!("Set WEBDRIVER_URL if not using {}", scraper.config().webdriver_url);

    match scraper.analyze_structure().await {
        Ok(report) => {
            let matched = report
                .selector_candidates
                .iter()
                .filter(|c| c.count > 0)
                .count();
            ::log::info!(
                "Done: {} of {} selector candidates matched",
                matched,
                report.selector_candidates.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            ::log::error!("Structure analysis failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
