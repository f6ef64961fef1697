//! Metadata extractor pipeline: listing page, link discovery, then one
//! throttled visit per detail page.

use crate::config::ScraperConfig;
use crate::crawlers::PageSource;
use crate::error::Result;
use crate::filter::LinkFilter;
use crate::output::{self, THEMES_FILE};
use crate::parsers::PageDocument;
use crate::parsers::links::discover_theme_links;
use crate::parsers::metadata;
use crate::results::{ExtractionSummary, ThemeLink, ThemeRecord};
use crate::utils::Throttle;

/// Runs the full extractor against `source` and writes `themes-with-github.json`
///
/// The source is closed exactly once whether or not the run succeeds.
pub async fn run_extraction<S: PageSource>(
    mut source: S,
    config: &ScraperConfig,
    limit: usize,
) -> Result<ExtractionSummary> {
    let outcome = extract_with(&mut source, config, limit).await;

    if let Err(e) = source.close().await {
        ::log::warn!("Failed to close browser session: {}", e);
    }

    outcome
}

async fn extract_with<S: PageSource>(
    source: &mut S,
    config: &ScraperConfig,
    limit: usize,
) -> Result<ExtractionSummary> {
    let filter = LinkFilter::new(&config.detail_path_prefix, &config.exclude_patterns)?;

    ::log::info!("Loading listing page {}", config.listing_url);
    let html = source.open(&config.listing_url).await?;
    let links = {
        let listing = PageDocument::parse(&html, &config.listing_url)?;
        discover_theme_links(&listing, &filter, &config.title_prefix, limit)
    };
    ::log::info!("Found {} theme links to visit", links.len());

    let records = extract_records(source, &links, Throttle::new(config.request_delay())).await;
    let summary = ExtractionSummary::new(records);

    let path = output::write_json(&config.output_dir, THEMES_FILE, &summary)?;
    ::log::info!(
        "Extracted {} themes ({} with GitHub URL) to {}",
        summary.total_count,
        summary.with_github_count(),
        path.display()
    );

    Ok(summary)
}

/// Visits each link in order, one at a time, pausing after every successful visit
///
/// A failed visit is logged and skipped; it contributes no record and does
/// not stop the batch.
pub async fn extract_records<S: PageSource>(
    source: &mut S,
    links: &[ThemeLink],
    throttle: Throttle,
) -> Vec<ThemeRecord> {
    let total = links.len();
    let mut records = Vec::with_capacity(total);

    for (i, link) in links.iter().enumerate() {
        ::log::info!("[{}/{}] Visiting {}", i + 1, total, link.name);

        match visit(source, link).await {
            Ok(record) => {
                match &record.github_url {
                    Some(github) => ::log::info!("  GitHub: {}", github),
                    None => ::log::info!("  No GitHub link found"),
                }
                records.push(record);
                throttle.pause().await;
            }
            Err(e) => {
                ::log::warn!("Failed to extract theme {}: {}", link.name, e);
            }
        }
    }

    records
}

async fn visit<S: PageSource>(source: &mut S, link: &ThemeLink) -> Result<ThemeRecord> {
    let html = source.open(&link.url).await?;
    let document = PageDocument::parse(&html, &link.url)?;
    Ok(metadata::extract(&document, link))
}
