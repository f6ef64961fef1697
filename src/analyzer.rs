//! Structure analyzer pipeline: one listing page load, a structure report and
//! a full-page capture for working out which selectors identify theme cards.

use crate::config::ScraperConfig;
use crate::crawlers::PageSource;
use crate::error::Result;
use crate::output::{self, SCREENSHOT_FILE, STRUCTURE_FILE};
use crate::parsers::PageDocument;
use crate::parsers::structure;
use crate::results::StructureReport;

/// Runs the analyzer against `source`, writing the report and screenshot
///
/// The source is closed exactly once whether or not the run succeeds.
pub async fn run_analysis<S: PageSource>(
    mut source: S,
    config: &ScraperConfig,
) -> Result<StructureReport> {
    let outcome = analyze_with(&mut source, config).await;

    if let Err(e) = source.close().await {
        ::log::warn!("Failed to close browser session: {}", e);
    }

    outcome
}

async fn analyze_with<S: PageSource>(
    source: &mut S,
    config: &ScraperConfig,
) -> Result<StructureReport> {
    ::log::info!("Loading {}", config.listing_url);
    let html = source.open(&config.listing_url).await?;
    let report = {
        let document = PageDocument::parse(&html, &config.listing_url)?;
        structure::analyze(&document)
    };

    for candidate in report.selector_candidates.iter().filter(|c| c.count > 0) {
        ::log::info!("  {} -> {} elements", candidate.selector, candidate.count);
    }
    ::log::info!(
        "Tallied {} top classes, sampled {} card-like elements",
        report.top_classes.len(),
        report.sample_elements.len()
    );

    let png = source.screenshot().await?;

    let report_path = output::write_json(&config.output_dir, STRUCTURE_FILE, &report)?;
    let screenshot_path = output::write_bytes(&config.output_dir, SCREENSHOT_FILE, &png)?;
    ::log::info!(
        "Wrote {} and {}",
        report_path.display(),
        screenshot_path.display()
    );

    Ok(report)
}
