use crate::filter::LinkFilter;
use crate::parsers::html::PageDocument;
use crate::results::ThemeLink;

/// Collects the first `limit` theme detail links on the listing page, in document order
///
/// Links are not deduplicated: a card that links to its theme twice yields two entries.
pub fn discover_theme_links(
    listing: &PageDocument,
    filter: &LinkFilter,
    title_prefix: &str,
    limit: usize,
) -> Vec<ThemeLink> {
    let links: Vec<ThemeLink> = listing
        .anchors()
        .into_iter()
        .filter(|anchor| filter.accepts(&anchor.href))
        .take(limit)
        .map(|anchor| ThemeLink {
            name: filter.theme_name(&anchor.href),
            title: derive_title(&anchor.text, title_prefix),
            url: anchor.href.to_string(),
        })
        .collect();

    ::log::debug!(
        "Discovered {} theme links on {} (limit {})",
        links.len(),
        listing.url(),
        limit
    );
    links
}

/// Strips the prefix phrase from a link's visible text
pub fn derive_title(text: &str, prefix: &str) -> String {
    let text = text.trim();
    text.strip_prefix(prefix).unwrap_or(text).trim().to_string()
}
