use crate::parsers::html::{PageDocument, element_text};
use crate::results::{
    CardSample, ChildSnapshot, ClassCount, ElementSnapshot, PageInfo, SelectorCandidate,
    StructureReport,
};
use crate::utils::truncate_chars;
use chrono::Utc;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;

/// Queries tried against the listing page to find the theme cards
pub const SELECTOR_CANDIDATES: &[&str] = &[
    ".theme-card",
    ".theme",
    r#"[class*="theme"]"#,
    ".card",
    "article",
    ".grid > div",
    ".grid > a",
    r#"li a[href*="/themes/"]"#,
    r#"a[href*="/themes/"]"#,
    "[data-theme]",
];

/// Broader "looks like a card" query used for the element samples
pub const CARD_SELECTOR: &str = r#"[class*="theme"], [class*="card"], article"#;

pub const TOP_CLASS_LIMIT: usize = 20;
pub const CARD_SAMPLE_SIZE: usize = 5;

const SNAPSHOT_TEXT_CHARS: usize = 100;
const OUTER_HTML_CHARS: usize = 500;
const CARD_TEXT_CHARS: usize = 200;
const CHILD_TEXT_CHARS: usize = 50;

/// Occurrence counts of CSS class tokens, remembering first-seen order
#[derive(Debug, Default)]
pub struct ClassFrequency {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl ClassFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tallies every class token on every element of the document
    pub fn from_document(html: &Html) -> Self {
        let all = Selector::parse("*").unwrap();
        let mut frequency = Self::new();
        for element in html.select(&all) {
            let Some(attr) = element.value().attr("class") else {
                continue;
            };
            // Attribute order, each token once per element
            let mut seen: Vec<&str> = Vec::new();
            for class in attr.split_ascii_whitespace() {
                if !seen.contains(&class) {
                    seen.push(class);
                    frequency.record(class);
                }
            }
        }
        frequency
    }

    pub fn record(&mut self, class: &str) {
        match self.counts.get_mut(class) {
            Some(count) => *count += 1,
            None => {
                self.order.push(class.to_string());
                self.counts.insert(class.to_string(), 1);
            }
        }
    }

    pub fn count(&self, class: &str) -> usize {
        self.counts.get(class).copied().unwrap_or(0)
    }

    /// Number of distinct classes seen
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The `k` most frequent classes, descending; ties keep first-seen order
    pub fn top(&self, k: usize) -> Vec<ClassCount> {
        let mut ranked: Vec<ClassCount> = self
            .order
            .iter()
            .map(|class| ClassCount {
                class: class.clone(),
                count: self.counts[class],
            })
            .collect();

        // sort_by is stable, so equal counts stay in accumulation order
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(k);
        ranked
    }
}

/// Runs every analysis step over a rendered page
pub fn analyze(document: &PageDocument) -> StructureReport {
    let html = document.html();
    let frequency = ClassFrequency::from_document(html);
    if frequency.is_empty() {
        ::log::warn!("No CSS classes found on {}", document.url());
    } else {
        ::log::debug!("Found {} distinct classes", frequency.len());
    }

    StructureReport {
        page_info: page_info(document),
        selector_candidates: try_candidates(html, SELECTOR_CANDIDATES),
        top_classes: frequency.top(TOP_CLASS_LIMIT),
        sample_elements: sample_cards(html, CARD_SELECTOR, CARD_SAMPLE_SIZE),
        analyzed_at: Utc::now(),
    }
}

pub fn page_info(document: &PageDocument) -> PageInfo {
    let all = Selector::parse("*").unwrap();
    let links = Selector::parse("a[href]").unwrap();
    let html = document.html();

    PageInfo {
        url: document.url().to_string(),
        title: document.title(),
        total_elements: html.select(&all).count(),
        total_links: html.select(&links).count(),
    }
}

/// Counts matches for each selector and snapshots the first match
pub fn try_candidates(html: &Html, selectors: &[&str]) -> Vec<SelectorCandidate> {
    let mut candidates = Vec::with_capacity(selectors.len());

    for raw in selectors {
        let selector = match Selector::parse(raw) {
            Ok(selector) => selector,
            Err(e) => {
                ::log::warn!("Skipping invalid selector {}: {}", raw, e);
                continue;
            }
        };

        let mut matches = html.select(&selector);
        let sample = matches.next().map(snapshot);
        let count = if sample.is_some() { 1 + matches.count() } else { 0 };
        ::log::debug!("Selector {} matched {} elements", raw, count);

        candidates.push(SelectorCandidate {
            selector: raw.to_string(),
            count,
            sample,
        });
    }

    candidates
}

/// Captures up to `size` card-like elements with their immediate children
pub fn sample_cards(html: &Html, selector: &str, size: usize) -> Vec<CardSample> {
    let selector = match Selector::parse(selector) {
        Ok(selector) => selector,
        Err(e) => {
            ::log::warn!("Invalid card selector {}: {}", selector, e);
            return Vec::new();
        }
    };

    html.select(&selector)
        .take(size)
        .map(|card| CardSample {
            tag: card.value().name().to_string(),
            class: card.value().attr("class").map(str::to_string),
            outer_html: truncate_chars(&card.html(), OUTER_HTML_CHARS),
            text: truncate_chars(&element_text(card), CARD_TEXT_CHARS),
            children: card
                .children()
                .filter_map(ElementRef::wrap)
                .map(|child| ChildSnapshot {
                    tag: child.value().name().to_string(),
                    class: child.value().attr("class").map(str::to_string),
                    text: truncate_chars(&element_text(child), CHILD_TEXT_CHARS),
                })
                .collect(),
        })
        .collect()
}

fn snapshot(element: ElementRef<'_>) -> ElementSnapshot {
    ElementSnapshot {
        tag: element.value().name().to_string(),
        class: element.value().attr("class").map(str::to_string),
        id: element.value().id().map(str::to_string),
        text: truncate_chars(&element_text(element), SNAPSHOT_TEXT_CHARS),
    }
}
