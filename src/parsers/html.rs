use crate::error::{Result, ScrapeError};
use crate::parsers::text::{self, TextOptions};
use scraper::{ElementRef, Html, Node, Selector};
use url::Url;

/// Elements whose content is never rendered as text
const NON_RENDERED: &[&str] = &["head", "script", "style", "noscript", "template", "svg"];

/// Elements that start and end on their own line in rendered text
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "dd", "details", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "summary", "table",
    "tbody", "thead", "tfoot", "tr", "ul",
];

/// An anchor with its destination resolved against the page URL
#[derive(Debug, Clone)]
pub struct Anchor {
    pub href: Url,
    pub text: String,
}

/// A rendered page snapshot that extraction runs against
pub struct PageDocument {
    url: Url,
    html: Html,
}

impl PageDocument {
    /// Parse serialized DOM captured from the page at `url`
    pub fn parse(html: &str, url: &str) -> Result<Self> {
        let url = Url::parse(url).map_err(|source| ScrapeError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        Ok(Self {
            url,
            html: Html::parse_document(html),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Contents of `<title>`, if non-empty
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").unwrap();
        self.html
            .select(&selector)
            .next()
            .map(element_text)
            .filter(|t| !t.is_empty())
    }

    /// Approximation of the body's rendered text, one line per block
    pub fn visible_text(&self) -> String {
        let selector = Selector::parse("body").unwrap();
        let mut raw = String::new();
        if let Some(body) = self.html.select(&selector).next() {
            collect_visible_text(body, false, &mut raw);
        }
        text::normalize(&raw)
    }

    /// All anchors with an `href` that resolves to a valid URL, in document order
    pub fn anchors(&self) -> Vec<Anchor> {
        let selector = Selector::parse("a[href]").unwrap();
        self.html
            .select(&selector)
            .filter_map(|a| {
                let href = a.value().attr("href")?;
                let resolved = self.url.join(href.trim()).ok()?;
                Some(Anchor {
                    href: resolved,
                    text: element_text(a),
                })
            })
            .collect()
    }

    /// Text of the first `<p>` in document order, trimmed; an empty paragraph counts as none
    pub fn first_paragraph(&self) -> Option<String> {
        let selector = Selector::parse("p").unwrap();
        self.html
            .select(&selector)
            .next()
            .map(element_text)
            .filter(|t| !t.is_empty())
    }
}

/// Text content of an element with whitespace collapsed onto one line
pub fn element_text(element: ElementRef<'_>) -> String {
    let raw = element.text().collect::<String>();
    text::normalize_with_options(&raw, &TextOptions::single_line())
}

/// Walks an element's subtree appending rendered text, breaking lines at block boundaries
fn collect_visible_text(element: ElementRef<'_>, in_pre: bool, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(t) => {
                if in_pre {
                    out.push_str(&t.text);
                } else {
                    // Source newlines inside inline content render as spaces
                    out.extend(t.text.chars().map(|c| if c.is_whitespace() { ' ' } else { c }));
                }
            }
            Node::Element(e) => {
                let name = e.name();
                if NON_RENDERED.contains(&name) || e.attr("hidden").is_some() {
                    continue;
                }
                if name == "br" {
                    out.push('\n');
                    continue;
                }
                let Some(child_el) = ElementRef::wrap(child) else {
                    continue;
                };
                let is_block = BLOCK_ELEMENTS.contains(&name);
                let is_cell = matches!(name, "td" | "th");
                if is_block {
                    out.push('\n');
                } else if is_cell {
                    out.push(' ');
                }
                collect_visible_text(child_el, in_pre || name == "pre", out);
                if is_block {
                    out.push('\n');
                } else if is_cell {
                    out.push(' ');
                }
            }
            _ => {}
        }
    }
}
