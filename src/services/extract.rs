//! HTML/Svelte markup → text and link extraction.

use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeSet;

/// Elements whose text content is never part of the readable page.
const SKIPPED_ELEMENTS: &[&str] = &["script", "style"];

/// Prefix shared by every documentation link.
const DOCS_LINK_PREFIX: &str = "/docs";

/// Collapses every whitespace run to a single space and trims both ends.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extracts readable text from markup: script/style content is dropped,
/// remaining text nodes are joined and whitespace-collapsed.
#[must_use]
pub fn extract_text(markup: &str) -> String {
    let document = Html::parse_document(markup);
    element_text(document.root_element())
}

/// Text of the first `main` element, falling back to `body` (then the whole
/// document). Used for rendered website pages.
#[must_use]
pub fn extract_main_text(html: &str) -> String {
    let document = Html::parse_document(html);
    for css in ["main", "body"] {
        let Ok(selector) = Selector::parse(css) else {
            continue;
        };
        if let Some(element) = document.select(&selector).next() {
            let text = element_text(element);
            if !text.is_empty() {
                return text;
            }
        }
    }
    element_text(document.root_element())
}

fn element_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    for node in element.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| SKIPPED_ELEMENTS.contains(&el.name()))
        });
        if !hidden {
            raw.push_str(text);
            raw.push(' ');
        }
    }
    collapse_whitespace(&raw)
}

/// Collects documentation links from a rendered page's "Related" section.
///
/// The section is an `h1` containing "Related" followed by sibling `h2`
/// headings (`COMPONENTS`, `EXAMPLES`, ...) and `p` elements holding links.
/// Only links under the `COMPONENTS` and `EXAMPLES` headings are kept. When
/// the page has no such section, every `/docs` link inside `nav` is used.
///
/// Returned routes are sorted, de-duplicated and have no trailing slash.
#[must_use]
pub fn extract_nav_routes(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut routes = BTreeSet::new();

    let (Ok(h1), Ok(link)) = (
        Selector::parse("h1"),
        Selector::parse(&format!("a[href^=\"{DOCS_LINK_PREFIX}\"]")),
    ) else {
        return Vec::new();
    };

    let related = document
        .select(&h1)
        .find(|heading| heading.text().collect::<String>().contains("Related"));

    if let Some(related) = related {
        let mut in_section = false;
        for sibling in related.next_siblings().filter_map(ElementRef::wrap) {
            match sibling.value().name() {
                "h2" => {
                    let title = sibling.text().collect::<String>();
                    in_section = matches!(title.trim(), "COMPONENTS" | "EXAMPLES");
                }
                "p" if in_section => {
                    for anchor in sibling.select(&link) {
                        if let Some(href) = anchor.value().attr("href") {
                            routes.insert(normalize_href(href));
                        }
                    }
                }
                _ => {}
            }
        }
    }

    if routes.is_empty() {
        if let Ok(nav_link) = Selector::parse(&format!("nav a[href^=\"{DOCS_LINK_PREFIX}\"]")) {
            for anchor in document.select(&nav_link) {
                if let Some(href) = anchor.value().attr("href") {
                    routes.insert(normalize_href(href));
                }
            }
        }
    }

    routes.into_iter().collect()
}

fn normalize_href(href: &str) -> String {
    let href = href.split(['#', '?']).next().unwrap_or(href);
    href.trim_end_matches('/').to_string()
}
