//! List-page ruler enumeration and detail-page portrait lookup.
//!
//! Parsing is done in synchronous helpers that return owned data, so no
//! parse state lives across an await point in the callers.

use crate::error::{Result, ScrapeError};
use scraper::{ElementRef, Html, Selector};
use serde::{Deserialize, Serialize};
use url::Url;

/// Row labels that show up inside ruler tables but are not rulers
/// (footnote, reference and source markers on some list pages).
const EXCLUDED_LABELS: &[&str] = &["注释", "参考", "来源"];

/// One candidate ruler row: display name and resolved detail-page URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulerCandidate {
    pub name: String,
    pub detail_url: String,
    pub dynasty: String,
}

/// Enumerate ruler candidates from every qualifying table on a list page.
///
/// Tables are traversed in document order (some dynasties split their eras
/// across several tables) and candidates concatenated. Returns a parse
/// error when the page has no qualifying table at all.
pub fn enumerate_rulers(html: &str, base_url: &str, dynasty: &str) -> Result<Vec<RulerCandidate>> {
    let document = Html::parse_document(html);
    let table_selector = Selector::parse("table.wikitable").unwrap();
    let row_selector = Selector::parse("tr").unwrap();
    let cell_selector = Selector::parse("td").unwrap();

    let tables: Vec<_> = document.select(&table_selector).collect();
    if tables.is_empty() {
        return Err(ScrapeError::ParseError(format!(
            "no ruler table found for {}",
            dynasty
        )));
    }

    let mut candidates = Vec::new();
    for table in tables {
        // First row is the header.
        for row in table.select(&row_selector).skip(1) {
            let cells: Vec<_> = row.select(&cell_selector).collect();
            if cells.len() < 2 {
                continue;
            }

            // The name link is usually in the first cell; some layouts put
            // it in the second.
            let link = first_link(&cells[0]).or_else(|| first_link(&cells[1]));
            let Some(link) = link else { continue };
            let Some(href) = link.value().attr("href") else {
                continue;
            };

            let name = link.text().collect::<String>().trim().to_string();
            if name.is_empty() || EXCLUDED_LABELS.contains(&name.as_str()) {
                continue;
            }

            let Some(detail_url) = resolve_href(base_url, href) else {
                continue;
            };

            candidates.push(RulerCandidate {
                name,
                detail_url,
                dynasty: dynasty.to_string(),
            });
        }
    }

    Ok(candidates)
}

/// The `src` of the first image inside the detail page's infobox, if any.
pub fn find_portrait(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(".infobox img").unwrap();

    document
        .select(&selector)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(|src| src.to_string())
}

fn first_link<'a>(cell: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    let link_selector = Selector::parse("a").unwrap();
    cell.select(&link_selector).next()
}

fn resolve_href(base: &str, href: &str) -> Option<String> {
    if href.is_empty() || href.starts_with('#') || href.starts_with("javascript:") {
        return None;
    }

    let base_url = Url::parse(base).ok()?;
    let mut resolved = base_url.join(href).ok()?;
    resolved.set_fragment(None);

    Some(resolved.to_string())
}
