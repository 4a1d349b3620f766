//! The static dynasty → list-page mapping.
//!
//! Kept as plain data passed into the batch runner rather than ambient
//! global state, so tests and the CLI can substitute their own sets.

use serde::{Deserialize, Serialize};

/// A dynasty and the wiki list page enumerating its rulers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DynastyEntry {
    pub label: String,
    pub list_url: String,
}

impl DynastyEntry {
    pub fn new(label: impl Into<String>, list_url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            list_url: list_url.into(),
        }
    }
}

/// The built-in crawl set, in historical order.
pub fn default_dynasties() -> Vec<DynastyEntry> {
    [
        ("夏朝", "https://zh.wikipedia.org/wiki/夏朝君主列表"),
        ("商朝", "https://zh.wikipedia.org/wiki/商朝君主列表"),
        ("周朝", "https://zh.wikipedia.org/wiki/周朝君主列表"),
        ("秦朝", "https://zh.wikipedia.org/wiki/秦朝君主列表"),
        ("汉朝", "https://zh.wikipedia.org/wiki/汉朝皇帝列表"),
        ("三国", "https://zh.wikipedia.org/wiki/三国皇帝列表"),
        ("晋朝", "https://zh.wikipedia.org/wiki/晋朝皇帝列表"),
        ("南北朝", "https://zh.wikipedia.org/wiki/南北朝皇帝列表"),
        ("隋朝", "https://zh.wikipedia.org/wiki/隋朝皇帝列表"),
        ("唐朝", "https://zh.wikipedia.org/wiki/唐朝皇帝列表"),
        ("五代十国", "https://zh.wikipedia.org/wiki/五代十国君主列表"),
        ("宋朝", "https://zh.wikipedia.org/wiki/宋朝皇帝列表"),
        ("辽朝", "https://zh.wikipedia.org/wiki/辽朝皇帝列表"),
        ("金朝", "https://zh.wikipedia.org/wiki/金朝皇帝列表"),
        ("元朝", "https://zh.wikipedia.org/wiki/元朝皇帝列表"),
        ("明朝", "https://zh.wikipedia.org/wiki/明朝皇帝列表"),
        ("清朝", "https://zh.wikipedia.org/wiki/清朝皇帝列表"),
    ]
    .into_iter()
    .map(|(label, url)| DynastyEntry::new(label, url))
    .collect()
}

/// Keep only entries whose label is in `wanted`; all entries when `wanted`
/// is empty. Order is preserved.
pub fn filter_dynasties(entries: Vec<DynastyEntry>, wanted: &[String]) -> Vec<DynastyEntry> {
    if wanted.is_empty() {
        return entries;
    }

    entries
        .into_iter()
        .filter(|entry| wanted.iter().any(|w| w == &entry.label))
        .collect()
}
