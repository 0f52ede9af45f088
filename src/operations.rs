/// Tab operations: grouping, filtering, merging by id.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::host::extract_host;
use crate::tab_record::TabRecord;

/// Group tabs by host and sort them into display order.
///
/// Hosts ascend lexicographically; within a host, titles ascend by locale
/// collation. The sort is stable, so running it over its own output is a
/// no-op. Every returned record carries its `host`.
pub fn group_by_host(tabs: &[TabRecord]) -> Vec<TabRecord> {
    let mut grouped: Vec<TabRecord> = tabs
        .iter()
        .map(|tab| TabRecord {
            host: extract_host(&tab.url),
            ..tab.clone()
        })
        .collect();

    grouped.sort_by(|a, b| {
        a.host
            .cmp(&b.host)
            .then_with(|| compare_titles(&a.title, &b.title))
    });

    grouped
}

/// Keep tabs whose title or url contains `query`, ignoring case.
///
/// Input order is preserved and an empty query keeps everything.
pub fn filter_tabs(tabs: &[TabRecord], query: &str) -> Vec<TabRecord> {
    let query = query.to_lowercase();
    if query.is_empty() {
        return tabs.to_vec();
    }

    tabs.iter()
        .filter(|tab| matches_query(tab, &query))
        .cloned()
        .collect()
}

/// Whether the title or url contains an already lowercased `query`.
pub fn matches_query(tab: &TabRecord, query: &str) -> bool {
    query.is_empty()
        || tab.title.to_lowercase().contains(query)
        || tab.url.to_lowercase().contains(query)
}

/// Merge `incoming` into `existing` by id (keep first occurrence).
///
/// Records already present keep their fields; new ids are appended in
/// `incoming` order. Duplicate ids inside `existing` are collapsed too.
pub fn merge_by_id(existing: &[TabRecord], incoming: &[TabRecord]) -> Vec<TabRecord> {
    let mut seen_ids = HashSet::new();
    let mut merged = Vec::with_capacity(existing.len() + incoming.len());

    for tab in existing.iter().chain(incoming) {
        if seen_ids.insert(tab.id) {
            merged.push(tab.clone());
        }
    }

    merged
}

/// Locale-aware title comparison.
#[cfg(target_arch = "wasm32")]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    let order = js_sys::JsString::from(a).locale_compare(
        b,
        &js_sys::Array::new(),
        &js_sys::Object::new(),
    );
    order.cmp(&0).then_with(|| a.cmp(b))
}

/// Locale-aware title comparison.
///
/// Outside the browser there is no collator; case-folded order with a raw
/// tie-break matches it for the titles we see in practice.
#[cfg(not(target_arch = "wasm32"))]
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
