/// Host extraction and per-host counting for Tab Stock
use std::collections::BTreeMap;

use url::Url;

use crate::tab_record::TabRecord;

/// Extract the host (the grouping key) from a URL.
///
/// The host is the hostname plus a `:port` suffix when the URL names a port
/// other than the scheme default, so `https://localhost:3000/app` groups under
/// `localhost:3000`. URLs without a host (`about:blank`, `file:///...`) and
/// strings that do not parse as URLs yield an empty host.
///
/// Examples:
/// - https://www.google.com/search → www.google.com
/// - http://127.0.0.1:8080 → 127.0.0.1:8080
/// - chrome://extensions/ → extensions
pub fn extract_host(url: &str) -> String {
    let Ok(parsed) = Url::parse(url.trim()) else {
        return String::new();
    };

    match (parsed.host_str(), parsed.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    }
}

/// Count records per host, ordered by host ascending.
///
/// Uses the annotated `host` when grouping has already run, otherwise derives
/// it from the URL.
pub fn host_counts(tabs: &[TabRecord]) -> Vec<(String, usize)> {
    tabs.iter()
        .map(|tab| {
            if tab.host.is_empty() {
                extract_host(&tab.url)
            } else {
                tab.host.clone()
            }
        })
        .fold(BTreeMap::new(), |mut counts, host| {
            *counts.entry(host).or_insert(0) += 1;
            counts
        })
        .into_iter()
        .collect()
}
