/// Data structures for Tab Stock
use serde::{Deserialize, Serialize};

/// A tab as held in the working set and in the stored snapshot.
///
/// Only `id`, `url` and `title` travel to storage. `host` is filled in by
/// grouping and is never persisted. Decoding from a full browser tab object
/// ignores everything else the browser reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabRecord {
    pub id: i32,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(skip)]
    pub host: String,
}

impl TabRecord {
    pub fn new(id: i32, url: impl Into<String>, title: impl Into<String>) -> TabRecord {
        TabRecord {
            id,
            url: url.into(),
            title: title.into(),
            host: String::new(),
        }
    }
}
