/// Snapshot serialization for chrome.storage.local

use serde::{Deserialize, Serialize};

use crate::tab_record::TabRecord;

/// Storage key holding the tab snapshot.
pub const STOCK_KEY: &str = "stock";

/// The persisted snapshot: a flat ordered array of `{id, url, title}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    pub tabs: Vec<TabRecord>,
}

impl Snapshot {
    pub fn new(tabs: Vec<TabRecord>) -> Self {
        Snapshot { tabs }
    }

    /// Project live browser tabs to the records we keep.
    pub fn capture(live: &[TabRecord]) -> Self {
        Snapshot {
            tabs: live
                .iter()
                .map(|tab| TabRecord::new(tab.id, tab.url.clone(), tab.title.clone()))
                .collect(),
        }
    }

    pub fn into_tabs(self) -> Vec<TabRecord> {
        self.tabs
    }
}
