/// The browser host seen from Rust: tabs, windows and local storage.
///
/// Everything the extension asks of the browser goes through [`Browser`], so
/// the capturer and the view controller can run against [`ChromeBrowser`] in
/// the extension and against a fake in unit tests.
use async_trait::async_trait;
use serde::Serialize;

use crate::config::LiveTabs;
use crate::error::HostError;
use crate::storage::Snapshot;
use crate::tab_record::TabRecord;

mod chrome;
#[cfg(test)]
pub mod fake;

pub use chrome::ChromeBrowser;

/// Filter for a tab query, serialized as a `chrome.tabs.query` argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TabQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(rename = "currentWindow", skip_serializing_if = "Option::is_none")]
    pub current_window: Option<bool>,
}

impl TabQuery {
    /// Every open tab.
    pub fn all() -> Self {
        TabQuery::default()
    }

    pub fn active_in_current_window() -> Self {
        TabQuery {
            active: Some(true),
            current_window: Some(true),
        }
    }

    pub fn inactive_in_current_window() -> Self {
        TabQuery {
            active: Some(false),
            current_window: Some(true),
        }
    }

    pub fn for_live_tabs(live_tabs: LiveTabs) -> Self {
        match live_tabs {
            LiveTabs::All => TabQuery::all(),
            LiveTabs::Active => TabQuery::active_in_current_window(),
        }
    }
}

#[async_trait(?Send)]
pub trait Browser {
    async fn query_tabs(&self, query: TabQuery) -> Result<Vec<TabRecord>, HostError>;

    async fn remove_tabs(&self, tab_ids: &[i32]) -> Result<(), HostError>;

    /// Open one new window holding `urls`. Returns the new window's id.
    async fn create_window(&self, urls: &[String]) -> Result<Option<i32>, HostError>;

    async fn create_tab(&self, url: &str) -> Result<(), HostError>;

    /// Read the stored snapshot. A missing key reads as an empty snapshot.
    async fn load_snapshot(&self) -> Result<Snapshot, HostError>;

    async fn save_snapshot(&self, snapshot: &Snapshot) -> Result<(), HostError>;

    /// Erase everything in extension local storage.
    async fn clear_storage(&self) -> Result<(), HostError>;
}
