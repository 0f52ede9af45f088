/// Management view configuration, passed in from the page script.
use serde::{Deserialize, Serialize};

/// Which live tabs are merged into the working set on load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LiveTabs {
    /// Every open tab in every window
    #[default]
    All,
    /// Only the active tab of the current window
    Active,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewConfig {
    /// Write the working set back to storage after closing tabs.
    pub persist_mutations: bool,
    pub live_tabs: LiveTabs,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            persist_mutations: true,
            live_tabs: LiveTabs::All,
        }
    }
}
