/// Snapshot capture: stock every open tab, then show the tab list page.
use serde::Deserialize;

use crate::browser::{Browser, TabQuery};
use crate::error::HostError;
use crate::storage::Snapshot;

/// Extension page hosting the management view.
pub const TAB_LIST_PAGE: &str = "tab_list.html";

/// Messages other extension pages send to the background worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum RuntimeMessage {
    SaveAndShowTabs,
}

/// Overwrite the snapshot with every open tab and open the tab list page.
///
/// A failed storage write is logged and the page still opens; it will show
/// whatever the store held before plus the live tabs.
pub async fn save_and_show_tabs(browser: &dyn Browser) -> Result<usize, HostError> {
    let live = browser.query_tabs(TabQuery::all()).await?;
    let snapshot = Snapshot::capture(&live);
    let count = snapshot.tabs.len();

    match browser.save_snapshot(&snapshot).await {
        Ok(()) => log::info!("Stocked {} tabs", count),
        Err(e) => log::warn!("Could not store {} tabs: {}", count, e),
    }

    browser.create_tab(TAB_LIST_PAGE).await?;
    Ok(count)
}

pub async fn dispatch(browser: &dyn Browser, message: RuntimeMessage) -> Result<(), HostError> {
    log::debug!("Runtime message: {:?}", message);
    match message {
        RuntimeMessage::SaveAndShowTabs => save_and_show_tabs(browser).await.map(|_| ()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::fake::FakeBrowser;
    use crate::tab_record::TabRecord;
    use futures::executor::block_on;

    #[test]
    fn test_save_and_show_tabs_overwrites_snapshot() {
        let browser = FakeBrowser::new();
        browser.set_stored(vec![TabRecord::new(99, "https://old.example", "Old")]);
        browser.open(1, "https://a.com", "A");
        browser.open_with(2, "https://b.com", "B", true, false);

        let count = block_on(save_and_show_tabs(&browser)).unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            browser.stored(),
            Some(vec![
                TabRecord::new(1, "https://a.com", "A"),
                TabRecord::new(2, "https://b.com", "B"),
            ])
        );
        assert_eq!(browser.created_tabs(), vec![TAB_LIST_PAGE.to_string()]);
    }

    #[test]
    fn test_save_and_show_tabs_opens_page_when_save_fails() {
        let browser = FakeBrowser::new();
        browser.open(1, "https://a.com", "A");
        browser.fail("storage.local.set");

        let result = block_on(save_and_show_tabs(&browser));

        assert_eq!(result, Ok(1));
        assert_eq!(browser.stored(), None);
        assert_eq!(browser.created_tabs(), vec![TAB_LIST_PAGE.to_string()]);
    }

    #[test]
    fn test_save_and_show_tabs_query_failure() {
        let browser = FakeBrowser::new();
        browser.fail("tabs.query");

        let result = block_on(save_and_show_tabs(&browser));

        assert!(matches!(result, Err(HostError::Call { call: "tabs.query", .. })));
        assert!(browser.created_tabs().is_empty());
    }

    #[test]
    fn test_parse_runtime_message() {
        let message: RuntimeMessage =
            serde_json::from_str(r#"{"action": "saveAndShowTabs"}"#).unwrap();
        assert_eq!(message, RuntimeMessage::SaveAndShowTabs);

        assert!(serde_json::from_str::<RuntimeMessage>(r#"{"action": "somethingElse"}"#).is_err());
        assert!(serde_json::from_str::<RuntimeMessage>(r#"{"greeting": "hi"}"#).is_err());
    }

    #[test]
    fn test_dispatch_save_and_show() {
        let browser = FakeBrowser::new();
        browser.open(5, "https://docs.rs", "Docs");

        block_on(dispatch(&browser, RuntimeMessage::SaveAndShowTabs)).unwrap();

        assert_eq!(browser.stored().map(|t| t.len()), Some(1));
    }
}
