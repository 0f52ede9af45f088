/// Tab list actions: load, close, clear and reopen tabs.
///
/// The controller owns the page's working set. Actions that overlap in time
/// all mutate that one set, and every save writes it as it stands after the
/// mutation, so a slow action never restores a tab another action removed.
/// Borrows of the set never span an await.
use std::cell::{Ref, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use crate::browser::{Browser, TabQuery};
use crate::config::ViewConfig;
use crate::error::HostError;
use crate::storage::Snapshot;
use crate::working_set::WorkingSet;

pub struct TabListController {
    browser: Rc<dyn Browser>,
    config: ViewConfig,
    working_set: RefCell<WorkingSet>,
}

impl TabListController {
    pub fn new(browser: Rc<dyn Browser>, config: ViewConfig) -> Self {
        TabListController {
            browser,
            config,
            working_set: RefCell::new(WorkingSet::new()),
        }
    }

    pub fn working_set(&self) -> Ref<'_, WorkingSet> {
        self.working_set.borrow()
    }

    /// Merge the live tabs into the stored snapshot, in display order.
    pub async fn load(&self) -> Result<usize, HostError> {
        let live = self
            .browser
            .query_tabs(TabQuery::for_live_tabs(self.config.live_tabs))
            .await?;
        let stored = self.browser.load_snapshot().await?;

        let set = WorkingSet::reconcile(&stored.tabs, &live);
        let count = set.len();
        log::info!(
            "Loaded {} tabs ({} stored, {} live)",
            count,
            stored.tabs.len(),
            live.len()
        );
        *self.working_set.borrow_mut() = set;
        Ok(count)
    }

    /// Close one tab and drop it from the set.
    ///
    /// The record leaves the set even if the browser no longer has that tab.
    pub async fn close_one(&self, tab_id: i32) -> Result<(), HostError> {
        if let Err(e) = self.browser.remove_tabs(&[tab_id]).await {
            log::warn!("Tab {} was not closed: {}", tab_id, e);
        }
        self.working_set.borrow_mut().remove(tab_id);
        self.persist().await
    }

    /// Close every inactive tab in the current window.
    pub async fn close_inactive(&self) -> Result<usize, HostError> {
        let inactive = self
            .browser
            .query_tabs(TabQuery::inactive_in_current_window())
            .await?;
        let tab_ids: Vec<i32> = inactive.iter().map(|t| t.id).collect();
        if tab_ids.is_empty() {
            return Ok(0);
        }

        if let Err(e) = self.browser.remove_tabs(&tab_ids).await {
            log::warn!("Closing {} tabs failed: {}", tab_ids.len(), e);
        }
        let removed = self.working_set.borrow_mut().remove_many(&tab_ids);
        self.persist().await?;
        Ok(removed)
    }

    /// Erase the stored snapshot. The set is emptied only once the store is.
    pub async fn clear_storage(&self) -> Result<(), HostError> {
        match self.browser.clear_storage().await {
            Ok(()) => {
                log::info!("All stored tabs cleared.");
                self.working_set.borrow_mut().clear();
                Ok(())
            }
            Err(e) => {
                log::error!("{}", e);
                Err(e)
            }
        }
    }

    pub async fn open_all(&self) -> Result<Option<i32>, HostError> {
        let urls = self.working_set.borrow().urls();
        self.open_window(urls).await
    }

    /// Open the selected rows visible under `query` in a new window.
    ///
    /// The selection is always cleared.
    pub async fn open_selected(
        &self,
        selection: &mut HashSet<i32>,
        query: &str,
    ) -> Result<Option<i32>, HostError> {
        let urls = self.working_set.borrow().selected_urls(selection, query);
        selection.clear();
        self.open_window(urls).await
    }

    async fn open_window(&self, urls: Vec<String>) -> Result<Option<i32>, HostError> {
        if urls.is_empty() {
            log::debug!("No tabs to open");
            return Ok(None);
        }

        let window_id = self.browser.create_window(&urls).await?;
        log::info!("New window created with {} tabs, ID: {:?}", urls.len(), window_id);
        Ok(window_id)
    }

    async fn persist(&self) -> Result<(), HostError> {
        if !self.config.persist_mutations {
            return Ok(());
        }
        let snapshot = Snapshot::capture(self.working_set.borrow().tabs());
        self.browser.save_snapshot(&snapshot).await?;
        log::debug!("Tabs saved successfully.");
        Ok(())
    }
}
