/// In-memory `Browser` for unit tests.
use std::cell::RefCell;
use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use async_trait::async_trait;

use super::{Browser, TabQuery};
use crate::error::HostError;
use crate::storage::Snapshot;
use crate::tab_record::TabRecord;

#[derive(Debug, Clone)]
pub struct FakeTab {
    pub record: TabRecord,
    pub active: bool,
    pub current_window: bool,
}

/// Records every call so tests can assert on what the browser was asked.
#[derive(Debug, Default)]
pub struct FakeBrowser {
    open_tabs: RefCell<Vec<FakeTab>>,
    stored: RefCell<Option<Snapshot>>,
    windows: RefCell<Vec<Vec<String>>>,
    created_tabs: RefCell<Vec<String>>,
    removed: RefCell<Vec<Vec<i32>>>,
    saves: RefCell<usize>,
    failing: RefCell<HashSet<&'static str>>,
}

impl FakeBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a background tab in the current window.
    pub fn open(&self, id: i32, url: &str, title: &str) {
        self.open_with(id, url, title, false, true);
    }

    pub fn open_with(&self, id: i32, url: &str, title: &str, active: bool, current_window: bool) {
        self.open_tabs.borrow_mut().push(FakeTab {
            record: TabRecord::new(id, url, title),
            active,
            current_window,
        });
    }

    pub fn set_stored(&self, tabs: Vec<TabRecord>) {
        *self.stored.borrow_mut() = Some(Snapshot::new(tabs));
    }

    /// What the stock key holds, or `None` if it was never written or cleared.
    pub fn stored(&self) -> Option<Vec<TabRecord>> {
        self.stored.borrow().clone().map(Snapshot::into_tabs)
    }

    pub fn open_ids(&self) -> Vec<i32> {
        self.open_tabs.borrow().iter().map(|t| t.record.id).collect()
    }

    pub fn windows(&self) -> Vec<Vec<String>> {
        self.windows.borrow().clone()
    }

    pub fn created_tabs(&self) -> Vec<String> {
        self.created_tabs.borrow().clone()
    }

    pub fn removed(&self) -> Vec<Vec<i32>> {
        self.removed.borrow().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.borrow()
    }

    /// Make every later call named `call` reject.
    pub fn fail(&self, call: &'static str) {
        self.failing.borrow_mut().insert(call);
    }

    fn check(&self, call: &'static str) -> Result<(), HostError> {
        if self.failing.borrow().contains(call) {
            Err(HostError::call(call, "simulated failure"))
        } else {
            Ok(())
        }
    }
}

/// Pending once, then ready, like a host call that answers on a later tick.
#[derive(Default)]
struct NextTick {
    yielded: bool,
}

impl Future for NextTick {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            Poll::Ready(())
        } else {
            self.yielded = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

#[async_trait(?Send)]
impl Browser for FakeBrowser {
    async fn query_tabs(&self, query: TabQuery) -> Result<Vec<TabRecord>, HostError> {
        self.check("tabs.query")?;
        Ok(self
            .open_tabs
            .borrow()
            .iter()
            .filter(|t| query.active.is_none_or(|active| t.active == active))
            .filter(|t| query.current_window.is_none_or(|current| t.current_window == current))
            .map(|t| t.record.clone())
            .collect())
    }

    async fn remove_tabs(&self, tab_ids: &[i32]) -> Result<(), HostError> {
        NextTick::default().await;
        self.check("tabs.remove")?;
        self.removed.borrow_mut().push(tab_ids.to_vec());

        let mut open_tabs = self.open_tabs.borrow_mut();
        if let Some(missing) = tab_ids
            .iter()
            .find(|id| !open_tabs.iter().any(|t| t.record.id == **id))
        {
            return Err(HostError::call("tabs.remove", format!("No tab with id: {}.", missing)));
        }
        open_tabs.retain(|t| !tab_ids.contains(&t.record.id));
        Ok(())
    }

    async fn create_window(&self, urls: &[String]) -> Result<Option<i32>, HostError> {
        self.check("windows.create")?;
        let mut windows = self.windows.borrow_mut();
        windows.push(urls.to_vec());
        Ok(Some(windows.len() as i32))
    }

    async fn create_tab(&self, url: &str) -> Result<(), HostError> {
        self.check("tabs.create")?;
        self.created_tabs.borrow_mut().push(url.to_string());
        Ok(())
    }

    async fn load_snapshot(&self) -> Result<Snapshot, HostError> {
        self.check("storage.local.get")?;
        Ok(self.stored.borrow().clone().unwrap_or_default())
    }

    async fn save_snapshot(&self, snapshot: &Snapshot) -> Result<(), HostError> {
        self.check("storage.local.set")?;
        *self.saves.borrow_mut() += 1;
        *self.stored.borrow_mut() = Some(snapshot.clone());
        Ok(())
    }

    async fn clear_storage(&self) -> Result<(), HostError> {
        self.check("storage.local.clear")?;
        *self.stored.borrow_mut() = None;
        Ok(())
    }
}
