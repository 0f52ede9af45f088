/// `Browser` backed by the chrome.* extension APIs through bridge.js

use async_trait::async_trait;
use serde::Deserialize;
use wasm_bindgen::prelude::*;

use super::{Browser, TabQuery};
use crate::error::HostError;
use crate::storage::{Snapshot, STOCK_KEY};
use crate::tab_record::TabRecord;

// Import JS bridge functions
#[wasm_bindgen(module = "/bridge.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn queryTabs(query: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn removeTabs(tab_ids: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn createWindow(urls: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn createTab(url: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(key: &str, value: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn clearStorage() -> Result<(), JsValue>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ChromeBrowser;

#[derive(Deserialize)]
struct CreatedWindow {
    id: Option<i32>,
}

#[async_trait(?Send)]
impl Browser for ChromeBrowser {
    async fn query_tabs(&self, query: TabQuery) -> Result<Vec<TabRecord>, HostError> {
        let query_js = to_js("tab query", &query)?;
        let tabs_js = queryTabs(query_js)
            .await
            .map_err(|e| HostError::call("tabs.query", js_message(&e)))?;

        serde_wasm_bindgen::from_value(tabs_js).map_err(|e| HostError::Decode {
            what: "tabs",
            message: e.to_string(),
        })
    }

    async fn remove_tabs(&self, tab_ids: &[i32]) -> Result<(), HostError> {
        let tab_ids_js = to_js("tab ids", tab_ids)?;
        removeTabs(tab_ids_js)
            .await
            .map_err(|e| HostError::call("tabs.remove", js_message(&e)))
    }

    async fn create_window(&self, urls: &[String]) -> Result<Option<i32>, HostError> {
        let urls_js = to_js("window urls", urls)?;
        let window_js = createWindow(urls_js)
            .await
            .map_err(|e| HostError::call("windows.create", js_message(&e)))?;

        if window_js.is_null() || window_js.is_undefined() {
            return Ok(None);
        }
        let window: CreatedWindow =
            serde_wasm_bindgen::from_value(window_js).map_err(|e| HostError::Decode {
                what: "window",
                message: e.to_string(),
            })?;
        Ok(window.id)
    }

    async fn create_tab(&self, url: &str) -> Result<(), HostError> {
        createTab(url)
            .await
            .map_err(|e| HostError::call("tabs.create", js_message(&e)))
    }

    async fn load_snapshot(&self) -> Result<Snapshot, HostError> {
        let storage_js = getStorage(STOCK_KEY)
            .await
            .map_err(|e| HostError::call("storage.local.get", js_message(&e)))?;

        if storage_js.is_null() || storage_js.is_undefined() {
            Ok(Snapshot::default())
        } else {
            serde_wasm_bindgen::from_value(storage_js).map_err(|e| HostError::Decode {
                what: "stored tabs",
                message: e.to_string(),
            })
        }
    }

    async fn save_snapshot(&self, snapshot: &Snapshot) -> Result<(), HostError> {
        let snapshot_js = to_js("stored tabs", snapshot)?;
        setStorage(STOCK_KEY, snapshot_js)
            .await
            .map_err(|e| HostError::call("storage.local.set", js_message(&e)))
    }

    async fn clear_storage(&self) -> Result<(), HostError> {
        clearStorage()
            .await
            .map_err(|e| HostError::call("storage.local.clear", js_message(&e)))
    }
}

fn to_js<T: serde::Serialize + ?Sized>(what: &'static str, value: &T) -> Result<JsValue, HostError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| HostError::Encode {
        what,
        message: e.to_string(),
    })
}

/// Best-effort text of a rejected promise's value.
fn js_message(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    match err.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => format!("{:?}", err),
    }
}
