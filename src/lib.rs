/// Tab Stock - Chrome Extension that stocks open tabs and lists them by host
/// Built with Rust + WASM + Yew

pub mod browser;
pub mod capture;
pub mod config;
pub mod controller;
pub mod error;
pub mod host;
pub mod operations;
pub mod storage;
pub mod tab_record;
pub mod ui;
pub mod working_set;

use wasm_bindgen::prelude::*;

use crate::browser::ChromeBrowser;
use crate::capture::RuntimeMessage;
use crate::config::ViewConfig;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export host extraction for JavaScript access
#[wasm_bindgen]
pub fn extract_host(url: &str) -> String {
    host::extract_host(url)
}

// Start the Yew app for the tab list page
#[wasm_bindgen]
pub fn start_tab_list(options: JsValue) {
    let config = if options.is_null() || options.is_undefined() {
        ViewConfig::default()
    } else {
        serde_wasm_bindgen::from_value(options).unwrap_or_else(|e| {
            log::warn!("Ignoring invalid tab list options: {}", e);
            ViewConfig::default()
        })
    };
    log::debug!("Tab list config: {:?}", config);

    yew::Renderer::<ui::tab_list::TabList>::with_props(ui::tab_list::TabListProps { config })
        .render();
}

// Toolbar action: stock every open tab and show the list
#[wasm_bindgen]
pub async fn save_and_show_tabs() -> Result<(), JsValue> {
    let browser = ChromeBrowser;
    capture::save_and_show_tabs(&browser)
        .await
        .map(|_| ())
        .map_err(|e| {
            log::error!("Saving tabs failed: {}", e);
            JsValue::from_str(&e.to_string())
        })
}

// chrome.runtime.onMessage entry point
#[wasm_bindgen]
pub async fn handle_runtime_message(request: JsValue) -> Result<(), JsValue> {
    let message: RuntimeMessage = match serde_wasm_bindgen::from_value(request) {
        Ok(message) => message,
        Err(e) => {
            log::debug!("Ignoring runtime message: {}", e);
            return Ok(());
        }
    };

    let browser = ChromeBrowser;
    capture::dispatch(&browser, message).await.map_err(|e| {
        log::error!("Handling {:?} failed: {}", message, e);
        JsValue::from_str(&e.to_string())
    })
}
